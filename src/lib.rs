pub mod builder;
pub mod camera;
pub mod events;
pub mod field;
pub mod grid;
pub mod io;
pub mod pattern;
