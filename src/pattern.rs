//! Named cell templates used to seed interesting initial states.
//!
//! Patterns are stateless constants; they only exist at construction time,
//! when [`crate::builder::GridBuilder::stamp`] writes one into the working
//! grid.

/// A fixed template of cells relative to a top-left reference point.
///
/// When `background` is present, the whole `width` by `height` bounding box
/// is painted with it first. The listed `cells` are then written with the
/// opposite value, so a template can either punch live cells into a cleared
/// box (glider, acorn) or dead cells into a filled one (pentadecathlon).
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub background: Option<bool>,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// The value written for the listed cells.
    pub(crate) fn ink(&self) -> bool {
        !self.background.unwrap_or(false)
    }
}

/// Period-2 oscillator, three live cells in a row.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    width: 3,
    height: 1,
    background: None,
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// The classic diagonal spaceship. Translates by (+1, +1) every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    width: 3,
    height: 3,
    background: Some(false),
    cells: &[(2, 0), (0, 1), (2, 1), (1, 2), (2, 2)],
};

/// Period-15 oscillator: a filled 3x8 block with two cells knocked out.
pub const PENTADECATHLON: Pattern = Pattern {
    name: "pentadecathlon",
    width: 3,
    height: 8,
    background: Some(true),
    cells: &[(1, 1), (1, 6)],
};

/// Seven-cell methuselah with a long chaotic lifetime.
pub const ACORN: Pattern = Pattern {
    name: "acorn",
    width: 7,
    height: 3,
    background: Some(false),
    cells: &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
};
