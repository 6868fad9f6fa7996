pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

pub enum EngineEvent {
    /// Advance the simulation state by `n` generations
    Advance(usize),

    /// Throw away the current state and restart from a fresh random fill
    Reseed,
}

pub enum AppEvent {
    /// Pause or resume the step schedule
    TogglePause,

    /// Show or hide the torus outline
    ToggleOutline,

    /// Exit the application
    Exit,
}
