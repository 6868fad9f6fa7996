use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// Converts a crossterm event into an application event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match (code, modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                Some(Event::AppEvent(AppEvent::Exit))
            }

            (KeyCode::Char(' '), _) => Some(Event::AppEvent(AppEvent::TogglePause)),

            (KeyCode::Char('g'), _) => Some(Event::AppEvent(AppEvent::ToggleOutline)),

            (KeyCode::Char('s'), _) => Some(Event::EngineEvent(EngineEvent::Advance(1))),

            (KeyCode::Char('r'), _) => Some(Event::EngineEvent(EngineEvent::Reseed)),

            _ => None,
        },

        // The framebuffer has a fixed size; a terminal resize changes
        // nothing about what we draw.
        CrossTermEvent::Resize(..) => None,

        _ => None,
    }
}
