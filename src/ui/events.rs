use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use super::app::App;
use crate::types::waveform::Waveform;

/// Handle keyboard events and update app state
pub fn handle_events(app: &mut App) -> anyhow::Result<()> {
    // Poll for events with timeout
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_event(app, key);
            }
        }
    }
    Ok(())
}

/// Process individual key press
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Check for Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit();
        }

        // Quick trace toggles
        KeyCode::Char('1') => app.toggle(Waveform::Sine),
        KeyCode::Char('2') => app.toggle(Waveform::Square),
        KeyCode::Char('3') => app.toggle(Waveform::Sawtooth),
        KeyCode::Char('4') => app.toggle(Waveform::Triangle),

        _ => {}
    }
}
