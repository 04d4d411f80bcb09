use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

/// Main event loop: render, then wait for terminal input or the tick.
///
/// All state transitions run synchronously on this task in response to
/// discrete events - two key presses can never interleave mid-mutation.
pub async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Tick drives toast expiry; nothing else is time-based
    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        if app.pending_quit {
                            // Second Ctrl+C - quit immediately
                            app.quit();
                        } else {
                            // First Ctrl+C - statusbar shows the warning
                            app.pending_quit = true;
                        }
                    } else {
                        // Any other key clears pending quit state
                        app.pending_quit = false;
                        handle_key(app, key)?;
                    }
                }
            }

            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }
    Ok(())
}
