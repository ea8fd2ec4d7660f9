use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use tablero_core::events::CoreEvent;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

/// Redraw cadence for the relative times on cards
const CLOCK_TICK: Duration = Duration::from_secs(1);

pub(crate) async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    core_events: &mut UnboundedReceiver<CoreEvent>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(CLOCK_TICK);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        if app.pending_quit {
                            app.quit();
                        } else {
                            // First Ctrl+C - status bar shows a warning
                            app.pending_quit = true;
                        }
                    } else {
                        app.pending_quit = false;
                        handle_key(app, key);
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => {
                    debug!("terminal event stream closed");
                    app.quit();
                }
            },

            Some(event) = core_events.recv() => {
                app.handle_core_event(event);
            }

            _ = tick_interval.tick() => {}
        }
    }

    Ok(())
}
