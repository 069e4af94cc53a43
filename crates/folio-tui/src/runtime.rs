use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, AppEvent, Tui};

pub(crate) async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    mut events_rx: UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                app.quit();
                            } else {
                                handle_key(app, key);
                            }
                        }
                        Event::Paste(text) => {
                            // Feed pasted text through the same path as typed input
                            for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
                                handle_key(
                                    app,
                                    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
                                );
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Results of spawned API calls
            Some(event) = events_rx.recv() => {
                app.handle_event(event);
            }

            // Regular updates (toast expiry)
            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }
    Ok(())
}
