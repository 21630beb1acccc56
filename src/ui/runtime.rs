use crate::catalog::PictogramCatalog;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{run_search_worker, COMMAND_QUEUE};
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Drive the TUI until the user quits. Returns the app so the caller can
/// persist the document.
pub fn run(mut app: App, catalog: Arc<dyn PictogramCatalog>, runtime: &Runtime) -> io::Result<App> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    app.set_command_sender(command_tx);
    let worker = runtime.spawn(run_search_worker(catalog, command_rx, events.sender()));

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        resize(&mut app, cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => resize(&mut app, cols, rows),
            Ok(AppEvent::SearchFinished {
                request_id,
                outcome,
            }) => app.on_search_finished(request_id, outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    worker.abort();
    drop(guard);
    Ok(app)
}

fn resize(app: &mut App, cols: u16, rows: u16) {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    app.on_resize(body.width.max(1), body.height.max(1));
}
