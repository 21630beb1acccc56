//! Background task answering [`UiCommand`]s from the UI thread.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::catalog::PictogramCatalog;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Capacity of the UI → worker queue.
pub const COMMAND_QUEUE: usize = 16;

/// Run searches one after another until the UI drops its sender or stops
/// listening for events.
pub async fn run_search_worker(
    catalog: Arc<dyn PictogramCatalog>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Search {
                request_id,
                query,
                language,
            } => {
                tracing::debug!(request_id, query = %query, language = %language, "Worker searching");
                let outcome = catalog.search(&query, &language).await;
                if events
                    .send(AppEvent::SearchFinished {
                        request_id,
                        outcome,
                    })
                    .is_err()
                {
                    break;
                }
            }
        }
    }
    tracing::debug!("Search worker stopped");
}
