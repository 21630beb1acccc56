//! Pictogram search dialog.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Dialog state, owning the search session
//! - `intent.rs` - Key presses and search outcomes
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering
//!
//! Side effects (catalog request, document insertion, notices) are issued
//! by [`App`](crate::ui::app::App) around the dispatch.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_search_dialog;
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{DialogFocus, SearchDialogState, SearchForm, SearchPhase, GRID_COLUMNS};
