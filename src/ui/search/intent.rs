//! Intents for the search dialog.

use crate::catalog::PictogramRecord;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the search dialog.
#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Show the dialog with a fresh, empty session.
    Open { language: String, page_size: usize },

    /// Hide the dialog and drop the session.
    Close,

    /// Type a character into the keyword field.
    InsertChar(char),

    /// Delete the last character of the keyword field.
    Backspace,

    /// Switch typing focus between keyword field and result grid.
    ToggleFocus,

    /// Select another language. Does not search.
    SetLanguage { code: String },

    /// A validated query was sent to the catalog.
    Submitted { request_id: u64, query: String },

    /// The catalog answered request `request_id`.
    Completed {
        request_id: u64,
        results: Vec<PictogramRecord>,
    },

    /// Request `request_id` failed.
    Failed { request_id: u64 },

    NextPage,

    PreviousPage,

    /// Move the highlight by `delta` cards within the current page.
    MoveSelection { delta: isize },

    /// Animation tick (for spinner updates).
    AnimationTick,
}

impl Intent for SearchIntent {}
