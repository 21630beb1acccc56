//! State for the pictogram search dialog.

use crate::catalog::PictogramRecord;
use crate::session::SearchSession;
use crate::ui::mvi::UiState;

/// Number of result cards per grid row.
pub const GRID_COLUMNS: usize = 4;

/// Which part of the dialog receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogFocus {
    #[default]
    Query,
    Results,
}

/// Whether a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching {
        /// Id of the only request whose outcome is accepted.
        request_id: u64,
        query: String,
        /// Animation tick for spinner.
        animation_tick: u8,
    },
}

/// Contents of an open dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    pub session: SearchSession,
    /// Text of the keyword field, untrimmed.
    pub input: String,
    pub focus: DialogFocus,
    pub phase: SearchPhase,
    /// Index of the highlighted card within the current page.
    pub selected: usize,
}

impl SearchForm {
    pub fn new(language: impl Into<String>, page_size: usize) -> Self {
        Self {
            session: SearchSession::new(language, page_size),
            input: String::new(),
            focus: DialogFocus::Query,
            phase: SearchPhase::Idle,
            selected: 0,
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    pub fn pending_request(&self) -> Option<u64> {
        match self.phase {
            SearchPhase::Searching { request_id, .. } => Some(request_id),
            SearchPhase::Idle => None,
        }
    }

    /// Record under the highlight, if the page has any.
    pub fn selected_record(&self) -> Option<&PictogramRecord> {
        self.session.page_items().get(self.selected)
    }
}

/// State of the search dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchDialogState {
    /// Dialog is not visible; no session exists.
    #[default]
    Hidden,
    Visible(SearchForm),
}

impl UiState for SearchDialogState {}

impl SearchDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn form(&self) -> Option<&SearchForm> {
        match self {
            Self::Visible(form) => Some(form),
            Self::Hidden => None,
        }
    }

    pub fn is_searching(&self) -> bool {
        self.form().is_some_and(SearchForm::is_searching)
    }

    pub fn pending_request(&self) -> Option<u64> {
        self.form().and_then(SearchForm::pending_request)
    }
}
