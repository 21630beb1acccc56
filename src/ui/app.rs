use crate::catalog::{CatalogEndpoints, PictogramRecord, RemoteError};
use crate::config::Config;
use crate::host::{Document, HostMutationError, NodeId};
use crate::insert::{insert_pictogram, InsertionRequest};
use crate::session::validate_query;
use crate::ui::commands::{CommandId, CommandRegistry};
use crate::ui::menu::{MenuIntent, MenuKind, MenuReducer, MenuState};
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;
use crate::ui::search::{SearchDialogState, SearchIntent, SearchReducer};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Diagram units covered by one terminal cell.
const CELL_WIDTH: f64 = 8.0;
const CELL_HEIGHT: f64 = 16.0;

/// Canvas scroll distance per arrow key, in screen units.
const SCROLL_STEP: f64 = 40.0;
const ZOOM_STEP: f64 = 1.25;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Canvas,
    SearchDialog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Search {
        request_id: u64,
        query: String,
        language: String,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    config: Config,
    endpoints: CatalogEndpoints,
    /// Language the next dialog opens with; follows the last selection.
    language: String,
    document: Document,
    diagram_path: Option<PathBuf>,
    /// State of the search dialog (MVI pattern).
    search_dialog: SearchDialogState,
    notice: Option<Notice>,
    /// Open popup menu, if any (MVI pattern).
    menu: MenuState,
    commands: CommandRegistry,
    command_sender: Option<UiCommandSender>,
    next_request_id: u64,
}

impl App {
    pub fn new(config: Config) -> Self {
        let endpoints = CatalogEndpoints::new(&config.catalog);
        let language = config.dialog.default_language.clone();
        Self {
            should_quit: false,
            focus: Focus::Canvas,
            config,
            endpoints,
            language,
            document: Document::new(),
            diagram_path: None,
            search_dialog: SearchDialogState::default(),
            notice: None,
            menu: MenuState::default(),
            commands: CommandRegistry::with_defaults(),
            command_sender: None,
            next_request_id: 1,
        }
    }

    pub fn with_document(mut self, document: Document, path: Option<PathBuf>) -> Self {
        self.document = document;
        self.diagram_path = path;
        self
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn endpoints(&self) -> &CatalogEndpoints {
        &self.endpoints
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Select the language for future dialogs. Unknown codes are refused.
    pub fn set_language(&mut self, code: &str) -> bool {
        if self.config.language(code).is_none() {
            return false;
        }
        self.language = code.to_string();
        dispatch_mvi!(
            self,
            search_dialog,
            SearchReducer,
            SearchIntent::SetLanguage {
                code: code.to_string()
            }
        );
        true
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn diagram_path(&self) -> Option<&Path> {
        self.diagram_path.as_deref()
    }

    pub fn search_dialog(&self) -> &SearchDialogState {
        &self.search_dialog
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn run_command(&mut self, command: CommandId) {
        tracing::debug!(command = command.name(), "Running command");
        match command {
            // Reopening would discard the session of the open dialog.
            CommandId::PictogramSearch if self.focus == Focus::SearchDialog => {}
            CommandId::PictogramSearch => self.open_search_dialog(),
            CommandId::Save => self.save_document(),
            CommandId::Quit => self.request_quit(),
        }
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Open a menu listing the registered commands.
    pub fn open_menu(&mut self, kind: MenuKind) {
        let len = self.commands.menu().len();
        self.dispatch_menu(MenuIntent::Open { kind, len });
    }

    pub fn dispatch_menu(&mut self, intent: MenuIntent) {
        dispatch_mvi!(self, menu, MenuReducer, intent);
    }

    /// Close the menu and run the highlighted command.
    pub fn choose_menu_entry(&mut self) {
        let Some(index) = self.menu.selected() else {
            return;
        };
        let command = self.commands.menu().get(index).map(|command| command.id);
        self.dispatch_menu(MenuIntent::Close);
        if let Some(command) = command {
            self.run_command(command);
        }
    }

    /// Open the search dialog with an empty session.
    pub fn open_search_dialog(&mut self) {
        self.dispatch_search(SearchIntent::Open {
            language: self.language.clone(),
            page_size: self.config.dialog.page_size,
        });
        self.focus = Focus::SearchDialog;
    }

    pub fn close_search_dialog(&mut self) {
        self.dispatch_search(SearchIntent::Close);
        self.focus = Focus::Canvas;
    }

    /// Dispatch an intent to the search dialog.
    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search_dialog, SearchReducer, intent);
    }

    /// Move to the next configured language.
    pub fn cycle_language(&mut self) {
        let Some(next) = self.config.next_language(&self.language) else {
            return;
        };
        let code = next.code.clone();
        self.set_language(&code);
    }

    /// Validate the typed keyword and hand it to the search worker.
    ///
    /// Returns `true` when a request was sent.
    pub fn submit_search(&mut self) -> bool {
        let Some(form) = self.search_dialog.form() else {
            return false;
        };
        if form.is_searching() {
            tracing::debug!("Search already pending, submit ignored");
            return false;
        }
        let validated = validate_query(&form.input).map(str::to_string);
        let language = form.session.language().to_string();
        let query = match validated {
            Ok(query) => query,
            Err(err) => {
                self.notify(Notice::error("Error", err.to_string()));
                return false;
            }
        };

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.dispatch_search(SearchIntent::Submitted {
            request_id,
            query: query.clone(),
        });

        tracing::debug!(request_id, query = %query, language = %language, "Search submitted");
        let command = UiCommand::Search {
            request_id,
            query,
            language,
        };
        if let Err(reason) = self.send_command(command) {
            tracing::error!(request_id, error = %reason, "Search could not be scheduled");
            self.dispatch_search(SearchIntent::Failed { request_id });
            self.notify(Notice::error("Error", format!("Search is unavailable: {}", reason)));
            return false;
        }
        true
    }

    /// Apply the outcome of request `request_id`. Outcomes for anything
    /// but the pending request are dropped.
    pub fn on_search_finished(
        &mut self,
        request_id: u64,
        outcome: Result<Vec<PictogramRecord>, RemoteError>,
    ) {
        if self.search_dialog.pending_request() != Some(request_id) {
            tracing::debug!(request_id, "Dropping stale search outcome");
            return;
        }
        match outcome {
            Ok(results) => {
                tracing::info!(request_id, results = results.len(), "Search completed");
                self.dispatch_search(SearchIntent::Completed {
                    request_id,
                    results,
                });
            }
            Err(err) => {
                tracing::warn!(request_id, error = %err, "Search failed");
                self.dispatch_search(SearchIntent::Failed { request_id });
                self.notify(Notice::error(
                    "Error",
                    format!("Could not reach the pictogram catalog.\n{}", err),
                ));
            }
        }
    }

    /// Insert the highlighted pictogram, confirm it and close the dialog.
    ///
    /// On host failure the dialog stays open and the error is returned.
    pub fn insert_selected(&mut self) -> Result<Option<NodeId>, HostMutationError> {
        let Some(form) = self.search_dialog.form() else {
            return Ok(None);
        };
        if form.is_searching() {
            return Ok(None);
        }
        let Some(record) = form.selected_record() else {
            return Ok(None);
        };
        let request = InsertionRequest::for_record(record, &form.session, &self.endpoints);

        let node = insert_pictogram(&mut self.document, &request)?;
        self.notify(Notice::alert(
            "Pictogram added",
            format!("The pictogram \"{}\" was added to the diagram.", request.name),
        ));
        self.close_search_dialog();
        Ok(Some(node))
    }

    pub fn on_tick(&mut self) {
        if self.search_dialog.is_searching() {
            self.dispatch_search(SearchIntent::AnimationTick);
        }
    }

    /// Track the canvas size, given in terminal cells.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.document
            .set_viewport_size(f64::from(cols) * CELL_WIDTH, f64::from(rows) * CELL_HEIGHT);
    }

    /// Scroll the canvas by whole steps.
    pub fn scroll_canvas(&mut self, dx: i32, dy: i32) {
        self.document
            .scroll_by(f64::from(dx) * SCROLL_STEP, f64::from(dy) * SCROLL_STEP);
    }

    pub fn zoom_canvas(&mut self, zoom_in: bool) {
        let factor = if zoom_in { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
        self.document.zoom_by(factor);
    }

    pub fn save_document(&mut self) {
        let Some(path) = self.diagram_path.clone() else {
            self.notify(Notice::error(
                "Error",
                "No diagram file. Start with --diagram PATH to save.",
            ));
            return;
        };
        match self.document.save(&path) {
            Ok(()) => self.notify(Notice::alert(
                "Saved",
                format!("Diagram saved to {}", path.display()),
            )),
            Err(err) => {
                tracing::error!(error = %err, "Diagram save failed");
                self.notify(Notice::error("Error", err.to_string()));
            }
        }
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("search worker is not running".to_string());
        };
        sender.try_send(command).map_err(|err| err.to_string())
    }
}
