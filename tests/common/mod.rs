//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use parking_lot::Mutex;
use pictopick::catalog::{Keyword, PictogramCatalog, PictogramRecord, RemoteError};
use pictopick::config::Config;
use pictopick::ui::app::{App, UiCommand};
use pictopick::ui::input::handle_key;
use std::collections::VecDeque;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// `n` records with ids `1..=n` and a French keyword each.
pub fn records(n: usize) -> Vec<PictogramRecord> {
    (1..=n)
        .map(|i| PictogramRecord::new(i.to_string(), vec![Keyword::new("fr", &format!("mot{}", i))]))
        .collect()
}

// -- App helpers --------------------------------------------------------------

/// App with default config and a command channel standing in for the worker.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(8);
    let mut app = App::new(Config::default());
    app.set_command_sender(tx);
    (app, rx)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..press_key(KeyCode::Char(ch))
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, press_key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Open the dialog, type `query` and press Enter. Returns the request id
/// the worker received.
pub fn search(app: &mut App, rx: &mut mpsc::Receiver<UiCommand>, query: &str) -> u64 {
    if !app.search_dialog().is_visible() {
        handle_key(app, ctrl_key('p'));
    }
    type_text(app, query);
    press(app, KeyCode::Enter);
    match rx.try_recv() {
        Ok(UiCommand::Search { request_id, .. }) => request_id,
        Err(err) => panic!("no search command sent: {err}"),
    }
}

// -- Catalog fake -------------------------------------------------------------

/// In-memory catalog returning queued outcomes and recording calls.
#[derive(Default)]
pub struct FakeCatalog {
    outcomes: Mutex<VecDeque<Result<Vec<PictogramRecord>, RemoteError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_outcome(&self, outcome: Result<Vec<PictogramRecord>, RemoteError>) {
        self.outcomes.lock().push_back(outcome);
    }

    /// `(query, language)` of every search so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PictogramCatalog for FakeCatalog {
    async fn search(&self, query: &str, language: &str) -> Result<Vec<PictogramRecord>, RemoteError> {
        self.calls.lock().push((query.to_string(), language.to_string()));
        self.outcomes.lock().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
