//! Terminal host: canvas, menu, search dialog and notices.

pub mod app;
pub mod commands;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod menu;
pub mod mvi;
pub mod notice;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use runtime::run;
