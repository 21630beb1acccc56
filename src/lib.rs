pub mod catalog;
pub mod config;
pub mod error;
pub mod host;
pub mod insert;
pub mod logging;
pub mod paginate;
pub mod session;
pub mod ui;
