pub mod admin;
pub mod config;
pub mod logging;
pub mod model;
pub mod remote;
pub mod tui;

mod tui_shell;
