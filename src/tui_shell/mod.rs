use anyhow::Result;

use crate::model::AdminConfig;

mod app;

mod input;
mod modal;
mod view;

// Make core TUI types available to submodules via `super::...`.
use app::{ActiveModal, App, FormField};

pub fn run(cfg: &AdminConfig) -> Result<()> {
    app::run(cfg)
}
