use anyhow::Result;

use crate::model::AdminConfig;

/// Runs the interactive admin panel against the configured store.
pub fn run(cfg: &AdminConfig) -> Result<()> {
    crate::tui_shell::run(cfg)
}
