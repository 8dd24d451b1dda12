use std::path::PathBuf;

use useradmin::config::{CONFIG_FILE, write_config};
use useradmin::model::AdminConfig;

use super::*;

pub(super) fn handle_config_command(ctx: &RunContext, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Init { force } => {
            let path = ctx
                .config_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force)", path.display());
            }
            write_config(&path, &AdminConfig::default())?;
            println!("Wrote {}", path.display());
        }
        ConfigCommands::Show => {
            let cfg = ctx.load_config()?;
            print_json(&cfg, "config")?;
        }
    }
    Ok(())
}
