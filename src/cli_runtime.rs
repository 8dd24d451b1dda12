use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use useradmin::model::AdminConfig;
use useradmin::remote::RemoteClient;

use crate::Commands;

#[derive(Parser)]
#[command(name = "useradmin")]
#[command(about = "Admin panel for the users collection", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to ./useradmin.json when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the store base URL from the config
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Global flags every subcommand resolves its config through.
pub(crate) struct RunContext {
    pub(crate) config_path: Option<PathBuf>,
    url: Option<String>,
}

impl RunContext {
    pub(crate) fn load_config(&self) -> Result<AdminConfig> {
        let mut cfg = useradmin::config::load(self.config_path.as_deref())?;
        if let Some(url) = &self.url {
            cfg.base_url = url.clone();
        }
        Ok(cfg)
    }

    pub(crate) fn client(&self) -> Result<(AdminConfig, RemoteClient)> {
        let cfg = self.load_config()?;
        let client = RemoteClient::from_config(&cfg)?;
        Ok((cfg, client))
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = RunContext {
        config_path: cli.config,
        url: cli.url,
    };

    match cli.command {
        None => {
            let cfg = ctx.load_config()?;
            useradmin::logging::init_for_tui(cfg.log_file.as_deref())?;
            useradmin::tui::run(&cfg)?;
        }
        Some(command) => {
            useradmin::logging::init_stderr();
            crate::cli_exec::handle_command(&ctx, command)?
        }
    }

    Ok(())
}
