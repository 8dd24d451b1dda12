use anyhow::{Context, Result};

use useradmin::admin::{DeleteConfirm, UserDialog, UserFilter, UserTable};
use useradmin::model::{CountryCatalog, User, UserId};

use crate::{Commands, ConfigCommands, RunContext};

mod config;
mod users;

pub(super) fn handle_command(ctx: &RunContext, command: Commands) -> Result<()> {
    match command {
        Commands::List(args) => users::handle_list_command(ctx, args)?,
        Commands::Show(args) => users::handle_show_command(ctx, &args.id, args.json)?,
        Commands::Add(args) => users::handle_add_command(ctx, args)?,
        Commands::Edit(args) => users::handle_edit_command(ctx, args)?,
        Commands::Delete(args) => users::handle_delete_command(ctx, &args.id, args.yes)?,
        Commands::Config { command } => config::handle_config_command(ctx, command)?,
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}
