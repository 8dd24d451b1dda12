use clap::Subcommand;

use crate::ConfigCommands;

pub(crate) mod users;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List users, optionally filtered and paged
    List(users::ListArgs),

    /// Show one user
    Show(users::ShowArgs),

    /// Create a user
    Add(users::AddArgs),

    /// Edit a user (full replace of the stored record)
    Edit(users::EditArgs),

    /// Delete a user
    Delete(users::DeleteArgs),

    /// Create or show the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
