use clap::Args;

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Keep users whose name contains this (case-insensitive)
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Keep users whose code contains this (case-insensitive)
    #[arg(long)]
    pub(crate) code: Option<String>,
    /// Keep users with a country containing this (case-insensitive)
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// Page to print (10 users per page)
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    pub(crate) id: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long, default_value = "")]
    pub(crate) code: String,
    /// Country from the catalog (repeatable)
    #[arg(long = "country")]
    pub(crate) countries: Vec<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct EditArgs {
    pub(crate) id: String,
    #[arg(long)]
    pub(crate) name: Option<String>,
    #[arg(long)]
    pub(crate) code: Option<String>,
    /// Add the country if absent, remove it if present (repeatable)
    #[arg(long = "toggle-country")]
    pub(crate) toggle_countries: Vec<String>,
    /// Start from an empty record instead of the stored one
    #[arg(long)]
    pub(crate) clear: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct DeleteArgs {
    pub(crate) id: String,
    /// Confirm the delete; it cannot be undone
    #[arg(long)]
    pub(crate) yes: bool,
}
