mod config;
mod countries;
mod ids;
mod user;

pub use self::config::{AdminConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use self::countries::{CountryCatalog, DEFAULT_COUNTRIES};
pub use self::ids::UserId;
pub use self::user::{User, UserDraft};
