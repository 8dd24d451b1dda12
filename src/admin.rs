//! Headless admin panel: the user table controller and the dialogs it
//! drives. Front ends (TUI, CLI) only translate input into these calls and
//! render the resulting state.

mod delete_dialog;
mod error;
mod filter;
mod notice;
mod pager;
mod store;
mod table;
mod user_dialog;
mod view_dialog;

pub use self::delete_dialog::DeleteConfirm;
pub use self::error::{AdminError, Operation};
pub use self::filter::UserFilter;
pub use self::notice::{Notice, NoticeKind};
pub use self::pager::{PAGE_SIZE, PageButton, Pager};
pub use self::store::UserStore;
pub use self::table::{LoadState, UserTable};
pub use self::user_dialog::{DialogMode, NAME_REQUIRED, Submission, UserDialog};
pub use self::view_dialog::ViewDialog;
