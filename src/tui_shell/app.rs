use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap};

use crate::admin::{
    AdminError, DeleteConfirm, LoadState, Notice, UserDialog, UserFilter, UserStore, UserTable,
    ViewDialog,
};
use crate::model::{AdminConfig, CountryCatalog, User};
use crate::remote::RemoteClient;

use time::OffsetDateTime;

use super::input::Input;
use super::modal;
use super::view::{centered, code_cell, countries_cell, fmt_clock, page_buttons_line};

mod actions;
mod event_loop;
mod form;
mod render;

pub(super) use self::form::{FormField, FormState};

pub(super) fn run(cfg: &AdminConfig) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let client = RemoteClient::from_config(cfg)?;
    let mut app = App::new(Box::new(client), cfg.countries.clone(), &cfg.base_url);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FilterField {
    Name,
    Code,
    Country,
}

impl FilterField {
    fn next(self) -> Self {
        match self {
            FilterField::Name => FilterField::Code,
            FilterField::Code => FilterField::Country,
            FilterField::Country => FilterField::Name,
        }
    }

    fn prev(self) -> Self {
        self.next().next()
    }

    pub(super) fn label(self) -> &'static str {
        match self {
            FilterField::Name => "Name",
            FilterField::Code => "Code",
            FilterField::Country => "Country",
        }
    }
}

/// Which overlay currently owns the keyboard, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ActiveModal {
    Notice,
    ConfirmDelete,
    /// The editor embedded in the details view.
    ViewEditor,
    Details,
    Form,
}

pub(super) struct App {
    pub(super) table: UserTable<Box<dyn UserStore>>,
    pub(super) catalog: CountryCatalog,
    base_url: String,

    pub(super) form: UserDialog,
    pub(super) view: ViewDialog,
    pub(super) delete: DeleteConfirm,
    /// Cursor and text fields of whichever form is on screen.
    pub(super) form_state: FormState,

    pub(super) filter_inputs: [Input; 3],
    pub(super) filter_focus: FilterField,
    pub(super) filter_editing: bool,

    pub(super) selected: usize,
    loaded_at: Option<OffsetDateTime>,
    pub(super) notice: Option<Notice>,
    pub(super) status: Option<String>,

    needs_load: bool,
    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(store: Box<dyn UserStore>, catalog: CountryCatalog, base_url: &str) -> Self {
        Self {
            table: UserTable::new(store),
            catalog,
            base_url: base_url.to_string(),
            form: UserDialog::default(),
            view: ViewDialog::default(),
            delete: DeleteConfirm::default(),
            form_state: FormState::default(),
            filter_inputs: Default::default(),
            filter_focus: FilterField::Name,
            filter_editing: false,
            selected: 0,
            loaded_at: None,
            notice: None,
            status: None,
            needs_load: true,
            quit: false,
        }
    }

    pub(super) fn active_modal(&self) -> Option<ActiveModal> {
        if self.notice.is_some() {
            Some(ActiveModal::Notice)
        } else if self.delete.is_open() {
            Some(ActiveModal::ConfirmDelete)
        } else if self.view.is_open() && self.view.editor().is_open() {
            Some(ActiveModal::ViewEditor)
        } else if self.view.is_open() {
            Some(ActiveModal::Details)
        } else if self.form.is_open() {
            Some(ActiveModal::Form)
        } else {
            None
        }
    }

    /// The dialog the form overlay edits, if one is on screen.
    pub(super) fn active_dialog(&self) -> Option<&UserDialog> {
        match self.active_modal()? {
            ActiveModal::ViewEditor => Some(self.view.editor()),
            ActiveModal::Form => Some(&self.form),
            _ => None,
        }
    }

    pub(super) fn active_dialog_mut(&mut self) -> Option<&mut UserDialog> {
        match self.active_modal()? {
            ActiveModal::ViewEditor => Some(self.view.editor_mut()),
            ActiveModal::Form => Some(&mut self.form),
            _ => None,
        }
    }

    pub(super) fn selected_user(&self) -> Option<&User> {
        self.table.visible().get(self.selected)
    }

    /// Loads on the first tick so the loading screen is drawn before the
    /// blocking request.
    pub(super) fn take_pending_load(&mut self) -> bool {
        std::mem::take(&mut self.needs_load)
    }

    pub(super) fn reload(&mut self) {
        self.needs_load = true;
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
