use super::*;

impl App {
    pub(in crate::tui_shell) fn load(&mut self) {
        match self.table.load() {
            Ok(()) => self.loaded_at = Some(OffsetDateTime::now_utc()),
            Err(err) => tracing::debug!(error = %err, "load failed"),
        }
        self.selected = 0;
    }

    pub(in crate::tui_shell) fn move_selection(&mut self, delta: isize) {
        let len = self.table.visible().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    pub(in crate::tui_shell) fn next_page(&mut self) {
        if self.table.next_page() {
            self.selected = 0;
        }
    }

    pub(in crate::tui_shell) fn prev_page(&mut self) {
        if self.table.prev_page() {
            self.selected = 0;
        }
    }

    pub(in crate::tui_shell) fn apply_filter(&mut self) {
        let [name, code, country] = &self.filter_inputs;
        let filter = UserFilter::new(name.as_str(), code.as_str(), country.as_str());
        let n = self.table.apply_filter(filter);
        self.filter_editing = false;
        self.selected = 0;
        self.status = Some(format!("{} matching users", n));
    }

    pub(in crate::tui_shell) fn reset_filter(&mut self) {
        for input in &mut self.filter_inputs {
            input.clear();
        }
        self.table.reset_filter();
        self.filter_editing = false;
        self.clamp_selection();
        self.status = Some("filter cleared".to_string());
    }

    pub(in crate::tui_shell) fn open_add(&mut self) {
        self.form.open_add();
        self.form_state = FormState::seed(&self.form);
    }

    pub(in crate::tui_shell) fn open_edit_selected(&mut self) {
        let Some(user) = self.selected_user().cloned() else {
            return;
        };
        self.form.open_edit(&user);
        self.form_state = FormState::seed(&self.form);
    }

    pub(in crate::tui_shell) fn open_view_selected(&mut self) {
        if let Some(user) = self.selected_user().cloned() {
            self.view.open(&user);
        }
    }

    pub(in crate::tui_shell) fn edit_from_details(&mut self) {
        self.view.begin_edit();
        self.form_state = FormState::seed(self.view.editor());
    }

    pub(in crate::tui_shell) fn open_delete_selected(&mut self) {
        if let Some(user) = self.selected_user().cloned() {
            self.delete.open(&user);
        }
    }

    pub(in crate::tui_shell) fn confirm_delete(&mut self) {
        let Some(id) = self.delete.confirm() else {
            return;
        };
        if let Err(err) = self.table.delete(&id) {
            tracing::debug!(error = %err, "delete not applied");
        }
        self.clamp_selection();
        self.pull_notice();
    }

    /// Copies the form's text fields into the dialog draft.
    pub(in crate::tui_shell) fn sync_form_text(&mut self) {
        let name = self.form_state.name.as_str().to_string();
        let code = self.form_state.code.as_str().to_string();
        if let Some(dialog) = self.active_dialog_mut() {
            dialog.set_name(&name);
            dialog.set_code(&code);
        }
    }

    pub(in crate::tui_shell) fn toggle_country_at_cursor(&mut self) {
        let Some(country) = self
            .catalog
            .names()
            .get(self.form_state.country_cursor)
            .cloned()
        else {
            return;
        };
        if let Some(dialog) = self.active_dialog_mut() {
            dialog.toggle_country(&country);
        }
    }

    /// Edit mode only: empties every field of the draft.
    pub(in crate::tui_shell) fn clear_form(&mut self) {
        let Some(dialog) = self.active_dialog_mut() else {
            return;
        };
        if !dialog.is_edit() {
            return;
        }
        dialog.clear_draft();
        self.form_state.name.clear();
        self.form_state.code.clear();
        self.form_state.error = None;
    }

    pub(in crate::tui_shell) fn close_form(&mut self) {
        if let Some(dialog) = self.active_dialog_mut() {
            dialog.close();
        }
        self.form_state = FormState::default();
    }

    pub(in crate::tui_shell) fn submit_form(&mut self) {
        let result = match self.active_modal() {
            Some(ActiveModal::ViewEditor) => self.view.save_edit(&mut self.table).map(|_| ()),
            Some(ActiveModal::Form) => match self.form.submit() {
                Ok(submission) => self.table.dispatch(submission).map(|_| ()),
                Err(err) => Err(err),
            },
            _ => return,
        };

        match result {
            Ok(()) => self.form_state = FormState::default(),
            Err(AdminError::Validation(msg)) => self.form_state.error = Some(msg),
            // Store failures arrive as a notice.
            Err(err) => tracing::debug!(error = %err, "submission not saved"),
        }
        self.clamp_selection();
        self.pull_notice();
    }

    pub(in crate::tui_shell) fn dismiss_notice(&mut self) {
        self.notice = None;
        self.pull_notice();
    }

    fn pull_notice(&mut self) {
        if self.notice.is_none() {
            self.notice = self.table.take_notice();
        }
    }

    fn clamp_selection(&mut self) {
        self.move_selection(0);
    }
}
