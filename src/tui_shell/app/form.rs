use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::tui_shell) enum FormField {
    #[default]
    Name,
    Code,
    Countries,
}

impl FormField {
    pub(in crate::tui_shell) fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Code,
            FormField::Code => FormField::Countries,
            FormField::Countries => FormField::Name,
        }
    }

    pub(in crate::tui_shell) fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Countries,
            FormField::Code => FormField::Name,
            FormField::Countries => FormField::Code,
        }
    }
}

/// Screen-side state of the user form. The draft itself lives in the
/// `UserDialog`; the text fields mirror it so the cursor survives edits.
#[derive(Clone, Debug, Default)]
pub(in crate::tui_shell) struct FormState {
    pub(in crate::tui_shell) focus: FormField,
    pub(in crate::tui_shell) name: Input,
    pub(in crate::tui_shell) code: Input,
    pub(in crate::tui_shell) country_cursor: usize,
    pub(in crate::tui_shell) error: Option<String>,
}

impl FormState {
    pub(in crate::tui_shell) fn seed(dialog: &UserDialog) -> Self {
        let mut state = Self::default();
        state.name.set(&dialog.draft().name);
        state.code.set(&dialog.draft().code);
        state
    }

    pub(in crate::tui_shell) fn focused_input_mut(&mut self) -> Option<&mut Input> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Code => Some(&mut self.code),
            FormField::Countries => None,
        }
    }

    pub(in crate::tui_shell) fn move_country(&mut self, delta: isize, catalog_len: usize) {
        if catalog_len == 0 {
            return;
        }
        let max = catalog_len - 1;
        self.country_cursor = self.country_cursor.saturating_add_signed(delta).min(max);
    }
}
