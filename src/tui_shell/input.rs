/// Single-line text field. `cursor` counts chars, not bytes.
#[derive(Clone, Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

impl Input {
    pub(super) fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
    }

    pub(super) fn as_str(&self) -> &str {
        &self.buf
    }

    pub(super) fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub(super) fn set(&mut self, s: &str) {
        self.buf = s.to_string();
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.buf.chars().count()
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.buf
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.buf.len())
    }
}
