/// Single-line text entry used for param editing and picker filters.
#[derive(Clone, Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

impl Input {
    pub(super) fn with(text: &str) -> Self {
        Self {
            buf: text.to_string(),
            cursor: text.len(),
        }
    }

    pub(super) fn insert_char(&mut self, c: char) {
        self.buf.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.buf[..self.cursor]
            .chars()
            .next_back()
            .map(char::len_utf8)
            .unwrap_or(1);
        self.cursor -= prev;
        self.buf.remove(self.cursor);
    }

    pub(super) fn move_left(&mut self) {
        let prev = self.buf[..self.cursor]
            .chars()
            .next_back()
            .map(char::len_utf8)
            .unwrap_or(0);
        self.cursor -= prev;
    }

    pub(super) fn move_right(&mut self) {
        let next = self.buf[self.cursor..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        self.cursor += next;
    }
}
