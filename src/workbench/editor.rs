//! Editor buffer with soft indentation.
//!
//! Offsets are byte offsets into the buffer and are clamped to char
//! boundaries.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    text: String,
    selection_start: usize,
    selection_end: usize,
    indent_width: usize,
}

impl Editor {
    pub fn new(indent_width: usize) -> Self {
        Self {
            text: String::new(),
            selection_start: 0,
            selection_end: 0,
            indent_width,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current selection as `(start, end)`; equal when it is a caret.
    pub fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    /// Replace the whole buffer and put the caret at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection_start = self.text.len();
        self.selection_end = self.text.len();
    }

    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    pub fn select(&mut self, start: usize, end: usize) {
        let start = self.floor_boundary(start);
        let end = self.floor_boundary(end.max(start));
        self.selection_start = start;
        self.selection_end = end;
    }

    /// Replace the selection with `inserted` and collapse the caret after it.
    pub fn insert(&mut self, inserted: &str) {
        self.text.replace_range(self.selection_start..self.selection_end, inserted);
        self.selection_start += inserted.len();
        self.selection_end = self.selection_start;
    }

    /// Tab key: insert spaces instead of moving focus.
    pub fn insert_tab(&mut self) {
        let spaces = " ".repeat(self.indent_width);
        self.insert(&spaces);
    }

    /// Append a typed line, expanding tabs into soft indents.
    pub fn type_line(&mut self, line: &str) {
        self.select(self.text.len(), self.text.len());
        if !self.text.is_empty() {
            self.insert("\n");
        }
        for (i, chunk) in line.split('\t').enumerate() {
            if i > 0 {
                self.insert_tab();
            }
            self.insert(chunk);
        }
    }

    fn floor_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_replaces_selection() {
        let mut editor = Editor::new(4);
        editor.set_text("def f():return 1");
        editor.select(8, 8);
        editor.insert_tab();
        assert_eq!(editor.text(), "def f():    return 1");
        assert_eq!(editor.selection(), (12, 12));

        editor.select(0, 4);
        editor.insert_tab();
        assert_eq!(editor.text(), "    f():    return 1");
        assert_eq!(editor.selection(), (4, 4));
    }

    #[test]
    fn test_type_line_expands_tabs() {
        let mut editor = Editor::new(2);
        editor.type_line("if x:");
        editor.type_line("\tprint(x)");
        assert_eq!(editor.text(), "if x:\n  print(x)");
    }

    #[test]
    fn test_select_clamps_to_char_boundary() {
        let mut editor = Editor::new(4);
        editor.set_text("é");
        editor.select(1, 10);
        assert_eq!(editor.selection(), (0, 2));
    }
}
