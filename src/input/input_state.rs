use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// The search box: a single-line text area holding the raw query
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(placeholder: &str) -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(placeholder);
        textarea.set_placeholder_style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );

        Self { textarea }
    }

    /// Current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Feed an edit key to the text area
    ///
    /// Returns true if the query text changed. Keys that would open a new
    /// line are swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_newline_key(&key) {
            return false;
        }
        self.textarea.input(key)
    }

    /// Insert pasted text at the cursor, flattened to one line
    ///
    /// Returns true if the query text changed.
    pub fn paste(&mut self, text: &str) -> bool {
        let before = self.query().to_string();
        self.textarea.insert_str(text.replace(['\n', '\r'], " "));
        self.query() != before
    }

    /// Replace the whole query, leaving the cursor at the end
    pub fn set_query(&mut self, query: &str) {
        self.textarea.move_cursor(CursorMove::Head);
        self.textarea.delete_line_by_end();
        // Keep the box single-line
        let single_line = query.replace(['\n', '\r'], " ");
        self.textarea.insert_str(single_line);
    }
}

fn is_newline_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
