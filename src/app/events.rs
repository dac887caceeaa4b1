use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::App;

/// How long to wait for terminal input before redrawing
///
/// Lookup outcomes are applied between polls, so this bounds how long a
/// finished lookup waits to be shown.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    /// Wait briefly for a terminal event and handle it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(EVENT_POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        if self.input.handle_key(key) {
            self.on_query_changed();
        }
    }

    /// Handle bracketed paste into the search box
    pub fn handle_paste(&mut self, text: &str) {
        if self.input.paste(text) {
            self.on_query_changed();
        }
    }

    /// Keys that act on the app or the suggestion list rather than the text
    ///
    /// Returns true if the key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::Esc => {
                if self.suggestions.selected().is_some() {
                    self.suggestions.clear_selection();
                } else {
                    self.should_quit = true;
                }
                true
            }
            KeyCode::Down => {
                self.suggestions.select_next();
                true
            }
            KeyCode::Up => {
                self.suggestions.select_previous();
                true
            }
            KeyCode::Enter => {
                if let Some(selected) = self.suggestions.selected_suggestion() {
                    self.accepted = Some(selected.clone());
                    self.should_quit = true;
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
