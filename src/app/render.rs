use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::Line,
};

use super::state::App;
use crate::input::input_render;
use crate::suggestion::suggestion_render;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Title, search box, then the suggestion rows
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(frame.area());

        let title = Line::from("Autocomplete").style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, layout[0]);

        input_render::render_field(self, frame, layout[1]);

        suggestion_render::render_list(&self.suggestions, frame, layout[2]);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
