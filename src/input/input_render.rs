//! Input field rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

use crate::app::App;

/// Render the search box
///
/// While a lookup is waiting for the typing pause the border dims and a
/// marker shows in the top-right corner.
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let debouncing = app.is_debouncing();
    let border_color = if debouncing {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(border_color));

    if debouncing {
        block = block.title_top(
            Line::styled(" ... ", Style::default().fg(Color::Yellow)).alignment(Alignment::Right),
        );
    }

    app.input.textarea.set_block(block);
    frame.render_widget(&app.input.textarea, area);
}
