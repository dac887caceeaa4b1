//! Suggestion list rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, ListState},
};

use super::SuggestionList;

/// Marker drawn in front of the selected row
const HIGHLIGHT_SYMBOL: &str = "> ";

/// Render one row per suggestion, labeled by name
///
/// Renders nothing when the list is empty.
pub fn render_list(list: &SuggestionList, frame: &mut Frame, area: Rect) {
    if list.is_empty() {
        return;
    }

    let items: Vec<ListItem> = list
        .items()
        .iter()
        .map(|suggestion| ListItem::new(suggestion.name.as_str()))
        .collect();

    let widget = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default().with_selected(list.selected());
    frame.render_stateful_widget(widget, area, &mut state);
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
