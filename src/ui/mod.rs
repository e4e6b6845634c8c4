mod layout;
mod results;
mod status_bar;
mod theme;
mod wizard_panel;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header);
    wizard_panel::render_state_step(frame, app_layout.state_step, state);
    wizard_panel::render_city_step(frame, app_layout.city_step, state);
    wizard_panel::render_option_step(frame, app_layout.option_step, state);
    wizard_panel::render_buttons(frame, app_layout.buttons, state);
    results::render(frame, app_layout.results, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Span::styled(" 🍺 Brewery Finder ", theme::Theme::header()))
        .style(theme::Theme::header());
    frame.render_widget(header, area);
}

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when shortened.
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
