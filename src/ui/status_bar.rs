use crate::app::state::*;
use crate::app::wizard::Step;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Status text
    let style = if state.status_message.is_some() {
        Style::default().fg(Theme::ACCENT_RED).bg(Theme::BG_ELEVATED)
    } else {
        Theme::status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), style));

    if state.wizard.is_loading() {
        parts.push(Span::styled(
            format!(" {} ", state.spinner()),
            Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BG_ELEVATED),
        ));
    }

    let keys = match state.wizard.step() {
        Step::State | Step::City => "↑↓ Enter select  ^R reset  ^C quit",
        Step::Option => "←→ mode  Enter submit  o open  ^R reset  ^C quit",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + keys.width() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", keys),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
