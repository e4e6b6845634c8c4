use crate::api::model::Brewery;
use crate::app::state::AppState;
use crate::presenter::{self, Presentation, FAILURE_MESSAGE, NO_RESULTS_MESSAGE};
use crate::ui::theme::Theme;
use crate::ui::truncate;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Lines each brewery occupies, including the blank separator.
const ENTRY_HEIGHT: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match &state.results {
        Some(results) => match &results.presentation {
            Presentation::List(records) => {
                format!(
                    " Results: {} breweries ({}) ",
                    records.len(),
                    results.submitted_at
                )
            }
            _ => format!(" Results ({}) ", results.submitted_at),
        },
        None => " Results ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::new(2, 2, 1, 0));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(results) = &state.results else {
        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                "Pick a state, a city and a display option,",
                Theme::hint(),
            )),
            Line::from(vec![
                Span::styled("then press ", Theme::hint()),
                Span::styled("Enter", Theme::key_hint()),
                Span::styled(" to find breweries.", Theme::hint()),
            ]),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, inner);
        return;
    };

    match &results.presentation {
        Presentation::Failure => {
            let text = Paragraph::new(Span::styled(FAILURE_MESSAGE, Theme::error_message()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(text, inner);
        }
        Presentation::NoResults => {
            let text = Paragraph::new(Span::styled(NO_RESULTS_MESSAGE, Theme::text()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(text, inner);
        }
        Presentation::Single(_) | Presentation::List(_) => {
            render_records(frame, inner, results.presentation.records(), results.cursor);
        }
    }
}

fn render_records(
    frame: &mut Frame,
    area: Rect,
    records: &[Brewery],
    cursor: usize,
) {
    let text_width = (area.width as usize).saturating_sub(2);
    // Last row is the key hint
    let capacity = ((area.height as usize).saturating_sub(1) / ENTRY_HEIGHT).max(1);
    let start = (cursor + 1).saturating_sub(capacity);
    let multiple = records.len() > 1;

    let mut lines: Vec<Line> = Vec::new();
    for (i, brewery) in records.iter().enumerate().skip(start).take(capacity) {
        let entry = presenter::brewery_lines(brewery);
        let marker = if multiple && i == cursor { "▶ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Theme::key_hint()),
            Span::styled(truncate(&entry.name, text_width), Theme::brewery_name()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(truncate(&entry.address, text_width), Theme::address()),
        ]));
        let website = match entry.website {
            Some(ref url) => Span::styled(truncate(url, text_width), Theme::link()),
            None => Span::styled(entry.website_text().to_string(), Theme::address()),
        };
        lines.push(Line::from(vec![Span::raw("  "), website]));
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled("o", Theme::key_hint()),
        Span::styled(" open website", Theme::hint()),
        Span::styled(if multiple { "  ↑↓" } else { "" }, Theme::key_hint()),
        Span::styled(if multiple { " move" } else { "" }, Theme::hint()),
        Span::styled("  Enter", Theme::key_hint()),
        Span::styled(" roll again / refresh", Theme::hint()),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}
