//! The three wizard steps and the Reset / Beer Me buttons.
//!
//! A step's controls are only live while the wizard is on that step. Earlier
//! steps collapse to their chosen value and later steps stay hidden.

use crate::app::picker::{Labeled, Picker};
use crate::app::state::AppState;
use crate::app::wizard::{DisplayType, Remote, Step};
use crate::ui::theme::Theme;
use crate::ui::truncate;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// What a list step needs to draw itself.
struct ListStep<'a, T> {
    step: Step,
    title: &'static str,
    noun: &'static str,
    remote: &'a Remote<T>,
    picker: &'a Picker,
    chosen: Option<&'a str>,
}

pub fn render_state_step(frame: &mut Frame, area: Rect, state: &AppState) {
    let list = ListStep {
        step: Step::State,
        title: " Step 1 - Choose a State ",
        noun: "States",
        remote: state.wizard.states(),
        picker: &state.state_picker,
        chosen: state.wizard.selected_state_name(),
    };
    render_list_step(frame, area, state, list);
}

pub fn render_city_step(frame: &mut Frame, area: Rect, state: &AppState) {
    let list = ListStep {
        step: Step::City,
        title: " Step 2 - Choose a City ",
        noun: "Cities",
        remote: state.wizard.cities(),
        picker: &state.city_picker,
        chosen: state.wizard.selected_city(),
    };
    render_list_step(frame, area, state, list);
}

fn step_block(title: &'static str, active: bool) -> Block<'static> {
    let (border_style, border_type, title_style) = if active {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::title(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::title_disabled())
    };
    Block::default()
        .title(title)
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
}

fn render_list_step<T: Labeled>(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    list: ListStep<'_, T>,
) {
    let current = state.wizard.step();
    if current < list.step {
        return;
    }
    let active = current == list.step;

    let block = step_block(list.title, active);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let width = inner.width as usize;

    if !active {
        let chosen = list.chosen.unwrap_or("-");
        let line = Line::from(vec![
            Span::styled("✔ ", Theme::chosen()),
            Span::styled(truncate(chosen, width.saturating_sub(2)), Theme::chosen()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    match list.remote {
        Remote::Idle | Remote::Loading(_) => {
            lines.push(Line::from(Span::styled(
                format!("{} Loading {}...", state.spinner(), list.noun),
                Theme::loading(),
            )));
        }
        Remote::Failed(err) => {
            lines.push(Line::from(Span::styled(
                format!("Could not load {}.", list.noun.to_lowercase()),
                Theme::error_message(),
            )));
            lines.push(Line::from(Span::styled(
                truncate(&err.to_string(), width),
                Theme::error_message(),
            )));
            lines.push(Line::from(vec![
                Span::styled("Ctrl+R", Theme::key_hint()),
                Span::styled(" to reset", Theme::hint()),
            ]));
        }
        Remote::Ready(items) => {
            let picker = list.picker;
            let filter_text = if picker.filter.is_empty() {
                Span::styled("(type to filter)", Theme::text_disabled())
            } else {
                Span::styled(picker.filter.as_str(), Theme::text())
            };
            lines.push(Line::from(vec![
                Span::styled("Filter: ", Theme::key_hint()),
                filter_text,
                Span::styled("█", Style::default().fg(Theme::ACCENT_TEAL)),
            ]));

            let visible = picker.visible(items);
            let rows = (inner.height as usize).saturating_sub(1);
            if visible.is_empty() {
                let text = if items.is_empty() {
                    format!("No {} available", list.noun.to_lowercase())
                } else {
                    "No matches".to_string()
                };
                lines.push(Line::from(Span::styled(text, Theme::text_disabled())));
            } else {
                let start = picker.window_start(rows);
                for (i, item) in visible.iter().enumerate().skip(start).take(rows) {
                    let style = if i == picker.selected {
                        Theme::row_selected()
                    } else {
                        Theme::text()
                    };
                    let label = truncate(item.label(), width);
                    lines.push(Line::from(Span::styled(
                        format!("{:<width$}", label),
                        style,
                    )));
                }
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_option_step(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.wizard.step() != Step::Option {
        return;
    }
    let block = step_block(" Step 3 - Choose an Option ", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = state.wizard.display_type();
    let lines: Vec<Line> = [DisplayType::Random, DisplayType::List]
        .into_iter()
        .map(|option| {
            let (marker, style) = if option == current {
                ("(•) ", Theme::chosen())
            } else {
                ("( ) ", Theme::text())
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(option.label(), style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_buttons(frame: &mut Frame, area: Rect, state: &AppState) {
    let submit_style = if state.wizard.step() == Step::Option {
        Theme::button()
    } else {
        Theme::button_disabled()
    };
    let line = Line::from(vec![
        Span::styled(" Reset ^R ", Theme::button_secondary()),
        Span::raw("  "),
        Span::styled(" Beer Me ⏎ ", submit_style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
