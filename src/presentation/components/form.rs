use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::FocusTarget;

use super::super::view::UiContext;

const LABEL_WIDTH: usize = 10;

pub fn render_form(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let block = Block::default().title("New field").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(form_lines(ctx)).block(block), area);

    if ctx.focus == FocusTarget::Name && inner.width > 0 && inner.height > 0 {
        let offset = (LABEL_WIDTH + ctx.draft.name.width()) as u16;
        let cursor_x = inner
            .x
            .saturating_add(offset)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

pub(crate) fn form_lines(ctx: &UiContext<'_>) -> Vec<Line<'static>> {
    let type_label = ctx
        .draft
        .data_type
        .map(|data_type| {
            ctx.data_types
                .label(data_type)
                .unwrap_or(data_type.default_label())
                .to_string()
        })
        .unwrap_or_else(|| "<none>".to_string());

    vec![
        Line::from(vec![
            label_span("Name", ctx.focus == FocusTarget::Name),
            Span::raw(ctx.draft.name.clone()),
        ]),
        Line::from(vec![
            label_span("Type", ctx.focus == FocusTarget::Type),
            Span::styled(
                format!("‹ {type_label} ›"),
                value_style(ctx.focus == FocusTarget::Type),
            ),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH)),
            checkbox_span(
                "Primary Key",
                ctx.draft.primary_key,
                ctx.focus == FocusTarget::PrimaryKey,
            ),
            Span::raw("  "),
            checkbox_span(
                "Unique",
                ctx.draft.unique,
                ctx.focus == FocusTarget::Unique,
            ),
            Span::raw("  "),
            checkbox_span(
                "Required",
                ctx.draft.required,
                ctx.focus == FocusTarget::Required,
            ),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH)),
            button_span("Add", ctx.can_submit, ctx.focus == FocusTarget::Add),
            Span::raw("  "),
            button_span("Cancel", true, ctx.focus == FocusTarget::Cancel),
        ]),
    ]
}

fn label_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("{label:<LABEL_WIDTH$}"), style)
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    }
}

fn checkbox_span(label: &str, checked: bool, focused: bool) -> Span<'static> {
    let mark = if checked { "x" } else { " " };
    Span::styled(format!("[{mark}] {label}"), value_style(focused))
}

fn button_span(label: &str, enabled: bool, focused: bool) -> Span<'static> {
    let mut style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("[ {label} ]"), style)
}
