use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::domain::ExistingField;

use super::super::view::UiContext;

pub fn render_field_list(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let block = Block::default()
        .title(format!("Fields ({})", ctx.existing.len()))
        .borders(Borders::ALL);
    if ctx.existing.is_empty() {
        let placeholder = Paragraph::new("No fields yet").block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items = ctx
        .existing
        .iter()
        .enumerate()
        .map(|(index, field)| ListItem::new(field_line(field, index >= ctx.preexisting)))
        .collect::<Vec<_>>();
    frame.render_widget(List::new(items).block(block), area);
}

pub(crate) fn field_line(field: &ExistingField, created: bool) -> Line<'static> {
    let name_style = if created {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut spans = vec![Span::styled(field.name.clone(), name_style)];
    if let Some(kind) = field.attributes.get("type").and_then(|value| value.as_str()) {
        spans.push(Span::styled(
            format!(" : {kind}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let flags = [("primaryKey", "PK"), ("unique", "U"), ("required", "R")]
        .into_iter()
        .filter(|(key, _)| {
            field
                .attributes
                .get(*key)
                .and_then(|value| value.as_bool())
                .unwrap_or(false)
        })
        .map(|(_, tag)| tag)
        .collect::<Vec<_>>();
    if !flags.is_empty() {
        spans.push(Span::styled(
            format!(" [{}]", flags.join(",")),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(spans)
}
