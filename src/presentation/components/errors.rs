use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};

use super::super::view::UiContext;

pub fn render_errors(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let items = error_lines(ctx)
        .into_iter()
        .map(ListItem::new)
        .collect::<Vec<_>>();
    let list = List::new(items).block(
        Block::default()
            .title("Issues")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(list, area);
}

pub(crate) fn error_lines(ctx: &UiContext<'_>) -> Vec<Line<'static>> {
    ctx.errors
        .iter()
        .map(|error| {
            Line::styled(
                format!("• {}", error.message(ctx.max_identifier_length)),
                Style::default().fg(Color::Red),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::FocusTarget,
        domain::{DataTypeCatalog, FieldDraft},
        form::ValidationError,
    };

    #[test]
    fn length_message_uses_configured_limit() {
        let draft = FieldDraft::default();
        let catalog = DataTypeCatalog::default();
        let errors = [ValidationError::UniqueName, ValidationError::NameLength];
        let ctx = UiContext {
            draft: &draft,
            data_types: &catalog,
            errors: &errors,
            max_identifier_length: 30,
            can_submit: false,
            focus: FocusTarget::Name,
            existing: &[],
            preexisting: 0,
            status_message: "",
            help: None,
            show_field_list: false,
        };
        let lines = error_lines(&ctx)
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "• Name already taken.".to_string(),
                "• Name cannot be more than 30 characters when converted to snake_case."
                    .to_string(),
            ]
        );
    }
}
