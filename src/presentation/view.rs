use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    app::FocusTarget,
    domain::{DataTypeCatalog, ExistingField, FieldDraft},
    form::ValidationError,
};

use super::components::{render_errors, render_field_list, render_footer, render_form};

pub struct UiContext<'a> {
    pub draft: &'a FieldDraft,
    pub data_types: &'a DataTypeCatalog,
    pub errors: &'a [ValidationError],
    pub max_identifier_length: usize,
    pub can_submit: bool,
    pub focus: FocusTarget,
    pub existing: &'a [ExistingField],
    /// Leading entries of `existing` that were supplied by the caller.
    pub preexisting: usize,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub show_field_list: bool,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(frame.area());

    let body = if ctx.show_field_list {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[0]);
        render_field_list(frame, columns[1], &ctx);
        columns[0]
    } else {
        rows[0]
    };

    let form_height = 7;
    if ctx.errors.is_empty() {
        render_form(frame, body, &ctx);
    } else {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(form_height), Constraint::Min(2)])
            .split(body);
        render_form(frame, parts[0], &ctx);
        render_errors(frame, parts[1], &ctx);
    }

    render_footer(frame, rows[1], &ctx);
}
