use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use crate::{
    domain::ExistingField,
    form::{EditorConfig, FieldEditor},
    presentation::{self, UiContext},
};

use super::{
    focus::FocusTarget,
    input::{InputRouter, KeyAction},
    options::UiOptions,
    session::{SessionLog, SessionOutcome},
    status::StatusLine,
    terminal::TerminalGuard,
    text::handle_text_edit,
};

pub(crate) struct App {
    editor: FieldEditor<SessionLog>,
    existing: Vec<ExistingField>,
    preexisting: usize,
    focus: FocusTarget,
    options: UiOptions,
    status: StatusLine,
    input_router: InputRouter,
    should_quit: bool,
}

impl App {
    pub fn new(config: EditorConfig, existing: Vec<ExistingField>, options: UiOptions) -> Self {
        let editor = FieldEditor::with_callbacks(config, SessionLog::default())
            .with_existing_fields(&existing);
        let input_router = InputRouter::new(options.keymap_store.clone());
        let mut app = Self {
            editor,
            preexisting: existing.len(),
            existing,
            focus: FocusTarget::Name,
            options,
            status: StatusLine::new(),
            input_router,
            should_quit: false,
        };
        app.sync_focus();
        app
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(self.outcome())
    }

    pub fn outcome(&self) -> SessionOutcome {
        SessionOutcome::from(self.editor.callbacks())
    }

    fn current_help_text(&self) -> Option<String> {
        if !self.options.show_help {
            return None;
        }
        self.input_router.help_text(self.focus.context())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self.current_help_text();
        let config = self.editor.config();
        presentation::draw(
            frame,
            UiContext {
                draft: self.editor.draft(),
                data_types: &config.data_types,
                errors: self.editor.errors(),
                max_identifier_length: config.max_identifier_length,
                can_submit: self.editor.can_submit(),
                focus: self.focus,
                existing: &self.existing,
                preexisting: self.preexisting,
                status_message: self.status.message(),
                help: help.as_deref(),
                show_field_list: self.options.show_field_list,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_router.classify(&key, self.focus.context()) {
            KeyAction::Submit if self.focus == FocusTarget::Cancel => self.on_cancel(),
            KeyAction::Submit => self.on_submit(),
            KeyAction::Cancel => self.on_cancel(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::FocusStep(delta) => {
                self.focus = self.focus.step(delta);
                self.status.ready();
            }
            KeyAction::TypeStep(delta) => self.step_type(delta),
            KeyAction::Toggle => self.toggle_focused(),
            KeyAction::Input(event) => self.handle_field_input(&event),
        }
    }

    fn on_submit(&mut self) {
        if !self.editor.can_submit() {
            self.status.submit_disabled();
            return;
        }
        match self.editor.submit(&self.existing) {
            Ok(field) => {
                self.status.field_created(&field.name);
                self.existing.push(ExistingField::from(&field));
            }
            Err(errors) => self.status.rejected(errors.len()),
        }
        self.sync_focus();
    }

    fn on_cancel(&mut self) {
        self.editor.cancel();
        self.status.cancelled();
        self.focus = FocusTarget::Name;
        if self.options.exit_on_cancel {
            debug!("session ended by cancel");
            self.should_quit = true;
        }
    }

    fn step_type(&mut self, delta: i32) {
        let current = self.editor.draft().data_type;
        if let Some(next) = self.editor.config().data_types.step(current, delta) {
            self.editor.set_type(next);
            self.status.editing(FocusTarget::Type.label());
        }
    }

    fn toggle_focused(&mut self) {
        let draft = self.editor.draft();
        match self.focus {
            FocusTarget::PrimaryKey => {
                let flag = !draft.primary_key;
                self.editor.toggle_primary_key(flag);
            }
            FocusTarget::Unique => {
                let flag = !draft.unique;
                self.editor.toggle_unique(flag);
            }
            FocusTarget::Required => {
                let flag = !draft.required;
                self.editor.toggle_required(flag);
            }
            _ => return,
        }
        self.status.editing(self.focus.label());
    }

    fn handle_field_input(&mut self, event: &KeyEvent) {
        if self.focus != FocusTarget::Name {
            return;
        }
        let mut buffer = self.editor.draft().name.clone();
        if handle_text_edit(&mut buffer, event) {
            self.editor.set_name(buffer);
            self.status.editing(FocusTarget::Name.label());
        }
    }

    fn sync_focus(&mut self) {
        if self.editor.take_focus_request() {
            self.focus = FocusTarget::Name;
        }
    }
}
