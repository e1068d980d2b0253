use crate::{domain::FieldDraft, form::EditorCallbacks};

/// Records what the editor reported during a terminal session.
#[derive(Debug, Default, Clone)]
pub(crate) struct SessionLog {
    pub(crate) created: Vec<FieldDraft>,
    pub(crate) cancellations: usize,
}

impl EditorCallbacks for SessionLog {
    fn on_create(&mut self, field: FieldDraft) {
        self.created.push(field);
    }

    fn on_cancel(&mut self) {
        self.cancellations += 1;
    }
}

/// Result of [`FieldFormUI::run`](super::FieldFormUI::run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Accepted fields, formatted, in creation order.
    pub created: Vec<FieldDraft>,
    /// Whether the session ended with (or saw) a cancel.
    pub cancelled: bool,
}

impl From<&SessionLog> for SessionOutcome {
    fn from(log: &SessionLog) -> Self {
        Self {
            created: log.created.clone(),
            cancelled: log.cancellations > 0,
        }
    }
}
