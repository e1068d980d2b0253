use crate::domain::FieldDraft;

/// Hooks the hosting application injects into the editor.
pub trait EditorCallbacks {
    /// Receives the formatted, validated field. Called once per accepted submit.
    fn on_create(&mut self, field: FieldDraft);

    /// Called once per cancel.
    fn on_cancel(&mut self);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCallbacks;

impl EditorCallbacks for NoopCallbacks {
    fn on_create(&mut self, _field: FieldDraft) {}

    fn on_cancel(&mut self) {}
}

/// Adapts a pair of closures to [`EditorCallbacks`].
pub struct Callbacks<C, X> {
    on_create: C,
    on_cancel: X,
}

impl<C, X> Callbacks<C, X>
where
    C: FnMut(FieldDraft),
    X: FnMut(),
{
    pub fn new(on_create: C, on_cancel: X) -> Self {
        Self {
            on_create,
            on_cancel,
        }
    }
}

impl<C, X> EditorCallbacks for Callbacks<C, X>
where
    C: FnMut(FieldDraft),
    X: FnMut(),
{
    fn on_create(&mut self, field: FieldDraft) {
        (self.on_create)(field);
    }

    fn on_cancel(&mut self) {
        (self.on_cancel)();
    }
}

impl<C, X> std::fmt::Debug for Callbacks<C, X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}
