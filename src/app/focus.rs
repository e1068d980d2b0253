use super::keymap::KeymapContext;

/// Widgets of the form in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusTarget {
    #[default]
    Name,
    Type,
    PrimaryKey,
    Unique,
    Required,
    Add,
    Cancel,
}

impl FocusTarget {
    pub const ORDER: [FocusTarget; 7] = [
        FocusTarget::Name,
        FocusTarget::Type,
        FocusTarget::PrimaryKey,
        FocusTarget::Unique,
        FocusTarget::Required,
        FocusTarget::Add,
        FocusTarget::Cancel,
    ];

    pub fn step(self, delta: i32) -> Self {
        let len = Self::ORDER.len() as i64;
        let index = Self::ORDER
            .iter()
            .position(|target| *target == self)
            .unwrap_or(0) as i64;
        Self::ORDER[(index + delta as i64).rem_euclid(len) as usize]
    }

    pub(crate) fn context(self) -> KeymapContext {
        match self {
            FocusTarget::Name => KeymapContext::Name,
            FocusTarget::Type => KeymapContext::Type,
            FocusTarget::PrimaryKey | FocusTarget::Unique | FocusTarget::Required => {
                KeymapContext::Toggle
            }
            FocusTarget::Add | FocusTarget::Cancel => KeymapContext::Button,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusTarget::Name => "Name",
            FocusTarget::Type => "Type",
            FocusTarget::PrimaryKey => "Primary Key",
            FocusTarget::Unique => "Unique",
            FocusTarget::Required => "Required",
            FocusTarget::Add => "Add",
            FocusTarget::Cancel => "Cancel",
        }
    }
}
