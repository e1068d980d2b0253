#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Type a field name, Enter adds it, Esc cancels.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn field_created(&mut self, name: &str) {
        self.message = format!("Added field '{name}'");
    }

    pub fn rejected(&mut self, count: usize) {
        self.message = format!("{count} issue(s) to fix before adding");
    }

    pub fn submit_disabled(&mut self) {
        self.message = "Fix the listed issues before adding the field".to_string();
    }

    pub fn cancelled(&mut self) {
        self.message = "New field discarded".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
