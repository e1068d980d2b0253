use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Applies a key to a single-line text buffer. Returns whether the buffer changed.
pub(crate) fn handle_text_edit(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                || ch.is_control()
            {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(buffer: &mut String, code: KeyCode, modifiers: KeyModifiers) -> bool {
        handle_text_edit(buffer, &KeyEvent::new(code, modifiers))
    }

    #[test]
    fn appends_printable_and_shifted_characters() {
        let mut buffer = String::from("ag");
        assert!(edit(&mut buffer, KeyCode::Char('e'), KeyModifiers::NONE));
        assert!(edit(&mut buffer, KeyCode::Char('$'), KeyModifiers::SHIFT));
        assert_eq!(buffer, "age$");
    }

    #[test]
    fn rejects_control_chords() {
        let mut buffer = String::new();
        assert!(!edit(&mut buffer, KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(buffer, "");
    }

    #[test]
    fn backspace_and_delete_report_real_changes_only() {
        let mut buffer = String::from("x");
        assert!(edit(&mut buffer, KeyCode::Backspace, KeyModifiers::NONE));
        assert!(!edit(&mut buffer, KeyCode::Backspace, KeyModifiers::NONE));
        buffer.push_str("abc");
        assert!(edit(&mut buffer, KeyCode::Delete, KeyModifiers::NONE));
        assert!(!edit(&mut buffer, KeyCode::Delete, KeyModifiers::NONE));
    }
}
