use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;
use std::sync::{Arc, LazyLock};

use super::input::KeyAction;

macro_rules! keymap_source {
    () => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/keymap/default.keymap.json"
        ))
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum KeymapContext {
    Name,
    Type,
    Toggle,
    Button,
}

impl KeymapContext {
    fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(KeymapContext::Name),
            "type" => Some(KeymapContext::Type),
            "toggle" => Some(KeymapContext::Toggle),
            "button" => Some(KeymapContext::Button),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    description: String,
    contexts: Vec<String>,
    action: RawAction,
    combos: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawAction {
    Submit,
    Cancel,
    Quit,
    Toggle,
    FocusStep { delta: i32 },
    TypeStep { delta: i32 },
}

#[derive(Debug)]
struct KeyBinding {
    action: KeyAction,
    contexts: Vec<KeymapContext>,
    combos: Vec<KeyPattern>,
    snippet: String,
}

impl KeyBinding {
    fn from_raw(raw: RawEntry) -> Result<Self> {
        let contexts = raw
            .contexts
            .iter()
            .map(|ctx| {
                KeymapContext::from_str(ctx)
                    .ok_or_else(|| anyhow!("keymap entry {} has unknown context '{ctx}'", raw.id))
            })
            .collect::<Result<Vec<_>>>()?;
        if contexts.is_empty() {
            bail!("keymap entry {} must declare at least one context", raw.id);
        }
        let combos = raw
            .combos
            .iter()
            .map(|combo| {
                KeyPattern::parse(combo)
                    .map_err(|err| anyhow!("failed to parse combo '{combo}' for {}: {err}", raw.id))
            })
            .collect::<Result<Vec<_>>>()?;
        if combos.is_empty() {
            bail!("keymap entry {} must declare combos", raw.id);
        }
        let combos_display = combos
            .iter()
            .map(|pattern| pattern.display.clone())
            .collect::<Vec<_>>()
            .join("/");
        let snippet = format!("{combos_display} -> {}", raw.description);
        Ok(Self {
            action: raw.action.into_action(),
            contexts,
            combos,
            snippet,
        })
    }

    fn matches(&self, key: &KeyEvent, context: KeymapContext) -> Option<KeyAction> {
        if !self.contexts.contains(&context) {
            return None;
        }
        self.combos
            .iter()
            .find(|pattern| pattern.matches(key))
            .map(|_| self.action)
    }
}

#[derive(Debug)]
struct KeyPattern {
    matcher: CodeMatcher,
    required: KeyModifiers,
    allow_shift: bool,
    display: String,
}

impl KeyPattern {
    fn parse(spec: &str) -> Result<Self, String> {
        let display = spec.trim().to_string();
        if display.is_empty() {
            return Err("combo cannot be empty".into());
        }
        let mut tokens = display
            .split('+')
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        let Some(key_token) = tokens.pop() else {
            return Err("combo must contain key".into());
        };
        let matcher = CodeMatcher::from_token(key_token)?;
        let mut required = KeyModifiers::empty();
        for token in tokens {
            match token.to_lowercase().as_str() {
                "ctrl" | "control" => required |= KeyModifiers::CONTROL,
                "shift" => required |= KeyModifiers::SHIFT,
                "alt" => required |= KeyModifiers::ALT,
                other => {
                    return Err(format!("unsupported modifier '{other}'"));
                }
            }
        }
        let allow_shift = matcher.allows_extra_shift() && !required.contains(KeyModifiers::SHIFT);
        Ok(Self {
            matcher,
            required,
            allow_shift,
            display,
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        if !self.matcher.matches(&key.code) {
            return false;
        }
        if !key.modifiers.contains(self.required) {
            return false;
        }
        let extra = key.modifiers.difference(self.required);
        if self.allow_shift {
            (extra - KeyModifiers::SHIFT).is_empty()
        } else {
            extra.is_empty()
        }
    }
}

#[derive(Debug, Clone)]
enum CodeMatcher {
    Literal(KeyCode),
    Alpha(char),
}

impl CodeMatcher {
    fn from_token(token: &str) -> Result<Self, String> {
        let normalized = token.to_lowercase();
        let matcher = match normalized.as_str() {
            "tab" => CodeMatcher::Literal(KeyCode::Tab),
            "backtab" => CodeMatcher::Literal(KeyCode::BackTab),
            "enter" => CodeMatcher::Literal(KeyCode::Enter),
            "esc" | "escape" => CodeMatcher::Literal(KeyCode::Esc),
            "space" => CodeMatcher::Literal(KeyCode::Char(' ')),
            "left" => CodeMatcher::Literal(KeyCode::Left),
            "right" => CodeMatcher::Literal(KeyCode::Right),
            "up" => CodeMatcher::Literal(KeyCode::Up),
            "down" => CodeMatcher::Literal(KeyCode::Down),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => CodeMatcher::Alpha(ch),
                    _ => return Err(format!("unsupported key '{token}'")),
                }
            }
        };
        Ok(matcher)
    }

    fn matches(&self, code: &KeyCode) -> bool {
        match (self, code) {
            (CodeMatcher::Literal(expected), actual) => actual == expected,
            (CodeMatcher::Alpha(expected), KeyCode::Char(actual)) => {
                actual.to_ascii_lowercase() == *expected
            }
            _ => false,
        }
    }

    fn allows_extra_shift(&self) -> bool {
        matches!(
            self,
            CodeMatcher::Alpha(_) | CodeMatcher::Literal(KeyCode::BackTab)
        )
    }
}

impl RawAction {
    fn into_action(self) -> KeyAction {
        match self {
            RawAction::Submit => KeyAction::Submit,
            RawAction::Cancel => KeyAction::Cancel,
            RawAction::Quit => KeyAction::Quit,
            RawAction::Toggle => KeyAction::Toggle,
            RawAction::FocusStep { delta } => KeyAction::FocusStep(delta),
            RawAction::TypeStep { delta } => KeyAction::TypeStep(delta),
        }
    }
}

/// Parsed key bindings, looked up per focus context.
#[derive(Debug)]
pub(crate) struct KeymapStore {
    bindings: Vec<KeyBinding>,
}

impl KeymapStore {
    pub(crate) fn from_json(source: &str) -> Result<Self> {
        let raw_entries: Vec<RawEntry> =
            serde_json::from_str(source).context("invalid keymap document")?;
        let bindings = raw_entries
            .into_iter()
            .map(KeyBinding::from_raw)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { bindings })
    }

    pub(crate) fn classify(&self, key: &KeyEvent, context: KeymapContext) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find_map(|binding| binding.matches(key, context))
    }

    pub(crate) fn help_text(&self, context: KeymapContext) -> Option<String> {
        let snippets = self
            .bindings
            .iter()
            .filter(|binding| binding.contexts.contains(&context))
            .map(|binding| binding.snippet.clone())
            .collect::<Vec<_>>();
        if snippets.is_empty() {
            None
        } else {
            Some(snippets.join(" • "))
        }
    }
}

static DEFAULT_STORE: LazyLock<Arc<KeymapStore>> = LazyLock::new(|| {
    Arc::new(
        KeymapStore::from_json(keymap_source!()).expect("bundled keymap/default.keymap.json"),
    )
});

pub(crate) fn default_store() -> Arc<KeymapStore> {
    Arc::clone(&DEFAULT_STORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn bundled_keymap_parses() {
        let store = KeymapStore::from_json(keymap_source!()).expect("keymap");
        assert!(!store.bindings.is_empty());
    }

    #[test]
    fn space_only_toggles_in_toggle_context() {
        let store = default_store();
        let space = key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(matches!(
            store.classify(&space, KeymapContext::Toggle),
            Some(KeyAction::Toggle)
        ));
        assert!(store.classify(&space, KeymapContext::Name).is_none());
    }

    #[test]
    fn ctrl_q_quits_even_with_shift() {
        let store = default_store();
        let chord = key(
            KeyCode::Char('Q'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert!(matches!(
            store.classify(&chord, KeymapContext::Name),
            Some(KeyAction::Quit)
        ));
        let plain = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(store.classify(&plain, KeymapContext::Name).is_none());
    }

    #[test]
    fn help_text_is_scoped_to_context() {
        let store = default_store();
        let help = store.help_text(KeymapContext::Type).expect("help");
        assert!(help.contains("Left -> previous type"));
        assert!(!help.contains("toggle"));
    }

    #[test]
    fn rejects_unknown_context_and_keys() {
        let unknown_context = r#"[{"id": "x", "description": "x", "contexts": ["grid"],
            "action": {"kind": "quit"}, "combos": ["Esc"]}]"#;
        assert!(KeymapStore::from_json(unknown_context).is_err());
        let unknown_key = r#"[{"id": "x", "description": "x", "contexts": ["name"],
            "action": {"kind": "quit"}, "combos": ["Hyper+F13"]}]"#;
        assert!(KeymapStore::from_json(unknown_key).is_err());
    }
}
