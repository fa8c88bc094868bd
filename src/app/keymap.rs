use super::action::Action;
use super::config::ConfigError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Action name -> key, e.g. `next_page = "ctrl+n"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug)]
pub struct KeyMap {
    // Honoured even while a combobox or text field owns the keyboard.
    pub always: HashMap<KeyEvent, Action>,
    pub global: HashMap<KeyEvent, Action>,
    // Acts on whichever demo has focus.
    pub widget: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::with_profile(true)
    }
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Result<Self, ConfigError> {
        let mut map = match config.profile.as_str() {
            "vim" => Self::with_profile(true),
            "default" => Self::with_profile(false),
            other => return Err(ConfigError::UnknownProfile(other.to_string())),
        };

        if let Some(custom) = &config.custom {
            for (name, binding) in custom {
                let action = action_by_name(name)
                    .ok_or_else(|| ConfigError::UnknownAction(name.clone()))?;
                let key = parse_key(binding).ok_or_else(|| ConfigError::InvalidKey {
                    action: name.clone(),
                    binding: binding.clone(),
                })?;
                // Plain characters would be swallowed by text entry, so they only
                // apply while no widget captures text.
                if matches!(key.code, KeyCode::Char(_)) && key.modifiers.is_empty() {
                    map.global.insert(key, action);
                } else {
                    map.always.insert(key, action);
                }
            }
        }
        Ok(map)
    }

    fn with_profile(vim: bool) -> Self {
        let mut always = HashMap::new();
        let mut global = HashMap::new();
        let mut widget = HashMap::new();

        // --- Always ---
        always.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
        );
        always.insert(key(KeyCode::F(1)), Action::ToggleHelp);
        always.insert(key(KeyCode::PageDown), Action::NextPage);
        always.insert(key(KeyCode::PageUp), Action::PrevPage);
        always.insert(key(KeyCode::BackTab), Action::FocusPrev);

        // --- Global ---
        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(key(KeyCode::Char(']')), Action::NextPage);
        global.insert(key(KeyCode::Char('[')), Action::PrevPage);
        global.insert(key(KeyCode::Tab), Action::FocusNext);
        global.insert(key(KeyCode::Esc), Action::CancelMode);

        // --- Focused widget ---
        widget.insert(key(KeyCode::Down), Action::WidgetNext);
        widget.insert(key(KeyCode::Up), Action::WidgetPrev);
        widget.insert(key(KeyCode::Right), Action::WidgetNext);
        widget.insert(key(KeyCode::Left), Action::WidgetPrev);
        widget.insert(key(KeyCode::Enter), Action::WidgetActivate);
        widget.insert(key(KeyCode::Char(' ')), Action::WidgetActivate);
        widget.insert(key(KeyCode::Char('+')), Action::WidgetIncrease);
        widget.insert(key(KeyCode::Char('=')), Action::WidgetIncrease);
        widget.insert(key(KeyCode::Char('-')), Action::WidgetDecrease);
        widget.insert(key(KeyCode::Char('r')), Action::WidgetReset);

        if vim {
            widget.insert(key(KeyCode::Char('j')), Action::WidgetNext);
            widget.insert(key(KeyCode::Char('k')), Action::WidgetPrev);
            widget.insert(key(KeyCode::Char('l')), Action::WidgetNext);
            widget.insert(key(KeyCode::Char('h')), Action::WidgetPrev);
        }

        Self {
            always,
            global,
            widget,
        }
    }

    pub fn get_action(&self, event: KeyEvent, captures_text: bool) -> Option<Action> {
        let event = normalize(event);
        if let Some(action) = self.always.get(&event) {
            return Some(action.clone());
        }
        if captures_text {
            return None;
        }
        self.widget
            .get(&event)
            .or_else(|| self.global.get(&event))
            .cloned()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

// Terminals disagree on whether shifted characters carry SHIFT; the character is enough.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_) | KeyCode::BackTab) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

fn action_by_name(name: &str) -> Option<Action> {
    Some(match name {
        "quit" => Action::Quit,
        "help" => Action::ToggleHelp,
        "next_page" => Action::NextPage,
        "prev_page" => Action::PrevPage,
        "focus_next" => Action::FocusNext,
        "focus_prev" => Action::FocusPrev,
        "cancel" => Action::CancelMode,
        _ => return None,
    })
}

/// Parse bindings such as `q`, `ctrl+n`, `alt+shift+left` or `f5`.
pub fn parse_key(binding: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut parts: Vec<&str> = binding.split('+').map(str::trim).collect();
    // "ctrl++" binds the plus key
    if binding.ends_with("++") {
        parts.truncate(parts.len().saturating_sub(2));
        parts.push("+");
    }
    let (last, mods) = parts.split_last()?;

    for m in mods {
        match m.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let lower = last.to_lowercase();
    let code = match lower.as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        _ => {
            let mut chars = last.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(normalize(KeyEvent::new(code, modifiers)))
}
