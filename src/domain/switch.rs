#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    pub label: String,
    pub on: bool,
    pub disabled: bool,
}

impl Switch {
    pub fn new(label: &str, on: bool) -> Self {
        Self {
            label: label.to_string(),
            on,
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A column of independent toggles with a shared cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchBank {
    pub switches: Vec<Switch>,
    pub cursor: usize,
}

impl SwitchBank {
    pub fn new(switches: Vec<Switch>) -> Self {
        Self {
            switches,
            cursor: 0,
        }
    }

    pub fn next(&mut self) {
        if !self.switches.is_empty() {
            self.cursor = (self.cursor + 1) % self.switches.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.switches.is_empty() {
            self.cursor = self
                .cursor
                .checked_sub(1)
                .unwrap_or(self.switches.len() - 1);
        }
    }

    /// Flip the switch under the cursor; disabled switches stay put.
    pub fn toggle_focused(&mut self) -> Option<bool> {
        let switch = self.switches.get_mut(self.cursor)?;
        if switch.disabled {
            return None;
        }
        switch.on = !switch.on;
        Some(switch.on)
    }
}
