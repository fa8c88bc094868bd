#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioChoice {
    pub label: String,
    pub hint: String,
    pub disabled: bool,
}

/// Exactly one choice is selected at a time; the cursor moves freely over all choices,
/// including disabled ones, so they can still be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioGroup {
    pub choices: Vec<RadioChoice>,
    pub selected: usize,
    pub cursor: usize,
}

impl RadioGroup {
    pub fn new(choices: Vec<RadioChoice>, selected: usize) -> Self {
        let selected = selected.min(choices.len().saturating_sub(1));
        Self {
            choices,
            selected,
            cursor: selected,
        }
    }

    pub fn next(&mut self) {
        if !self.choices.is_empty() {
            self.cursor = (self.cursor + 1) % self.choices.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.choices.is_empty() {
            self.cursor = if self.cursor == 0 {
                self.choices.len() - 1
            } else {
                self.cursor - 1
            };
        }
    }

    /// Select the choice under the cursor. Returns true when the selection moved.
    pub fn activate(&mut self) -> bool {
        match self.choices.get(self.cursor) {
            Some(choice) if !choice.disabled && self.cursor != self.selected => {
                self.selected = self.cursor;
                true
            }
            _ => false,
        }
    }

    pub fn selected_choice(&self) -> Option<&RadioChoice> {
        self.choices.get(self.selected)
    }
}
