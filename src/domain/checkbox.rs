#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    pub label: String,
    pub checked: bool,
}

/// A set of checkboxes under a "select all" parent whose state is derived from the
/// children. Row 0 is the parent, rows `1..=items.len()` are the children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckGroup {
    pub label: String,
    pub items: Vec<CheckItem>,
    pub cursor: usize,
}

impl CheckGroup {
    pub fn new(label: impl Into<String>, items: &[(&str, bool)]) -> Self {
        Self {
            label: label.into(),
            items: items
                .iter()
                .map(|(label, checked)| CheckItem {
                    label: (*label).to_string(),
                    checked: *checked,
                })
                .collect(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn parent_state(&self) -> CheckState {
        let checked = self.items.iter().filter(|i| i.checked).count();
        if checked == 0 {
            CheckState::Unchecked
        } else if checked == self.items.len() {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    pub fn toggle_all(&mut self) {
        let target = self.parent_state() != CheckState::Checked;
        for item in &mut self.items {
            item.checked = target;
        }
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.checked = !item.checked;
        }
    }

    pub fn row_count(&self) -> usize {
        self.items.len() + 1
    }

    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % self.row_count();
    }

    pub fn prev(&mut self) {
        self.cursor = if self.cursor == 0 {
            self.row_count() - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn activate(&mut self) {
        match self.cursor {
            0 => self.toggle_all(),
            row => self.toggle(row - 1),
        }
    }
}
