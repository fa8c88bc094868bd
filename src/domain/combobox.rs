//! Filterable selection list.
//!
//! The combobox owns its query, selection, open flag and keyboard focus. The option list
//! is shared and never mutated. Every operation that changes the selection returns the
//! full new selection so the host can forward it; nothing here can fail.

use super::option::SelectOption;
use super::pointer::{ListenerId, PointerHub, PointerSubscription};
use ratatui::layout::{Position, Rect};
use std::ops::Range;
use std::sync::Arc;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    Multi,
}

/// Full selection after a change. Single mode carries the one value (or none after a
/// removal), multi mode the whole set in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Single(Option<String>),
    Multi(Vec<String>),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComboKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Tab,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub change: Option<SelectionChange>,
    /// The host should still run its default handling (focus movement for Tab).
    pub propagate: bool,
}

/// Screen regions from the last render, used for hit testing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComboLayout {
    pub input: Rect,
    /// One row per visible option, top row is `visible_range().start`.
    pub list: Option<Rect>,
    pub chips: Vec<(String, Rect)>,
}

#[derive(Debug)]
pub struct Combobox {
    options: Arc<[SelectOption]>,
    mode: SelectionMode,
    max_visible: Option<usize>,

    query: String,
    filtered: Vec<usize>,
    selected: Vec<String>,
    is_open: bool,
    focused: Option<usize>,
    scroll_offset: usize,
    // Rows the last render had room for; may be fewer than `max_visible`.
    viewport_rows: Option<usize>,

    hub: PointerHub,
    listener: Option<PointerSubscription>,
    layout: ComboLayout,
}

impl Combobox {
    pub fn new(
        options: impl Into<Arc<[SelectOption]>>,
        mode: SelectionMode,
        hub: PointerHub,
    ) -> Self {
        let options = options.into();
        let filtered = (0..options.len()).collect();
        Self {
            options,
            mode,
            max_visible: None,
            query: String::new(),
            filtered,
            selected: Vec::new(),
            is_open: false,
            focused: None,
            scroll_offset: 0,
            viewport_rows: None,
            hub,
            listener: None,
            layout: ComboLayout::default(),
        }
    }

    /// Initial selection. Unknown values and duplicates are dropped; single mode keeps
    /// only the first remaining value.
    #[must_use]
    pub fn with_selected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected.clear();
        for value in values {
            let value = value.into();
            if self.option(&value).is_some() && !self.selected.contains(&value) {
                self.selected.push(value);
            }
        }
        if self.mode == SelectionMode::Single {
            self.selected.truncate(1);
        }
        self
    }

    #[must_use]
    pub fn with_max_visible(mut self, rows: usize) -> Self {
        self.max_visible = (rows > 0).then_some(rows);
        self
    }

    // --- Accessors ---

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn max_visible(&self) -> Option<usize> {
        self.max_visible
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    pub fn option(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn selected_options(&self) -> impl Iterator<Item = &SelectOption> {
        self.selected.iter().filter_map(|v| self.option(v))
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &SelectOption> {
        self.filtered.iter().map(|&i| &self.options[i])
    }

    pub fn filtered_option(&self, index: usize) -> Option<&SelectOption> {
        self.filtered.get(index).map(|&i| &self.options[i])
    }

    /// Window of the filtered list that fits `max_visible` and the rendered list height.
    pub fn visible_range(&self) -> Range<usize> {
        let len = self.filtered.len();
        match self.window() {
            Some(rows) => {
                let start = self.scroll_offset.min(len);
                start..(start + rows).min(len)
            }
            None => 0..len,
        }
    }

    /// Rows the list would like to show, before any terminal clipping.
    pub fn wanted_rows(&self) -> usize {
        let len = self.filtered.len();
        self.max_visible.map_or(len, |max| max.min(len))
    }

    /// Tell the viewport how many rows were actually drawn and scroll the focused row
    /// back into them.
    pub fn fit_viewport(&mut self, rows: usize) {
        self.viewport_rows = Some(rows.max(1));
        if let Some(index) = self.focused {
            self.scroll_to(index);
        }
    }

    pub fn listener_id(&self) -> Option<ListenerId> {
        self.listener.as_ref().map(PointerSubscription::id)
    }

    pub fn layout(&self) -> &ComboLayout {
        &self.layout
    }

    // --- Operations ---

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.refilter();
        self.open();
    }

    pub fn open(&mut self) {
        self.is_open = true;
        if self.listener.is_none() {
            self.listener = Some(self.hub.subscribe());
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.focused = None;
        self.scroll_offset = 0;
        self.viewport_rows = None;
        self.layout.list = None;
        self.listener = None;
    }

    pub fn toggle_open(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Select by value. Disabled and unknown options are ignored.
    pub fn select(&mut self, value: &str) -> Option<SelectionChange> {
        let option = self.option(value).filter(|o| !o.disabled)?.clone();
        match self.mode {
            SelectionMode::Single => {
                let changed = self.selected.as_slice() != std::slice::from_ref(&option.value);
                self.selected = vec![option.value];
                self.query = option.label;
                self.refilter();
                self.close();
                changed.then(|| self.change())
            }
            SelectionMode::Multi => {
                if let Some(pos) = self.selected.iter().position(|v| *v == option.value) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(option.value);
                }
                Some(self.change())
            }
        }
    }

    pub fn select_focused(&mut self) -> Option<SelectionChange> {
        let value = self.filtered_option(self.focused?)?.value.clone();
        self.select(&value)
    }

    pub fn remove_selected(&mut self, value: &str) -> Option<SelectionChange> {
        let pos = self.selected.iter().position(|v| v == value)?;
        self.selected.remove(pos);
        Some(self.change())
    }

    pub fn handle_key(&mut self, key: ComboKey) -> KeyOutcome {
        let mut outcome = KeyOutcome::default();
        let len = self.filtered.len();
        match key {
            ComboKey::ArrowDown => {
                if !self.is_open {
                    self.open();
                } else if len > 0 {
                    self.focus(match self.focused {
                        Some(i) if i + 1 < len => i + 1,
                        Some(_) | None => 0,
                    });
                }
            }
            ComboKey::ArrowUp => {
                if self.is_open && len > 0 {
                    self.focus(match self.focused {
                        Some(i) if i > 0 => i - 1,
                        Some(_) | None => len - 1,
                    });
                }
            }
            ComboKey::Enter => {
                if !self.is_open {
                    self.open();
                } else if self.focused.is_some() {
                    outcome.change = self.select_focused();
                }
            }
            ComboKey::Escape => self.close(),
            ComboKey::Tab => {
                self.close();
                outcome.propagate = true;
            }
        }
        outcome
    }

    /// Record where the last render put this widget and refresh the outside-click bounds.
    pub fn record_layout(&mut self, layout: ComboLayout) {
        if let Some(listener) = &self.listener {
            let bounds = layout
                .list
                .map_or(layout.input, |list| layout.input.union(list));
            listener.set_bounds(bounds);
        }
        self.layout = layout;
    }

    /// Filtered index of the option row under `pos`, if the list is showing.
    pub fn row_at(&self, pos: Position) -> Option<usize> {
        let list = self.layout.list.filter(|r| r.contains(pos))?;
        let index = self.visible_range().start + usize::from(pos.y - list.y);
        (index < self.filtered.len()).then_some(index)
    }

    pub fn chip_at(&self, pos: Position) -> Option<&str> {
        self.layout
            .chips
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(value, _)| value.as_str())
    }

    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        self.filtered = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.matches(&needle))
            .map(|(i, _)| i)
            .collect();
        self.focused = None;
        self.scroll_offset = 0;
    }

    fn focus(&mut self, index: usize) {
        self.focused = Some(index);
        self.scroll_to(index);
    }

    fn scroll_to(&mut self, index: usize) {
        if let Some(rows) = self.window() {
            if index < self.scroll_offset {
                self.scroll_offset = index;
            } else if index >= self.scroll_offset + rows {
                self.scroll_offset = index + 1 - rows;
            }
        }
    }

    fn window(&self) -> Option<usize> {
        match (self.max_visible, self.viewport_rows) {
            (Some(max), Some(rows)) => Some(max.min(rows)),
            (max, rows) => max.or(rows),
        }
    }

    fn change(&self) -> SelectionChange {
        match self.mode {
            SelectionMode::Single => SelectionChange::Single(self.selected.first().cloned()),
            SelectionMode::Multi => SelectionChange::Multi(self.selected.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> Vec<SelectOption> {
        vec![
            SelectOption::new("us", "United States"),
            SelectOption::new("ca", "Canada"),
        ]
    }

    fn letters() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Alpha").with_description("first"),
            SelectOption::new("b", "Bravo").with_category("Phonetic"),
            SelectOption::new("c", "Charlie"),
        ]
    }

    fn values(combo: &Combobox) -> Vec<&str> {
        combo.filtered().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let mut combo = Combobox::new(letters(), SelectionMode::Single, PointerHub::new());
        assert_eq!(values(&combo), vec!["a", "b", "c"]);

        combo.set_query("A");
        assert_eq!(values(&combo), vec!["a", "b", "c"]);

        combo.set_query("PHONE");
        assert_eq!(values(&combo), vec!["b"]);

        combo.set_query("FIRST");
        assert_eq!(values(&combo), vec!["a"]);

        combo.set_query("zzz");
        assert_eq!(combo.filtered_len(), 0);

        combo.set_query("");
        assert_eq!(values(&combo), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_set_query_opens_and_resets_focus() {
        let mut combo = Combobox::new(letters(), SelectionMode::Single, PointerHub::new());
        combo.open();
        combo.handle_key(ComboKey::ArrowDown);
        combo.handle_key(ComboKey::ArrowDown);
        assert_eq!(combo.focused_index(), Some(1));

        combo.close();
        combo.set_query("char");
        assert!(combo.is_open());
        assert_eq!(combo.focused_index(), None);
    }

    #[test]
    fn test_single_select_scenario() {
        let mut combo = Combobox::new(countries(), SelectionMode::Single, PointerHub::new());
        combo.set_query("can");
        assert_eq!(values(&combo), vec!["ca"]);

        let change = combo.select("ca");
        assert_eq!(change, Some(SelectionChange::Single(Some("ca".to_string()))));
        assert_eq!(combo.selected(), ["ca".to_string()]);
        assert_eq!(combo.query(), "Canada");
        assert!(!combo.is_open());
    }

    #[test]
    fn test_single_select_replaces_prior_selection() {
        let mut combo = Combobox::new(countries(), SelectionMode::Single, PointerHub::new())
            .with_selected(["us"]);
        combo.select("ca");
        assert_eq!(combo.selected(), ["ca".to_string()]);

        // Same value again: no change to report
        assert_eq!(combo.select("ca"), None);
        assert_eq!(combo.selected().len(), 1);
    }

    #[test]
    fn test_multi_select_toggle_is_involution() {
        let mut combo = Combobox::new(letters(), SelectionMode::Multi, PointerHub::new())
            .with_selected(["c"]);
        let before = combo.selected().to_vec();

        combo.select("a");
        assert!(combo.is_selected("a"));
        combo.select("a");
        assert!(!combo.is_selected("a"));
        assert_eq!(combo.selected(), before.as_slice());
    }

    #[test]
    fn test_multi_select_scenario() {
        let mut combo = Combobox::new(letters(), SelectionMode::Multi, PointerHub::new());
        combo.set_query("a");
        combo.select("a");
        let change = combo.select("b");
        assert_eq!(
            change,
            Some(SelectionChange::Multi(vec!["a".to_string(), "b".to_string()]))
        );
        // Multi-select keeps the list open and the query intact
        assert!(combo.is_open());
        assert_eq!(combo.query(), "a");

        let change = combo.remove_selected("a");
        assert_eq!(change, Some(SelectionChange::Multi(vec!["b".to_string()])));
    }

    #[test]
    fn test_remove_selected_is_idempotent() {
        let mut combo = Combobox::new(letters(), SelectionMode::Multi, PointerHub::new())
            .with_selected(["a", "b"]);
        combo.remove_selected("a");
        assert!(!combo.is_selected("a"));
        assert_eq!(combo.remove_selected("a"), None);
        assert!(!combo.is_selected("a"));
        assert_eq!(combo.remove_selected("missing"), None);
        assert_eq!(combo.selected(), ["b".to_string()]);
    }

    #[test]
    fn test_disabled_options_never_selected() {
        let options = vec![
            SelectOption::new("a", "Alpha"),
            SelectOption::new("x", "Locked").disabled(),
        ];
        for mode in [SelectionMode::Single, SelectionMode::Multi] {
            let mut combo = Combobox::new(options.clone(), mode, PointerHub::new())
                .with_selected(["a"]);
            combo.open();
            assert_eq!(combo.select("x"), None);
            assert_eq!(combo.selected(), ["a".to_string()]);

            // Also through the keyboard
            combo.set_query("lock");
            combo.handle_key(ComboKey::ArrowDown);
            let outcome = combo.handle_key(ComboKey::Enter);
            assert_eq!(outcome.change, None);
            assert_eq!(combo.selected(), ["a".to_string()]);
        }
    }

    #[test]
    fn test_keyboard_wraps() {
        let mut combo = Combobox::new(letters(), SelectionMode::Single, PointerHub::new());

        // ArrowDown on a closed list only opens it
        combo.handle_key(ComboKey::ArrowDown);
        assert!(combo.is_open());
        assert_eq!(combo.focused_index(), None);

        combo.handle_key(ComboKey::ArrowDown);
        assert_eq!(combo.focused_index(), Some(0));
        combo.handle_key(ComboKey::ArrowUp);
        assert_eq!(combo.focused_index(), Some(2));
        combo.handle_key(ComboKey::ArrowDown);
        assert_eq!(combo.focused_index(), Some(0));
    }

    #[test]
    fn test_arrow_up_ignored_when_closed() {
        let mut combo = Combobox::new(letters(), SelectionMode::Single, PointerHub::new());
        combo.handle_key(ComboKey::ArrowUp);
        assert!(!combo.is_open());
        assert_eq!(combo.focused_index(), None);
    }

    #[test]
    fn test_enter_opens_then_selects() {
        let mut combo = Combobox::new(letters(), SelectionMode::Single, PointerHub::new());
        let outcome = combo.handle_key(ComboKey::Enter);
        assert!(combo.is_open());
        assert_eq!(outcome.change, None);

        // Open but nothing focused: nothing happens
        combo.handle_key(ComboKey::Enter);
        assert!(combo.is_open());

        combo.handle_key(ComboKey::ArrowDown);
        combo.handle_key(ComboKey::ArrowDown);
        let outcome = combo.handle_key(ComboKey::Enter);
        assert_eq!(outcome.change, Some(SelectionChange::Single(Some("b".to_string()))));
        assert_eq!(combo.query(), "Bravo");
        assert!(!combo.is_open());
    }

    #[test]
    fn test_escape_and_tab_close_without_clearing() {
        let mut combo = Combobox::new(letters(), SelectionMode::Multi, PointerHub::new());
        combo.set_query("a");
        combo.select("a");
        combo.handle_key(ComboKey::ArrowDown);

        let outcome = combo.handle_key(ComboKey::Escape);
        assert!(!outcome.propagate);
        assert!(!combo.is_open());
        assert_eq!(combo.focused_index(), None);
        assert_eq!(combo.query(), "a");
        assert!(combo.is_selected("a"));

        combo.open();
        combo.handle_key(ComboKey::ArrowDown);
        let outcome = combo.handle_key(ComboKey::Tab);
        assert!(outcome.propagate);
        assert!(!combo.is_open());
        assert_eq!(combo.focused_index(), None);
    }

    #[test]
    fn test_listener_held_only_while_open() {
        let hub = PointerHub::new();
        let mut combo = Combobox::new(letters(), SelectionMode::Single, hub.clone());
        assert_eq!(hub.active_count(), 0);

        combo.open();
        combo.open();
        combo.set_query("b");
        assert_eq!(hub.active_count(), 1);

        combo.close();
        assert_eq!(hub.active_count(), 0);
        combo.close();
        assert_eq!(hub.active_count(), 0);

        combo.toggle_open();
        assert_eq!(hub.active_count(), 1);
        drop(combo);
        assert_eq!(hub.active_count(), 0);
    }

    #[test]
    fn test_outside_click_bounds_follow_layout() {
        let hub = PointerHub::new();
        let mut combo = Combobox::new(letters(), SelectionMode::Single, hub.clone());
        combo.open();
        combo.record_layout(ComboLayout {
            input: Rect::new(0, 0, 20, 3),
            list: Some(Rect::new(1, 3, 18, 3)),
            chips: Vec::new(),
        });

        assert!(hub.outside(Position::new(5, 4)).is_empty());
        assert_eq!(hub.outside(Position::new(30, 4)), vec![combo.listener_id().unwrap()]);

        assert_eq!(combo.row_at(Position::new(5, 4)), Some(1));
        assert_eq!(combo.row_at(Position::new(5, 1)), None);
    }

    #[test]
    fn test_initial_selection_sanitised() {
        let combo = Combobox::new(letters(), SelectionMode::Single, PointerHub::new())
            .with_selected(["nope", "b", "c"]);
        assert_eq!(combo.selected(), ["b".to_string()]);

        let combo = Combobox::new(letters(), SelectionMode::Multi, PointerHub::new())
            .with_selected(["c", "a", "c"]);
        assert_eq!(combo.selected(), ["c".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_max_visible_keeps_focus_in_view() {
        let options: Vec<_> = (0..10)
            .map(|i| SelectOption::new(format!("v{i}"), format!("Item {i}")))
            .collect();
        let mut combo =
            Combobox::new(options, SelectionMode::Single, PointerHub::new()).with_max_visible(4);
        combo.open();
        assert_eq!(combo.visible_range(), 0..4);

        for _ in 0..6 {
            combo.handle_key(ComboKey::ArrowDown);
        }
        assert_eq!(combo.focused_index(), Some(5));
        assert_eq!(combo.visible_range(), 2..6);

        // Wrap to the top scrolls back
        for _ in 0..5 {
            combo.handle_key(ComboKey::ArrowDown);
        }
        assert_eq!(combo.focused_index(), Some(0));
        assert_eq!(combo.visible_range(), 0..4);

        combo.handle_key(ComboKey::ArrowUp);
        assert_eq!(combo.focused_index(), Some(9));
        assert_eq!(combo.visible_range(), 6..10);
    }

    #[test]
    fn test_clipped_viewport_keeps_focus_in_view() {
        let options: Vec<_> = (0..10)
            .map(|i| SelectOption::new(format!("v{i}"), format!("Item {i}")))
            .collect();
        let mut combo =
            Combobox::new(options, SelectionMode::Single, PointerHub::new()).with_max_visible(6);
        combo.open();
        assert_eq!(combo.wanted_rows(), 6);

        for _ in 0..5 {
            combo.handle_key(ComboKey::ArrowDown);
        }
        assert_eq!(combo.visible_range(), 0..6);

        // Only two rows fit on screen
        combo.fit_viewport(2);
        assert_eq!(combo.focused_index(), Some(4));
        assert_eq!(combo.visible_range(), 3..5);
        assert_eq!(combo.wanted_rows(), 6);

        combo.handle_key(ComboKey::ArrowDown);
        assert_eq!(combo.visible_range(), 4..6);

        // A fresh open starts without the clip
        combo.close();
        combo.open();
        assert_eq!(combo.visible_range(), 0..6);
    }

    #[test]
    fn test_empty_option_list() {
        let mut combo =
            Combobox::new(Vec::<SelectOption>::new(), SelectionMode::Multi, PointerHub::new());
        combo.handle_key(ComboKey::ArrowDown);
        combo.handle_key(ComboKey::ArrowDown);
        combo.handle_key(ComboKey::ArrowUp);
        assert_eq!(combo.focused_index(), None);
        assert_eq!(combo.handle_key(ComboKey::Enter).change, None);
        assert_eq!(combo.visible_range(), 0..0);
    }
}
