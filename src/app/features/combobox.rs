use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, WidgetId},
};
use crate::domain::combobox::{SelectionChange, SelectionMode};
use ratatui::layout::Position;

use super::navigation;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ComboKey(id, key) => {
            let Some(combo) = state.playground.combobox_mut(*id) else {
                return UpdateResult::NotHandled;
            };
            let outcome = combo.handle_key(*key);
            let command = notify(state, *id, outcome.change);
            if outcome.propagate {
                navigation::move_focus(state, 1);
            }
            UpdateResult::Handled(command)
        }
        Action::ComboInput(id, c) => {
            if let Some(combo) = state.playground.combobox_mut(*id) {
                let mut query = combo.query().to_string();
                query.push(*c);
                combo.set_query(query);
            }
            UpdateResult::Handled(None)
        }
        Action::ComboBackspace(id) => {
            let Some(combo) = state.playground.combobox_mut(*id) else {
                return UpdateResult::NotHandled;
            };
            let change = if combo.query().is_empty() && combo.mode() == SelectionMode::Multi {
                // Backspace on an empty query removes the most recent chip
                let last = combo.selected().last().cloned();
                last.and_then(|value| combo.remove_selected(&value))
            } else {
                let mut query = combo.query().to_string();
                query.pop();
                combo.set_query(query);
                None
            };
            UpdateResult::Handled(notify(state, *id, change))
        }
        Action::ComboToggle(id) => {
            navigation::focus_widget(state, *id);
            if let Some(combo) = state.playground.combobox_mut(*id) {
                combo.toggle_open();
            }
            UpdateResult::Handled(None)
        }
        Action::ComboSelectRow(id, index) => {
            navigation::focus_widget(state, *id);
            let Some(combo) = state.playground.combobox_mut(*id) else {
                return UpdateResult::NotHandled;
            };
            let value = combo.filtered_option(*index).map(|o| o.value.clone());
            let change = value.and_then(|value| combo.select(&value));
            UpdateResult::Handled(notify(state, *id, change))
        }
        Action::ComboRemove(id, value) => {
            let change = state
                .playground
                .combobox_mut(*id)
                .and_then(|combo| combo.remove_selected(value));
            UpdateResult::Handled(notify(state, *id, change))
        }
        Action::PointerDown(x, y) => {
            close_outside(state, Position::new(*x, *y));
            // Other handlers may still act on the same click
            UpdateResult::NotHandled
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Close every open combobox whose listener reports the click as outside.
fn close_outside(state: &mut AppState, pos: Position) {
    let outside = state.pointer_hub.outside(pos);
    if outside.is_empty() {
        return;
    }
    for (id, combo) in state.playground.comboboxes_mut() {
        if combo.listener_id().is_some_and(|l| outside.contains(&l)) {
            tracing::debug!(widget = id.label(), "closed by outside click");
            combo.close();
        }
    }
}

fn notify(state: &mut AppState, id: WidgetId, change: Option<SelectionChange>) -> Option<Command> {
    let change = change?;
    state.record_change(id, change.clone());
    Some(Command::NotifySelection(id, change))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Page;
    use crate::domain::combobox::{ComboKey, ComboLayout};
    use ratatui::layout::Rect;

    fn combobox_page() -> AppState<'static> {
        let mut state = AppState::default();
        state.page = Page::Combobox;
        state
    }

    fn type_query(state: &mut AppState, id: WidgetId, text: &str) {
        for c in text.chars() {
            update(state, &Action::ComboInput(id, c));
        }
    }

    #[test]
    fn test_typing_filters_and_enter_selects() {
        let mut state = combobox_page();
        let id = WidgetId::CountryPicker;
        type_query(&mut state, id, "can");
        assert!(state.playground.country.is_open());
        assert_eq!(state.playground.country.filtered_len(), 1);

        update(&mut state, &Action::ComboKey(id, ComboKey::ArrowDown));
        let result = update(&mut state, &Action::ComboKey(id, ComboKey::Enter));
        if let UpdateResult::Handled(Some(Command::NotifySelection(source, change))) = result {
            assert_eq!(source, id);
            assert_eq!(change, SelectionChange::Single(Some("ca".to_string())));
        } else {
            panic!("Expected a selection notification, got {result:?}");
        }
        assert_eq!(state.playground.country.query(), "Canada");
        assert!(!state.playground.country.is_open());
        assert_eq!(state.last_change.as_ref().map(|c| c.source), Some(id));
    }

    #[test]
    fn test_tab_closes_and_moves_focus() {
        let mut state = combobox_page();
        let id = WidgetId::CountryPicker;
        update(&mut state, &Action::ComboKey(id, ComboKey::ArrowDown));
        assert!(state.playground.country.is_open());

        update(&mut state, &Action::ComboKey(id, ComboKey::Tab));
        assert!(!state.playground.country.is_open());
        assert_eq!(state.focused_widget(), Some(WidgetId::FrameworkPicker));
    }

    #[test]
    fn test_backspace_edits_query_then_removes_chip() {
        let mut state = combobox_page();
        let id = WidgetId::FrameworkPicker;
        type_query(&mut state, id, "re");
        update(&mut state, &Action::ComboSelectRow(id, 0));
        assert_eq!(
            state.playground.frameworks.selected(),
            ["axum".to_string(), "react".to_string()]
        );

        update(&mut state, &Action::ComboBackspace(id));
        assert_eq!(state.playground.frameworks.query(), "r");
        update(&mut state, &Action::ComboBackspace(id));
        assert_eq!(state.playground.frameworks.query(), "");

        let result = update(&mut state, &Action::ComboBackspace(id));
        assert!(matches!(
            result,
            UpdateResult::Handled(Some(Command::NotifySelection(_, SelectionChange::Multi(ref v))))
                if v == &vec!["axum".to_string()]
        ));
    }

    #[test]
    fn test_backspace_in_single_mode_never_clears_selection() {
        let mut state = combobox_page();
        let id = WidgetId::CountryPicker;
        update(&mut state, &Action::ComboBackspace(id));
        update(&mut state, &Action::ComboBackspace(id));
        assert!(state.last_change.is_none());
    }

    #[test]
    fn test_chip_removal_notifies_once() {
        let mut state = combobox_page();
        let id = WidgetId::FrameworkPicker;
        let first = update(&mut state, &Action::ComboRemove(id, "axum".to_string()));
        assert!(matches!(first, UpdateResult::Handled(Some(_))));
        let second = update(&mut state, &Action::ComboRemove(id, "axum".to_string()));
        assert!(matches!(second, UpdateResult::Handled(None)));
    }

    #[test]
    fn test_outside_click_closes_only_that_combobox() {
        let mut state = combobox_page();
        state.playground.country.open();
        state.playground.frameworks.open();
        state.playground.country.record_layout(ComboLayout {
            input: Rect::new(0, 0, 30, 3),
            list: Some(Rect::new(1, 3, 28, 4)),
            chips: Vec::new(),
        });
        state.playground.frameworks.record_layout(ComboLayout {
            input: Rect::new(40, 0, 30, 3),
            list: None,
            chips: Vec::new(),
        });

        // Inside the country list: the frameworks picker is the one outside
        update(&mut state, &Action::PointerDown(5, 4));
        assert!(state.playground.country.is_open());
        assert!(!state.playground.frameworks.is_open());
        assert_eq!(state.pointer_hub.active_count(), 1);

        update(&mut state, &Action::PointerDown(35, 20));
        assert!(!state.playground.country.is_open());
        assert_eq!(state.pointer_hub.active_count(), 0);
    }

    #[test]
    fn test_disabled_row_click_is_ignored() {
        let mut state = combobox_page();
        let id = WidgetId::FrameworkPicker;
        type_query(&mut state, id, "ember");
        let result = update(&mut state, &Action::ComboSelectRow(id, 0));
        assert!(matches!(result, UpdateResult::Handled(None)));
        assert!(!state.playground.frameworks.is_selected("ember"));
    }
}
