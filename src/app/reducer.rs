use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: [Feature; 4] = [
    features::ui::update,
    features::navigation::update,
    features::combobox::update,
    features::widgets::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppMode, Page, WidgetId};
    use crate::domain::combobox::{ComboKey, SelectionChange};

    #[test]
    fn test_help_toggle_and_cancel() {
        let mut state = AppState::default();
        update(&mut state, Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);
        update(&mut state, Action::CancelMode);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_tick_advances_running_upload() {
        let mut state = AppState::default();
        state.playground.upload.running = true;
        update(&mut state, Action::Tick);
        update(&mut state, Action::Tick);
        assert_eq!(state.frame_count, 2);
        assert_eq!(state.playground.upload.value, 4);
    }

    #[test]
    fn test_multi_select_round_trip_through_reducer() {
        let mut state = AppState::default();
        update(&mut state, Action::SelectPage(Page::Combobox));
        update(&mut state, Action::FocusNext);
        let id = WidgetId::FrameworkPicker;

        update(&mut state, Action::ComboKey(id, ComboKey::ArrowDown));
        update(&mut state, Action::ComboKey(id, ComboKey::ArrowDown));
        let command = update(&mut state, Action::ComboKey(id, ComboKey::Enter));
        assert_eq!(
            command,
            Some(Command::NotifySelection(
                id,
                SelectionChange::Multi(vec!["axum".to_string(), "react".to_string()])
            ))
        );
        // Multi-select keeps the list open for further picks
        assert!(state.playground.frameworks.is_open());

        let command = update(&mut state, Action::ComboKey(id, ComboKey::Enter));
        assert_eq!(
            command,
            Some(Command::NotifySelection(
                id,
                SelectionChange::Multi(vec!["axum".to_string()])
            ))
        );
    }

    #[test]
    fn test_pointer_down_falls_through() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::PointerDown(3, 3)), None);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
