use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.status_message = None;
            for (_, combo) in state.playground.comboboxes_mut() {
                combo.close();
            }
            UpdateResult::Handled(None)
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state.playground.upload.tick();
            UpdateResult::Handled(None)
        }
        Action::Resize(..) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
