use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, WidgetId},
};

/// Generic widget actions, applied to whichever demo has focus.
pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let Some(focused) = state.focused_widget() else {
        return UpdateResult::NotHandled;
    };
    let pg = &mut state.playground;

    match (action, focused) {
        (Action::WidgetNext, WidgetId::Notifications) => pg.notifications.next(),
        (Action::WidgetPrev, WidgetId::Notifications) => pg.notifications.prev(),
        (Action::WidgetActivate, WidgetId::Notifications) => pg.notifications.activate(),

        (Action::WidgetNext, WidgetId::Plan) => pg.plan.next(),
        (Action::WidgetPrev, WidgetId::Plan) => pg.plan.prev(),
        (Action::WidgetActivate, WidgetId::Plan) => {
            if pg.plan.activate() {
                let label = pg
                    .plan
                    .selected_choice()
                    .map(|c| c.label.clone())
                    .unwrap_or_default();
                tracing::debug!(plan = %label, "plan selected");
                state.status_message = Some(format!("Plan: {label}"));
            }
        }

        (Action::WidgetNext, WidgetId::Switches) => pg.switches.next(),
        (Action::WidgetPrev, WidgetId::Switches) => pg.switches.prev(),
        (Action::WidgetActivate, WidgetId::Switches) => {
            if let Some(on) = pg.switches.toggle_focused() {
                let label = pg.switches.switches[pg.switches.cursor].label.clone();
                let word = if on { "on" } else { "off" };
                state.status_message = Some(format!("{label} {word}"));
            }
        }

        (Action::WidgetNext, WidgetId::SettingsTabs) => pg.settings_tabs.next(),
        (Action::WidgetPrev, WidgetId::SettingsTabs) => pg.settings_tabs.prev(),

        (Action::WidgetNext | Action::WidgetIncrease, WidgetId::Upload) => pg.upload.increase(),
        (Action::WidgetPrev | Action::WidgetDecrease, WidgetId::Upload) => pg.upload.decrease(),
        (Action::WidgetActivate, WidgetId::Upload) => pg.upload.toggle_running(),
        (Action::WidgetReset, WidgetId::Upload) => pg.upload.reset(),

        (Action::WidgetNext, WidgetId::Alerts) => pg.alerts.next(),
        (Action::WidgetPrev, WidgetId::Alerts) => pg.alerts.prev(),
        (Action::WidgetActivate, WidgetId::Alerts) => pg.alerts.dismiss_focused(),
        (Action::WidgetReset, WidgetId::Alerts) => pg.alerts.restore_all(),

        (Action::TextAreaInput(key), WidgetId::Email) => {
            pg.email.text_area.input(*key);
            pg.email.touched = true;
        }

        _ => return UpdateResult::NotHandled,
    }
    UpdateResult::Handled(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Page, Validation};
    use crate::domain::checkbox::CheckState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn on_page(page: Page) -> AppState<'static> {
        let mut state = AppState::default();
        state.page = page;
        state
    }

    #[test]
    fn test_select_all_row() {
        let mut state = on_page(Page::Checkbox);
        assert_eq!(
            state.playground.notifications.parent_state(),
            CheckState::Indeterminate
        );
        update(&mut state, &Action::WidgetActivate);
        assert_eq!(
            state.playground.notifications.parent_state(),
            CheckState::Checked
        );
    }

    #[test]
    fn test_plan_selection_sets_status() {
        let mut state = on_page(Page::Radio);
        update(&mut state, &Action::WidgetNext);
        update(&mut state, &Action::WidgetActivate);
        assert_eq!(state.status_message.as_deref(), Some("Plan: Pro"));
    }

    #[test]
    fn test_switch_toggle() {
        let mut state = on_page(Page::Switch);
        update(&mut state, &Action::WidgetActivate);
        assert!(!state.playground.switches.switches[0].on);
        assert_eq!(state.status_message.as_deref(), Some("Wi-Fi off"));
    }

    #[test]
    fn test_upload_controls() {
        let mut state = on_page(Page::Progress);
        update(&mut state, &Action::WidgetIncrease);
        update(&mut state, &Action::WidgetNext);
        assert_eq!(state.playground.upload.value, 20);
        update(&mut state, &Action::WidgetActivate);
        assert!(state.playground.upload.running);
        update(&mut state, &Action::WidgetReset);
        assert_eq!(state.playground.upload.value, 0);
        assert!(!state.playground.upload.running);
    }

    #[test]
    fn test_email_typing() {
        let mut state = on_page(Page::TextInput);
        for c in "ada@example.com".chars() {
            update(
                &mut state,
                &Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
        assert!(state.playground.email.touched);
        assert_eq!(state.playground.email.validation(), Validation::Valid);
    }

    #[test]
    fn test_unfocused_actions_not_handled() {
        let mut state = on_page(Page::Overview);
        assert!(matches!(
            update(&mut state, &Action::WidgetActivate),
            UpdateResult::NotHandled
        ));

        let mut state = on_page(Page::Tabs);
        assert!(matches!(
            update(&mut state, &Action::WidgetActivate),
            UpdateResult::NotHandled
        ));
    }
}
