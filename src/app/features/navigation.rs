use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, Page, WidgetId},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::NextPage => {
            set_page(state, state.page.next());
            UpdateResult::Handled(None)
        }
        Action::PrevPage => {
            set_page(state, state.page.prev());
            UpdateResult::Handled(None)
        }
        Action::SelectPage(page) => {
            set_page(state, *page);
            UpdateResult::Handled(None)
        }
        Action::FocusNext => {
            move_focus(state, 1);
            UpdateResult::Handled(None)
        }
        Action::FocusPrev => {
            move_focus(state, -1);
            UpdateResult::Handled(None)
        }
        Action::FocusWidget(id) => {
            focus_widget(state, *id);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

pub fn set_page(state: &mut AppState, page: Page) {
    if state.page == page {
        return;
    }
    blur(state);
    for (_, combo) in state.playground.comboboxes_mut() {
        combo.close();
    }
    tracing::debug!(from = state.page.title(), to = page.title(), "page changed");
    state.page = page;
    state.focus = 0;
    state.status_message = None;
}

pub fn move_focus(state: &mut AppState, delta: isize) {
    let count = state.page.widgets().len();
    if count == 0 {
        return;
    }
    blur(state);
    state.focus = (state.focus as isize + delta).rem_euclid(count as isize) as usize;
}

pub fn focus_widget(state: &mut AppState, id: WidgetId) {
    if state.focused_widget() == Some(id) {
        return;
    }
    if let Some(index) = state.page.widgets().iter().position(|w| *w == id) {
        blur(state);
        state.focus = index;
    }
}

/// Leave the focused widget: popups close and the text field becomes "touched".
fn blur(state: &mut AppState) {
    match state.focused_widget() {
        Some(id) if id.is_combobox() => {
            if let Some(combo) = state.playground.combobox_mut(id) {
                combo.close();
            }
        }
        Some(WidgetId::Email) => state.playground.email.touched = true,
        _ => {}
    }
}
