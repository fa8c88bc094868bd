use crate::app::{
    action::Action,
    state::{AppMode, AppState, Page, WidgetId},
    ui,
};
use crate::domain::combobox::ComboKey;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => {
            if app_state.mode == AppMode::Help {
                return None;
            }
            let pos = Position::new(mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    map_click(pos, app_state, terminal_size)
                }
                MouseEventKind::ScrollDown => scroll(app_state, ComboKey::ArrowDown),
                MouseEventKind::ScrollUp => scroll(app_state, ComboKey::ArrowUp),
                _ => None,
            }
        }
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if app_state.mode == AppMode::Help {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') | KeyCode::F(1) => Some(Action::ToggleHelp),
            _ => app_state.keymap.get_action(key, true),
        };
    }

    let focused = app_state.focused_widget();
    let captures_text = focused.is_some_and(|id| id.captures_text());
    if let Some(action) = app_state.keymap.get_action(key, captures_text) {
        return Some(action);
    }

    match focused {
        Some(id) if id.is_combobox() => map_combobox_key(id, key),
        Some(WidgetId::Email) => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Tab => Some(Action::FocusNext),
            // Single-line field
            KeyCode::Enter => None,
            _ => Some(Action::TextAreaInput(key)),
        },
        _ => None,
    }
}

fn map_combobox_key(id: WidgetId, key: KeyEvent) -> Option<Action> {
    let combo_key = |k| Some(Action::ComboKey(id, k));
    match key.code {
        KeyCode::Down => combo_key(ComboKey::ArrowDown),
        KeyCode::Up => combo_key(ComboKey::ArrowUp),
        KeyCode::Enter => combo_key(ComboKey::Enter),
        KeyCode::Esc => combo_key(ComboKey::Escape),
        KeyCode::Tab => combo_key(ComboKey::Tab),
        KeyCode::Backspace => Some(Action::ComboBackspace(id)),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::ComboInput(id, c))
        }
        _ => None,
    }
}

fn map_click(pos: Position, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area);

    if let Some(page) = page_at(layout.sidebar, pos) {
        return Some(Action::SelectPage(page));
    }

    for &id in app_state.page.widgets() {
        let Some(combo) = app_state.playground.combobox(id) else {
            continue;
        };
        if let Some(value) = combo.chip_at(pos) {
            return Some(Action::ComboRemove(id, value.to_string()));
        }
        if let Some(row) = combo.row_at(pos) {
            return Some(Action::ComboSelectRow(id, row));
        }
        if combo.layout().input.contains(pos) {
            return Some(Action::ComboToggle(id));
        }
    }

    if layout.content.contains(pos) {
        // Clicking a single-widget page focuses that widget
        if let [only] = app_state.page.widgets() {
            return Some(Action::FocusWidget(*only));
        }
    }
    None
}

/// Sidebar entries sit one per row inside the border.
fn page_at(sidebar: Rect, pos: Position) -> Option<Page> {
    if sidebar.width < 2 || sidebar.height < 2 {
        return None;
    }
    let inner = Rect::new(
        sidebar.x + 1,
        sidebar.y + 1,
        sidebar.width - 2,
        sidebar.height - 2,
    );
    if !inner.contains(pos) {
        return None;
    }
    Page::all().get(usize::from(pos.y - inner.y)).copied()
}

fn scroll(app_state: &AppState<'_>, key: ComboKey) -> Option<Action> {
    let id = app_state.focused_widget()?;
    match app_state.playground.combobox(id) {
        Some(combo) if combo.is_open() => Some(Action::ComboKey(id, key)),
        Some(_) => None,
        None if key == ComboKey::ArrowDown => Some(Action::WidgetNext),
        None => Some(Action::WidgetPrev),
    }
}
