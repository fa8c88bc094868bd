use crate::app::command::Command;
use crate::app::state::{Page, WidgetId};
use crate::domain::combobox::ComboKey;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation ---
    NextPage,
    PrevPage,
    SelectPage(Page),
    FocusNext,
    FocusPrev,
    FocusWidget(WidgetId),

    // --- UI Mode Transitions ---
    ToggleHelp,
    CancelMode,

    // --- Combobox ---
    ComboKey(WidgetId, ComboKey),   // Arrow/Enter/Escape/Tab
    ComboInput(WidgetId, char),     // Append to the query
    ComboBackspace(WidgetId),       // Delete from the query (or the last chip)
    ComboToggle(WidgetId),          // Click on the input
    ComboSelectRow(WidgetId, usize), // Click on an option row (filtered index)
    ComboRemove(WidgetId, String),  // Click on a chip's close mark

    // --- Pointer ---
    PointerDown(u16, u16), // Any left click; drives outside-click listeners

    // --- Focused widget ---
    WidgetNext,
    WidgetPrev,
    WidgetActivate,
    WidgetIncrease,
    WidgetDecrease,
    WidgetReset,
    TextAreaInput(crossterm::event::KeyEvent),
}
