use crate::app::state::WidgetId;
use crate::domain::combobox::SelectionChange;

/// Side effects requested by the reducer and carried out by the loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    NotifySelection(WidgetId, SelectionChange),
}
