use crate::app::state::WidgetId;
use crate::domain::combobox::SelectionChange;

/// Receives the full selection every time a combobox selection changes.
#[cfg_attr(test, mockall::automock)]
pub trait SelectionSink: Send + Sync {
    fn selection_changed(&self, source: WidgetId, change: &SelectionChange);
}

pub struct TracingSink;

impl SelectionSink for TracingSink {
    fn selection_changed(&self, source: WidgetId, change: &SelectionChange) {
        match change {
            SelectionChange::Single(value) => {
                tracing::info!(widget = source.label(), value = ?value, "selection changed");
            }
            SelectionChange::Multi(values) => {
                tracing::info!(
                    widget = source.label(),
                    count = values.len(),
                    values = ?values,
                    "selection changed"
                );
            }
        }
    }
}
