mod groups;
mod types;

use crate::app::state::{AppState, ChangeEntry};
use crate::domain::combobox::SelectionChange;
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

/// "country = fr" / "frameworks = [axum, leptos]" with the time it happened.
pub fn describe_change(entry: &ChangeEntry) -> String {
    let value = match &entry.change {
        SelectionChange::Single(Some(value)) => value.clone(),
        SelectionChange::Single(None) => "none".to_string(),
        SelectionChange::Multi(values) => format!("[{}]", values.join(", ")),
    };
    format!(
        "{} {} = {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.source.label(),
        value
    )
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        // Most recent selection change
        if let Some(entry) = &state.last_change {
            spans.push(Span::styled(
                format!(" {} ", describe_change(entry)),
                theme.header_item,
            ));
            spans.push(Span::raw("  "));
        }

        let available_width = area.width.saturating_sub(4) as usize; // Margin
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            let Some(first_item) = group.items.first() else {
                continue;
            };

            // Check if we can fit at least the first item of the group
            let first_item_width = first_item.key.chars().count() + first_item.desc.len() + 4;
            if current_width + first_item_width > available_width {
                break;
            }

            // Add group name as a subtle label if there's plenty of space
            if area.width > 100 {
                let group_label =
                    Span::styled(format!("{}: ", group.name), theme.footer_group_name);
                if current_width + group_label.width() + first_item_width < available_width {
                    current_width += group_label.width();
                    spans.push(group_label);
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);

                let item_width = key_str.chars().count() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                let (key_style, val_style) = if item.highlighted {
                    (
                        theme.header_active,
                        theme
                            .header_active
                            .add_modifier(ratatui::style::Modifier::DIM),
                    )
                } else {
                    (theme.footer_segment_key, theme.footer_segment_val)
                };

                spans.push(Span::styled(key_str, key_style));
                spans.push(Span::styled(desc_str, val_style));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::WidgetId;
    use chrono::{Local, TimeZone};

    fn entry(change: SelectionChange) -> ChangeEntry {
        ChangeEntry {
            source: WidgetId::FrameworkPicker,
            change,
            timestamp: Local
                .with_ymd_and_hms(2024, 5, 1, 9, 30, 5)
                .single()
                .unwrap_or_else(Local::now),
        }
    }

    #[test]
    fn test_describe_change() {
        let multi = entry(SelectionChange::Multi(vec![
            "axum".to_string(),
            "leptos".to_string(),
        ]));
        assert_eq!(
            describe_change(&multi),
            "09:30:05 frameworks = [axum, leptos]"
        );

        let cleared = entry(SelectionChange::Single(None));
        assert!(describe_change(&cleared).ends_with("frameworks = none"));
    }

    #[test]
    fn test_footer_shows_status() {
        let mut state = AppState::default();
        state.status_message = Some("Wi-Fi on".to_string());
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Footer {
            state: &state,
            theme: &theme,
        }
        .render(area, &mut buf);

        let line: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(line.contains("Wi-Fi on"));
    }
}
