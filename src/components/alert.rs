use crate::domain::alert::AlertStack;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const ALERT_HEIGHT: u16 = 2;

pub struct Alerts<'a> {
    pub stack: &'a AlertStack,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for Alerts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        if self.stack.visible_count() == 0 {
            Paragraph::new(Line::from(vec![
                Span::styled("All alerts dismissed. Press ", theme.dimmed),
                Span::styled(" r ", theme.footer_segment_key),
                Span::styled(" to restore them.", theme.dimmed),
            ]))
            .render(area, buf);
            return;
        }

        let mut y = area.y;
        for (i, alert) in self.stack.visible().enumerate() {
            if y + ALERT_HEIGHT > area.bottom() {
                break;
            }
            let style = theme.severity(alert.severity);
            let bar = if self.focused && i == self.stack.cursor {
                "▌"
            } else {
                "│"
            };

            let row = Rect::new(area.x, y, area.width, ALERT_HEIGHT);
            buf.set_style(row, style);
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(bar, style),
                    Span::styled(
                        format!(" {} ", alert.severity.label()),
                        style.add_modifier(Modifier::REVERSED | Modifier::BOLD),
                    ),
                    Span::styled(format!(" {}", alert.title), style.add_modifier(Modifier::BOLD)),
                ]),
                Line::from(vec![
                    Span::styled(bar, style),
                    Span::styled(format!(" {}", alert.message), style),
                ]),
            ])
            .render(row, buf);
            y += ALERT_HEIGHT + 1;
        }
    }
}
