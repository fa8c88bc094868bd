use crate::app::state::Page;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct Overview<'a> {
    pub theme: &'a Theme,
}

impl Widget for Overview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let mut lines = vec![
            Line::from(Span::styled("Welcome to the component playground.", theme.title)),
            Line::from(""),
        ];
        for page in Page::all().iter().skip(1) {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<18}", page.title()), theme.footer_segment_key),
                Span::raw(" "),
                Span::styled(page.summary(), theme.text),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("PgUp/PgDn", theme.footer_segment_key),
            Span::styled(" switch pages   ", theme.dimmed),
            Span::styled("Tab", theme.footer_segment_key),
            Span::styled(" move focus   ", theme.dimmed),
            Span::styled("F1", theme.footer_segment_key),
            Span::styled(" help", theme.dimmed),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
