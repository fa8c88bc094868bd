use crate::app::state::Page;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub page: Page,
    pub focused: Option<&'static str>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let page_bg = self.theme.header_page.bg.unwrap_or(Color::Reset);
        let item_bg = self.theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let position = format!(
            " {}/{} {} ",
            self.page.index() + 1,
            Page::all().len(),
            self.page.title()
        );

        let mut spans = vec![
            Span::styled(format!(" {} SWATCH ", glyphs::LOGO), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(page_bg)),
            Span::styled(position, self.theme.header_page),
        ];

        match self.focused {
            Some(widget) => {
                spans.push(Span::styled(
                    glyphs::SEP_RIGHT,
                    Style::default().fg(page_bg).bg(item_bg),
                ));
                spans.push(Span::styled(
                    format!(" focus: {widget} "),
                    self.theme.header_item,
                ));
                spans.push(Span::styled(
                    glyphs::SEP_RIGHT,
                    Style::default().fg(item_bg).bg(base_bg),
                ));
            }
            None => spans.push(Span::styled(
                glyphs::SEP_RIGHT,
                Style::default().fg(page_bg).bg(base_bg),
            )),
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
