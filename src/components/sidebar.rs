use crate::app::state::Page;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Widget},
};

/// Page index, one row per page. Mouse hit testing relies on that.
pub struct Sidebar<'a> {
    pub active: Page,
    pub theme: &'a Theme,
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = super::panel("PAGES", false, self.theme);

        let items: Vec<ListItem> = Page::all()
            .iter()
            .map(|page| {
                if *page == self.active {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{} ", glyphs::POINTER), self.theme.sidebar_active),
                        Span::styled(page.title(), self.theme.sidebar_active),
                    ]))
                    .style(self.theme.sidebar_active)
                } else {
                    ListItem::new(Line::from(Span::styled(
                        format!("  {}", page.title()),
                        self.theme.sidebar_item,
                    )))
                }
            })
            .collect();

        Widget::render(List::new(items).block(block), area, buf);
    }
}
