use crate::domain::radio::RadioGroup as RadioState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Widget},
};

pub struct RadioGroup<'a> {
    pub group: &'a RadioState,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for RadioGroup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let items: Vec<ListItem> = self
            .group
            .choices
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let selected = i == self.group.selected;
                let (glyph, glyph_style) = if selected {
                    (glyphs::RADIO_ON, theme.switch_on)
                } else {
                    (glyphs::RADIO_OFF, theme.dimmed)
                };
                let style = if choice.disabled {
                    theme.list_disabled
                } else if self.focused && i == self.group.cursor {
                    theme.highlight
                } else {
                    theme.list_item
                };
                ListItem::new(Line::from(vec![
                    Span::styled(glyph, glyph_style),
                    Span::raw(" "),
                    Span::raw(choice.label.as_str()),
                    Span::styled(format!("  {}", choice.hint), theme.dimmed),
                ]))
                .style(style)
            })
            .collect();

        Widget::render(List::new(items), area, buf);
    }
}
