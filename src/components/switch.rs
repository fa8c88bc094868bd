use crate::domain::switch::SwitchBank;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Widget},
};

pub struct Switches<'a> {
    pub bank: &'a SwitchBank,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for Switches<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let items: Vec<ListItem> = self
            .bank
            .switches
            .iter()
            .enumerate()
            .map(|(i, switch)| {
                let (track, track_style, state) = if switch.on {
                    (glyphs::SWITCH_ON, theme.switch_on, "on")
                } else {
                    (glyphs::SWITCH_OFF, theme.switch_off, "off")
                };
                let style = if switch.disabled {
                    theme.list_disabled
                } else if self.focused && i == self.bank.cursor {
                    theme.highlight
                } else {
                    theme.list_item
                };
                ListItem::new(Line::from(vec![
                    Span::styled(track, track_style),
                    Span::raw(" "),
                    Span::raw(format!("{:<18}", switch.label)),
                    Span::styled(state, theme.dimmed),
                ]))
                .style(style)
            })
            .collect();

        Widget::render(List::new(items), area, buf);
    }
}
