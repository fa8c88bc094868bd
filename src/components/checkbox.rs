use crate::domain::checkbox::{CheckGroup, CheckState};
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Widget},
};

pub struct CheckboxGroup<'a> {
    pub group: &'a CheckGroup,
    pub focused: bool,
    pub theme: &'a Theme,
}

fn glyph(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => glyphs::CHECKED,
        CheckState::Unchecked => glyphs::UNCHECKED,
        CheckState::Indeterminate => glyphs::INDETERMINATE,
    }
}

impl<'a> Widget for CheckboxGroup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let row = |index: usize, indent: &'static str, state: CheckState, label: &'a str| {
            let style = if self.focused && self.group.cursor == index {
                theme.highlight
            } else {
                theme.list_item
            };
            let checkbox_style = if state == CheckState::Unchecked {
                theme.dimmed
            } else {
                theme.switch_on
            };
            ListItem::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(glyph(state), checkbox_style),
                Span::raw(" "),
                Span::raw(label),
            ]))
            .style(style)
        };

        let mut items = vec![row(0, "", self.group.parent_state(), &self.group.label)];
        for (i, item) in self.group.items.iter().enumerate() {
            let state = if item.checked {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            };
            items.push(row(i + 1, "   ", state, &item.label));
        }

        Widget::render(List::new(items), area, buf);
    }
}
