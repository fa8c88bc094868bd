use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            (" PgDn / ]", "Next page"),
            (" PgUp / [", "Previous page"),
            (" Click", "Jump to a page in the sidebar"),
        ],
    ),
    (
        "Focus",
        &[
            (" Tab", "Focus next widget"),
            (" Shift+Tab", "Focus previous widget"),
            (" Esc", "Close popups / leave field"),
        ],
    ),
    (
        "Widgets",
        &[
            (" j / k / \u{2193} / \u{2191}", "Move within the widget"),
            (" Enter / Space", "Toggle, choose or dismiss"),
            (" + / -", "Step progress"),
            (" r", "Reset progress / restore alerts"),
        ],
    ),
    (
        "Combobox",
        &[
            (" type", "Filter options"),
            (" \u{2193} / \u{2191}", "Open / move through options"),
            (" Enter", "Select the highlighted option"),
            (" Backspace", "Edit query or drop last chip"),
            (" Click \u{00d7}", "Remove a chip"),
        ],
    ),
    (
        "General",
        &[
            (" F1 / ?", "Show this help"),
            (" q / Ctrl+C", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let mut rows = Vec::new();
        for (i, (category, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        let table = Table::new(
            rows,
            [Constraint::Percentage(35), Constraint::Percentage(65)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
