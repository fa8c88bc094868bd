use crate::domain::tabs::TabSet;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Tabs, Widget, Wrap},
};

pub struct TabPanel<'a> {
    pub tabs: &'a TabSet,
    pub focused: bool,
    pub theme: &'a Theme,
}

fn panel_body(title: &str) -> &'static str {
    match title {
        "Account" => "Change your display name and the e-mail address shown on your profile.",
        "Password" => "Pick a new password. You will be signed out of other sessions.",
        _ => "Choose which events send you a message and how often.",
    }
}

impl Widget for TabPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let titles: Vec<Line> = self
            .tabs
            .titles
            .iter()
            .map(|t| Line::from(t.as_str()))
            .collect();
        let highlight = if self.focused {
            theme.list_selected
        } else {
            theme.header_page
        };
        Tabs::new(titles)
            .select(self.tabs.active)
            .style(theme.sidebar_item)
            .highlight_style(highlight)
            .divider("│")
            .render(chunks[0], buf);

        let body = self
            .tabs
            .titles
            .get(self.tabs.active)
            .map_or("", |t| panel_body(t));
        Paragraph::new(body)
            .style(theme.text)
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);
    }
}
