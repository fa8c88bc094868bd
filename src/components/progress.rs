use crate::domain::progress::Progress;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

pub struct ProgressBar<'a> {
    pub progress: &'a Progress,
    pub theme: &'a Theme,
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        Gauge::default()
            .gauge_style(theme.gauge)
            .ratio(self.progress.ratio())
            .label(format!("{}%", self.progress.value))
            .render(chunks[0], buf);

        let (state, style) = if self.progress.is_complete() {
            ("complete", theme.severity_success)
        } else if self.progress.running {
            ("uploading", theme.severity_info)
        } else {
            ("paused", theme.dimmed)
        };
        Paragraph::new(Line::from(vec![
            Span::raw("report.pdf  "),
            Span::styled(format!(" {state} "), style),
        ]))
        .render(chunks[1], buf);
    }
}
