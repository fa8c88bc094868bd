use crate::domain::alert::Severity;
use crate::domain::avatar::initials;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const PEOPLE: [&str; 4] = ["Ada Lovelace", "Grace Hopper", "Linus", "Margaret Heafey Hamilton"];

/// Static gallery of badge variants and initials avatars.
pub struct BadgeGallery<'a> {
    pub theme: &'a Theme,
}

impl Widget for BadgeGallery<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let mut badges = vec![Span::styled(" Neutral ", theme.chip), Span::raw(" ")];
        for severity in [
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Error,
        ] {
            badges.push(Span::styled(
                format!(" {} ", severity.label()),
                theme.severity(severity),
            ));
            badges.push(Span::raw(" "));
        }

        let outlined: Vec<Span> = ["beta", "new", "deprecated"]
            .into_iter()
            .flat_map(|tag| {
                [
                    Span::styled(format!("[{tag}]"), theme.dimmed.add_modifier(Modifier::BOLD)),
                    Span::raw(" "),
                ]
            })
            .collect();

        let mut lines = vec![
            Line::from(Span::styled("Badges", theme.title)),
            Line::from(badges),
            Line::from(outlined),
            Line::from(""),
            Line::from(Span::styled("Avatars", theme.title)),
        ];
        for name in PEOPLE {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:^3}", initials(name)), theme.avatar),
                Span::raw(" "),
                Span::styled(name, theme.text),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
