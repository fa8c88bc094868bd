use ratatui::style::{Modifier, Style};

pub mod glyphs;
pub mod nord;
pub mod palette;

use crate::domain::alert::Severity;
pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub title: Style,
    pub text: Style,
    pub dimmed: Style,

    pub header_logo: Style,
    pub header_page: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub header: Style,

    pub sidebar_item: Style,
    pub sidebar_active: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub severity_info: Style,
    pub severity_success: Style,
    pub severity_warning: Style,
    pub severity_error: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub list_disabled: Style,
    pub highlight: Style,
    pub chip: Style,
    pub switch_on: Style,
    pub switch_off: Style,
    pub gauge: Style,
    pub avatar: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            text: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_page: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            sidebar_item: Style::default().fg(p.subtext0),
            sidebar_active: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer_group_name: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            severity_info: Style::default().fg(p.blue).bg(dim_color(p.blue, 0.25)),
            severity_success: Style::default().fg(p.green).bg(dim_color(p.green, 0.25)),
            severity_warning: Style::default().fg(p.yellow).bg(dim_color(p.yellow, 0.25)),
            severity_error: Style::default().fg(p.red).bg(dim_color(p.red, 0.25)),

            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            list_disabled: Style::default()
                .fg(p.overlay0)
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
            highlight: Style::default().bg(p.surface0).add_modifier(Modifier::BOLD),
            chip: Style::default().bg(p.surface1).fg(p.text),
            switch_on: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            switch_off: Style::default().fg(p.overlay1),
            gauge: Style::default().fg(p.teal).bg(p.surface0),
            avatar: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
        }
    }

    #[must_use]
    pub fn severity(&self, severity: Severity) -> Style {
        match severity {
            Severity::Info => self.severity_info,
            Severity::Success => self.severity_success,
            Severity::Warning => self.severity_warning,
            Severity::Error => self.severity_error,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&nord::NORD)
    }
}
