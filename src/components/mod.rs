pub mod alert;
pub mod badge;
pub mod checkbox;
pub mod combobox;
pub mod footer;
pub mod header;
pub mod modals;
pub mod overview;
pub mod progress;
pub mod radio;
pub mod sidebar;
pub mod switch;
pub mod tabs;
pub mod text_input;

use crate::theme::Theme;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

/// Rounded panel used by every demo. The border lights up while the demo has focus.
pub fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let (border, title_style) = if focused {
        (theme.border_focus, theme.header_active)
    } else {
        (theme.border, theme.header_item)
    };
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, title_style),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}
