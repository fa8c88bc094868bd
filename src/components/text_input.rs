use crate::app::state::{InputState, Validation};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// E-mail field with its validation message underneath.
pub struct EmailField<'a, 'b> {
    pub input: &'a mut InputState<'b>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for EmailField<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(Span::styled("Work e-mail", theme.title)).render(chunks[0], buf);

        let validation = self.input.validation();
        let border = match (self.input.touched, validation) {
            (true, Validation::Required | Validation::Invalid) => theme.status_error,
            _ if self.focused => theme.border_focus,
            _ => theme.border,
        };

        let text_area = &mut self.input.text_area;
        text_area.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border.remove_modifier(Modifier::BOLD)),
        );
        text_area.set_placeholder_text("name@example.com");
        text_area.set_placeholder_style(theme.dimmed);
        text_area.set_cursor_line_style(theme.text);
        text_area.set_cursor_style(if self.focused {
            theme.text.add_modifier(Modifier::REVERSED)
        } else {
            theme.text
        });
        Widget::render(&*text_area, chunks[1], buf);

        let message = match (self.input.touched, validation) {
            (_, Validation::Valid) => Span::styled("Looks good", theme.switch_on),
            (false, _) => Span::styled("We never share your address.", theme.dimmed),
            (true, Validation::Required) => Span::styled("E-mail is required", theme.status_error),
            (true, Validation::Invalid) => {
                Span::styled("Enter a valid e-mail address", theme.status_error)
            }
        };
        Paragraph::new(Line::from(message)).render(chunks[2], buf);
    }
}
