use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Validation {
    Required,
    Invalid,
    Valid,
}

/// Single-line e-mail field. Validation is derived from the current text on demand.
#[derive(Debug, Clone, Default)]
pub struct InputState<'a> {
    pub text_area: AppTextArea<'a>,
    /// Only complain once the user has typed something or left the field.
    pub touched: bool,
}

impl InputState<'_> {
    pub fn value(&self) -> String {
        self.text_area.lines().join("")
    }

    #[must_use]
    pub fn validation(&self) -> Validation {
        let value = self.value();
        let value = value.trim();
        if value.is_empty() {
            return Validation::Required;
        }
        match value.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') =>
            {
                Validation::Valid
            }
            _ => Validation::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> InputState<'static> {
        let mut input = InputState::default();
        input.text_area.insert_str(text);
        input
    }

    #[test]
    fn test_validation() {
        assert_eq!(field("").validation(), Validation::Required);
        assert_eq!(field("   ").validation(), Validation::Required);
        assert_eq!(field("ada").validation(), Validation::Invalid);
        assert_eq!(field("ada@example").validation(), Validation::Invalid);
        assert_eq!(field("@example.com").validation(), Validation::Invalid);
        assert_eq!(field("ada@example.com").validation(), Validation::Valid);
    }

    #[test]
    fn test_clone_keeps_cursor() {
        let input = field("ada@example.com");
        let copy = input.text_area.clone();
        assert_eq!(copy.lines(), input.text_area.lines());
        assert_eq!(copy.cursor(), input.text_area.cursor());
    }
}
