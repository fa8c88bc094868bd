use crate::domain::combobox::{ComboLayout, Combobox, SelectionMode};
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, StatefulWidget, Widget},
};

/// Label, input box with chips and a dropdown list below it.
///
/// Rendering records the input, list and chip rectangles on the state so that clicks can be
/// hit tested and the outside-click listener knows the widget's bounds.
pub struct ComboboxView<'a> {
    pub label: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl StatefulWidget for ComboboxView<'_> {
    type State = Combobox;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Combobox) {
        if area.height < 4 || area.width < 8 {
            state.record_layout(ComboLayout::default());
            return;
        }
        let theme = self.theme;

        buf.set_stringn(area.x, area.y, self.label, area.width as usize, theme.title);

        let input_area = Rect::new(area.x, area.y + 1, area.width, 3);
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme.border_focus
            } else {
                theme.border
            });
        let inner = input_block.inner(input_area);
        input_block.render(input_area, buf);

        // Two columns on the right are reserved for the caret
        let text_right = inner.right().saturating_sub(2);
        let mut x = inner.x;
        let mut chips = Vec::new();

        if state.mode() == SelectionMode::Multi {
            for option in state.selected_options() {
                let chip = Span::styled(
                    format!(" {} {} ", option.label, glyphs::CHIP_CLOSE),
                    theme.chip,
                );
                let width = chip.width() as u16;
                if x + width > text_right {
                    break;
                }
                buf.set_span(x, inner.y, &chip, width);
                chips.push((option.value.clone(), Rect::new(x, inner.y, width, 1)));
                x += width + 1;
            }
        }

        let (text, is_placeholder) = if !state.query().is_empty() {
            (Span::styled(state.query(), theme.text), false)
        } else if let (SelectionMode::Single, Some(option)) =
            (state.mode(), state.selected_options().next())
        {
            (Span::styled(option.label.as_str(), theme.text), false)
        } else if chips.is_empty() {
            (Span::styled(self.placeholder, theme.dimmed), true)
        } else {
            (Span::raw(""), false)
        };
        // The placeholder gives way to the cursor while focused
        if x < text_right && !(self.focused && is_placeholder) {
            x = buf.set_span(x, inner.y, &text, text_right - x).0;
        }
        if self.focused && x < text_right {
            buf.set_string(x, inner.y, " ", theme.text.add_modifier(Modifier::REVERSED));
        }

        let caret = if state.is_open() {
            glyphs::CARET_UP
        } else {
            glyphs::CARET_DOWN
        };
        buf.set_string(text_right + 1, inner.y, caret, theme.dimmed);

        let list = if state.is_open() {
            render_list(state, area, input_area.bottom(), buf, theme)
        } else {
            None
        };

        state.record_layout(ComboLayout {
            input: input_area,
            list,
            chips,
        });
    }
}

/// Draws the dropdown and returns the rectangle holding its option rows.
fn render_list(
    state: &mut Combobox,
    area: Rect,
    top: u16,
    buf: &mut Buffer,
    theme: &Theme,
) -> Option<Rect> {
    let rows = state.wanted_rows().max(1) as u16;
    let height = (rows + 2).min(area.bottom().saturating_sub(top));
    if height < 3 {
        return None;
    }

    let list_area = Rect::new(area.x, top, area.width, height);
    Clear.render(list_area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focus)
        .title_bottom(Line::from(Span::styled(
            format!(" {}/{} ", state.filtered_len(), state.options().len()),
            theme.dimmed,
        )));
    let inner = block.inner(list_area);
    block.render(list_area, buf);

    // The terminal may have clipped the list below `max_visible`
    state.fit_viewport(usize::from(inner.height));
    let range = state.visible_range();

    if state.filtered_len() == 0 {
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            "No matches",
            inner.width.saturating_sub(1) as usize,
            theme.dimmed,
        );
        return Some(inner);
    }

    for (y, index) in (inner.y..inner.bottom()).zip(range) {
        let Some(option) = state.filtered_option(index) else {
            break;
        };
        let is_focused = state.focused_index() == Some(index);
        let style = if option.disabled {
            theme.list_disabled
        } else if is_focused {
            theme.list_selected
        } else {
            theme.list_item
        };

        let mut spans = vec![
            Span::raw(if is_focused { glyphs::POINTER } else { " " }),
            Span::raw(if state.is_selected(&option.value) {
                glyphs::TICK
            } else {
                " "
            }),
            Span::raw(" "),
        ];
        if let Some(marker) = &option.marker {
            spans.push(Span::raw(format!("{marker} ")));
        }
        spans.push(Span::raw(option.label.as_str()));
        if let Some(description) = &option.description {
            spans.push(Span::styled(
                format!("  {description}"),
                style.add_modifier(Modifier::DIM),
            ));
        }
        if let Some(category) = &option.category {
            spans.push(Span::styled(
                format!("  {category}"),
                style.add_modifier(Modifier::ITALIC | Modifier::DIM),
            ));
        }

        let row = Rect::new(inner.x, y, inner.width, 1);
        buf.set_style(row, style);
        buf.set_line(row.x, row.y, &Line::from(spans).style(style), row.width);
    }

    Some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;
    use crate::domain::pointer::PointerHub;
    use ratatui::layout::Position;

    fn render(combo: &mut Combobox, focused: bool) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 50, 14);
        let mut buf = Buffer::empty(area);
        ComboboxView {
            label: "Frameworks",
            placeholder: "Pick some",
            focused,
            theme: &theme,
        }
        .render(area, &mut buf, combo);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_closed_render_records_input_and_chips() {
        let hub = PointerHub::new();
        let mut combo = Combobox::new(catalog::frameworks(), SelectionMode::Multi, hub)
            .with_selected(["axum"]);
        let buf = render(&mut combo, false);

        assert_eq!(combo.layout().input, Rect::new(0, 1, 50, 3));
        assert_eq!(combo.layout().list, None);
        assert!(row_text(&buf, 2).contains("Axum ×"));

        let (value, rect) = &combo.layout().chips[0];
        assert_eq!(value, "axum");
        assert_eq!(
            combo.chip_at(Position::new(rect.x + 1, rect.y)),
            Some("axum")
        );
    }

    #[test]
    fn test_open_list_rows_are_hit_testable() {
        let hub = PointerHub::new();
        let mut combo =
            Combobox::new(catalog::countries(), SelectionMode::Single, hub.clone())
                .with_max_visible(4);
        combo.open();
        let buf = render(&mut combo, true);

        let list = combo.layout().list.unwrap();
        assert_eq!(list.height, 4);
        assert!(row_text(&buf, list.y).contains("United States"));
        assert_eq!(combo.row_at(Position::new(list.x + 2, list.y + 1)), Some(1));

        // Bounds cover input and list, everything else is outside
        assert!(hub.outside(Position::new(2, list.y)).is_empty());
        assert_eq!(hub.outside(Position::new(2, 13)).len(), 1);
    }

    #[test]
    fn test_short_area_still_draws_focused_row() {
        let hub = PointerHub::new();
        let mut combo = Combobox::new(catalog::countries(), SelectionMode::Single, hub)
            .with_max_visible(6);
        combo.open();
        for _ in 0..5 {
            combo.handle_key(crate::domain::combobox::ComboKey::ArrowDown);
        }
        assert_eq!(combo.focused_index(), Some(4));

        // Label, input and a list with room for two rows
        let theme = Theme::default();
        let area = Rect::new(0, 0, 50, 8);
        let mut buf = Buffer::empty(area);
        ComboboxView {
            label: "Country",
            placeholder: "",
            focused: true,
            theme: &theme,
        }
        .render(area, &mut buf, &mut combo);

        let list = combo.layout().list.unwrap();
        assert_eq!(list.height, 2);
        assert_eq!(combo.visible_range(), 3..5);
        assert_eq!(combo.row_at(Position::new(list.x + 2, list.y + 1)), Some(4));
        assert!(row_text(&buf, list.y + 1).contains("United Kingdom"));
        assert!(row_text(&buf, list.y + 1).starts_with(&format!("│{}", glyphs::POINTER)));
    }

    #[test]
    fn test_no_matches_state() {
        let hub = PointerHub::new();
        let mut combo = Combobox::new(catalog::countries(), SelectionMode::Single, hub);
        combo.set_query("zzz");
        let buf = render(&mut combo, true);

        let list = combo.layout().list.unwrap();
        assert!(row_text(&buf, list.y).contains("No matches"));
        assert_eq!(combo.row_at(Position::new(list.x + 1, list.y)), None);
    }

    #[test]
    fn test_tiny_area_clears_layout() {
        let hub = PointerHub::new();
        let mut combo = Combobox::new(catalog::countries(), SelectionMode::Single, hub);
        combo.open();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        ComboboxView {
            label: "Country",
            placeholder: "",
            focused: false,
            theme: &theme,
        }
        .render(area, &mut buf, &mut combo);
        assert_eq!(combo.layout(), &ComboLayout::default());
    }
}
