//! Drawing the popup surface.
//!
//! The surface is a dimmed full-screen backdrop with a centered dialog:
//! title in the border, then the input region, the body text and the
//! confirm button. While a fade is running the dialog is drawn dimmed.
//!
//! Every draw records a `SurfaceLayout` on the engine so mouse dispatch can
//! hit-test the dialog, the fields and the button.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use typist_config::Theme;

use crate::popup::engine::{BoundSurface, PopupEngine, SurfaceLayout};
use crate::popup::form::FormField;

/// Preferred dialog width in columns.
pub const DIALOG_WIDTH: u16 = 52;

/// Rows taken by one visible input field (bordered).
const FIELD_HEIGHT: u16 = 3;

/// Render the popup surface if it is not hidden.
pub fn render_popup(f: &mut Frame, engine: &mut PopupEngine, theme: &Theme) {
    if engine.state().is_hidden() {
        return;
    }
    let Some(surface) = engine.surface() else {
        return;
    };

    let area = f.area();
    let fading = engine.state().is_fading();
    let dim = if fading {
        Modifier::DIM
    } else {
        Modifier::empty()
    };

    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(theme.backdrop)
                .add_modifier(Modifier::DIM),
        ),
        area,
    );

    let width = DIALOG_WIDTH.min(area.width.saturating_sub(2)).max(10);
    let inner_width = width.saturating_sub(4);
    let text_height = wrapped_height(surface.text(), inner_width);
    let fields_height: u16 = surface
        .form()
        .fields()
        .iter()
        .map(|field| if field.is_hidden() { 0 } else { FIELD_HEIGHT })
        .sum();
    let button_height = if surface.has_confirm() { 2 } else { 0 };
    let height = (2 + fields_height + text_height + button_height)
        .max(3)
        .min(area.height);

    let dialog = centered_fixed(width, height, area);
    f.render_widget(Clear, dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            format!(" {} ", surface.title()),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
        .style(
            Style::default()
                .fg(theme.border)
                .bg(theme.background)
                .add_modifier(dim),
        );
    let inner = block.inner(dialog).inner(Margin::new(1, 0));
    f.render_widget(block, dialog);

    let [fields_area, text_area, button_area] = Layout::vertical([
        Constraint::Length(fields_height),
        Constraint::Length(text_height),
        Constraint::Length(button_height),
    ])
    .areas(inner);

    let field_rects = field_rects(surface, fields_area);
    let focused = surface.form().focused();
    let mut cursor = None;

    for (index, (field, rect)) in surface.form().fields().iter().zip(&field_rects).enumerate() {
        if field.is_hidden() || rect.is_empty() {
            continue;
        }
        let is_focused = focused == Some(index);
        if let Some(pos) = render_field(f, field, *rect, is_focused, theme, dim) {
            cursor = Some(pos);
        }
    }

    if text_height > 0 {
        let text = Paragraph::new(surface.text())
            .style(Style::default().fg(theme.text).add_modifier(dim))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(text, text_area);
    }

    let button = if surface.has_confirm() && button_area.height > 0 {
        let label = format!("[ {} ]", surface.button_text());
        let label_width = (label.chars().count() as u16).min(button_area.width);
        let row = Rect::new(
            button_area.x,
            button_area.y + button_area.height - 1,
            button_area.width,
            1,
        );
        let rect = centered_fixed(label_width, 1, row);
        f.render_widget(
            Paragraph::new(Line::from(label)).style(
                Style::default()
                    .fg(theme.highlight_fg)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(dim),
            ),
            rect,
        );
        Some(rect)
    } else {
        None
    };

    if let Some(pos) = cursor
        && !fading
    {
        f.set_cursor_position(pos);
    }

    engine.set_layout(SurfaceLayout {
        dialog,
        fields: field_rects,
        button,
    });
}

/// Draw one field and return the cursor position when it is focused.
fn render_field(
    f: &mut Frame,
    field: &FormField,
    rect: Rect,
    focused: bool,
    theme: &Theme,
    dim: Modifier,
) -> Option<Position> {
    let mut title = field.placeholder().to_string();
    if field.is_required() {
        title.push_str(" *");
    }
    let border_color = if focused { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color).add_modifier(dim));

    let inner_width = rect.width.saturating_sub(2) as usize;
    let cursor = field.cursor();
    let scroll = cursor.saturating_sub(inner_width.saturating_sub(1));

    let value = Paragraph::new(field.display_value())
        .style(Style::default().fg(theme.text))
        .block(block)
        .scroll((0, scroll as u16));
    f.render_widget(value, rect);

    focused.then(|| Position::new(rect.x + 1 + (cursor - scroll) as u16, rect.y + 1))
}

/// Field rectangles in form order. Hidden fields get an empty rect.
fn field_rects(surface: &BoundSurface, area: Rect) -> Vec<Rect> {
    let mut y = area.y;
    surface
        .form()
        .fields()
        .iter()
        .map(|field| {
            if field.is_hidden() || y + FIELD_HEIGHT > area.bottom() {
                return Rect::default();
            }
            let rect = Rect::new(area.x, y, area.width, FIELD_HEIGHT);
            y += FIELD_HEIGHT;
            rect
        })
        .collect()
}

/// Rows needed to draw `text` word-wrapped at `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    if text.is_empty() || width == 0 {
        return 0;
    }
    let width = width as usize;
    let mut rows = 0u16;
    for line in text.lines() {
        rows += 1;
        let mut used = 0usize;
        for word in line.split_whitespace() {
            let len = word.chars().count();
            let needed = if used == 0 { len } else { used + 1 + len };
            if needed <= width {
                used = needed;
            } else if len > width {
                // Long words are broken across rows.
                rows += ((used + len).div_ceil(width) - 1) as u16;
                used = (used + len) % width;
            } else {
                rows += 1;
                used = len;
            }
        }
    }
    rows
}

/// A `width` x `height` rectangle centered in `area`.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("", 10), 0);
        assert_eq!(wrapped_height("abc", 10), 1);
        assert_eq!(wrapped_height("abcd efgh ijk", 10), 2);
        assert_eq!(wrapped_height("a\nb", 10), 2);
    }

    #[test]
    fn test_centered_fixed() {
        let rect = centered_fixed(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(rect, Rect::new(10, 3, 10, 4));
    }
}
