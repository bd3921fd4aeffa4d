use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::shortcuts::Shortcut;
use crate::theme::Theme;

pub const TILE_HEIGHT: u16 = 5;

/// Number of grid columns for a given tile count.
pub const fn columns(count: usize) -> usize {
    match count {
        0 | 1 => 1,
        2..=4 => 2,
        5..=9 => 3,
        _ => 4,
    }
}

/// Lay tiles out left to right, top to bottom. Tiles that would start below
/// `area` are dropped and the last visible row is clipped.
#[allow(clippy::cast_possible_truncation)] // tile counts are tiny
pub fn tile_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.is_empty() {
        return Vec::new();
    }
    let cols = columns(count) as u16;
    let tile_width = area.width / cols;
    (0..count)
        .map(|i| {
            let col = (i % cols as usize) as u16;
            let row = (i / cols as usize) as u16;
            Rect::new(
                area.x + col * tile_width,
                area.y.saturating_add(row.saturating_mul(TILE_HEIGHT)),
                tile_width,
                TILE_HEIGHT,
            )
            .intersection(area)
        })
        .take_while(|tile| !tile.is_empty())
        .collect()
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let tiles = tile_areas(area, app.shortcuts.len());
    for (i, (shortcut, tile)) in app.shortcuts.iter().zip(tiles).enumerate() {
        let selected = i == app.selected_index;
        render_tile(frame, &app.theme, shortcut, i + 1, selected, tile);
    }
}

fn render_tile(
    frame: &mut Frame,
    theme: &Theme,
    shortcut: &Shortcut,
    number: usize,
    selected: bool,
    area: Rect,
) {
    // Borders plus one column of padding on each side.
    let inner_width = usize::from(area.width.saturating_sub(4));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(theme.tile_border_style(selected))
        .title(Span::styled(format!(" {number} "), theme.dim_style()))
        .padding(Padding::horizontal(1))
        .style(theme.tile_style(selected));

    let lines = vec![
        Line::from(Span::styled(
            truncate(&format!("[{}]", shortcut.badge()), inner_width),
            theme.accent_style(),
        )),
        Line::from(Span::styled(
            truncate(&shortcut.name, inner_width),
            theme.title_style(),
        )),
        Line::from(Span::styled(
            truncate(shortcut.url.host_str().unwrap_or_default(), inner_width),
            theme.dim_style(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        // Leave one column for the ellipsis.
        if width + char_width + 1 > max_width {
            break;
        }
        out.push(c);
        width += char_width;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_tiles_form_two_rows() {
        let tiles = tile_areas(Rect::new(0, 2, 60, 17), 4);
        assert_eq!(
            tiles,
            [
                Rect::new(0, 2, 30, 5),
                Rect::new(30, 2, 30, 5),
                Rect::new(0, 7, 30, 5),
                Rect::new(30, 7, 30, 5),
            ]
        );
    }

    #[test]
    fn tiles_beyond_area_are_dropped() {
        let tiles = tile_areas(Rect::new(0, 0, 60, 5), 4);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[1], Rect::new(30, 0, 30, 5));
    }

    #[test]
    fn last_row_is_clipped() {
        let tiles = tile_areas(Rect::new(0, 0, 60, 7), 4);
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[3], Rect::new(30, 5, 30, 2));
    }

    #[test]
    fn empty_inputs() {
        assert!(tile_areas(Rect::new(0, 0, 60, 20), 0).is_empty());
        assert!(tile_areas(Rect::new(0, 0, 0, 0), 4).is_empty());
    }

    #[test]
    fn column_counts() {
        assert_eq!(columns(1), 1);
        assert_eq!(columns(4), 2);
        assert_eq!(columns(6), 3);
        assert_eq!(columns(12), 4);
    }

    #[test]
    fn truncate_long_names() {
        assert_eq!(truncate("Netflix", 10), "Netflix");
        assert_eq!(truncate("Disney+ Hotstar", 8), "Disney+…");
    }

    #[test]
    fn truncate_respects_double_width_chars() {
        let out = truncate("東京都渋谷区", 4);
        assert_eq!(out, "東…");
        assert!(out.width() <= 4);
        assert_eq!(truncate("東京都渋谷区", 5), "東京…");
    }
}
