pub mod grid;
pub mod header;
pub mod status_bar;


use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    widgets::Block,
};

use crate::app::App;

struct Areas {
    header: Rect,
    grid: Rect,
    status: Rect,
}

fn split(area: Rect) -> Areas {
    let [header, _, grid, status] = Layout::vertical([
        Constraint::Length(1), // Title and location
        Constraint::Length(1), // Spacer
        Constraint::Min(0),    // Tiles
        Constraint::Length(1), // Status bar
    ])
    .areas(area);
    Areas {
        header,
        grid,
        status,
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let areas = split(area);
    header::render(frame, app, areas.header);
    grid::render(frame, app, areas.grid);
    status_bar::render(frame, app, areas.status);
}

/// Tile rectangles for a full-screen render of `count` shortcuts.
pub fn grid_tiles(area: Rect, count: usize) -> Vec<Rect> {
    grid::tile_areas(split(area).grid, count)
}

/// Index of the tile under a terminal cell, if any.
pub fn tile_at(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    grid_tiles(area, count)
        .iter()
        .position(|tile| tile.contains(position))
}
