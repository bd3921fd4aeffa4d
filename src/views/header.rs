use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::geo::LocationResult;

const TITLE_WIDTH: u16 = 14;

/// Title on the left, location label and day/night marker on the right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let title_width = TITLE_WIDTH.min(area.width);
    let left = Rect {
        width: title_width,
        ..area
    };
    // One blank column is kept on the right edge.
    let right = Rect {
        x: area.x + title_width,
        width: area.width.saturating_sub(title_width + 1),
        ..area
    };

    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled("OTT Launcher", theme.title_style()),
    ]);
    frame.render_widget(Paragraph::new(title), left);

    let location_style = if app.location.as_ref().is_some_and(LocationResult::is_known) {
        theme.base_style()
    } else {
        theme.dim_style()
    };
    let location = Line::from(vec![
        Span::styled(app.location_label(), location_style),
        Span::styled(" · ", theme.dim_style()),
        Span::styled(theme.variant.label(), theme.accent_style()),
    ]);
    frame.render_widget(Paragraph::new(location).alignment(Alignment::Right), right);
}
