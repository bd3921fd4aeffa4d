use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;

const HELP: &str = "←→↑↓ move  enter open  1-9 launch  q quit";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let line = match &app.status {
        Some(message) => Line::from(Span::styled(format!(" {message}"), theme.error_style())),
        None => {
            let selected = app.selected().map(|s| s.url.as_str()).unwrap_or_default();
            Line::from(vec![
                Span::styled(format!(" {selected}"), theme.dim_style()),
                Span::raw("  "),
                Span::styled(HELP, theme.dim_style()),
            ])
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}
