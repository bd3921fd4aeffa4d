use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{App, Message};
use crate::views;

pub fn handle_key(key: KeyEvent, app: &App) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Message::SelectNext),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(Message::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::SelectDown),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::SelectUp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::OpenSelected),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            (index < app.shortcuts.len()).then_some(Message::Open(index))
        }
        _ => None,
    }
}

/// Left-click on a tile opens it. `area` is the full terminal area.
pub fn handle_mouse(mouse: MouseEvent, app: &App, area: Rect) -> Option<Message> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    views::tile_at(area, app.shortcuts.len(), mouse.column, mouse.row).map(Message::Open)
}
