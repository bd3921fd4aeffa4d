use crossterm::event::{KeyEvent, MouseEvent};

use crate::geo::LocationResult;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize,
    /// The background location lookup finished.
    Location(LocationResult),
}
