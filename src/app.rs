use std::sync::Arc;

use tracing::{debug, warn};

use crate::geo::LocationResult;
use crate::launcher::Launcher;
use crate::shortcuts::Shortcut;
use crate::theme::{Theme, ThemeVariant};
use crate::views::grid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectNext,
    SelectPrev,
    SelectUp,
    SelectDown,
    OpenSelected,
    Open(usize),
    LocationResolved(LocationResult),
    Quit,
}

pub struct App {
    pub shortcuts: Vec<Shortcut>,
    pub selected_index: usize,
    pub theme: Theme,
    /// `None` until the background lookup reports back.
    pub location: Option<LocationResult>,
    /// Transient message shown in the status bar, cleared on the next action.
    pub status: Option<String>,
    pub should_quit: bool,
    launcher: Arc<dyn Launcher>,
}

impl App {
    pub fn new(
        shortcuts: Vec<Shortcut>,
        variant: ThemeVariant,
        launcher: Arc<dyn Launcher>,
    ) -> Self {
        Self {
            shortcuts,
            selected_index: 0,
            theme: Theme::for_variant(variant),
            location: None,
            status: None,
            should_quit: false,
            launcher,
        }
    }

    pub fn selected(&self) -> Option<&Shortcut> {
        self.shortcuts.get(self.selected_index)
    }

    pub fn location_label(&self) -> String {
        self.location
            .as_ref()
            .map_or_else(|| "Locating…".to_string(), ToString::to_string)
    }

    pub fn update(&mut self, msg: Message) {
        if !matches!(msg, Message::LocationResolved(_)) {
            self.status = None;
        }
        match msg {
            Message::SelectNext => self.move_selection(1),
            Message::SelectPrev => self.move_selection(-1),
            Message::SelectDown => self.move_selection(self.columns()),
            Message::SelectUp => self.move_selection(-self.columns()),
            Message::OpenSelected => self.open(self.selected_index),
            Message::Open(index) => self.open(index),
            Message::LocationResolved(location) => {
                debug!(%location, "location label updated");
                self.location = Some(location);
            }
            Message::Quit => self.should_quit = true,
        }
    }

    #[allow(clippy::cast_possible_wrap)] // tile counts are tiny
    fn columns(&self) -> isize {
        grid::columns(self.shortcuts.len()) as isize
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn move_selection(&mut self, delta: isize) {
        let target = self.selected_index as isize + delta;
        if target >= 0 && (target as usize) < self.shortcuts.len() {
            self.selected_index = target as usize;
        }
    }

    fn open(&mut self, index: usize) {
        let Some(shortcut) = self.shortcuts.get(index) else {
            return;
        };
        self.selected_index = index;
        if let Err(e) = self.launcher.open(&shortcut.url) {
            warn!(error = %e, name = %shortcut.name, "failed to open shortcut");
            self.status = Some(format!("Could not open {}", shortcut.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::testing::RecordingLauncher;
    use crate::shortcuts::{default_entries, from_entries};

    fn app_with(launcher: &Arc<RecordingLauncher>) -> App {
        let shortcuts = from_entries(&default_entries()).unwrap();
        App::new(shortcuts, ThemeVariant::Light, Arc::<RecordingLauncher>::clone(launcher))
    }

    #[test]
    fn each_tile_opens_its_own_url() {
        let launcher = Arc::new(RecordingLauncher::default());
        let mut app = app_with(&launcher);
        for i in 0..4 {
            app.update(Message::Open(i));
        }
        assert_eq!(
            launcher.opened(),
            [
                "https://www.netflix.com/",
                "https://www.hotstar.com/",
                "https://www.zee5.com/",
                "https://www.primevideo.com/",
            ]
        );
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let launcher = Arc::new(RecordingLauncher::default());
        let mut app = app_with(&launcher);
        app.update(Message::Open(9));
        assert!(launcher.opened().is_empty());
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn grid_navigation() {
        let launcher = Arc::new(RecordingLauncher::default());
        let mut app = app_with(&launcher);
        app.update(Message::SelectNext);
        assert_eq!(app.selected_index, 1);
        app.update(Message::SelectDown);
        assert_eq!(app.selected_index, 3);
        app.update(Message::SelectNext);
        assert_eq!(app.selected_index, 3);
        app.update(Message::SelectUp);
        assert_eq!(app.selected_index, 1);
        app.update(Message::SelectPrev);
        app.update(Message::SelectPrev);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn open_selected_follows_selection() {
        let launcher = Arc::new(RecordingLauncher::default());
        let mut app = app_with(&launcher);
        app.update(Message::SelectDown);
        app.update(Message::OpenSelected);
        assert_eq!(launcher.opened(), ["https://www.zee5.com/"]);
    }

    #[test]
    fn failed_launch_sets_status() {
        let launcher = Arc::new(RecordingLauncher::failing());
        let mut app = app_with(&launcher);
        app.update(Message::Open(0));
        assert_eq!(app.status.as_deref(), Some("Could not open Netflix"));
        assert!(!app.should_quit);

        app.update(Message::SelectNext);
        assert!(app.status.is_none());
    }

    #[test]
    fn location_label_before_and_after() {
        let launcher = Arc::new(RecordingLauncher::default());
        let mut app = app_with(&launcher);
        assert_eq!(app.location_label(), "Locating…");
        app.update(Message::LocationResolved(LocationResult::Unknown));
        assert_eq!(app.location_label(), "Unknown");
    }

    #[test]
    fn quit() {
        let launcher = Arc::new(RecordingLauncher::default());
        let mut app = app_with(&launcher);
        app.update(Message::Quit);
        assert!(app.should_quit);
    }
}
