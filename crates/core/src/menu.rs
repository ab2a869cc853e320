//! Menu model - entries and selection for the non-playing states
//!
//! Layout and drawing belong to the renderer; this only tracks which entry is
//! highlighted and which state it leads to.

use crate::types::{Key, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: SessionState,
}

const fn entry(label: &'static str, target: SessionState) -> MenuEntry {
    MenuEntry { label, target }
}

const MAIN_ENTRIES: &[MenuEntry] = &[
    entry("PLAY", SessionState::Play),
    entry("EXIT", SessionState::Exit),
];

const PAUSE_ENTRIES: &[MenuEntry] = &[
    entry("CONTINUE", SessionState::Play),
    entry("MAIN MENU", SessionState::Menu),
    entry("EXIT", SessionState::Exit),
];

const GAME_OVER_ENTRIES: &[MenuEntry] = &[
    entry("MAIN MENU", SessionState::Menu),
    entry("EXIT", SessionState::Exit),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Main,
    Pause,
    Victory,
    Defeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    kind: MenuKind,
    selected: usize,
}

impl Menu {
    pub fn new(kind: MenuKind) -> Self {
        Self { kind, selected: 0 }
    }

    /// The menu shown in `state`, if that state has one
    pub fn for_state(state: SessionState) -> Option<Self> {
        let kind = match state {
            SessionState::Menu => MenuKind::Main,
            SessionState::Pause => MenuKind::Pause,
            SessionState::Victory => MenuKind::Victory,
            SessionState::Defeat => MenuKind::Defeat,
            SessionState::Play | SessionState::Exit => return None,
        };
        Some(Self::new(kind))
    }

    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            MenuKind::Main => "SNAKE",
            MenuKind::Pause => "PAUSED",
            MenuKind::Victory => "VICTORY",
            MenuKind::Defeat => "GAME OVER",
        }
    }

    pub fn entries(&self) -> &'static [MenuEntry] {
        match self.kind {
            MenuKind::Main => MAIN_ENTRIES,
            MenuKind::Pause => PAUSE_ENTRIES,
            MenuKind::Victory | MenuKind::Defeat => GAME_OVER_ENTRIES,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> MenuEntry {
        self.entries()[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.entries().len();
    }

    pub fn select_previous(&mut self) {
        let len = self.entries().len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Apply a key; returns the requested state when an entry is activated
    pub fn handle_key(&mut self, key: Key) -> Option<SessionState> {
        match key {
            Key::Up => self.select_previous(),
            Key::Down => self.select_next(),
            Key::Confirm => return Some(self.selected_entry().target),
            Key::Left | Key::Right | Key::Escape => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_and_exit_have_no_menu() {
        assert_eq!(Menu::for_state(SessionState::Play), None);
        assert_eq!(Menu::for_state(SessionState::Exit), None);
        assert_eq!(
            Menu::for_state(SessionState::Defeat).map(|m| m.kind()),
            Some(MenuKind::Defeat)
        );
    }

    #[test]
    fn test_selection_wraps() {
        let mut menu = Menu::new(MenuKind::Pause);
        assert_eq!(menu.selected_entry().label, "CONTINUE");

        menu.handle_key(Key::Up);
        assert_eq!(menu.selected_entry().label, "EXIT");

        menu.handle_key(Key::Down);
        menu.handle_key(Key::Down);
        assert_eq!(menu.selected_entry().label, "MAIN MENU");
    }

    #[test]
    fn test_confirm_returns_target() {
        let mut menu = Menu::new(MenuKind::Main);
        assert_eq!(menu.handle_key(Key::Confirm), Some(SessionState::Play));

        menu.handle_key(Key::Down);
        assert_eq!(menu.handle_key(Key::Confirm), Some(SessionState::Exit));
    }

    #[test]
    fn test_game_over_defaults_to_main_menu() {
        let mut menu = Menu::for_state(SessionState::Victory).unwrap();
        assert_eq!(menu.title(), "VICTORY");
        assert_eq!(menu.handle_key(Key::Confirm), Some(SessionState::Menu));
    }

    #[test]
    fn test_sideways_keys_are_ignored() {
        let mut menu = Menu::new(MenuKind::Main);
        assert_eq!(menu.handle_key(Key::Left), None);
        assert_eq!(menu.handle_key(Key::Escape), None);
        assert_eq!(menu.selected(), 0);
    }
}
