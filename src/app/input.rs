//! Key to action mapping

use crossterm::event::{KeyCode, KeyModifiers};

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Top,
    Bottom,
    ScrollUp,
    ScrollDown,

    // Selection
    Select,
    Back,
    Dashboard,
    NextModule,

    // Panels
    ToggleFocus,
    ToggleSidebar,

    // Progress
    CompleteModule,
    SubmitHomework,
    EditDraft,
    ResetCourse,

    // Modes
    Help,
    CommandMode,
    Quit,
}

/// Keys that work regardless of vim mode
fn common_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Down => Some(Action::Down),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Home => Some(Action::Top),
        KeyCode::End => Some(Action::Bottom),
        KeyCode::PageDown => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::Left | KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        KeyCode::Enter | KeyCode::Right => Some(Action::Select),
        KeyCode::Tab => Some(Action::ToggleFocus),
        KeyCode::Char('H') => Some(Action::Dashboard),
        KeyCode::Char('n') => Some(Action::NextModule),
        KeyCode::Char('c') => Some(Action::CompleteModule),
        KeyCode::Char('s') => Some(Action::SubmitHomework),
        KeyCode::Char('i') => Some(Action::EditDraft),
        KeyCode::Char('R') => Some(Action::ResetCourse),
        KeyCode::Char('[') => Some(Action::ToggleSidebar),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char(':') => Some(Action::CommandMode),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Vim-style key mapping, falling back to the common keys
pub fn vim_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Char('h') => Some(Action::Back),
        KeyCode::Char('l') => Some(Action::Select),
        KeyCode::Char('g') => Some(Action::Top),
        KeyCode::Char('G') => Some(Action::Bottom),
        _ => common_key_to_action(key),
    }
}

/// Map a key press to an action. Ctrl chords scroll; `vim` enables hjkl.
pub fn key_to_action(key: KeyCode, modifiers: KeyModifiers, vim: bool) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key {
            KeyCode::Char('d') | KeyCode::Char('f') => Some(Action::ScrollDown),
            KeyCode::Char('u') | KeyCode::Char('b') => Some(Action::ScrollUp),
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    if vim { vim_key_to_action(key) } else { common_key_to_action(key) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(vim_key_to_action(KeyCode::Char('j')), Some(Action::Down));
    }

    #[test]
    fn vim_k_maps_to_up() {
        assert_eq!(vim_key_to_action(KeyCode::Char('k')), Some(Action::Up));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(vim_key_to_action(KeyCode::Char('x')), None);
    }

    #[test]
    fn hjkl_needs_vim_mode() {
        assert_eq!(key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, false), None);
        assert_eq!(key_to_action(KeyCode::Char('h'), KeyModifiers::NONE, true), Some(Action::Back));
        assert_eq!(key_to_action(KeyCode::Down, KeyModifiers::NONE, false), Some(Action::Down));
    }

    #[test]
    fn course_actions() {
        let map = |c| key_to_action(KeyCode::Char(c), KeyModifiers::NONE, true);
        assert_eq!(map('c'), Some(Action::CompleteModule));
        assert_eq!(map('n'), Some(Action::NextModule));
        assert_eq!(map('s'), Some(Action::SubmitHomework));
        assert_eq!(map('R'), Some(Action::ResetCourse));
        assert_eq!(map('H'), Some(Action::Dashboard));
    }

    #[test]
    fn ctrl_chords() {
        assert_eq!(
            key_to_action(KeyCode::Char('d'), KeyModifiers::CONTROL, true),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('u'), KeyModifiers::CONTROL, false),
            Some(Action::ScrollUp)
        );
        assert_eq!(key_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL, true), Some(Action::Quit));
    }

    #[test]
    fn bracket_toggles_sidebar() {
        assert_eq!(vim_key_to_action(KeyCode::Char('[')), Some(Action::ToggleSidebar));
    }
}
