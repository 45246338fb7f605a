//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pagebar_core::PageIntent;

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,

    // UI toggles
    ToggleHelp,
    ToggleTheme,

    // Other actions
    SaveSettings,
    Cancel,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,
            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Navigation - vim style
            (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::PreviousPage,
            (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::NextPage,

            // Navigation - arrow keys
            (KeyCode::Left, _) => KeyAction::PreviousPage,
            (KeyCode::Right, _) => KeyAction::NextPage,
            (KeyCode::PageUp, _) => KeyAction::PreviousPage,
            (KeyCode::PageDown, _) => KeyAction::NextPage,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::FirstPage,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::LastPage,
            (KeyCode::Char('G'), KeyModifiers::NONE) => KeyAction::LastPage,
            (KeyCode::Home, _) => KeyAction::FirstPage,
            (KeyCode::End, _) => KeyAction::LastPage,

            // UI toggles
            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => KeyAction::SaveSettings,

            _ => KeyAction::None,
        }
    }

    /// Page intent for navigation actions.
    pub fn intent(self) -> Option<PageIntent> {
        match self {
            KeyAction::PreviousPage => Some(PageIntent::Previous),
            KeyAction::NextPage => Some(PageIntent::Next),
            KeyAction::FirstPage => Some(PageIntent::First),
            KeyAction::LastPage => Some(PageIntent::Last),
            _ => None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Pages",
            bindings: vec![
                KeyBinding { keys: "h/l ←/→", description: "Previous/next page" },
                KeyBinding { keys: "PgUp/PgDn", description: "Previous/next page" },
                KeyBinding { keys: "g/G", description: "First/last page" },
                KeyBinding { keys: "Home/End", description: "First/last page" },
                KeyBinding { keys: "Click", description: "Jump to page" },
            ],
        },
        HelpSection {
            title: "Display",
            bindings: vec![
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "Ctrl-s", description: "Save settings" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Left, KeyModifiers::NONE)),
            KeyAction::PreviousPage
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('l'), KeyModifiers::NONE)),
            KeyAction::NextPage
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            KeyAction::LastPage
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Home, KeyModifiers::NONE)),
            KeyAction::FirstPage
        );
    }

    #[test]
    fn test_application_keys() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            KeyAction::Quit
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::ForceQuit
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)),
            KeyAction::None
        );
    }

    #[test]
    fn test_intent_mapping() {
        assert_eq!(KeyAction::PreviousPage.intent(), Some(PageIntent::Previous));
        assert_eq!(KeyAction::LastPage.intent(), Some(PageIntent::Last));
        assert_eq!(KeyAction::ToggleTheme.intent(), None);
    }
}
