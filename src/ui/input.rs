//! Keyboard input handling with vim-style navigation support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Day cursor
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Month navigation
    PreviousMonth,
    NextMonth,
    Today,

    // Clipboard
    Copy,

    // Misc
    Select,
    Back,
    Help,
    Quit,
}

/// Keyboard bindings configuration
pub struct KeyBindings {
    pub vim_navigation: bool,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            vim_navigation: true,
        }
    }
}

/// Input handler for processing keyboard events
pub struct InputHandler {
    bindings: KeyBindings,
}

impl InputHandler {
    /// Create a new input handler
    pub fn new(vim_navigation: bool) -> Self {
        Self {
            bindings: KeyBindings { vim_navigation },
        }
    }

    /// Handle a key event and return the corresponding action
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Day cursor - arrow keys always work
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Left => Some(Action::MoveLeft),
            KeyCode::Right => Some(Action::MoveRight),

            // Vim-style day cursor (j/k/h/l)
            KeyCode::Char('j') if self.bindings.vim_navigation => Some(Action::MoveDown),
            KeyCode::Char('k') if self.bindings.vim_navigation => Some(Action::MoveUp),
            KeyCode::Char('h') if self.bindings.vim_navigation => Some(Action::MoveLeft),
            KeyCode::Char('l') if self.bindings.vim_navigation => Some(Action::MoveRight),

            // Month navigation
            KeyCode::PageUp | KeyCode::Char('p') => Some(Action::PreviousMonth),
            KeyCode::PageDown | KeyCode::Char('n') => Some(Action::NextMonth),
            KeyCode::Char('t') | KeyCode::Home => Some(Action::Today),

            // Clipboard ('y' is the vim yank)
            KeyCode::Char('c') => Some(Action::Copy),
            KeyCode::Char('y') if self.bindings.vim_navigation => Some(Action::Copy),

            // Selection confirm (the cursor already is the selection)
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),

            // Back/Quit
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Quit),

            // Misc
            KeyCode::Char('?') => Some(Action::Help),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_vim_navigation() {
        let handler = InputHandler::new(true);
        assert_eq!(handler.handle_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(handler.handle_key(key(KeyCode::Char('k'))), Some(Action::MoveUp));
        assert_eq!(handler.handle_key(key(KeyCode::Char('h'))), Some(Action::MoveLeft));
        assert_eq!(handler.handle_key(key(KeyCode::Char('l'))), Some(Action::MoveRight));
    }

    #[test]
    fn test_vim_navigation_disabled() {
        let handler = InputHandler::new(false);
        assert_eq!(handler.handle_key(key(KeyCode::Char('j'))), None);
        assert_eq!(handler.handle_key(key(KeyCode::Char('y'))), None);
        // Arrow keys still work
        assert_eq!(handler.handle_key(key(KeyCode::Up)), Some(Action::MoveUp));
    }

    #[test]
    fn test_month_navigation_keys() {
        let handler = InputHandler::new(true);
        assert_eq!(handler.handle_key(key(KeyCode::Char('p'))), Some(Action::PreviousMonth));
        assert_eq!(handler.handle_key(key(KeyCode::Char('n'))), Some(Action::NextMonth));
        assert_eq!(handler.handle_key(key(KeyCode::PageUp)), Some(Action::PreviousMonth));
        assert_eq!(handler.handle_key(key(KeyCode::PageDown)), Some(Action::NextMonth));
        assert_eq!(handler.handle_key(key(KeyCode::Char('t'))), Some(Action::Today));
    }

    #[test]
    fn test_copy_keys() {
        let handler = InputHandler::new(true);
        assert_eq!(handler.handle_key(key(KeyCode::Char('c'))), Some(Action::Copy));
        assert_eq!(handler.handle_key(key(KeyCode::Char('y'))), Some(Action::Copy));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new(true);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), Some(Action::Back));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key(ctrl_c), Some(Action::Quit));
    }
}
