//! Key mapping for the quiz screen.
//!
//! Terminal key events are turned into UI-agnostic [`QuizInput`] values, which
//! the controller consumes.

use crate::game::Lifeline;
use crate::questions::OptionKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lifeline hotkeys, in the order they are listed on screen.
pub const LIFELINE_KEYS: [(Lifeline, char); 3] = [
    (Lifeline::EliminateTwo, 'F'),
    (Lifeline::AudienceVote, 'V'),
    (Lifeline::PhoneHint, 'P'),
];

/// Input actions for the quiz (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    Choose(OptionKey),
    CursorUp,
    CursorDown,
    Submit,
    Lifeline(Lifeline),
    Quit,
    /// Yes / continue in a dialog.
    Confirm,
    /// No / close in a dialog.
    Decline,
    Other,
}

/// Map a key press. `dialog_open` selects the dialog key set (Y/N/Enter/Esc)
/// over the question key set.
pub fn map_key(key: KeyEvent, dialog_open: bool) -> QuizInput {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return if dialog_open {
            QuizInput::Decline
        } else {
            QuizInput::Quit
        };
    }

    if dialog_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => QuizInput::Confirm,
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => QuizInput::Decline,
            _ => QuizInput::Other,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => QuizInput::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => QuizInput::CursorDown,
        KeyCode::Enter => QuizInput::Submit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => QuizInput::Quit,
        KeyCode::Char(c) => LIFELINE_KEYS
            .iter()
            .find(|(_, hotkey)| hotkey.eq_ignore_ascii_case(&c))
            .map(|(lifeline, _)| QuizInput::Lifeline(*lifeline))
            .or_else(|| OptionKey::from_char(c).map(QuizInput::Choose))
            .unwrap_or(QuizInput::Other),
        _ => QuizInput::Other,
    }
}
