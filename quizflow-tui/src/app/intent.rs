//! Keybindings
//!
//! Maps a key press to what it means on the quiz screen. Store actions are
//! only produced for controls the view model currently enables, so a
//! disabled button is inert exactly like a disabled widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libquizflow::Action;

use super::session::{Session, UiIntent};
use crate::binder::ViewModel;

/// What a key press should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Dispatch to the store
    Dispatch(Action),

    /// Feed the key to the answer editor
    Edit(KeyEvent),

    /// Change screen-local state
    Ui(UiIntent),
}

/// Resolve a key press; `None` means the key does nothing right now
pub fn map_key(key: KeyEvent, view: &ViewModel, session: &Session) -> Option<Intent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings (work everywhere)
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            return Some(Intent::Ui(UiIntent::Quit));
        }
        KeyCode::F(1) => return Some(Intent::Ui(UiIntent::ToggleHelp)),
        _ => {}
    }

    // Help overlay swallows everything but its close key
    if session.help_visible {
        return match key.code {
            KeyCode::Esc => Some(Intent::Ui(UiIntent::HideHelp)),
            _ => None,
        };
    }

    // Completion dialog: only "Ok"
    if view.show_completion {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Intent::Ui(UiIntent::DismissDialog)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('n') if ctrl => enabled(view.next_enabled, Action::NextQuestion),
        KeyCode::PageDown => enabled(view.next_enabled, Action::NextQuestion),
        KeyCode::Char('p') if ctrl => enabled(view.previous_enabled, Action::PreviousQuestion),
        KeyCode::PageUp => enabled(view.previous_enabled, Action::PreviousQuestion),
        KeyCode::Char('s') if ctrl => enabled(view.submit_enabled, Action::Submit),
        _ if view.answer_editable => Some(Intent::Edit(key)),
        _ => None,
    }
}

fn enabled(flag: bool, action: Action) -> Option<Intent> {
    flag.then_some(Intent::Dispatch(action))
}
