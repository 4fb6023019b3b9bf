//! Screen-local state
//!
//! Overlay and lifecycle flags that belong to the terminal front-end rather
//! than to the quiz: they never go through the store.

/// UI state transitions that do not touch the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIntent {
    ToggleHelp,
    HideHelp,
    /// Close the completion dialog; there is nothing left to do afterwards
    DismissDialog,
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub help_visible: bool,
    pub dialog_dismissed: bool,
    pub should_quit: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, intent: UiIntent) -> Self {
        match intent {
            UiIntent::ToggleHelp => Session {
                help_visible: !self.help_visible,
                ..self
            },
            UiIntent::HideHelp => Session {
                help_visible: false,
                ..self
            },
            UiIntent::DismissDialog => Session {
                dialog_dismissed: true,
                should_quit: true,
                ..self
            },
            UiIntent::Quit => Session {
                should_quit: true,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_toggles() {
        let session = Session::new().apply(UiIntent::ToggleHelp);
        assert!(session.help_visible);

        let session = session.apply(UiIntent::ToggleHelp);
        assert!(!session.help_visible);
    }

    #[test]
    fn test_dismissing_dialog_quits() {
        let session = Session::new().apply(UiIntent::DismissDialog);
        assert!(session.dialog_dismissed);
        assert!(session.should_quit);
    }

    #[test]
    fn test_hide_help_keeps_other_flags() {
        let session = Session {
            help_visible: true,
            ..Session::new()
        };
        let session = session.apply(UiIntent::HideHelp);
        assert_eq!(session, Session::new());
    }
}
