//! Quiz application loop state
//!
//! `QuizApp` owns the store and everything bound to it. The binary drives it
//! with real terminal events; tests drive it with scripted ones against a
//! `TestBackend`.

use ratatui::{backend::Backend, Terminal};

use libquizflow::{Action, AppState, Store};

use super::event::TuiEvent;
use super::intent::{map_key, Intent};
use super::session::Session;
use crate::binder::{ViewBinder, ViewModel};
use crate::ui::{self, answer::AnswerEditor, Theme};

pub struct QuizApp {
    store: Store,
    binder: ViewBinder,
    editor: AnswerEditor,
    session: Session,
    theme: Theme,
}

impl QuizApp {
    pub fn new(mut store: Store, theme: Theme) -> Self {
        let binder = ViewBinder::attach(&mut store);
        let mut editor = AnswerEditor::new();
        editor.sync(binder.view(), theme.colors);

        Self {
            store,
            binder,
            editor,
            session: Session::new(),
            theme,
        }
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        terminal.draw(|frame| {
            ui::render(
                frame,
                self.binder.view(),
                &self.session,
                &self.editor,
                self.theme,
            )
        })?;
        Ok(())
    }

    pub fn handle_event(&mut self, event: TuiEvent) {
        let TuiEvent::Key(key) = event else {
            return;
        };

        match map_key(key, self.binder.view(), &self.session) {
            Some(Intent::Edit(key)) => {
                if self.editor.input(key) {
                    let id = self.binder.view().question_id.clone();
                    self.store.dispatch(Action::answer(id, self.editor.text()));
                }
            }
            Some(Intent::Dispatch(action)) => self.store.dispatch(action),
            Some(Intent::Ui(intent)) => {
                self.session = std::mem::take(&mut self.session).apply(intent);
            }
            None => {}
        }

        self.binder.refresh();
        self.editor.sync(self.binder.view(), self.theme.colors);
    }

    pub fn should_quit(&self) -> bool {
        self.session.should_quit
    }

    pub fn view(&self) -> &ViewModel {
        self.binder.view()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn editor(&self) -> &AnswerEditor {
        &self.editor
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Detach from the store and return the final state
    pub fn finish(self) -> AppState {
        let Self {
            mut store, binder, ..
        } = self;
        binder.detach(&mut store)
    }
}
