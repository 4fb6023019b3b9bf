//! Answer editor with tui-textarea integration
//!
//! The textarea is the only stateful widget on screen. It is reloaded from
//! the view model whenever the current question changes and otherwise owns
//! the text while the user types; every modification is reported back so the
//! loop can dispatch the full text to the store.

use crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::binder::ViewModel;

const PLACEHOLDER: &str = "Type your answer... (Ctrl+N next, Ctrl+P previous, F1 help)";

pub struct AnswerEditor {
    textarea: TextArea<'static>,
    question_id: Option<String>,
    editable: bool,
}

impl AnswerEditor {
    pub fn new() -> Self {
        Self {
            textarea: blank(),
            question_id: None,
            editable: true,
        }
    }

    /// Align the editor with the view model: reload the text when the
    /// question changes and restyle for the current editability
    pub fn sync(&mut self, view: &ViewModel, colors: bool) {
        if self.question_id.as_deref() != Some(view.question_id.as_str()) {
            self.textarea = load(&view.answer_text);
            self.question_id = Some(view.question_id.clone());
        }

        self.editable = view.answer_editable;
        self.textarea.set_block(answer_block(self.editable, colors));
        self.textarea.set_cursor_style(if self.editable {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
    }

    /// Feed a key to the textarea. Returns true if the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if !self.editable {
            return false;
        }
        self.textarea.input(key)
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn question_id(&self) -> Option<&str> {
        self.question_id.as_deref()
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }
}

impl Default for AnswerEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn blank() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea
}

fn load(text: &str) -> TextArea<'static> {
    if text.is_empty() {
        return blank();
    }

    let mut textarea = TextArea::new(text.split('\n').map(str::to_string).collect());
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    textarea
}

fn answer_block(editable: bool, colors: bool) -> Block<'static> {
    let style = match (editable, colors) {
        (true, true) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::DarkGray),
        (true, false) => Style::default(),
        (false, false) => Style::default().add_modifier(Modifier::DIM),
    };

    Block::default()
        .title(" Answer ")
        .borders(Borders::ALL)
        .border_style(style)
}
