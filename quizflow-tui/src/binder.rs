//! View binding
//!
//! `ViewModel` is the pure mapping from a state snapshot to what the screen
//! shows: labels, the answer text and which controls are enabled.
//! `ViewBinder` subscribes to the store through a channel and keeps the
//! latest snapshot and its view model for the render loop.

use crossbeam_channel::Receiver;
use libquizflow::{AppState, Store, SubscriptionId};

pub const COMPLETION_TITLE: &str = "Thanks";
pub const COMPLETION_MESSAGE: &str = "You may go home now";

/// Everything the quiz screen renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub question_id: String,
    pub question_text: String,
    /// 1-based position of the current question
    pub position: usize,
    pub total: usize,
    pub answered: i64,
    pub answer_text: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub submit_enabled: bool,
    pub answer_editable: bool,
    pub show_completion: bool,
}

impl ViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let question = state.current_question();
        let submitted = state.submitted();

        Self {
            question_id: question.id.clone(),
            question_text: question.text.clone(),
            position: state.current_index() + 1,
            total: state.question_count(),
            answered: state.answered_count(),
            answer_text: state.answer(&question.id).unwrap_or_default().to_string(),
            previous_enabled: !submitted && !state.is_first(),
            next_enabled: !submitted && !state.is_last(),
            submit_enabled: !submitted && state.all_answered(),
            answer_editable: !submitted,
            show_completion: submitted,
        }
    }

    /// Question number label, e.g. "3"
    pub fn index_label(&self) -> String {
        self.position.to_string()
    }

    /// Progress label, e.g. "2 of 5 Answered"
    pub fn status_label(&self) -> String {
        format!("{} of {} Answered", self.answered, self.total)
    }
}

/// Store subscriber feeding the render loop
pub struct ViewBinder {
    subscription: SubscriptionId,
    rx: Receiver<AppState>,
    state: AppState,
    view: ViewModel,
}

impl ViewBinder {
    /// Subscribe to `store`. The first snapshot arrives during subscribe.
    pub fn attach(store: &mut Store) -> Self {
        let (subscription, rx) = store.subscribe_channel();
        let state = rx.try_recv().unwrap_or_else(|_| store.state().clone());
        let view = ViewModel::from_state(&state);

        tracing::debug!(question = %view.question_id, "View binder attached");

        Self {
            subscription,
            rx,
            state,
            view,
        }
    }

    /// Drain pending snapshots, keeping the newest. Returns true if the view
    /// model changed.
    pub fn refresh(&mut self) -> bool {
        let Some(latest) = self.rx.try_iter().last() else {
            return false;
        };

        let view = ViewModel::from_state(&latest);
        self.state = latest;

        if view == self.view {
            return false;
        }

        if view.show_completion && !self.view.show_completion {
            tracing::info!("Showing completion dialog");
        }
        self.view = view;
        true
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Unsubscribe and hand back the last snapshot seen
    pub fn detach(mut self, store: &mut Store) -> AppState {
        self.refresh();
        store.unsubscribe(self.subscription);
        tracing::debug!("View binder detached");
        self.state
    }
}
