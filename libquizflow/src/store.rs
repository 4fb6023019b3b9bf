//! State store
//!
//! The store owns the current `AppState`, runs every dispatched action
//! through the middleware chain and the reducer, and pushes each new state to
//! its subscribers before `dispatch` returns.
//!
//! # Example
//!
//! ```
//! use libquizflow::{Action, LoggingMiddleware, QuizSetup, Store};
//!
//! let mut store = Store::new(QuizSetup::default(), vec![Box::new(LoggingMiddleware::new())]);
//!
//! let id = store.state().current_question().id.clone();
//! store.dispatch(Action::answer(id, "42"));
//!
//! assert_eq!(store.state().answered_count(), 1);
//! ```

use std::sync::{Arc, Mutex};

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::actions::Action;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::{AppState, QuizSetup};

/// Store shared across threads. The mutex serializes dispatch.
pub type SharedStore = Arc<Mutex<Store>>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Observer of state changes
pub trait Subscriber: Send {
    /// Called with the current state on subscribe and after every dispatch.
    /// Returning `false` asks the store to drop this subscriber.
    fn new_state(&mut self, state: &AppState) -> bool;
}

impl<F> Subscriber for F
where
    F: FnMut(&AppState) + Send,
{
    fn new_state(&mut self, state: &AppState) -> bool {
        self(state);
        true
    }
}

/// Forwards snapshots into a crossbeam channel; detaches once the receiver
/// is gone
struct ChannelSubscriber {
    tx: Sender<AppState>,
}

impl Subscriber for ChannelSubscriber {
    fn new_state(&mut self, state: &AppState) -> bool {
        self.tx.send(state.clone()).is_ok()
    }
}

pub struct Store {
    state: AppState,
    setup: QuizSetup,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: Vec<(SubscriptionId, Box<dyn Subscriber>)>,
    next_id: u64,
}

impl Store {
    /// Create a store whose initial state is built by the reducer from `setup`
    pub fn new(setup: QuizSetup, middleware: Vec<Box<dyn Middleware>>) -> Self {
        let state = reduce(None, Action::Init, &setup);
        Self::assemble(state, setup, middleware)
    }

    /// Create a store around an existing state (e.g. a fixed question order)
    pub fn with_state(
        state: AppState,
        setup: QuizSetup,
        middleware: Vec<Box<dyn Middleware>>,
    ) -> Self {
        Self::assemble(state, setup, middleware)
    }

    fn assemble(state: AppState, setup: QuizSetup, middleware: Vec<Box<dyn Middleware>>) -> Self {
        tracing::debug!(
            student_id = state.student_id(),
            questions = state.question_count(),
            order = ?state.question_order(),
            "Store initialized"
        );

        Self {
            state,
            setup,
            middleware,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// Current state snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn setup(&self) -> &QuizSetup {
        &self.setup
    }

    /// Run `action` through middleware and reducer, then notify subscribers
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        for middleware in &mut self.middleware {
            action = middleware.process(action, &self.state);
        }

        let was_submitted = self.state.submitted();
        self.state = reduce(Some(self.state.clone()), action, &self.setup);

        if self.state.submitted() && !was_submitted {
            self.log_submission();
        }

        self.notify();
    }

    /// Register `observer`; it immediately receives the current state.
    /// Returns `None` if the observer declines that first snapshot, in which
    /// case it is not registered.
    pub fn subscribe(&mut self, observer: impl Subscriber + 'static) -> Option<SubscriptionId> {
        self.subscribe_boxed(Box::new(observer))
    }

    pub fn subscribe_boxed(
        &mut self,
        mut observer: Box<dyn Subscriber>,
    ) -> Option<SubscriptionId> {
        if !observer.new_state(&self.state) {
            tracing::debug!("Subscriber declined the initial state");
            return None;
        }

        Some(self.register(observer))
    }

    /// Subscribe through a channel. The receiver holds the current state
    /// right away and one snapshot per dispatch after that.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<AppState>) {
        let (tx, rx) = unbounded();
        let mut observer = ChannelSubscriber { tx };

        // `rx` is alive, so the first send cannot fail
        observer.new_state(&self.state);

        let id = self.register(Box::new(observer));
        (id, rx)
    }

    fn register(&mut self, observer: Box<dyn Subscriber>) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);

        self.subscribers.push((id, observer));
        tracing::debug!(subscription = id.0, "Subscriber registered");
        id
    }

    /// Remove a subscriber. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        let removed = self.subscribers.len() != before;

        if removed {
            tracing::debug!(subscription = id.0, "Subscriber removed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn log_submission(&self) {
        let report = self.state.report();
        match serde_json::to_string(&report) {
            Ok(json) => tracing::info!(
                student_id = self.state.student_id(),
                answered = report.answered,
                total = report.total,
                report = %json,
                "Quiz submitted"
            ),
            Err(e) => tracing::warn!(
                student_id = self.state.student_id(),
                answered = report.answered,
                total = report.total,
                error = %e,
                "Quiz submitted, report not serializable"
            ),
        }
    }

    fn notify(&mut self) {
        let state = &self.state;
        self.subscribers.retain_mut(|(id, subscriber)| {
            let keep = subscriber.new_state(state);
            if !keep {
                tracing::debug!(subscription = id.0, "Subscriber detached");
            }
            keep
        });
    }
}
