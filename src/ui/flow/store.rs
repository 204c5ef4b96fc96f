//! The store: a single task owning one screen's state machine.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::feedback::{EventSink, Feedback};
use super::reducer::Reducer;

/// Runs a reducer-driven state machine on one Tokio task.
///
/// All events, whether submitted through [`Store::send`] or emitted by
/// feedback loops, funnel into one unbounded channel consumed by that
/// task. Every reduction and every publication happens there, so state
/// is mutated by exactly one writer and observers see changes in
/// reduction order.
pub struct Store<R: Reducer> {
    events: mpsc::UnboundedSender<R::Event>,
    state_rx: watch::Receiver<R::State>,
    worker: JoinHandle<()>,
}

impl<R> Store<R>
where
    R: Reducer + Send + 'static,
{
    /// Start a store from `R::State::default()`.
    ///
    /// Feedbacks are evaluated once against the initial state, then
    /// once per state change. Must be called within a Tokio runtime.
    pub fn new(feedbacks: Vec<Box<dyn Feedback<R::State, R::Event>>>) -> Self {
        let initial = R::State::default();
        let (state_tx, state_rx) = watch::channel(initial.clone());
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let sink = EventSink::new(event_tx.clone());

        let worker = tokio::spawn(async move {
            let mut feedbacks = feedbacks;
            let mut state = initial;
            for feedback in feedbacks.iter_mut() {
                feedback.on_transition(&state, &sink);
            }
            while let Some(event) = event_rx.recv().await {
                let next = R::reduce(state.clone(), event);
                if next == state {
                    continue;
                }
                state = next;
                // The store itself holds a receiver, so publication
                // cannot fail while the worker is alive.
                let _ = state_tx.send(state.clone());
                for feedback in feedbacks.iter_mut() {
                    feedback.on_transition(&state, &sink);
                }
            }
        });

        Self {
            events: event_tx,
            state_rx,
            worker,
        }
    }

    /// Submit an event for processing. Non-blocking.
    pub fn send(&self, event: R::Event) {
        if self.events.send(event).is_err() {
            tracing::trace!("event dropped (store worker gone)");
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver yields each state change after the subscription
    /// point; the current value is available immediately via `borrow`.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state_rx.clone()
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        // Tears down the loop and drops the feedbacks, which cancels
        // any in-flight effect. Observers receive nothing afterwards.
        self.worker.abort();
    }
}
