//! Feedback loops: side effects driven by state transitions.

use tokio::sync::mpsc;

/// Cloneable handle for pushing events into a store's loop.
///
/// Sending after the store has been torn down is a silent no-op; late
/// effect outcomes are discarded rather than delivered to a dead
/// reducer.
pub struct EventSink<E> {
    tx: mpsc::UnboundedSender<E>,
}

impl<E> EventSink<E> {
    pub(crate) fn new(tx: mpsc::UnboundedSender<E>) -> Self {
        Self { tx }
    }

    /// Enqueue an event. Non-blocking; order is preserved per sender.
    pub fn send(&self, event: E) {
        if self.tx.send(event).is_err() {
            tracing::trace!("event dropped (store torn down)");
        }
    }
}

impl<E> Clone for EventSink<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// A feedback loop maps newly published states to side-effecting work.
///
/// The store calls `on_transition` once for the initial state and once
/// per state *change*; a reduction that leaves the state unchanged does
/// not re-trigger feedbacks. Implementations typically spawn a task and
/// report its outcome through the sink.
pub trait Feedback<S, E>: Send + 'static {
    fn on_transition(&mut self, state: &S, events: &EventSink<E>);
}
