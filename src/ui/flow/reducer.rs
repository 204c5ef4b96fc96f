//! Base traits for states, events, and reducers.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` supplies the state a fresh store starts from.
pub trait State: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Marker trait for event objects.
///
/// Events represent:
/// - User actions (taps, appearance callbacks)
/// - Effect outcomes (API responses, failures)
///
/// Events are inputs only; they are consumed by the reducer and never
/// stored.
pub trait Event: Send + 'static {}

/// Reducer transforms state based on events.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Event) -> State, total over all
/// pairs and deterministic.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The event type this reducer handles.
    type Event: Event;

    /// Process an event and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, event: Self::Event) -> Self::State;
}
