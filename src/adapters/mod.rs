//! Adapters implementing domain ports.
//!
//! Infrastructure implementations of the traits defined in the ports
//! module. Adapters depend on the ports, not the other way around.

pub mod minimax_opponent;
pub mod recording_observer;
pub mod tracing_observer;

pub use minimax_opponent::MinimaxOpponent;
pub use recording_observer::{GameEvent, RecordingObserver};
pub use tracing_observer::TracingObserver;
