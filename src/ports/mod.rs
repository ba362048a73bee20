//! Ports (trait boundaries) for external collaborators.
//!
//! The session talks to whoever picks the computer's moves and to whoever
//! wants to hear about game events only through these traits. Concrete
//! implementations live in the adapters module and in the CLI.

pub mod observer;
pub mod opponent;

pub use observer::GameObserver;
pub use opponent::Opponent;
