//! Application layer: game configuration.

pub mod config;

pub use config::GameConfig;
