//! # State Container
//!
//! Configuration plus the explicit [`IndexState`] that owns one instance of
//! every index structure. There are no process-wide singletons: callers hold
//! an `IndexState` handle and pass it where it is needed.

pub mod config;
pub mod state;

pub use config::{ConfigError, RuntimeConfig};
pub use state::{IndexState, LeadQueue, ProductIndex, ReferralNetwork};
