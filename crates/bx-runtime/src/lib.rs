//! # Bizdex Runtime
//!
//! Thin in-process serving layer around the index crates.
//!
//! ## Modular Structure
//!
//! - `container/` - configuration and the [`IndexState`] container
//! - `ports/` - the [`RecordStore`] port the runtime persists through
//! - `adapters/` - [`InMemoryRecordStore`] and its JSON seed loader
//! - `rebuild` - startup rebuild of every structure from the store
//! - `service` - [`IntakeService`], one method per inbound event
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults, then `BX_*` environment overrides)
//! 2. Validate configuration
//! 3. Build the record store (seed file if configured, else empty)
//! 4. Build the state container and rebuild it from the store
//! 5. Serve events through [`IntakeService`]
//!
//! ## Locking
//!
//! Each structure sits behind its own `parking_lot::RwLock`. Operations that
//! touch two structures acquire them in field order of [`IndexState`] and
//! never hold a lock across a store call except the lead-email lock in
//! `submit_lead`, which serializes lead admission.

pub mod adapters;
pub mod container;
pub mod errors;
pub mod ports;
pub mod rebuild;
pub mod service;

pub use adapters::{InMemoryRecordStore, SeedData};
pub use container::{ConfigError, IndexState, RuntimeConfig};
pub use errors::RuntimeError;
pub use ports::{RecordStore, StoreError};
pub use rebuild::{rebuild, RebuildReport};
pub use service::{DashboardStats, IntakeService, LeadAdmission};
