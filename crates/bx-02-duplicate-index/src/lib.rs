//! # BX-02 Duplicate Index
//!
//! Constant-time duplicate detection for inbound records. The serving layer
//! registers each accepted record's natural key (a lead's email, for example)
//! against the identifier the store assigned, and consults the index before
//! accepting the next record.
//!
//! ## Invariants
//!
//! - A key maps to at most one identifier.
//! - `has(k)` reflects the most recent `set(k, _)`; entries are never evicted.
//!
//! ## Usage Example
//!
//! ```
//! use bx_02_duplicate_index::{DuplicateIndex, LookupError};
//!
//! let mut index: DuplicateIndex<String, u64> = DuplicateIndex::new();
//! assert!(!index.has("john@bigcorp.com"));
//!
//! index.set("john@bigcorp.com".to_string(), 7);
//! assert!(index.has("john@bigcorp.com"));
//! assert_eq!(index.get("john@bigcorp.com"), Ok(&7));
//! assert_eq!(index.get("jane@startup.com"), Err(LookupError::NotFound));
//! ```

pub mod domain;

pub use domain::{DuplicateIndex, LookupError};
