//! State-store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the load/save contract for the whole `AppState` aggregate.
//! - Isolate SQLite and JSON details from reducers and services.
//!
//! # Invariants
//! - The aggregate is persisted as one blob; there are no partial writes.
//! - `load` never fails: missing or corrupt state degrades to the seed
//!   dataset.

pub mod state_store;
