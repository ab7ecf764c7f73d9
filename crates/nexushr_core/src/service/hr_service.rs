//! HR state container service.
//!
//! # Responsibility
//! - Own the in-memory aggregate for one session.
//! - Dispatch events through the pure reducer and persist each snapshot.
//!
//! # Invariants
//! - Every dispatched event replaces the aggregate wholesale; readers only
//!   ever see fully-formed snapshots.
//! - Persistence failures are logged and swallowed: the mutation stays
//!   in memory for the session, never crashing the process.

use crate::model::state::AppState;
use crate::reducer::{self, Event};
use crate::store::state_store::{StateStore, STORAGE_KEY};
use log::error;

/// Explicit state container threading the aggregate through reducers.
pub struct HrService<S: StateStore> {
    store: S,
    state: AppState,
}

impl<S: StateStore> HrService<S> {
    /// Loads (or seeds) persisted state and wraps it in a container.
    pub fn load(store: S) -> Self {
        let state = store.load();
        Self { store, state }
    }

    /// Current aggregate snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies one event and persists the resulting snapshot.
    ///
    /// # Contract
    /// - The in-memory aggregate is always updated.
    /// - A failed save is logged and otherwise a silent no-op; the session
    ///   keeps running on the in-memory state.
    pub fn dispatch(&mut self, event: Event) {
        self.state = reducer::apply(&self.state, event);

        if let Err(err) = self.store.save(&self.state) {
            error!(
                "event=state_save module=service status=error key={STORAGE_KEY} error={err}"
            );
        }
    }
}
