//! Whole-aggregate state store backed by a SQLite key-value table.
//!
//! # Responsibility
//! - Persist the full `AppState` as one JSON blob under a fixed key.
//! - Seed first-launch state and tolerate corrupt payloads.
//!
//! # Invariants
//! - Serialization is deterministic for a given state (struct field order),
//!   so saving the same state twice produces byte-identical payloads.
//! - A corrupt payload is never propagated to callers; `load` falls back to
//!   the seed dataset and logs the failure.

use crate::db::DbError;
use crate::model::state::AppState;
use chrono::{Local, NaiveDate};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed namespaced key the aggregate blob is stored under.
pub const STORAGE_KEY: &str = "nexus_hrms_data_v1";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by blob persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize app state: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Load/save contract for the aggregate.
pub trait StateStore {
    /// Reads persisted state, seeding it on first launch.
    ///
    /// # Contract
    /// - Returns the stored aggregate when a valid blob exists.
    /// - When no blob exists, returns the seed dataset and persists it
    ///   immediately.
    /// - When the blob is corrupt or the read fails, logs and returns the
    ///   seed dataset without persisting it.
    fn load(&self) -> AppState;

    /// Serializes the full aggregate and upserts the blob row.
    fn save(&self, state: &AppState) -> StoreResult<()>;
}

/// SQLite-backed state store.
pub struct SqliteStateStore<'conn> {
    conn: &'conn Connection,
    seed_date: NaiveDate,
}

impl<'conn> SqliteStateStore<'conn> {
    /// Creates a store whose seed attendance rows are dated today.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_seed_date(conn, Local::now().date_naive())
    }

    /// Creates a store with an explicit seed date. Used by tests that pin
    /// "today" to a fixed day.
    pub fn with_seed_date(conn: &'conn Connection, seed_date: NaiveDate) -> Self {
        Self { conn, seed_date }
    }

    /// Returns the raw persisted payload, if any. Exposed for round-trip
    /// determinism checks.
    pub fn raw_payload(&self) -> StoreResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM app_state WHERE key = ?1;",
                [STORAGE_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn seed_and_persist(&self) -> AppState {
        let seed = AppState::seed(self.seed_date);
        match self.save(&seed) {
            Ok(()) => info!("event=state_seed module=store status=ok key={STORAGE_KEY}"),
            Err(err) => error!(
                "event=state_seed module=store status=error key={STORAGE_KEY} error={err}"
            ),
        }
        seed
    }
}

impl StateStore for SqliteStateStore<'_> {
    fn load(&self) -> AppState {
        let payload = match self.raw_payload() {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    "event=state_load module=store status=error key={STORAGE_KEY} error_code=read_failed error={err}"
                );
                return AppState::seed(self.seed_date);
            }
        };

        match payload {
            Some(raw) => match serde_json::from_str::<AppState>(&raw) {
                Ok(state) => {
                    info!(
                        "event=state_load module=store status=ok key={STORAGE_KEY} bytes={}",
                        raw.len()
                    );
                    state
                }
                Err(err) => {
                    error!(
                        "event=state_load module=store status=error key={STORAGE_KEY} error_code=corrupt_payload error={err}"
                    );
                    AppState::seed(self.seed_date)
                }
            },
            None => self.seed_and_persist(),
        }
    }

    fn save(&self, state: &AppState) -> StoreResult<()> {
        let payload = serde_json::to_string(state)?;
        self.conn.execute(
            "INSERT INTO app_state (key, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![STORAGE_KEY, payload],
        )?;
        Ok(())
    }
}
