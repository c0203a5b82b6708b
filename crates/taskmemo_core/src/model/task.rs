//! Task domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the application.
//! - Provide constructors that fix identity and creation time.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another task.
//! - `created_at` is set once at construction and never mutated afterwards.
//! - Title validation is a controller concern; this type stores whatever it
//!   is given.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// A single to-do entry with completion state, free-text memo and creation
/// time.
///
/// Identity lives in `uuid`; two tasks with equal field values but different
/// ids are different tasks. `PartialEq` compares full value including the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for lookup, equality and deletion.
    pub uuid: TaskId,
    /// Task description. Non-empty for every task created through the
    /// controller; the storage layer does not re-check it.
    pub title: String,
    /// Completion flag, `false` at creation.
    pub is_completed: bool,
    /// Creation time in Unix epoch milliseconds. Immutable after creation.
    pub created_at: i64,
    /// Free-form memo text, empty by default, editable at any time.
    pub memo: String,
}

impl Task {
    /// Creates a new incomplete task with a generated ID and the current
    /// wall-clock creation time.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, now_epoch_ms())
    }

    /// Creates a task with caller-provided identity and creation time.
    ///
    /// Used by row decoding and by tests that need deterministic ordering.
    pub fn with_id(uuid: TaskId, title: impl Into<String>, created_at: i64) -> Self {
        Self {
            uuid,
            title: title.into(),
            is_completed: false,
            created_at,
            memo: String::new(),
        }
    }

    /// Flips the completion flag.
    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

/// Current wall clock as Unix epoch milliseconds.
///
/// A clock before the epoch reads as 0 rather than failing; creation time is
/// ordering metadata, not a correctness input.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
