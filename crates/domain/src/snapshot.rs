//! Snapshot capture and restore for observable entities
//!
//! A [`Snapshot`] is an immutable bundle of an entity's tracked field values,
//! taken at one instant. Entities that can be snapshotted expose the
//! [`SnapshotSource`] capability; the change recorder only ever needs the
//! read half (`save_state`), while callers that roll an entity back use
//! `restore_state`.

use serde::{Deserialize, Serialize};

/// Immutable capture of a character's tracked fields at one instant.
///
/// Once created a snapshot is never mutated; a fresh one is taken per save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    name: String,
    morality: i32,
}

impl Snapshot {
    pub fn new(name: impl Into<String>, morality: i32) -> Self {
        Self {
            name: name.into(),
            morality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn morality(&self) -> i32 {
        self.morality
    }
}

/// Originator capability: save and restore tracked state.
pub trait SnapshotSource {
    /// Capture the current tracked field values.
    fn save_state(&self) -> Snapshot;

    /// Overwrite tracked fields directly from the snapshot's stored values.
    ///
    /// Restore writes the fields without going through the guarded mutator:
    /// no notification fires and no history entry is recorded, even when the
    /// restored morality differs from the current value.
    fn restore_state(&mut self, snapshot: &Snapshot);
}
