//! Change recorder - turns notifications into an append-only history
//!
//! `ChangeRecorder` is both the concrete observer and the caretaker of the
//! snapshots it collects. On every notification it asks the subject for the
//! snapshot capability and appends a fresh save; subjects without that
//! capability are ignored silently.

use crate::error::DomainError;
use crate::observer::{Observable, Observer};
use crate::snapshot::Snapshot;

/// Listener that appends a snapshot to its history on every notification.
///
/// History is ordered, append-only, and unbounded; insertion order is
/// chronological change order.
#[derive(Debug, Default)]
pub struct ChangeRecorder {
    history: Vec<Snapshot>,
}

impl ChangeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }
}

impl Observer for ChangeRecorder {
    fn update(&mut self, subject: &dyn Observable) -> Result<(), DomainError> {
        // Capability check, not a type check: any snapshot-capable subject
        // can be recorded. Subjects without the capability are a no-op.
        if let Some(source) = subject.as_snapshot_source() {
            self.history.push(source.save_state());
        }
        Ok(())
    }
}
