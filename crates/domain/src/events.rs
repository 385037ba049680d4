//! Mutation outcome types
//!
//! These enums communicate what happened when character state was modified,
//! allowing callers to react appropriately.

/// Outcome of assigning morality through the guarded mutator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoralityChange {
    /// The value differed, was stored, and listeners were notified
    Changed { from: i32, to: i32 },
    /// The value matched the current morality; nothing happened
    Unchanged { value: i32 },
}

impl MoralityChange {
    /// Whether this mutation qualified (and therefore notified listeners).
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}
