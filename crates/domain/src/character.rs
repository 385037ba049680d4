//! Character entity - the observable player character
//!
//! `Character` is both the subject (it owns the listener registry and fans
//! out notifications) and the originator (it saves and restores snapshots of
//! its tracked fields). Morality is the only guarded field: writing it
//! through [`Character::set_morality`] notifies listeners iff the value
//! actually changed. Name writes are direct and never notify.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::events::MoralityChange;
use crate::ids::CharacterId;
use crate::observer::{Listeners, Observable, SharedObserver};
use crate::snapshot::{Snapshot, SnapshotSource};

/// Which of the two player slots a character was created for.
///
/// The variant only matters at creation time: it picks the default name used
/// when the console name prompt comes back blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CharacterVariant {
    #[default]
    PlayerOne,
    PlayerTwo,
}

impl CharacterVariant {
    /// Get all variants
    pub fn all() -> &'static [CharacterVariant] {
        &[CharacterVariant::PlayerOne, CharacterVariant::PlayerTwo]
    }

    /// Get a display name for the variant
    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterVariant::PlayerOne => "Player One",
            CharacterVariant::PlayerTwo => "Player Two",
        }
    }

    /// Name substituted when the player leaves the name prompt blank
    pub fn default_name(&self) -> &'static str {
        match self {
            CharacterVariant::PlayerOne => "Player1",
            CharacterVariant::PlayerTwo => "Player2",
        }
    }
}

impl fmt::Display for CharacterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CharacterVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "player_one" | "player1" => Ok(CharacterVariant::PlayerOne),
            "player_two" | "player2" => Ok(CharacterVariant::PlayerTwo),
            _ => Err(DomainError::parse(format!(
                "Unknown character variant: {}",
                s
            ))),
        }
    }
}

/// A player character with a guarded morality score.
///
/// Listener bookkeeping lives on the entity itself (composition in place of
/// a subject base class); the registry is runtime-only state and is skipped
/// when serializing.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    id: CharacterId,
    variant: CharacterVariant,
    name: String,
    morality: i32,
    #[serde(skip)]
    listeners: Listeners,
}

impl Character {
    /// Create a character with its initial name and morality.
    ///
    /// The initial assignment never notifies; only subsequent writes through
    /// [`Character::set_morality`] go through the guarded path.
    pub fn new(variant: CharacterVariant, name: impl Into<String>, morality: i32) -> Self {
        Self {
            id: CharacterId::new(),
            variant,
            name: name.into(),
            morality,
            listeners: Listeners::new(),
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn variant(&self) -> CharacterVariant {
        self.variant
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn morality(&self) -> i32 {
        self.morality
    }

    /// Number of currently attached listeners
    pub fn observer_count(&self) -> usize {
        self.listeners.len()
    }

    /// Append a listener to this character's registry. No dedup.
    pub fn attach(&mut self, observer: SharedObserver) {
        self.listeners.attach(observer);
    }

    /// Remove the first matching listener.
    ///
    /// Fails with [`DomainError::ListenerNotFound`] when the listener was
    /// never attached.
    pub fn detach(&mut self, observer: &SharedObserver) -> Result<(), DomainError> {
        self.listeners.detach(observer)
    }

    /// Set the name directly. Name is not a guarded field; no notification.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Guarded mutator for morality.
    ///
    /// Assigning the current value is a no-op: no listener runs, no snapshot
    /// is recorded. Otherwise the value is stored first and the fan-out runs
    /// second, so listeners querying the character during notification see
    /// the new value. A listener error propagates to the caller with the
    /// mutation already applied.
    pub fn set_morality(&mut self, value: i32) -> Result<MoralityChange, DomainError> {
        if value == self.morality {
            return Ok(MoralityChange::Unchanged { value });
        }
        let from = self.morality;
        self.morality = value;
        self.listeners.notify_all(&*self)?;
        Ok(MoralityChange::Changed { from, to: value })
    }
}

impl Observable for Character {
    fn as_snapshot_source(&self) -> Option<&dyn SnapshotSource> {
        Some(self)
    }
}

impl SnapshotSource for Character {
    fn save_state(&self) -> Snapshot {
        Snapshot::new(self.name.clone(), self.morality)
    }

    /// Restore writes the fields directly, bypassing the guarded mutator.
    /// No notification fires and no history grows, even when the restored
    /// morality differs from the current value.
    fn restore_state(&mut self, snapshot: &Snapshot) {
        self.name = snapshot.name().to_string();
        self.morality = snapshot.morality();
    }
}
