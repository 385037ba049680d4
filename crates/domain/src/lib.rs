//! Karma Domain - Core character-creation domain
//!
//! The hard core of the module: an observable [`Character`] whose morality
//! writes go through a guarded mutator, a [`Snapshot`] save/restore
//! capability, and a [`ChangeRecorder`] that turns change notifications into
//! an append-only history.

pub mod character;
pub mod error;
pub mod events;
pub mod ids;
pub mod observer;
pub mod recorder;
pub mod snapshot;

pub use character::{Character, CharacterVariant};
pub use error::DomainError;
pub use events::MoralityChange;
pub use ids::CharacterId;
pub use observer::{Listeners, Observable, Observer, SharedObserver};
pub use recorder::ChangeRecorder;
pub use snapshot::{Snapshot, SnapshotSource};
