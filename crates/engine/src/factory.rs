//! Named character factories
//!
//! Each creator knows which player slot it builds for; the construction
//! itself is the shared template method. The creation service only ever
//! sees `&dyn CharacterCreator`.

use karma_domain::{Character, CharacterVariant};

/// Construction path for a fresh character of one variant.
pub trait CharacterCreator {
    /// The variant this creator builds.
    fn variant(&self) -> CharacterVariant;

    /// Build a character with the given starting name and morality.
    fn create_character(&self, name: &str, morality: i32) -> Character {
        Character::new(self.variant(), name, morality)
    }
}

/// Creator for the first player slot.
#[derive(Debug, Default)]
pub struct PlayerOneCreator;

impl CharacterCreator for PlayerOneCreator {
    fn variant(&self) -> CharacterVariant {
        CharacterVariant::PlayerOne
    }
}

/// Creator for the second player slot.
#[derive(Debug, Default)]
pub struct PlayerTwoCreator;

impl CharacterCreator for PlayerTwoCreator {
    fn variant(&self) -> CharacterVariant {
        CharacterVariant::PlayerTwo
    }
}
