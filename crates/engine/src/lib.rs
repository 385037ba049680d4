//! Karma Engine - Collaborators around the domain core
//!
//! Holds everything the creation flow needs besides the domain itself:
//! the explicitly passed [`GameState`] aggregate with its construction
//! guard, the named character factories, the console prompt port, and the
//! [`CharacterCreationService`] facade that ties them together.

pub mod creation;
pub mod error;
pub mod factory;
pub mod game_state;
pub mod prompts;

pub use creation::CharacterCreationService;
pub use error::EngineError;
pub use factory::{CharacterCreator, PlayerOneCreator, PlayerTwoCreator};
pub use game_state::{GameState, GameStateRegistry, STARTING_LEVEL, STARTING_LIVES};
pub use prompts::{MoralityChoice, PromptPort, MORALITY_QUESTION};
