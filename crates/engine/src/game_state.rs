//! Process-wide game state
//!
//! The reference design kept these counters in a hidden singleton. Here the
//! state is an explicitly passed aggregate: the top-level driver creates one
//! instance through a [`GameStateRegistry`] and threads it through calls.
//! The registry is what enforces single instantiation - a second create is
//! the singleton violation from the error taxonomy, not a panic.

use chrono::{DateTime, Utc};
use karma_domain::Character;

use crate::error::EngineError;

/// Level every fresh (or reset) game starts at.
pub const STARTING_LEVEL: u32 = 1;
/// Lives every fresh (or reset) game starts with.
pub const STARTING_LIVES: u32 = 5;

/// Process-wide counters and the character roster.
#[derive(Debug)]
pub struct GameState {
    current_level: u32,
    lives_remaining: u32,
    roster: Vec<Character>,
    created_at: DateTime<Utc>,
}

impl GameState {
    fn new() -> Self {
        tracing::info!("game data reset");
        Self {
            current_level: STARTING_LEVEL,
            lives_remaining: STARTING_LIVES,
            roster: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Characters created so far, in creation order.
    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    /// Add a finished character to the roster, taking ownership of it.
    pub fn add_player(&mut self, character: Character) {
        self.roster.push(character);
    }

    /// Restore the starting counters and drop the roster.
    pub fn reset_game_data(&mut self) {
        self.current_level = STARTING_LEVEL;
        self.lives_remaining = STARTING_LIVES;
        self.roster.clear();
        tracing::info!("game data reset");
    }
}

/// Explicit construction guard for [`GameState`].
///
/// Owned by the top-level driver; hands out exactly one state per registry.
#[derive(Debug, Default)]
pub struct GameStateRegistry {
    created: bool,
}

impl GameStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the single game state.
    ///
    /// Fails with [`EngineError::SingletonViolation`] once a state has
    /// already been handed out by this registry.
    pub fn create_state(&mut self) -> Result<GameState, EngineError> {
        if self.created {
            return Err(EngineError::SingletonViolation);
        }
        self.created = true;
        Ok(GameState::new())
    }
}
