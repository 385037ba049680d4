//! Console input port and the morality question
//!
//! The creation flow only depends on [`PromptPort`]; the stdin adapter lives
//! in the runner so the flow can be tested with a mock.

use std::fmt;
use std::str::FromStr;

use karma_domain::DomainError;

use crate::error::EngineError;

/// Port for reading one line of player input.
#[cfg_attr(test, mockall::automock)]
pub trait PromptPort {
    /// Show `prompt` and read one line, without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String, EngineError>;
}

/// Question shown by the morality step.
pub const MORALITY_QUESTION: &str =
    "What kind of individual are you really? A selfless hero, a selfish mercenary or an indifferent soul? ";

/// The three answers the morality question accepts.
///
/// The phrase has to match exactly; anything else leaves morality untouched
/// and records nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoralityChoice {
    SelflessHero,
    SelfishMercenary,
    IndifferentSoul,
}

impl MoralityChoice {
    /// Get all choices
    pub fn all() -> &'static [MoralityChoice] {
        &[
            MoralityChoice::SelflessHero,
            MoralityChoice::SelfishMercenary,
            MoralityChoice::IndifferentSoul,
        ]
    }

    /// The exact free-text phrase that selects this choice
    pub fn phrase(&self) -> &'static str {
        match self {
            MoralityChoice::SelflessHero => "selfless hero",
            MoralityChoice::SelfishMercenary => "selfish mercenary",
            MoralityChoice::IndifferentSoul => "indifferent soul",
        }
    }

    /// Fixed increment added to the current morality
    pub fn morality_bonus(&self) -> i32 {
        match self {
            MoralityChoice::SelflessHero => 8,
            MoralityChoice::SelfishMercenary => 3,
            MoralityChoice::IndifferentSoul => 5,
        }
    }
}

impl fmt::Display for MoralityChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

impl FromStr for MoralityChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoralityChoice::all()
            .iter()
            .copied()
            .find(|choice| choice.phrase() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown morality answer: {}", s)))
    }
}
