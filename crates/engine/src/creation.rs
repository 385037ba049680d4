//! Character creation flow
//!
//! `CharacterCreationService` is the coordination facade: it builds a fresh
//! character through a creator, wires the shared auto-save recorder to it
//! *before* any morality mutation can happen, runs the two console steps,
//! and parks the finished character on the roster.

use std::cell::RefCell;
use std::rc::Rc;

use karma_domain::{ChangeRecorder, CharacterId, SharedObserver};

use crate::error::EngineError;
use crate::factory::CharacterCreator;
use crate::game_state::GameState;
use crate::prompts::{MoralityChoice, PromptPort, MORALITY_QUESTION};

/// Facade driving the console character-creation flow.
///
/// One recorder is shared across every character the service creates, so the
/// recorded history interleaves changes in chronological order.
pub struct CharacterCreationService {
    auto_saver: Rc<RefCell<ChangeRecorder>>,
}

impl CharacterCreationService {
    pub fn new() -> Self {
        Self {
            auto_saver: Rc::new(RefCell::new(ChangeRecorder::new())),
        }
    }

    /// The shared auto-save recorder, for later inspection of its history.
    pub fn recorder(&self) -> &Rc<RefCell<ChangeRecorder>> {
        &self.auto_saver
    }

    /// Create one player character end to end.
    ///
    /// The recorder is attached before the prompts run, so the morality step
    /// is recorded iff it actually changes the value. Returns the id of the
    /// character now sitting on the roster.
    pub fn create_player(
        &self,
        creator: &dyn CharacterCreator,
        state: &mut GameState,
        prompt: &mut dyn PromptPort,
    ) -> Result<CharacterId, EngineError> {
        let mut character = creator.create_character("", 0);

        let observer: SharedObserver = self.auto_saver.clone();
        character.attach(observer);

        let question = format!("Enter the name for {}: ", character.variant());
        let entered = prompt.read_line(&question)?;
        if entered.trim().is_empty() {
            let fallback = character.variant().default_name();
            tracing::info!(name = fallback, "assigned default name");
            character.set_name(fallback);
        } else {
            character.set_name(entered);
        }

        let answer = prompt.read_line(MORALITY_QUESTION)?;
        match answer.parse::<MoralityChoice>() {
            Ok(choice) => {
                let target = character.morality() + choice.morality_bonus();
                character.set_morality(target)?;
            }
            Err(_) => {
                tracing::debug!(answer = %answer, "morality answer not recognized, no change");
            }
        }

        let id = character.id();
        state.add_player(character);
        Ok(id)
    }
}

impl Default for CharacterCreationService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{PlayerOneCreator, PlayerTwoCreator};
    use crate::game_state::GameStateRegistry;
    use crate::prompts::MockPromptPort;
    use karma_domain::Snapshot;
    use mockall::Sequence;

    fn scripted_prompt(answers: Vec<&'static str>) -> MockPromptPort {
        let mut prompt = MockPromptPort::new();
        let mut seq = Sequence::new();
        for answer in answers {
            prompt
                .expect_read_line()
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| Ok(answer.to_string()));
        }
        prompt
    }

    fn fresh_state() -> GameState {
        GameStateRegistry::new()
            .create_state()
            .expect("first create succeeds")
    }

    #[test]
    fn test_create_player_records_the_morality_change() {
        let service = CharacterCreationService::new();
        let mut state = fresh_state();
        let mut prompt = scripted_prompt(vec!["Ezren", "selfless hero"]);

        let id = service
            .create_player(&PlayerOneCreator, &mut state, &mut prompt)
            .expect("creation succeeds");

        let roster = state.roster();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id(), id);
        assert_eq!(roster[0].name(), "Ezren");
        assert_eq!(roster[0].morality(), 8);
        assert_eq!(
            service.recorder().borrow().history(),
            [Snapshot::new("Ezren", 8)]
        );
    }

    #[test]
    fn test_blank_name_falls_back_to_variant_default() {
        let service = CharacterCreationService::new();
        let mut state = fresh_state();
        let mut prompt = scripted_prompt(vec!["   ", "selfish mercenary"]);

        service
            .create_player(&PlayerTwoCreator, &mut state, &mut prompt)
            .expect("creation succeeds");

        assert_eq!(state.roster()[0].name(), "Player2");
        assert_eq!(state.roster()[0].morality(), 3);
    }

    #[test]
    fn test_unknown_answer_changes_nothing_and_records_nothing() {
        let service = CharacterCreationService::new();
        let mut state = fresh_state();
        let mut prompt = scripted_prompt(vec!["Ezren", "ruthless villain"]);

        service
            .create_player(&PlayerOneCreator, &mut state, &mut prompt)
            .expect("creation succeeds");

        assert_eq!(state.roster()[0].morality(), 0);
        assert!(service.recorder().borrow().history().is_empty());
    }

    #[test]
    fn test_shared_recorder_interleaves_both_players() {
        let service = CharacterCreationService::new();
        let mut state = fresh_state();

        let mut first = scripted_prompt(vec!["Ezren", "selfless hero"]);
        service
            .create_player(&PlayerOneCreator, &mut state, &mut first)
            .expect("creation succeeds");

        let mut second = scripted_prompt(vec!["", "indifferent soul"]);
        service
            .create_player(&PlayerTwoCreator, &mut state, &mut second)
            .expect("creation succeeds");

        assert_eq!(
            service.recorder().borrow().history(),
            [Snapshot::new("Ezren", 8), Snapshot::new("Player2", 5)]
        );
        assert_eq!(state.roster().len(), 2);
    }

    #[test]
    fn test_prompt_failure_propagates() {
        let service = CharacterCreationService::new();
        let mut state = fresh_state();
        let mut prompt = MockPromptPort::new();
        prompt
            .expect_read_line()
            .times(1)
            .returning(|_| Err(EngineError::prompt("stdin closed")));

        let err = service
            .create_player(&PlayerOneCreator, &mut state, &mut prompt)
            .expect_err("read failure propagates");

        assert!(matches!(err, EngineError::Prompt(_)));
        assert!(state.roster().is_empty());
    }
}
