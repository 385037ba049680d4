//! Karma Runner - composition root binary
//!
//! Wires the stdin prompt adapter to the engine's creation flow, creates the
//! two player characters, and reports the auto-saved history.

mod console;

use karma_engine::{
    CharacterCreationService, GameStateRegistry, PlayerOneCreator, PlayerTwoCreator,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "karma_runner=debug,karma_engine=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Karma character creation");

    let mut registry = GameStateRegistry::new();
    let mut state = registry.create_state()?;
    let service = CharacterCreationService::new();
    let mut prompt = console::StdinPrompt::new();

    service.create_player(&PlayerOneCreator, &mut state, &mut prompt)?;
    service.create_player(&PlayerTwoCreator, &mut state, &mut prompt)?;

    for character in state.roster() {
        tracing::info!(
            variant = %character.variant(),
            name = character.name(),
            morality = character.morality(),
            "created character"
        );
    }

    let recorder = service.recorder().borrow();
    tracing::info!(entries = recorder.history().len(), "auto-save history");
    for (index, snapshot) in recorder.history().iter().enumerate() {
        tracing::info!(
            index,
            name = snapshot.name(),
            morality = snapshot.morality(),
            "history entry"
        );
    }

    Ok(())
}
