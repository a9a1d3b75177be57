//! Ludo simulator binary.
//!
//! Seats a table of bots, plays one full game through the session service
//! and prints the finish order. Every roll and move takes the same
//! repository, commit and retry path a server would.
//!
//! ```bash
//! LUDO_PLAYERS=3 LUDO_SEED=7 RUST_LOG=ludo_runtime=debug cargo run -p ludo-sim
//! ```

mod config;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use ludo_core::{Color, PlayerId};
use ludo_runtime::{DiceOracle, GameId, RandomDice, RuntimeConfig, SessionService};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SimConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime_config = RuntimeConfig::from_env();
    let sim = SimConfig::from_env();

    tracing::info!("Starting simulation with {} players", sim.players);
    tracing::info!("Seed: {:?}", sim.seed);
    tracing::info!("Star shortcuts: {}", runtime_config.game.star_shortcuts);

    let (dice, mut picker): (Arc<dyn DiceOracle>, StdRng) = match sim.seed {
        Some(seed) => (
            Arc::new(RandomDice::seeded(seed)),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (Arc::new(RandomDice::new()), StdRng::from_entropy()),
    };

    let service = SessionService::from_config(runtime_config, dice)
        .context("failed to open game repository")?;

    let players: Vec<PlayerId> = (1..=sim.players)
        .map(|seat| PlayerId::new(format!("bot-{seat}")))
        .collect();
    let id = seat_table(&service, &players).await?;
    play(&service, &id, &sim, &mut picker).await?;

    let game = service.snapshot(&id)?.game;
    let mut standings = game.winners.clone();
    standings.extend(
        game.players
            .iter()
            .map(|player| player.id.clone())
            .filter(|id| !game.is_winner(id)),
    );

    println!("Game {id} finished after {} actions", game.last_action_id);
    for (place, player) in standings.iter().enumerate() {
        let color = game.player(player).map(|p| p.color).unwrap_or(Color::Red);
        println!("{:>2}. {} ({})", place + 1, player, color);
    }

    Ok(())
}

/// Creates the game, seats every bot and starts it.
async fn seat_table(service: &SessionService, players: &[PlayerId]) -> Result<GameId> {
    let Some((host, guests)) = players.split_first() else {
        bail!("no players to seat");
    };

    let record = service.create_game(host.clone(), host.as_str())?;
    for guest in guests {
        service
            .join_game(&record.id, guest.clone(), guest.as_str())
            .await?;
    }
    service.start_game(&record.id, host).await?;

    Ok(record.id)
}

/// Rolls for whoever holds the turn and moves a random available token,
/// until the game is over.
async fn play(
    service: &SessionService,
    id: &GameId,
    sim: &SimConfig,
    picker: &mut StdRng,
) -> Result<()> {
    for _ in 0..sim.max_rolls {
        let game = service.snapshot(id)?.game;
        let current = game
            .current_player()
            .context("turn index points past the players")?
            .id
            .clone();

        let roll = service.roll(id, &current).await?;
        if roll.auto_passed {
            continue;
        }

        let token = roll.available[picker.gen_range(0..roll.available.len())];
        let moved = service.move_token(id, &current, token, roll.dice).await?;
        tracing::debug!("{} rolled {} and moved token {} to {}", current, roll.dice, token, moved.to);

        if moved.game_over {
            return Ok(());
        }
    }

    bail!("game {id} did not finish within {} rolls", sim.max_rolls)
}
