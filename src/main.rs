//! Headless demo run
//!
//! Drives the simulation core at 60 Hz with a scripted player sweep and
//! prints the event stream. Useful for eyeballing balance and spawn cadence
//! without a renderer attached.

use meteor_dodge::HighScores;
use meteor_dodge::consts::*;
use meteor_dodge::sim::{GameEvent, GameSession, Phase};
use meteor_dodge::tuning::Tuning;

fn main() {
    env_logger::init();

    let seed = 0xD06E;
    let mut highscores = HighScores::new();
    let mut session = match GameSession::new(
        Tuning::default(),
        BASE_WIDTH,
        BASE_HEIGHT,
        seed,
        highscores.top_score().unwrap_or(0),
    ) {
        Ok(session) => session,
        Err(err) => {
            log::error!("invalid tuning: {err}");
            return;
        }
    };
    session.start();

    let dt_ms = 1000.0 / 60.0;
    let mut direction = 1.0;

    // up to two minutes of simulated play
    for frame in 0u32..60 * 120 {
        // sweep the player back and forth every 1.5 seconds
        if frame % 90 == 0 {
            direction = -direction;
            session.set_player_velocity_x(direction * PLAYER_SPEED);
        }

        for event in session.tick(dt_ms) {
            match event {
                GameEvent::ObstacleSpawned { id, tier, x, .. } => {
                    log::info!("spawn #{id} tier {tier} at x={x:.0}")
                }
                GameEvent::ObstacleExited { id } => log::info!("dodged #{id}"),
                GameEvent::MeteorCollision {
                    id_a,
                    id_b,
                    impact_speed,
                    ..
                } => log::info!("meteors {id_a} and {id_b} collided at {impact_speed:.0} u/s"),
                GameEvent::LevelUp {
                    new_level,
                    new_spawn_interval_ms,
                } => log::info!("level {new_level} ({new_spawn_interval_ms:.0} ms between spawns)"),
                GameEvent::PlayerHit { x, y } => log::info!("player hit at ({x:.0}, {y:.0})"),
            }
        }

        if session.phase() == Phase::Ended {
            break;
        }
    }

    let state = session.session_state();
    highscores.add_score(state.score, state.level, 0.0);
    println!(
        "final: score {} level {} high score {}",
        state.score, state.level, state.high_score
    );
}
