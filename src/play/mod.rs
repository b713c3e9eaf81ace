pub mod advancement;
pub mod force;
pub mod outcome;
pub mod resolver;
pub mod state;

pub use advancement::HitType;
pub use force::is_forced;
pub use outcome::{PlayLabel, PlayOutcome};
pub use resolver::PlayResolver;
pub use state::{BaseState, PlaySituation};

use crate::field::Ballpark;
use crate::fielding::{BallClass, FieldingResult, FieldingSolver};
use crate::physics::{AirState, BattedBallState, Integrator, Trajectory};
use crate::players::Fielder;
use crate::utils::errors::SimError;
use crate::utils::rng::RngManager;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything a play produced, for callers that want more than the score
/// effect.
#[derive(Debug, Clone)]
pub struct PlayResult {
    pub outcome: PlayOutcome,
    pub trajectory: Trajectory,
    pub fielding: FieldingResult,
}

/// One ball in play plus the game state it happens in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRequest {
    pub ball: BattedBallState,
    pub situation: PlaySituation,
}

/// Run one play end to end: integrate the flight, race the defense to the
/// ball, then resolve every runner.
pub fn resolve_play(
    ball: &BattedBallState,
    situation: &PlaySituation,
    fielders: &[Fielder],
    park: &Ballpark,
    air: &AirState,
    rng: &mut ChaCha8Rng,
) -> Result<PlayResult, SimError> {
    let trajectory = Integrator::new(air, park).integrate(ball)?;
    let fielding = FieldingSolver::new(park).best_interception(
        &trajectory,
        fielders,
        BallClass::of_trajectory(&trajectory),
        rng,
    )?;
    let outcome = PlayResolver::new(fielders).resolve(&trajectory, &fielding, situation, rng)?;
    Ok(PlayResult {
        outcome,
        trajectory,
        fielding,
    })
}

/// Resolve many independent plays across the thread pool.
///
/// Each play gets its own stream derived from the master seed, so the
/// result is identical however the work is scheduled, and identical to a
/// sequential run.
pub fn resolve_plays(
    requests: &[PlayRequest],
    fielders: &[Fielder],
    park: &Ballpark,
    air: &AirState,
    master_seed: u64,
) -> Result<Vec<PlayResult>, SimError> {
    let manager = RngManager::new(master_seed);
    requests
        .par_iter()
        .enumerate()
        .map(|(idx, request)| {
            let mut rng = manager.play_rng(0, idx as u64);
            resolve_play(
                &request.ball,
                &request.situation,
                fielders,
                park,
                air,
                &mut rng,
            )
        })
        .collect()
}
