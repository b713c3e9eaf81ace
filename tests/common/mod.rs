//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use rand_chacha::ChaCha8Rng;
use sandlot::{
    AirState, Ballpark, Base, BaseRunner, BaseState, BattedBallState, Fielder, PlayResult,
    PlaySituation,
};

pub fn standard_air() -> AirState {
    AirState::sea_level()
}

pub fn generic_park() -> Ballpark {
    Ballpark::generic()
}

pub fn average_defense() -> Vec<Fielder> {
    Fielder::average_defense()
}

/// A play situation with average runners on the given bases.
pub fn situation_with(outs: u8, occupied: &[Base]) -> PlaySituation {
    let mut bases = BaseState::empty();
    for (i, &base) in occupied.iter().enumerate() {
        bases.set(base, Some(BaseRunner::average(format!("runner-{i}"))));
    }
    PlaySituation::new(outs, bases, BaseRunner::average("batter"))
}

/// Run one full play with everything average.
pub fn run_play(
    ball: &BattedBallState,
    situation: &PlaySituation,
    rng: &mut ChaCha8Rng,
) -> PlayResult {
    let air = standard_air();
    let park = generic_park();
    let fielders = average_defense();
    sandlot::resolve_play(ball, situation, &fielders, &park, &air, rng)
        .expect("play should resolve")
}
