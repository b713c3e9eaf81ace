//! Throw model: glove-to-release transfer, arc-lengthened flight, and an
//! accuracy draw. An off-target throw is not dropped, it just costs the
//! defense a chase-and-recover delay.

use crate::field::{base_position, Base};
use crate::players::Fielder;
use crate::utils::constants::{
    OFF_TARGET_DELAY_MAX, OFF_TARGET_DELAY_MIN, THROW_ARC_FACTOR,
};
use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Outcome of one throw. `arrival` is measured from the moment of control.
#[derive(Debug, Clone, Copy)]
pub struct Throw {
    pub arrival: f64, // [s] after ball control
    pub on_target: bool,
}

/// Deterministic flight-plus-transfer estimate, used for advance decisions
/// that look at the throw before it happens.
pub fn throw_time_estimate(from: &Vector3<f64>, to: Base, fielder: &Fielder) -> f64 {
    let distance = (base_position(to) - from).norm();
    fielder.attributes.transfer_time
        + distance / fielder.attributes.arm_strength * (1.0 + THROW_ARC_FACTOR)
}

/// Simulate a throw from a field position to a base.
pub fn simulate_throw(
    from: &Vector3<f64>,
    to: Base,
    fielder: &Fielder,
    rng: &mut ChaCha8Rng,
) -> Throw {
    let mut arrival = throw_time_estimate(from, to, fielder);
    let on_target = rng.gen_bool(fielder.attributes.arm_accuracy.clamp(0.0, 1.0));
    if !on_target {
        arrival += rng.gen_range(OFF_TARGET_DELAY_MIN..OFF_TARGET_DELAY_MAX);
    }
    Throw { arrival, on_target }
}
