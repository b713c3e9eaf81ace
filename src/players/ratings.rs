//! The exposed mapping from the 0-100000 scouting scale to physical units.
//!
//! Each attribute maps linearly across its documented range. These ranges
//! are a compatibility contract: league-wide outcome rates depend on them,
//! so a different attribute scale must land inside the same physical spans.
//! Pitcher command has no rating mapping here; pitch generation is an
//! external collaborator and its error model is not derived from a rating.

pub const RATING_MAX: f64 = 100_000.0;

pub const SPRINT_SPEED_RANGE: (f64, f64) = (7.5, 9.5); // m/s
pub const ACCELERATION_RANGE: (f64, f64) = (4.0, 7.0); // m/s^2
pub const REACTION_TIME_RANGE: (f64, f64) = (0.15, 0.35); // s
pub const ROUTE_EFFICIENCY_RANGE: (f64, f64) = (0.85, 0.99);
pub const ARM_STRENGTH_RANGE: (f64, f64) = (31.0, 42.0); // m/s (70-95 mph)
pub const ARM_ACCURACY_RANGE: (f64, f64) = (0.85, 0.98);
pub const TRANSFER_TIME_RANGE: (f64, f64) = (0.4, 0.8); // s
pub const SLIDE_TIME_RANGE: (f64, f64) = (0.3, 0.6); // s
pub const BASERUNNING_IQ_RANGE: (f64, f64) = (0.0, 1.0);

#[inline]
fn fraction(rating: u32) -> f64 {
    (f64::from(rating) / RATING_MAX).clamp(0.0, 1.0)
}

/// Linear map: higher rating, bigger value.
#[inline]
fn scale(rating: u32, range: (f64, f64)) -> f64 {
    range.0 + (range.1 - range.0) * fraction(rating)
}

/// Linear map for cost-like attributes: higher rating, smaller value.
#[inline]
fn scale_inverted(rating: u32, range: (f64, f64)) -> f64 {
    range.1 - (range.1 - range.0) * fraction(rating)
}

pub fn sprint_speed(rating: u32) -> f64 {
    scale(rating, SPRINT_SPEED_RANGE)
}

pub fn acceleration(rating: u32) -> f64 {
    scale(rating, ACCELERATION_RANGE)
}

pub fn reaction_time(rating: u32) -> f64 {
    scale_inverted(rating, REACTION_TIME_RANGE)
}

pub fn route_efficiency(rating: u32) -> f64 {
    scale(rating, ROUTE_EFFICIENCY_RANGE)
}

pub fn arm_strength(rating: u32) -> f64 {
    scale(rating, ARM_STRENGTH_RANGE)
}

pub fn arm_accuracy(rating: u32) -> f64 {
    scale(rating, ARM_ACCURACY_RANGE)
}

pub fn transfer_time(rating: u32) -> f64 {
    scale_inverted(rating, TRANSFER_TIME_RANGE)
}

pub fn slide_time(rating: u32) -> f64 {
    scale_inverted(rating, SLIDE_TIME_RANGE)
}

pub fn baserunning_iq(rating: u32) -> f64 {
    scale(rating, BASERUNNING_IQ_RANGE)
}
