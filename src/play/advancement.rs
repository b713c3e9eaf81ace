//! Runner-advancement decisions on balls in play.
//!
//! Depth thresholds come from the field-frame Y coordinate of the point
//! where the defense controls the ball. Constants are SI meters; the foot
//! equivalents are noted because scouts talk in feet.

use crate::field::Base;
use serde::{Deserialize, Serialize};

pub const SINGLE_SCORE_CLEAR_DEPTH: f64 = 54.86; // 180 ft
pub const SINGLE_SCORE_HOLD_DEPTH: f64 = 36.58; // 120 ft
pub const SINGLE_THIRD_CLEAR_DEPTH: f64 = 45.72; // 150 ft
pub const SINGLE_SECOND_CLEAR_DEPTH: f64 = 54.86; // 180 ft
pub const TAG_UP_DEPTH: f64 = 67.06; // 220 ft

pub const P_SCORE_FROM_THIRD_DEEP: f64 = 0.95;
pub const P_SCORE_FROM_THIRD_MID: f64 = 0.80;
pub const P_THIRD_FROM_SECOND_DEEP: f64 = 0.90;
pub const P_THIRD_FROM_SECOND_SHALLOW: f64 = 0.60;
pub const P_SECOND_FROM_FIRST_DEEP: f64 = 0.85;

/// How much baserunning IQ sways a go/hold call either side of the table
/// probability.
const IQ_SWING: f64 = 0.1;

/// Raw hit classification used to drive advancement targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitType {
    Single,
    Double,
    Triple,
    HomeRun,
}

impl HitType {
    pub fn bases(&self) -> u8 {
        match self {
            HitType::Single => 1,
            HitType::Double => 2,
            HitType::Triple => 3,
            HitType::HomeRun => 4,
        }
    }
}

/// What a runner elects to do on a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    Hold,
    /// Uncontested advance of this many bases
    Clean(u8),
    /// Aggressive advance that draws a throw; taken with this probability
    Contested { target: Base, attempt_prob: f64 },
}

/// Where a runner ends up after advancing `n` bases; None means home.
pub fn destination(base: Base, n: u8) -> Option<Base> {
    if n >= base.bases_to_home() {
        return None;
    }
    let mut current = base;
    for _ in 0..n {
        current = current.next();
    }
    Some(current)
}

fn confidence(p: f64, iq: f64) -> f64 {
    (p + (iq - 0.5) * 2.0 * IQ_SWING).clamp(0.05, 0.99)
}

/// Decision table for a runner on `base` when the ball falls for a hit.
///
/// Forced runners and two-out runners move without a decision: with two
/// outs everyone is off on contact, and a forced runner has nowhere else
/// to go. Everyone else weighs the depth of the ball.
pub fn decide_on_hit(
    base: Base,
    hit: HitType,
    depth: f64,
    outs: u8,
    forced: bool,
    iq: f64,
) -> Advance {
    if outs >= 2 || forced {
        return Advance::Clean(hit.bases());
    }

    match (base, hit) {
        (Base::Third, HitType::Single) => {
            if depth > SINGLE_SCORE_CLEAR_DEPTH {
                Advance::Contested {
                    target: Base::Home,
                    attempt_prob: confidence(P_SCORE_FROM_THIRD_DEEP, iq),
                }
            } else if depth > SINGLE_SCORE_HOLD_DEPTH {
                Advance::Contested {
                    target: Base::Home,
                    attempt_prob: confidence(P_SCORE_FROM_THIRD_MID, iq),
                }
            } else {
                Advance::Hold
            }
        }
        (Base::Second, HitType::Single) => {
            let p = if depth > SINGLE_THIRD_CLEAR_DEPTH {
                P_THIRD_FROM_SECOND_DEEP
            } else {
                P_THIRD_FROM_SECOND_SHALLOW
            };
            Advance::Contested {
                target: Base::Third,
                attempt_prob: confidence(p, iq),
            }
        }
        (Base::First, HitType::Single) => {
            if depth > SINGLE_SECOND_CLEAR_DEPTH {
                Advance::Contested {
                    target: Base::Second,
                    attempt_prob: confidence(P_SECOND_FROM_FIRST_DEEP, iq),
                }
            } else {
                Advance::Hold
            }
        }
        (_, HitType::Double) => Advance::Clean(2),
        (_, HitType::Triple) => Advance::Clean(3),
        (_, HitType::HomeRun) => Advance::Clean(4),
        (Base::Home, _) => Advance::Hold,
    }
}

/// Tag-up rule: only the runner on third, with fewer than two outs, on a
/// ball caught deep enough.
pub fn tag_up_eligible(base: Base, catch_depth: f64, outs: u8) -> bool {
    base == Base::Third && outs < 2 && catch_depth > TAG_UP_DEPTH
}
