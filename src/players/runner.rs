use crate::field::{distance_between_bases, Base};
use crate::players::kinematics::time_to_cover;
use crate::players::ratings;
use serde::{Deserialize, Serialize};

/// Baserunning physical attributes, SI units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerAttributes {
    pub top_sprint_speed: f64, // [m/s]
    pub acceleration: f64,     // [m/s^2]
    pub reaction_time: f64,    // [s]
    pub slide_time: f64,       // [s]
    pub baserunning_iq: f64,   // [0, 1]
}

impl Default for RunnerAttributes {
    fn default() -> Self {
        Self::average()
    }
}

impl RunnerAttributes {
    pub fn average() -> Self {
        Self::from_rating(50_000)
    }

    pub fn from_rating(rating: u32) -> Self {
        Self {
            top_sprint_speed: ratings::sprint_speed(rating),
            acceleration: ratings::acceleration(rating),
            reaction_time: ratings::reaction_time(rating),
            slide_time: ratings::slide_time(rating),
            baserunning_iq: ratings::baserunning_iq(rating),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseRunner {
    pub name: String,
    pub attributes: RunnerAttributes,
}

impl BaseRunner {
    pub fn new(name: impl Into<String>, attributes: RunnerAttributes) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    pub fn average(name: impl Into<String>) -> Self {
        Self::new(name, RunnerAttributes::average())
    }

    /// Running time between two bases along the basepath.
    ///
    /// A runner already in motion (forced on contact) skips the reaction
    /// delay; slide time is the tag-play cost and is added by the race, not
    /// here.
    pub fn time_between_bases(&self, from: Base, to: Base, already_running: bool) -> f64 {
        let distance = running_distance(from, to);
        let reaction = if already_running {
            0.0
        } else {
            self.attributes.reaction_time
        };
        reaction
            + time_to_cover(
                distance,
                self.attributes.top_sprint_speed,
                self.attributes.acceleration,
            )
    }
}

/// Path length along the bases (through intermediate bags), not the chord.
fn running_distance(from: Base, to: Base) -> f64 {
    let mut distance = 0.0;
    let mut current = from;
    // At most four legs in a trip around the diamond
    for _ in 0..4 {
        if current == to {
            break;
        }
        let next = current.next();
        distance += distance_between_bases(current, next);
        current = next;
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::BASE_PATH_LENGTH;
    use approx::assert_relative_eq;

    #[test]
    fn path_length_goes_through_the_bags() {
        assert_relative_eq!(
            running_distance(Base::First, Base::Second),
            BASE_PATH_LENGTH,
            epsilon = 1e-9
        );
        // Second to home rounds third: two legs, not the chord
        assert_relative_eq!(
            running_distance(Base::Second, Base::Home),
            2.0 * BASE_PATH_LENGTH,
            epsilon = 1e-9
        );
    }

    #[test]
    fn forced_runner_skips_reaction() {
        let runner = BaseRunner::average("r1");
        let jumped = runner.time_between_bases(Base::First, Base::Second, true);
        let flat = runner.time_between_bases(Base::First, Base::Second, false);
        assert_relative_eq!(
            flat - jumped,
            runner.attributes.reaction_time,
            epsilon = 1e-12
        );
    }

    #[test]
    fn faster_runner_arrives_sooner() {
        let slow = BaseRunner::new("slow", RunnerAttributes::from_rating(10_000));
        let fast = BaseRunner::new("fast", RunnerAttributes::from_rating(90_000));
        assert!(
            fast.time_between_bases(Base::First, Base::Second, true)
                < slow.time_between_bases(Base::First, Base::Second, true)
        );
    }
}
