//! Post-landing ball motion: a short bounce phase followed by rolling
//! deceleration. Everything here is in the field frame, since the flight
//! is over and the fielding race happens on field geometry.

use crate::field::INFIELD_RADIUS;
use crate::utils::constants::{
    GRAVITY, GROUND_AIR_DECEL, RESTITUTION_DIRT, RESTITUTION_GRASS, ROLLING_FRICTION_DIRT,
    ROLLING_FRICTION_GRASS,
};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Vertical speed below which the ball stops hopping and rolls.
const BOUNCE_CUTOFF: f64 = 0.5; // m/s
const MAX_BOUNCES: usize = 3;
/// Horizontal speed fraction lost per bounce, scaled by surface friction.
const BOUNCE_HORIZONTAL_LOSS: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    InfieldDirt,
    OutfieldGrass,
}

impl Surface {
    /// Surface under a field-frame position.
    pub fn at(position: &Vector3<f64>) -> Surface {
        let range = (position.x * position.x + position.y * position.y).sqrt();
        if range < INFIELD_RADIUS {
            Surface::InfieldDirt
        } else {
            Surface::OutfieldGrass
        }
    }

    pub fn restitution(&self) -> f64 {
        match self {
            Surface::InfieldDirt => RESTITUTION_DIRT,
            Surface::OutfieldGrass => RESTITUTION_GRASS,
        }
    }

    pub fn rolling_friction(&self) -> f64 {
        match self {
            Surface::InfieldDirt => ROLLING_FRICTION_DIRT,
            Surface::OutfieldGrass => ROLLING_FRICTION_GRASS,
        }
    }
}

/// Rolling ball after the bounce phase has been folded in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundBall {
    /// Where rolling starts, field frame, z = 0
    pub roll_start: Vector3<f64>,
    /// Unit travel direction in the ground plane
    pub direction: Vector3<f64>,
    /// Speed at roll start [m/s]
    pub initial_speed: f64,
    /// Absolute time (since contact) at which rolling starts [s]
    pub roll_start_time: f64,
    /// Constant deceleration while rolling [m/s^2]
    pub decel: f64,
}

impl GroundBall {
    /// Fold the bounce phase into a rolling state.
    ///
    /// Each hop reflects the vertical speed through the coefficient of
    /// restitution and bleeds a little horizontal speed; after a few hops
    /// (or once the hop is negligible) the ball rolls.
    pub fn from_landing(t_landing: f64, position: &Vector3<f64>, velocity: &Vector3<f64>) -> Self {
        let surface = Surface::at(position);
        let restitution = surface.restitution();
        let friction = surface.rolling_friction();

        let horizontal = Vector3::new(velocity.x, velocity.y, 0.0);
        let mut speed = horizontal.norm();
        let direction = if speed > 1e-9 {
            horizontal / speed
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };

        let mut pos = Vector3::new(position.x, position.y, 0.0);
        let mut vz = velocity.z.abs() * restitution;
        let mut t = t_landing;

        let mut bounces = 0;
        while bounces < MAX_BOUNCES && vz > BOUNCE_CUTOFF {
            let hop_time = 2.0 * vz / GRAVITY;
            pos += direction * (speed * hop_time);
            t += hop_time;
            speed *= 1.0 - friction * BOUNCE_HORIZONTAL_LOSS;
            vz *= restitution;
            bounces += 1;
        }

        Self {
            roll_start: pos,
            direction,
            initial_speed: speed,
            roll_start_time: t,
            decel: GRAVITY * friction + GROUND_AIR_DECEL,
        }
    }

    /// Time, measured from contact, at which the ball stops on its own.
    pub fn time_to_stop(&self) -> f64 {
        self.roll_start_time + self.initial_speed / self.decel
    }

    /// Ball speed at absolute time `t`.
    pub fn speed_at(&self, t: f64) -> f64 {
        if t <= self.roll_start_time {
            return self.initial_speed;
        }
        (self.initial_speed - self.decel * (t - self.roll_start_time)).max(0.0)
    }

    /// Ball position at absolute time `t`, field frame.
    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        if t <= self.roll_start_time {
            return self.roll_start;
        }
        let dt = (t - self.roll_start_time).min(self.initial_speed / self.decel);
        let distance = self.initial_speed * dt - 0.5 * self.decel * dt * dt;
        self.roll_start + self.direction * distance
    }

    pub fn stop_position(&self) -> Vector3<f64> {
        self.position_at(self.time_to_stop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn surface_by_radius() {
        assert_eq!(
            Surface::at(&Vector3::new(5.0, 20.0, 0.0)),
            Surface::InfieldDirt
        );
        assert_eq!(
            Surface::at(&Vector3::new(0.0, 80.0, 0.0)),
            Surface::OutfieldGrass
        );
    }

    #[test]
    fn roller_decelerates_to_a_stop() {
        let gb = GroundBall::from_landing(
            0.4,
            &Vector3::new(0.0, 10.0, 0.0),
            &Vector3::new(0.0, 25.0, -3.0),
        );

        let t_stop = gb.time_to_stop();
        assert!(t_stop > gb.roll_start_time);
        assert_relative_eq!(gb.speed_at(t_stop), 0.0, epsilon = 1e-9);

        // Past the stop time the ball does not move
        let at_stop = gb.position_at(t_stop);
        let later = gb.position_at(t_stop + 5.0);
        assert_relative_eq!(at_stop, later, epsilon = 1e-12);
    }

    #[test]
    fn position_advances_along_direction() {
        let gb = GroundBall::from_landing(
            0.0,
            &Vector3::new(0.0, 5.0, 0.0),
            &Vector3::new(3.0, 18.0, -2.0),
        );
        let early = gb.position_at(gb.roll_start_time + 0.2);
        let later = gb.position_at(gb.roll_start_time + 0.8);
        let step = later - early;
        assert!(step.norm() > 0.0);
        // Travel stays parallel to the launch direction
        let cosine = step.normalize().dot(&gb.direction);
        assert_relative_eq!(cosine, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn bouncier_landing_carries_farther_before_rolling() {
        let soft = GroundBall::from_landing(
            0.0,
            &Vector3::new(0.0, 40.0, 0.0),
            &Vector3::new(0.0, 20.0, -2.0),
        );
        let steep = GroundBall::from_landing(
            0.0,
            &Vector3::new(0.0, 40.0, 0.0),
            &Vector3::new(0.0, 20.0, -12.0),
        );
        // A steeper impact hops longer before it settles into a roll
        assert!(steep.roll_start_time > soft.roll_start_time);
    }

    #[test]
    fn dirt_slows_less_than_grass() {
        let infield = GroundBall::from_landing(
            0.0,
            &Vector3::new(0.0, 15.0, 0.0),
            &Vector3::new(0.0, 20.0, -2.0),
        );
        let outfield = GroundBall::from_landing(
            0.0,
            &Vector3::new(0.0, 60.0, 0.0),
            &Vector3::new(0.0, 20.0, -2.0),
        );
        assert!(infield.decel < outfield.decel);
    }
}
