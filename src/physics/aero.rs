//! Aerodynamic force model for a spinning baseball.
//!
//! All functions are pure and allocation-free; the integrator calls them at
//! every sub-step. Velocities and spins are trajectory-frame vectors in SI
//! units. NaN inputs propagate.

use crate::physics::AirState;
use crate::utils::constants::{
    BALL_CROSS_SECTION, BALL_DIAMETER, BALL_MASS, BALL_RADIUS, CD_BASE, CD_K_SUBCRITICAL,
    CD_K_SUPERCRITICAL, CD_MAX, CD_MIN, CD_SPIN_PER_RAD_S, GRAVITY, LIFT_SAT_A, LIFT_SAT_B,
    RE_CRITICAL_HIGH, RE_CRITICAL_LOW, RE_REGIME_WIDTH,
};
use nalgebra::Vector3;

const SPEED_EPSILON: f64 = 1e-6;

/// Reynolds number for the ball at the given airspeed.
#[inline]
pub fn reynolds(speed: f64, air: &AirState) -> f64 {
    air.density * speed * BALL_DIAMETER / air.viscosity
}

/// Reynolds-dependent drag coefficient.
///
/// Captures the drag crisis: drag rises below the critical band and falls
/// above it, so low-exit-velocity balls are not systematically over-flown.
pub fn drag_coefficient(velocity: &Vector3<f64>, air: &AirState) -> f64 {
    let re = reynolds(velocity.norm(), air);
    let cd = if re < RE_CRITICAL_LOW {
        CD_BASE + CD_K_SUBCRITICAL * ((RE_CRITICAL_LOW - re) / RE_REGIME_WIDTH).min(1.0)
    } else if re > RE_CRITICAL_HIGH {
        CD_BASE - CD_K_SUPERCRITICAL * ((re - RE_CRITICAL_HIGH) / RE_REGIME_WIDTH).min(1.0)
    } else {
        CD_BASE
    };
    cd.clamp(CD_MIN, CD_MAX)
}

/// Drag coefficient with the empirical spin-induced term added.
pub fn spin_adjusted_cd(velocity: &Vector3<f64>, spin: &Vector3<f64>, air: &AirState) -> f64 {
    (drag_coefficient(velocity, air) + CD_SPIN_PER_RAD_S * spin.norm()).clamp(CD_MIN, CD_MAX)
}

/// Lift coefficient from the spin factor S = omega*r/|v|.
///
/// Monotone and saturating: CL -> S/B for small S, 1/A for large S.
pub fn lift_coefficient(velocity: &Vector3<f64>, spin: &Vector3<f64>) -> f64 {
    let speed = velocity.norm();
    if speed < SPEED_EPSILON {
        return 0.0;
    }
    let spin_factor = spin.norm() * BALL_RADIUS / speed;
    spin_factor / (LIFT_SAT_A * spin_factor + LIFT_SAT_B)
}

/// Total acceleration on the ball: drag + Magnus + gravity.
///
/// Drag and lift act on the velocity relative to the moving air, so wind
/// coupling falls out of the same two terms. Drag opposes the relative
/// velocity; the Magnus acceleration acts along spin_hat x v_hat.
pub fn accel_from_air(
    velocity: &Vector3<f64>,
    spin: &Vector3<f64>,
    air: &AirState,
) -> Vector3<f64> {
    let gravity = Vector3::new(0.0, 0.0, -GRAVITY);

    let rel = velocity - air.wind;
    let rel_speed = rel.norm();
    if rel_speed < SPEED_EPSILON {
        return gravity;
    }
    let rel_hat = rel / rel_speed;

    // q/m = dynamic pressure times area over mass
    let q_per_mass = 0.5 * air.density * BALL_CROSS_SECTION * rel_speed * rel_speed / BALL_MASS;

    let cd = spin_adjusted_cd(&rel, spin, air);
    let drag = -q_per_mass * cd * rel_hat;

    let spin_norm = spin.norm();
    let magnus = if spin_norm > SPEED_EPSILON {
        let cl = lift_coefficient(&rel, spin);
        let dir = (spin / spin_norm).cross(&rel_hat);
        let dir_norm = dir.norm();
        if dir_norm > SPEED_EPSILON {
            q_per_mass * cl * dir / dir_norm
        } else {
            Vector3::zeros()
        }
    } else {
        Vector3::zeros()
    };

    drag + magnus + gravity
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn backspin(rad_s: f64) -> Vector3<f64> {
        // Backspin for a ball moving along +x
        Vector3::new(0.0, -rad_s, 0.0)
    }

    #[test]
    fn drag_magnitude_matches_definition() {
        let air = AirState::sea_level();
        let v = Vector3::new(40.0, 0.0, 10.0);
        let spin = Vector3::zeros();

        let accel = accel_from_air(&v, &spin, &air);
        let drag = accel - Vector3::new(0.0, 0.0, -GRAVITY);

        let speed = v.norm();
        let cd = spin_adjusted_cd(&v, &spin, &air);
        let expected =
            0.5 * air.density * cd * BALL_CROSS_SECTION * speed * speed / BALL_MASS;
        assert_relative_eq!(drag.norm(), expected, epsilon = 1e-10);
        // Drag opposes motion
        assert!(drag.dot(&v) < 0.0);
    }

    #[test]
    fn cd_monotone_around_the_crisis() {
        let air = AirState::sea_level();
        // speed for a given Re: v = Re * mu / (rho * D)
        let speed_at = |re: f64| re * air.viscosity / (air.density * BALL_DIAMETER);

        // Non-increasing above the lower bound
        let mut prev = f64::INFINITY;
        for re in [200_000.0, 220_000.0, 250_000.0, 270_000.0, 300_000.0, 400_000.0] {
            let cd = drag_coefficient(&Vector3::new(speed_at(re), 0.0, 0.0), &air);
            assert!(cd <= prev + 1e-12, "CD rose with Re at Re={re}");
            prev = cd;
        }

        // Non-decreasing up to the upper bound (scanning downward)
        let mut prev = f64::INFINITY;
        for re in [250_000.0, 230_000.0, 200_000.0, 180_000.0, 120_000.0, 60_000.0] {
            let cd = drag_coefficient(&Vector3::new(speed_at(re), 0.0, 0.0), &air);
            assert!(cd >= prev - 1e-12 || prev == f64::INFINITY, "CD fell toward low Re at Re={re}");
            prev = cd;
        }
    }

    #[test]
    fn cd_flat_in_critical_band() {
        let air = AirState::sea_level();
        let speed_at = |re: f64| re * air.viscosity / (air.density * BALL_DIAMETER);
        let a = drag_coefficient(&Vector3::new(speed_at(210_000.0), 0.0, 0.0), &air);
        let b = drag_coefficient(&Vector3::new(speed_at(240_000.0), 0.0, 0.0), &air);
        assert_relative_eq!(a, CD_BASE);
        assert_relative_eq!(b, CD_BASE);
    }

    #[test]
    fn spin_increases_drag() {
        let air = AirState::sea_level();
        let v = Vector3::new(44.7, 0.0, 0.0);
        let none = spin_adjusted_cd(&v, &Vector3::zeros(), &air);
        let some = spin_adjusted_cd(&v, &backspin(188.5), &air);
        assert!(some > none);
    }

    #[test]
    fn lift_is_monotone_and_saturating() {
        let v = Vector3::new(44.7, 0.0, 0.0);
        let cl_low = lift_coefficient(&v, &backspin(100.0));
        let cl_mid = lift_coefficient(&v, &backspin(200.0));
        let cl_high = lift_coefficient(&v, &backspin(2000.0));
        assert!(cl_low < cl_mid);
        assert!(cl_mid < cl_high);
        assert!(cl_high < 1.0 / LIFT_SAT_A + 1e-9);
    }

    #[test]
    fn backspin_lifts_the_ball() {
        let air = AirState::sea_level();
        let v = Vector3::new(40.0, 0.0, 5.0);
        let with_spin = accel_from_air(&v, &backspin(188.5), &air);
        let without = accel_from_air(&v, &Vector3::zeros(), &air);
        assert!(
            with_spin.z > without.z,
            "backspin should add upward acceleration"
        );
    }

    #[test]
    fn tailwind_reduces_drag() {
        let mut air = AirState::sea_level();
        let v = Vector3::new(40.0, 0.0, 0.0);
        let still = accel_from_air(&v, &Vector3::zeros(), &air);
        air.wind = Vector3::new(5.0, 0.0, 0.0);
        let tail = accel_from_air(&v, &Vector3::zeros(), &air);
        assert!(tail.x > still.x, "tailwind should shrink the decelerating drag");
    }

    #[test]
    fn deterministic_bit_identical() {
        let air = AirState::sea_level();
        let v = Vector3::new(41.3, 2.7, 18.9);
        let spin = Vector3::new(10.0, -150.0, 30.0);
        let a = accel_from_air(&v, &spin, &air);
        let b = accel_from_air(&v, &spin, &air);
        assert_eq!(a, b);
    }
}
