//! Fixed-step RK4 flight integration from contact to a terminal event.
//!
//! All state here lives in the trajectory frame (x toward the outfield,
//! y toward left field, z up). The fence test is the one place the
//! integrator touches field geometry, and it goes through the frame
//! conversion functions like every other boundary crossing.

use crate::field::Ballpark;
use crate::physics::{aero, frames, AirState, PhysicsError};
use crate::utils::constants::{CONTACT_HEIGHT, DEFAULT_TIMESTEP, MAX_FLIGHT_TIME};
use crate::utils::math::{deg_to_rad, mph_to_mps, rpm_to_rad_s};
use log::warn;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Ball state at contact, produced by an external at-bat model.
/// Trajectory frame, SI units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattedBallState {
    pub position: Vector3<f64>, // [m]
    pub velocity: Vector3<f64>, // [m/s]
    pub spin: Vector3<f64>,     // [rad/s]
}

impl BattedBallState {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>, spin: Vector3<f64>) -> Self {
        Self {
            position,
            velocity,
            spin,
        }
    }

    /// Boundary constructor from scouting units: mph, degrees, rpm.
    ///
    /// Spray angle is positive toward left field. Backspin is applied about
    /// the horizontal axis perpendicular to the exit direction; sidespin
    /// about the vertical axis.
    pub fn from_contact(
        exit_speed_mph: f64,
        launch_angle_deg: f64,
        spray_angle_deg: f64,
        backspin_rpm: f64,
        sidespin_rpm: f64,
    ) -> Self {
        let speed = mph_to_mps(exit_speed_mph);
        let launch = deg_to_rad(launch_angle_deg);
        let spray = deg_to_rad(spray_angle_deg);

        let velocity = Vector3::new(
            speed * launch.cos() * spray.cos(),
            speed * launch.cos() * spray.sin(),
            speed * launch.sin(),
        );

        // Horizontal exit direction; straight up the middle if degenerate
        let horiz = Vector3::new(velocity.x, velocity.y, 0.0);
        let exit_dir = if horiz.norm() > 1e-9 {
            horiz.normalize()
        } else {
            Vector3::x()
        };
        let backspin_axis = exit_dir.cross(&Vector3::z());
        let spin =
            backspin_axis * rpm_to_rad_s(backspin_rpm) + Vector3::z() * rpm_to_rad_s(sidespin_rpm);

        Self {
            position: Vector3::new(0.0, 0.0, CONTACT_HEIGHT),
            velocity,
            spin,
        }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        let all_finite = self.position.iter().all(|c| c.is_finite())
            && self.velocity.iter().all(|c| c.is_finite())
            && self.spin.iter().all(|c| c.is_finite());
        if !all_finite {
            return Err(PhysicsError::NonFiniteInput("batted ball state".into()));
        }
        Ok(())
    }
}

/// One point of the flight timeline, trajectory frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub t: f64,                 // [s] since contact
    pub position: Vector3<f64>, // [m]
    pub velocity: Vector3<f64>, // [m/s]
}

/// Why the flight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalEvent {
    /// Ball reached the ground plane; final sample is the interpolated
    /// crossing.
    Landing,
    /// Ball cleared the fence in the air.
    FenceClear,
    /// Ball struck the fence below the top.
    FenceCarom,
    /// A fielder caught the ball; injected by the fielding solver.
    Caught,
    /// Flight-time cap reached; treated as a dead ball upstream.
    Expired,
}

/// Sampled flight path ending in a terminal event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
    terminal: TerminalEvent,
}

impl Trajectory {
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn terminal(&self) -> TerminalEvent {
        self.terminal
    }

    /// Final sample: the landing/fence/catch point.
    pub fn terminal_sample(&self) -> &TrajectorySample {
        self.samples.last().expect("trajectory is never empty")
    }

    pub fn flight_time(&self) -> f64 {
        self.terminal_sample().t
    }

    pub fn apex_height(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.position.z)
            .fold(f64::MIN, f64::max)
    }

    /// Horizontal distance from the launch point to the terminal sample.
    pub fn carry_distance(&self) -> f64 {
        let start = &self.samples[0].position;
        let end = &self.terminal_sample().position;
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linearly interpolated state at time `t`, clamped to the sampled span.
    pub fn sample_at(&self, t: f64) -> TrajectorySample {
        let samples = &self.samples;
        if t <= samples[0].t {
            return samples[0];
        }
        let last = self.terminal_sample();
        if t >= last.t {
            return *last;
        }
        let idx = samples.partition_point(|s| s.t < t);
        let (a, b) = (&samples[idx - 1], &samples[idx]);
        let span = b.t - a.t;
        if span <= 0.0 {
            return *a;
        }
        let f = (t - a.t) / span;
        TrajectorySample {
            t,
            position: a.position + (b.position - a.position) * f,
            velocity: a.velocity + (b.velocity - a.velocity) * f,
        }
    }

    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        self.sample_at(t).position
    }

    pub fn velocity_at(&self, t: f64) -> Vector3<f64> {
        self.sample_at(t).velocity
    }

    /// A copy ending at `t` with a catch event, for when a fielder takes
    /// the ball out of the air.
    pub fn truncated_at_catch(&self, t: f64) -> Trajectory {
        let catch = self.sample_at(t);
        let mut samples: Vec<TrajectorySample> =
            self.samples.iter().copied().take_while(|s| s.t < t).collect();
        samples.push(catch);
        Trajectory {
            samples,
            terminal: TerminalEvent::Caught,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegratorParams {
    pub dt: f64, // [s]
    /// Keep every Nth step in the output stream; the terminal sample is
    /// always kept.
    pub sample_stride: usize,
    /// Spin decay time constant; None treats spin as constant over the
    /// flight.
    pub spin_decay_tau: Option<f64>, // [s]
    pub max_flight_time: f64, // [s]
}

impl Default for IntegratorParams {
    fn default() -> Self {
        Self {
            dt: DEFAULT_TIMESTEP,
            sample_stride: 10,
            spin_decay_tau: None,
            max_flight_time: MAX_FLIGHT_TIME,
        }
    }
}

impl IntegratorParams {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "timestep must be positive, got {}",
                self.dt
            )));
        }
        if self.sample_stride == 0 {
            return Err(PhysicsError::InvalidParameter(
                "sample stride must be at least 1".into(),
            ));
        }
        if !(self.max_flight_time.is_finite() && self.max_flight_time > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "flight-time cap must be positive, got {}",
                self.max_flight_time
            )));
        }
        Ok(())
    }
}

pub struct Integrator<'a> {
    air: &'a AirState,
    park: &'a Ballpark,
    params: IntegratorParams,
}

impl<'a> Integrator<'a> {
    pub fn new(air: &'a AirState, park: &'a Ballpark) -> Self {
        Self {
            air,
            park,
            params: IntegratorParams::default(),
        }
    }

    pub fn with_params(air: &'a AirState, park: &'a Ballpark, params: IntegratorParams) -> Self {
        Self { air, park, params }
    }

    /// Integrate from contact to landing, fence contact, or the dead-ball
    /// cap. Total on validated inputs; the only failures are contract
    /// violations.
    pub fn integrate(&self, ball: &BattedBallState) -> Result<Trajectory, PhysicsError> {
        ball.validate()?;
        self.air.validate()?;
        self.params.validate()?;

        let dt = self.params.dt;
        let ground_z = 0.0;

        let mut samples = Vec::with_capacity(
            (self.params.max_flight_time / dt) as usize / self.params.sample_stride + 2,
        );
        let mut position = ball.position;
        let mut velocity = ball.velocity;
        let mut t = 0.0;
        let mut step = 0usize;

        samples.push(TrajectorySample {
            t,
            position,
            velocity,
        });

        loop {
            let spin = self.spin_at(ball, t);
            let (next_position, next_velocity) = rk4_step(position, velocity, &spin, self.air, dt);
            let next_t = t + dt;
            step += 1;

            // Fence contact, checked in the field frame
            let field_pos = frames::field_from_trajectory(&next_position);
            let range = (field_pos.x * field_pos.x + field_pos.y * field_pos.y).sqrt();
            let (fence_dist, fence_height) = self.park.fence_at(Ballpark::bearing_of(&field_pos));
            if range >= fence_dist && next_position.z > ground_z {
                let prev_field = frames::field_from_trajectory(&position);
                let prev_range = (prev_field.x * prev_field.x + prev_field.y * prev_field.y).sqrt();
                let f = if range - prev_range > 1e-12 {
                    ((fence_dist - prev_range) / (range - prev_range)).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let contact = TrajectorySample {
                    t: t + f * dt,
                    position: position + (next_position - position) * f,
                    velocity: velocity + (next_velocity - velocity) * f,
                };
                let terminal = if contact.position.z >= fence_height {
                    TerminalEvent::FenceClear
                } else {
                    TerminalEvent::FenceCarom
                };
                samples.push(contact);
                return Ok(Trajectory { samples, terminal });
            }

            // Ground crossing from above
            if next_position.z <= ground_z && velocity.z < 0.0 {
                let dz = next_position.z - position.z;
                let f = if dz.abs() > 1e-12 {
                    ((ground_z - position.z) / dz).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let mut landing = TrajectorySample {
                    t: t + f * dt,
                    position: position + (next_position - position) * f,
                    velocity: velocity + (next_velocity - velocity) * f,
                };
                landing.position.z = ground_z;
                samples.push(landing);
                return Ok(Trajectory {
                    samples,
                    terminal: TerminalEvent::Landing,
                });
            }

            position = next_position;
            velocity = next_velocity;
            t = next_t;

            if t >= self.params.max_flight_time {
                warn!(
                    "flight exceeded {:.1} s cap; calling it a dead ball",
                    self.params.max_flight_time
                );
                samples.push(TrajectorySample {
                    t,
                    position,
                    velocity,
                });
                return Ok(Trajectory {
                    samples,
                    terminal: TerminalEvent::Expired,
                });
            }

            if step % self.params.sample_stride == 0 {
                samples.push(TrajectorySample {
                    t,
                    position,
                    velocity,
                });
            }
        }
    }

    fn spin_at(&self, ball: &BattedBallState, t: f64) -> Vector3<f64> {
        match self.params.spin_decay_tau {
            Some(tau) => ball.spin * (-t / tau).exp(),
            None => ball.spin,
        }
    }
}

/// Classic RK4 step on the (position, velocity) state pair.
fn rk4_step(
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    spin: &Vector3<f64>,
    air: &AirState,
    dt: f64,
) -> (Vector3<f64>, Vector3<f64>) {
    let a1 = aero::accel_from_air(&velocity, spin, air);
    let (p1, v1) = (velocity, a1);

    let v_mid1 = velocity + a1 * (dt / 2.0);
    let a2 = aero::accel_from_air(&v_mid1, spin, air);
    let (p2, v2) = (v_mid1, a2);

    let v_mid2 = velocity + a2 * (dt / 2.0);
    let a3 = aero::accel_from_air(&v_mid2, spin, air);
    let (p3, v3) = (v_mid2, a3);

    let v_end = velocity + a3 * dt;
    let a4 = aero::accel_from_air(&v_end, spin, air);
    let (p4, v4) = (v_end, a4);

    let next_position = position + (p1 + p2 * 2.0 + p3 * 2.0 + p4) * (dt / 6.0);
    let next_velocity = velocity + (v1 + v2 * 2.0 + v3 * 2.0 + v4) * (dt / 6.0);
    (next_position, next_velocity)
}
