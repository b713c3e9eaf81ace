//! Interception solver: who gets to the ball first, in the air or on the
//! ground, and when they control it.
//!
//! Trajectory samples arrive in the trajectory frame; everything is
//! converted through `physics::frames` before it meets fielder positions.

use crate::field::{Ballpark, DefensiveRole};
use crate::physics::{frames, GroundBall, TerminalEvent, Trajectory};
use crate::players::Fielder;
use crate::utils::errors::SimError;
use crate::utils::math::rad_to_deg;
use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Catch margins. A fielder arriving this far ahead of the ball makes a
/// routine play; anything tighter is dive territory and rolls the dice.
const ROUTINE_MARGIN: f64 = 0.25; // s
/// Base and per-margin components of the dive-catch probability.
const DIVE_BASE_PROB: f64 = 0.30;
const DIVE_PROB_SLOPE: f64 = 2.5; // per second of margin
const DIVE_PROB_CAP: f64 = 0.95;

/// Earliest moment anyone can glove a batted ball.
const MIN_CATCH_TIME: f64 = 0.25; // s

/// Scan resolution for the ground-phase race.
const GROUND_SCAN_STEP: f64 = 0.05; // s

/// Horizontal speed retained after a fence carom.
const WALL_DAMPING: f64 = 0.35;

/// Times closer than this are a tie and fall to the next tie-break.
const TIME_TIE_EPS: f64 = 1e-3; // s
const DISTANCE_TIE_EPS: f64 = 1e-2; // m

/// Batted-ball class by launch angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallClass {
    GroundBall,
    LineDrive,
    FlyBall,
    PopUp,
}

impl BallClass {
    /// Classify from the launch velocity (trajectory frame).
    pub fn of_launch(velocity: &Vector3<f64>) -> BallClass {
        let horizontal = (velocity.x * velocity.x + velocity.y * velocity.y).sqrt();
        let launch_deg = rad_to_deg(velocity.z.atan2(horizontal));
        if launch_deg < 10.0 {
            BallClass::GroundBall
        } else if launch_deg < 25.0 {
            BallClass::LineDrive
        } else if launch_deg < 50.0 {
            BallClass::FlyBall
        } else {
            BallClass::PopUp
        }
    }

    pub fn of_trajectory(trajectory: &Trajectory) -> BallClass {
        Self::of_launch(&trajectory.samples()[0].velocity)
    }

    pub fn is_airborne(&self) -> bool {
        !matches!(self, BallClass::GroundBall)
    }
}

/// How the ball was brought under control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKind {
    AirCatch,
    GroundField,
    FenceCarom,
}

/// Who controlled the ball, where, and when. Times are measured from
/// contact; positions are field frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldingResult {
    /// Index into the fielder slice handed to the solver
    pub fielder: usize,
    pub role: DefensiveRole,
    pub control_time: f64,
    pub control_position: Vector3<f64>,
    pub kind: ControlKind,
    /// False when nobody intercepted and the ball had to be chased down
    pub controlled: bool,
    /// Quality of the gather, reserved for error modelling downstream
    pub cleanness: f64,
}

pub struct FieldingSolver<'a> {
    park: &'a Ballpark,
}

struct Candidate {
    fielder: usize,
    time: f64,
    position: Vector3<f64>,
    /// Ground the fielder has to cover to make the play
    run_distance: f64,
    /// Slack between ball arrival and fielder arrival
    margin: f64,
}

impl<'a> FieldingSolver<'a> {
    pub fn new(park: &'a Ballpark) -> Self {
        Self { park }
    }

    /// Find the first fielder to the ball, racing the flight first and the
    /// bounce-and-roll second.
    pub fn best_interception(
        &self,
        trajectory: &Trajectory,
        fielders: &[Fielder],
        class: BallClass,
        rng: &mut ChaCha8Rng,
    ) -> Result<FieldingResult, SimError> {
        if fielders.is_empty() {
            return Err(SimError::EmptyRoster);
        }

        if class.is_airborne() && trajectory.terminal() != TerminalEvent::FenceClear {
            if let Some(candidate) = self.best_air_candidate(trajectory, fielders) {
                let routine = candidate.margin >= ROUTINE_MARGIN;
                let made_catch = if routine {
                    true
                } else {
                    let p = ((DIVE_BASE_PROB + DIVE_PROB_SLOPE * candidate.margin)
                        .min(DIVE_PROB_CAP))
                        * fielders[candidate.fielder].attributes.route_efficiency;
                    rng.gen_bool(p.clamp(0.0, 1.0))
                };
                if made_catch {
                    return Ok(FieldingResult {
                        fielder: candidate.fielder,
                        role: fielders[candidate.fielder].role,
                        control_time: candidate.time,
                        control_position: candidate.position,
                        kind: ControlKind::AirCatch,
                        controlled: true,
                        cleanness: if routine {
                            1.0
                        } else {
                            0.5 + candidate.margin / ROUTINE_MARGIN * 0.4
                        },
                    });
                }
            }
        }

        self.ground_interception(trajectory, fielders)
    }

    /// Air phase: for every catchable sample, the earliest fielder arrival
    /// wins. Ties go to the shorter route, then to role priority.
    fn best_air_candidate(
        &self,
        trajectory: &Trajectory,
        fielders: &[Fielder],
    ) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for (idx, fielder) in fielders.iter().enumerate() {
            let reach = fielder.role.reach_height();
            for sample in trajectory.samples() {
                if sample.t < MIN_CATCH_TIME || sample.position.z > reach {
                    continue;
                }
                let position = frames::field_from_trajectory(&sample.position);
                let run_distance = (position - fielder.home).norm();
                let arrival = fielder.time_to_reach(&position);
                if arrival > sample.t {
                    continue;
                }
                let candidate = Candidate {
                    fielder: idx,
                    time: sample.t,
                    position,
                    run_distance,
                    margin: sample.t - arrival,
                };
                if better(&candidate, &best, fielders) {
                    best = Some(candidate);
                }
                break; // earliest catchable sample for this fielder
            }
        }

        best
    }

    /// Ground phase: race every fielder against the bounce-and-roll.
    fn ground_interception(
        &self,
        trajectory: &Trajectory,
        fielders: &[Fielder],
    ) -> Result<FieldingResult, SimError> {
        let ball = self.ground_ball_from(trajectory);
        let mut kind = match trajectory.terminal() {
            TerminalEvent::FenceCarom => ControlKind::FenceCarom,
            _ => ControlKind::GroundField,
        };

        let stop_time = ball.time_to_stop();
        let mut best: Option<Candidate> = None;

        for (idx, fielder) in fielders.iter().enumerate() {
            let mut t = ball.roll_start_time.max(MIN_CATCH_TIME);
            while t <= stop_time {
                let position = ball.position_at(t);
                if self.park.beyond_fence(&position) {
                    break;
                }
                let arrival = fielder.time_to_reach(&position);
                if arrival <= t {
                    let candidate = Candidate {
                        fielder: idx,
                        time: t,
                        position,
                        run_distance: (position - fielder.home).norm(),
                        margin: t - arrival,
                    };
                    if better(&candidate, &best, fielders) {
                        best = Some(candidate);
                    }
                    break; // earliest interception for this fielder
                }
                t += GROUND_SCAN_STEP;
            }
        }

        if let Some(candidate) = best {
            return Ok(FieldingResult {
                fielder: candidate.fielder,
                role: fielders[candidate.fielder].role,
                control_time: candidate.time,
                control_position: candidate.position,
                kind,
                controlled: true,
                cleanness: 0.9,
            });
        }

        // Nobody got there: the ball rolls out or dies at the wall, and the
        // nearest fielder chases it down.
        let mut terminal_pos = ball.stop_position();
        let mut ball_done = stop_time;
        if self.park.beyond_fence(&terminal_pos) {
            terminal_pos = self.clamp_to_fence(&ball, stop_time);
            ball_done = self.time_at_fence(&ball, stop_time);
            kind = ControlKind::FenceCarom;
        }

        let (chaser, arrival) = fielders
            .iter()
            .enumerate()
            .map(|(idx, f)| (idx, f.time_to_reach(&terminal_pos)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .expect("roster checked non-empty");

        Ok(FieldingResult {
            fielder: chaser,
            role: fielders[chaser].role,
            control_time: arrival.max(ball_done),
            control_position: terminal_pos,
            kind,
            controlled: false,
            cleanness: 0.7,
        })
    }

    /// Build the bounce-and-roll state from wherever the flight ended.
    fn ground_ball_from(&self, trajectory: &Trajectory) -> GroundBall {
        let end = trajectory.terminal_sample();
        let position = frames::field_from_trajectory(&end.position);
        let velocity = frames::field_from_trajectory(&end.velocity);

        match trajectory.terminal() {
            TerminalEvent::FenceCarom => {
                // The wall kills most of the pace and sends the ball back
                // toward the infield.
                let horizontal = Vector3::new(velocity.x, velocity.y, 0.0);
                let rebound = if horizontal.norm() > 1e-9 {
                    -horizontal * WALL_DAMPING
                } else {
                    Vector3::new(0.0, -1.0, 0.0)
                };
                let base = Vector3::new(position.x, position.y, 0.0);
                GroundBall::from_landing(end.t, &base, &rebound)
            }
            _ => GroundBall::from_landing(end.t, &position, &velocity),
        }
    }

    fn clamp_to_fence(&self, ball: &GroundBall, stop_time: f64) -> Vector3<f64> {
        let mut t = ball.roll_start_time;
        let mut prev = ball.position_at(t);
        while t <= stop_time {
            let pos = ball.position_at(t);
            if self.park.beyond_fence(&pos) {
                return prev;
            }
            prev = pos;
            t += GROUND_SCAN_STEP;
        }
        prev
    }

    fn time_at_fence(&self, ball: &GroundBall, stop_time: f64) -> f64 {
        let mut t = ball.roll_start_time;
        while t <= stop_time {
            if self.park.beyond_fence(&ball.position_at(t)) {
                return t;
            }
            t += GROUND_SCAN_STEP;
        }
        stop_time
    }
}

/// Tie-breaks: earlier time, then shorter remaining distance, then role
/// priority.
fn better(candidate: &Candidate, best: &Option<Candidate>, fielders: &[Fielder]) -> bool {
    let Some(current) = best else {
        return true;
    };
    if (candidate.time - current.time).abs() > TIME_TIE_EPS {
        return candidate.time < current.time;
    }
    if (candidate.run_distance - current.run_distance).abs() > DISTANCE_TIE_EPS {
        return candidate.run_distance < current.run_distance;
    }
    fielders[candidate.fielder].role.priority() < fielders[current.fielder].role.priority()
}
