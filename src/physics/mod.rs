pub mod aero;
pub mod environment;
pub mod error;
pub mod frames;
pub mod ground;
pub mod integrator;

pub use environment::AirState;
pub use error::PhysicsError;
pub use ground::{GroundBall, Surface};
pub use integrator::{
    BattedBallState, Integrator, IntegratorParams, TerminalEvent, Trajectory, TrajectorySample,
};
