pub mod field;
pub mod fielding;
pub mod physics;
pub mod play;
pub mod players;
pub mod utils;

pub use field::{Ballpark, Base, DefensiveRole};
pub use fielding::{BallClass, ControlKind, FieldingResult, FieldingSolver};
pub use physics::{
    AirState, BattedBallState, Integrator, IntegratorParams, TerminalEvent, Trajectory,
};
pub use play::{
    resolve_play, resolve_plays, BaseState, HitType, PlayLabel, PlayOutcome, PlayRequest,
    PlayResolver, PlayResult, PlaySituation,
};
pub use players::{BaseRunner, Fielder, FielderAttributes, RunnerAttributes};
pub use utils::{RngManager, SimError};
