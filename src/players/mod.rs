pub mod fielder;
pub mod kinematics;
pub mod ratings;
pub mod runner;

pub use fielder::{Fielder, FielderAttributes};
pub use kinematics::{time_to_cover, time_to_cover_routed};
pub use runner::{BaseRunner, RunnerAttributes};
