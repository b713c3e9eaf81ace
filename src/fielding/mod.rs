pub mod solver;
pub mod throws;

pub use solver::{BallClass, ControlKind, FieldingResult, FieldingSolver};
pub use throws::{simulate_throw, throw_time_estimate, Throw};
