use thiserror::Error;

/// Contract violations. These are programmer errors: the engine fails fast
/// and nothing inside the core catches them.
#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("Non-finite input: {0}")]
    NonFiniteInput(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
