use crate::field::ConfigError;
use crate::physics::PhysicsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Physics error: {0}")]
    Physics(#[from] PhysicsError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("No fielders supplied for interception")]
    EmptyRoster,

    #[error("Play state error: {0}")]
    PlayStateError(String),
}
