pub mod geometry;
pub mod park;

pub use geometry::{
    base_position, distance_between_bases, rubber_position, Base, DefensiveRole, BASE_PATH_LENGTH,
    INFIELD_RADIUS,
};
pub use park::{Ballpark, ConfigError, FencePoint};
