//! Static field geometry in the field frame: x toward right field,
//! y toward center field, z up, origin at the point of home plate.

use crate::utils::math::ft_to_m;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Distance between adjacent bases, 90 ft.
pub const BASE_PATH_LENGTH: f64 = 27.432; // m

/// Radius of the infield dirt, used to pick the ground surface.
pub const INFIELD_RADIUS: f64 = 29.0; // m

/// Pitching rubber, 60.5 ft from the plate.
pub const RUBBER_DISTANCE: f64 = 18.44; // m

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    Home,
    First,
    Second,
    Third,
}

impl Base {
    /// The base a runner advancing from here enters next; Home wraps to Home.
    pub fn next(&self) -> Base {
        match self {
            Base::Home => Base::First,
            Base::First => Base::Second,
            Base::Second => Base::Third,
            Base::Third => Base::Home,
        }
    }

    /// Bases remaining to score from here.
    pub fn bases_to_home(&self) -> u8 {
        match self {
            Base::Home => 0,
            Base::First => 3,
            Base::Second => 2,
            Base::Third => 1,
        }
    }
}

/// Position of a base in the field frame.
pub fn base_position(base: Base) -> Vector3<f64> {
    let half = BASE_PATH_LENGTH * std::f64::consts::FRAC_1_SQRT_2;
    match base {
        Base::Home => Vector3::zeros(),
        Base::First => Vector3::new(half, half, 0.0),
        Base::Second => Vector3::new(0.0, 2.0 * half, 0.0),
        Base::Third => Vector3::new(-half, half, 0.0),
    }
}

/// Straight-line distance between two bases.
pub fn distance_between_bases(a: Base, b: Base) -> f64 {
    (base_position(a) - base_position(b)).norm()
}

pub fn rubber_position() -> Vector3<f64> {
    Vector3::new(0.0, RUBBER_DISTANCE, 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefensiveRole {
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
}

impl DefensiveRole {
    pub const ALL: [DefensiveRole; 9] = [
        DefensiveRole::Pitcher,
        DefensiveRole::Catcher,
        DefensiveRole::FirstBase,
        DefensiveRole::SecondBase,
        DefensiveRole::ThirdBase,
        DefensiveRole::Shortstop,
        DefensiveRole::LeftField,
        DefensiveRole::CenterField,
        DefensiveRole::RightField,
    ];

    /// Standard defensive alignment, field frame.
    pub fn default_position(&self) -> Vector3<f64> {
        let (x_ft, y_ft) = match self {
            DefensiveRole::Pitcher => (0.0, 60.5),
            DefensiveRole::Catcher => (0.0, -3.0),
            DefensiveRole::FirstBase => (60.0, 95.0),
            DefensiveRole::SecondBase => (35.0, 145.0),
            DefensiveRole::ThirdBase => (-60.0, 95.0),
            DefensiveRole::Shortstop => (-35.0, 145.0),
            DefensiveRole::LeftField => (-90.0, 270.0),
            DefensiveRole::CenterField => (0.0, 320.0),
            DefensiveRole::RightField => (90.0, 270.0),
        };
        Vector3::new(ft_to_m(x_ft), ft_to_m(y_ft), 0.0)
    }

    pub fn is_infielder(&self) -> bool {
        matches!(
            self,
            DefensiveRole::Pitcher
                | DefensiveRole::Catcher
                | DefensiveRole::FirstBase
                | DefensiveRole::SecondBase
                | DefensiveRole::ThirdBase
                | DefensiveRole::Shortstop
        )
    }

    pub fn is_outfielder(&self) -> bool {
        !self.is_infielder()
    }

    /// Highest ball an average defender at this role plays in the air.
    pub fn reach_height(&self) -> f64 {
        match self {
            DefensiveRole::Catcher => 2.2,
            r if r.is_infielder() => 2.4,
            _ => 3.0,
        }
    }

    /// Tie-break priority when two fielders reach a ball at the same time
    /// and distance; lower wins. Middle infielders take charge on infield
    /// balls.
    pub fn priority(&self) -> u8 {
        match self {
            DefensiveRole::Shortstop => 0,
            DefensiveRole::SecondBase => 1,
            DefensiveRole::CenterField => 2,
            DefensiveRole::ThirdBase => 3,
            DefensiveRole::FirstBase => 4,
            DefensiveRole::LeftField => 5,
            DefensiveRole::RightField => 6,
            DefensiveRole::Pitcher => 7,
            DefensiveRole::Catcher => 8,
        }
    }
}
