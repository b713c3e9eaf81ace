//! Ballpark description: outfield fence profile, elevation, and prevailing
//! wind. Loadable from YAML so parks can live alongside rosters in data
//! files.

use crate::physics::{frames, AirState, PhysicsError};
use crate::utils::math::{ft_to_m, rad_to_deg};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid ballpark configuration: {0}")]
    ValidationError(String),
}

/// One vertex of the fence polyline. Bearing is measured from the center
/// field axis, positive toward right field; the foul lines sit at +/-45.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FencePoint {
    pub bearing_deg: f64,
    pub distance: f64, // [m] from home plate
    pub height: f64,   // [m]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ballpark {
    pub name: String,
    pub altitude: f64,    // [m]
    pub temperature: f64, // [K]
    /// Prevailing wind in the field frame [m/s]
    pub wind: Vector3<f64>,
    /// Fence vertices ordered by bearing, left-field line to right-field line
    pub fence: Vec<FencePoint>,
}

impl Default for Ballpark {
    fn default() -> Self {
        Self::generic()
    }
}

impl Ballpark {
    /// A symmetric sea-level park: 330 ft lines, 405 ft center, 8 ft wall.
    pub fn generic() -> Self {
        let fence = [
            (-45.0, 330.0),
            (-22.5, 375.0),
            (0.0, 405.0),
            (22.5, 375.0),
            (45.0, 330.0),
        ]
        .iter()
        .map(|&(bearing_deg, dist_ft)| FencePoint {
            bearing_deg,
            distance: ft_to_m(dist_ft),
            height: ft_to_m(8.0),
        })
        .collect();

        Self {
            name: "Generic Park".to_string(),
            altitude: 0.0,
            temperature: 293.15,
            wind: Vector3::zeros(),
            fence,
        }
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let park: Ballpark = serde_yaml::from_str(contents)?;
        park.validate()?;
        Ok(park)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fence.len() < 2 {
            return Err(ConfigError::ValidationError(
                "fence needs at least two vertices".to_string(),
            ));
        }
        for pair in self.fence.windows(2) {
            if pair[1].bearing_deg <= pair[0].bearing_deg {
                return Err(ConfigError::ValidationError(
                    "fence vertices must be ordered by bearing".to_string(),
                ));
            }
        }
        if self.fence.iter().any(|p| p.distance <= 0.0 || p.height < 0.0) {
            return Err(ConfigError::ValidationError(
                "fence distances must be positive and heights non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Fence distance and height at a bearing, linearly interpolated between
    /// vertices and clamped at the foul lines.
    pub fn fence_at(&self, bearing_deg: f64) -> (f64, f64) {
        let first = self.fence.first().expect("validated fence");
        let last = self.fence.last().expect("validated fence");
        if bearing_deg <= first.bearing_deg {
            return (first.distance, first.height);
        }
        if bearing_deg >= last.bearing_deg {
            return (last.distance, last.height);
        }
        for pair in self.fence.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if bearing_deg <= b.bearing_deg {
                let f = (bearing_deg - a.bearing_deg) / (b.bearing_deg - a.bearing_deg);
                return (
                    a.distance + (b.distance - a.distance) * f,
                    a.height + (b.height - a.height) * f,
                );
            }
        }
        (last.distance, last.height)
    }

    /// Fence bearing of a field-frame position.
    pub fn bearing_of(position: &Vector3<f64>) -> f64 {
        rad_to_deg(position.x.atan2(position.y))
    }

    /// Air state for this park. ISA density from elevation and temperature;
    /// the field-frame wind is converted into the trajectory frame here, at
    /// the boundary.
    pub fn air_state(&self) -> Result<AirState, PhysicsError> {
        let mut air = AirState::from_altitude(self.altitude, self.temperature)?;
        air.wind = frames::trajectory_from_field(&self.wind);
        Ok(air)
    }

    /// True when a field-frame position lies at or beyond the fence.
    pub fn beyond_fence(&self, position: &Vector3<f64>) -> bool {
        let range = (position.x * position.x + position.y * position.y).sqrt();
        let (dist, _) = self.fence_at(Self::bearing_of(position));
        range >= dist
    }
}
