use crate::physics::PhysicsError;
use crate::utils::constants::{
    AIR_DYNAMIC_VISCOSITY, AIR_GAS_CONSTANT, GRAVITY, ISA_LAPSE_RATE, ISA_SEA_LEVEL_PRESSURE,
    ISA_SEA_LEVEL_TEMP, SEA_LEVEL_AIR_DENSITY,
};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Atmospheric state seen by a ball in flight.
///
/// The wind vector is expressed in the trajectory frame (x toward the
/// outfield, y toward left field, z up); `Ballpark::air_state` performs the
/// field-frame conversion at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirState {
    pub density: f64,   // [kg/m^3]
    pub viscosity: f64, // [Pa·s]
    pub wind: Vector3<f64>, // [m/s], trajectory frame
}

impl Default for AirState {
    fn default() -> Self {
        Self {
            density: SEA_LEVEL_AIR_DENSITY,
            viscosity: AIR_DYNAMIC_VISCOSITY,
            wind: Vector3::zeros(),
        }
    }
}

impl AirState {
    pub fn new(density: f64, viscosity: f64, wind: Vector3<f64>) -> Result<Self, PhysicsError> {
        let state = Self {
            density,
            viscosity,
            wind,
        };
        state.validate()?;
        Ok(state)
    }

    /// Standard sea-level air, no wind.
    pub fn sea_level() -> Self {
        Self::default()
    }

    /// Still air with the given density at standard viscosity.
    pub fn with_density(density: f64) -> Result<Self, PhysicsError> {
        Self::new(density, AIR_DYNAMIC_VISCOSITY, Vector3::zeros())
    }

    /// ISA air density for a ballpark elevation and surface temperature.
    pub fn from_altitude(altitude: f64, temperature: f64) -> Result<Self, PhysicsError> {
        if !(altitude.is_finite() && temperature.is_finite()) {
            return Err(PhysicsError::NonFiniteInput("altitude/temperature".into()));
        }
        if temperature <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "temperature must be positive (K), got {temperature}"
            )));
        }
        let isa_temp = ISA_SEA_LEVEL_TEMP + ISA_LAPSE_RATE * altitude;
        let pressure = ISA_SEA_LEVEL_PRESSURE
            * (isa_temp / ISA_SEA_LEVEL_TEMP).powf(-GRAVITY / (AIR_GAS_CONSTANT * ISA_LAPSE_RATE));
        let density = pressure / (AIR_GAS_CONSTANT * temperature);
        Self::new(density, AIR_DYNAMIC_VISCOSITY, Vector3::zeros())
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.density.is_finite() && self.viscosity.is_finite())
            || !self.wind.iter().all(|c| c.is_finite())
        {
            return Err(PhysicsError::NonFiniteInput("air state".into()));
        }
        if self.density <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "air density must be positive, got {}",
                self.density
            )));
        }
        if self.viscosity <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "air viscosity must be positive, got {}",
                self.viscosity
            )));
        }
        Ok(())
    }
}
