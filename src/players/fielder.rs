use crate::field::DefensiveRole;
use crate::players::kinematics::time_to_cover_routed;
use crate::players::ratings;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Defensive physical attributes, SI units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FielderAttributes {
    pub reaction_time: f64,    // [s]
    pub top_sprint_speed: f64, // [m/s]
    pub acceleration: f64,     // [m/s^2]
    pub route_efficiency: f64, // (0, 1]
    pub arm_strength: f64,     // [m/s]
    pub arm_accuracy: f64,     // probability of an on-target throw
    pub transfer_time: f64,    // [s] glove to release
}

impl Default for FielderAttributes {
    fn default() -> Self {
        Self::average()
    }
}

impl FielderAttributes {
    /// League-average defender.
    pub fn average() -> Self {
        Self::from_rating(50_000)
    }

    /// All attributes from a single overall rating on the 0-100000 scale.
    pub fn from_rating(rating: u32) -> Self {
        Self {
            reaction_time: ratings::reaction_time(rating),
            top_sprint_speed: ratings::sprint_speed(rating),
            acceleration: ratings::acceleration(rating),
            route_efficiency: ratings::route_efficiency(rating),
            arm_strength: ratings::arm_strength(rating),
            arm_accuracy: ratings::arm_accuracy(rating),
            transfer_time: ratings::transfer_time(rating),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fielder {
    pub name: String,
    pub role: DefensiveRole,
    /// Pre-pitch position, field frame
    pub home: Vector3<f64>,
    pub attributes: FielderAttributes,
}

impl Fielder {
    pub fn new(name: impl Into<String>, role: DefensiveRole, attributes: FielderAttributes) -> Self {
        Self {
            name: name.into(),
            role,
            home: role.default_position(),
            attributes,
        }
    }

    /// Time from contact for this fielder to reach a field-frame point:
    /// reaction, then a routed sprint.
    pub fn time_to_reach(&self, target: &Vector3<f64>) -> f64 {
        let distance = (target - self.home).norm();
        self.attributes.reaction_time
            + time_to_cover_routed(
                distance,
                self.attributes.top_sprint_speed,
                self.attributes.acceleration,
                self.attributes.route_efficiency,
            )
    }

    /// A full defensive alignment of league-average fielders.
    pub fn average_defense() -> Vec<Fielder> {
        DefensiveRole::ALL
            .iter()
            .map(|&role| Fielder::new(format!("{role:?}"), role, FielderAttributes::average()))
            .collect()
    }
}
