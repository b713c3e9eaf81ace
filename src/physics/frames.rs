//! Coordinate conversion between the two frames of the engine.
//!
//! The integrator works in the trajectory frame: x toward the outfield,
//! y lateral (positive toward left field), z up. Field geometry works in
//! the field frame: x lateral (positive toward right field), y toward
//! center field, z up. The two are related by a 90 degree rotation about z.
//!
//! Every Vec3 crossing the integrator/field boundary must pass through one
//! of these functions, and that includes velocities: converting positions
//! but not velocities rotates the ball's motion by 90 degrees.

use nalgebra::{Matrix3, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Integrator frame: x toward outfield, y toward left field, z up
    Trajectory,
    /// Geometry frame: x toward right field, y toward center field, z up
    Field,
}

/// Rotation matrix taking trajectory-frame coordinates to field-frame ones.
pub fn trajectory_to_field_matrix() -> Matrix3<f64> {
    Matrix3::new(
        0.0, -1.0, 0.0, // x_field = -y_traj
        1.0, 0.0, 0.0, // y_field = x_traj
        0.0, 0.0, 1.0, // z_field = z_traj
    )
}

/// Convert a position or velocity from the trajectory frame to the field frame.
#[inline]
pub fn field_from_trajectory(v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(-v.y, v.x, v.z)
}

/// Convert a position or velocity from the field frame to the trajectory frame.
#[inline]
pub fn trajectory_from_field(v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(v.y, -v.x, v.z)
}

/// Generic conversion between any two frames.
pub fn convert(v: &Vector3<f64>, from: Frame, to: Frame) -> Vector3<f64> {
    match (from, to) {
        (Frame::Trajectory, Frame::Field) => field_from_trajectory(v),
        (Frame::Field, Frame::Trajectory) => trajectory_from_field(v),
        _ => *v,
    }
}
