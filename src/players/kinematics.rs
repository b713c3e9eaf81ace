//! Shared sprint model: accelerate at a constant rate to top speed, then
//! cruise. Fielders and runners both move this way.

/// Time to cover `distance` from a standing start.
pub fn time_to_cover(distance: f64, top_speed: f64, acceleration: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }
    let accel_distance = top_speed * top_speed / (2.0 * acceleration);
    if distance <= accel_distance {
        // Never reaches top speed: d = a t^2 / 2
        (2.0 * distance / acceleration).sqrt()
    } else {
        let accel_time = top_speed / acceleration;
        accel_time + (distance - accel_distance) / top_speed
    }
}

/// Fielder variant: a sub-optimal route lengthens the effective distance.
pub fn time_to_cover_routed(
    distance: f64,
    top_speed: f64,
    acceleration: f64,
    route_efficiency: f64,
) -> f64 {
    time_to_cover(distance / route_efficiency, top_speed, acceleration)
}
