/// Velocity (in m/s) after accelerating at `acceleration` m/s^2 for `time` seconds
pub fn new_velocity(initial_velocity: f64, acceleration: f64, time: f64) -> f64 {
    initial_velocity + acceleration * time
}

/// Displacement (in meters) covered in `time` seconds under constant acceleration
///
/// `d = v0 * t + 0.5 * a * t^2`
pub fn new_distance(initial_velocity: f64, acceleration: f64, time: f64) -> f64 {
    initial_velocity * time + 0.5 * acceleration * time.powi(2)
}
