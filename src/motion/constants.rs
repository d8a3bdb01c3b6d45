/// Meters per kilometer
pub const METERS_PER_KILOMETER: f64 = 1000.0;
/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Highest plausible acceleration (in m/s^2)
///
/// Anything above this was almost certainly given in another unit (km/h^2, for example).
pub const MAX_ACCELERATION: f64 = 50.0;
/// Highest plausible velocity (in km/h)
pub const MAX_VELOCITY: f64 = 30000.0;

/// Built-in initial velocity (in km/h)
pub const DEFAULT_VELOCITY: f64 = 10000.0;
/// Built-in acceleration (in m/s^2)
pub const DEFAULT_ACCELERATION: f64 = 3.0;
/// Built-in elapsed time (in seconds)
pub const DEFAULT_TIME: f64 = 3600.0;
/// Built-in initial distance (in km)
pub const DEFAULT_DISTANCE: f64 = 0.0;
/// Built-in fuel load (in kg)
pub const DEFAULT_FUEL: f64 = 5000.0;
/// Built-in fuel burn rate (in kg/s)
pub const DEFAULT_BURN_RATE: f64 = 0.5;
