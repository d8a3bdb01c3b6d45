/// Fuel left (in kg) after burning at `burn_rate` kg/s for `time` seconds
///
/// The result is not floored at zero.
pub fn remaining_fuel(fuel: f64, burn_rate: f64, time: f64) -> f64 {
    fuel - burn_rate * time
}

/// Whether the burn overran the fuel load
pub fn is_exhausted(remaining: f64) -> bool {
    remaining < 0.0
}
