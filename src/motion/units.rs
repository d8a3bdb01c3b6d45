use crate::motion::constants::{METERS_PER_KILOMETER, SECONDS_PER_HOUR};

/// Converts a velocity from km/h to m/s
pub fn to_meters_per_second(kilometers_per_hour: f64) -> f64 {
    kilometers_per_hour * (METERS_PER_KILOMETER / SECONDS_PER_HOUR)
}

/// Converts a velocity from m/s to km/h
pub fn to_kilometers_per_hour(meters_per_second: f64) -> f64 {
    meters_per_second * (SECONDS_PER_HOUR / METERS_PER_KILOMETER)
}

/// Converts a distance from meters to km
pub fn to_kilometers(meters: f64) -> f64 {
    meters / METERS_PER_KILOMETER
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn converts_known_velocities() {
        assert_close(to_meters_per_second(36.0), 10.0);
        assert_close(to_meters_per_second(3600.0), 1000.0);
        assert_close(to_kilometers_per_hour(10.0), 36.0);
        assert_close(to_kilometers_per_hour(0.0), 0.0);
    }

    #[test]
    fn velocity_round_trip_is_identity() {
        let mut rng = StdRng::seed_from_u64(0x6b6d);
        for _ in 0..1000 {
            let v: f64 = rng.gen_range(0.0..1.0e6);
            assert_close(to_kilometers_per_hour(to_meters_per_second(v)), v);
        }
    }

    #[test]
    fn converts_meters_to_kilometers() {
        assert_close(to_kilometers(29_440_000.0), 29_440.0);
        assert_close(to_kilometers(1234.5) * 1000.0, 1234.5);
    }
}
