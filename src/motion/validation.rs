use std::error::Error;
use std::fmt::Display;

use crate::motion::constants::{MAX_ACCELERATION, MAX_VELOCITY};

/// An input whose magnitude only makes sense in a different unit
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValidationError {
    /// Acceleration (in m/s^2) above `MAX_ACCELERATION`
    InvalidAccelerationUnit { value: f64 },
    /// Velocity (in km/h) above `MAX_VELOCITY`
    InvalidVelocityUnit { value: f64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ValidationError::InvalidAccelerationUnit { value } => write!(
                f,
                "Acceleration too high ({} m/s^2): ensure the unit is m/s^2",
                value
            ),
            ValidationError::InvalidVelocityUnit { value } => write!(
                f,
                "Velocity too high ({} km/h): ensure the unit is km/h",
                value
            ),
        }
    }
}

impl Error for ValidationError {}

// Negated comparisons so NaN is rejected too.

pub fn check_acceleration(acceleration: f64) -> Result<(), ValidationError> {
    if !(acceleration <= MAX_ACCELERATION) {
        return Err(ValidationError::InvalidAccelerationUnit {
            value: acceleration,
        });
    }
    Ok(())
}

pub fn check_velocity(velocity: f64) -> Result<(), ValidationError> {
    if !(velocity <= MAX_VELOCITY) {
        return Err(ValidationError::InvalidVelocityUnit { value: velocity });
    }
    Ok(())
}

/// Checks acceleration (m/s^2) and then velocity (km/h)
pub fn validate(velocity: f64, acceleration: f64) -> Result<(), ValidationError> {
    check_acceleration(acceleration)?;
    check_velocity(velocity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_limits() {
        assert_eq!(validate(30000.0, 50.0), Ok(()));
        assert_eq!(validate(0.0, 0.0), Ok(()));
    }

    #[test]
    fn rejects_acceleration_above_limit() {
        assert_eq!(
            check_acceleration(60.0),
            Err(ValidationError::InvalidAccelerationUnit { value: 60.0 })
        );
    }

    #[test]
    fn rejects_velocity_above_limit() {
        assert_eq!(
            check_velocity(35000.0),
            Err(ValidationError::InvalidVelocityUnit { value: 35000.0 })
        );
    }

    #[test]
    fn acceleration_is_checked_first() {
        assert_eq!(
            validate(35000.0, 60.0),
            Err(ValidationError::InvalidAccelerationUnit { value: 60.0 })
        );
    }

    #[test]
    fn rejects_nan() {
        assert!(check_acceleration(std::f64::NAN).is_err());
        assert!(check_velocity(std::f64::NAN).is_err());
    }

    #[test]
    fn negative_values_pass() {
        assert!(validate(-10.0, -1.0).is_ok());
    }

    #[test]
    fn messages_name_the_expected_unit() {
        let message = ValidationError::InvalidAccelerationUnit { value: 60.0 }.to_string();
        assert!(message.contains("Acceleration"));
        assert!(message.contains("m/s^2"));
        let message = ValidationError::InvalidVelocityUnit { value: 35000.0 }.to_string();
        assert!(message.contains("Velocity"));
        assert!(message.contains("km/h"));
    }
}
