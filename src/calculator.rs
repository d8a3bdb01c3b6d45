use std::fmt::Display;

use log::{debug, warn};

use crate::motion::constants;
use crate::motion::validation::{self, ValidationError};
use crate::motion::{fuel, kinematics, units};

/// Inputs for a single calculation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    /// Initial velocity (in km/h)
    pub velocity: f64,
    /// Constant acceleration (in m/s^2)
    pub acceleration: f64,
    /// Elapsed time (in seconds)
    pub time: f64,
    /// Initial distance (in km)
    ///
    /// Carried along but not added to the reported distance.
    pub distance: f64,
    /// Fuel on board (in kg)
    pub fuel: f64,
    /// Fuel burn rate (in kg/s)
    pub burn_rate: f64,
}

impl Parameters {
    pub fn with_velocity(self, velocity: f64) -> Parameters {
        Parameters { velocity, ..self }
    }

    pub fn with_acceleration(self, acceleration: f64) -> Parameters {
        Parameters {
            acceleration,
            ..self
        }
    }

    pub fn with_time(self, time: f64) -> Parameters {
        Parameters { time, ..self }
    }

    pub fn with_distance(self, distance: f64) -> Parameters {
        Parameters { distance, ..self }
    }

    pub fn with_fuel(self, fuel: f64) -> Parameters {
        Parameters { fuel, ..self }
    }

    pub fn with_burn_rate(self, burn_rate: f64) -> Parameters {
        Parameters { burn_rate, ..self }
    }
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters {
            velocity: constants::DEFAULT_VELOCITY,
            acceleration: constants::DEFAULT_ACCELERATION,
            time: constants::DEFAULT_TIME,
            distance: constants::DEFAULT_DISTANCE,
            fuel: constants::DEFAULT_FUEL,
            burn_rate: constants::DEFAULT_BURN_RATE,
        }
    }
}

/// Derived state after `Parameters::time` seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    /// Final velocity (in km/h)
    pub velocity: f64,
    /// Distance covered (in km)
    pub distance: f64,
    /// Fuel left (in kg), possibly negative
    pub fuel: f64,
}

impl Report {
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Corrected New Velocity: {:.2} km/h", self.velocity),
            format!("Corrected New Distance: {:.2} km", self.distance),
            format!("Corrected Remaining Fuel: {:.2} kg", self.fuel),
        ]
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [velocity, distance, fuel] = self.lines();
        writeln!(f, "{}", velocity)?;
        writeln!(f, "{}", distance)?;
        writeln!(f, "{}", fuel)
    }
}

/// Validates the inputs, then evaluates every formula in one pass.
pub fn calculate(params: &Parameters) -> Result<Report, ValidationError> {
    validation::validate(params.velocity, params.acceleration)?;
    debug!("Validated inputs: {:?}", params);

    let initial_velocity = units::to_meters_per_second(params.velocity);
    let final_velocity =
        kinematics::new_velocity(initial_velocity, params.acceleration, params.time);
    let covered = kinematics::new_distance(initial_velocity, params.acceleration, params.time);
    let remaining = fuel::remaining_fuel(params.fuel, params.burn_rate, params.time);

    if fuel::is_exhausted(remaining) {
        warn!(
            "Fuel ran out before {} s elapsed ({:.2} kg remaining)",
            params.time, remaining
        );
    }

    let report = Report {
        velocity: units::to_kilometers_per_hour(final_velocity),
        distance: units::to_kilometers(covered),
        fuel: remaining,
    };
    debug!("Computed {:?}", report);
    Ok(report)
}
