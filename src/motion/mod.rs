pub mod constants;
pub mod fuel;
pub mod kinematics;
pub mod units;
pub mod validation;

pub use self::validation::ValidationError;
