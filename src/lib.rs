#![warn(bare_trait_objects)]

pub mod calculator;
pub mod motion;

pub use crate::calculator::{calculate, Parameters, Report};
pub use crate::motion::ValidationError;
