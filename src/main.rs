use std::process;

use log::error;
use tracing_subscriber::EnvFilter;

use kinematics_calc::{calculate, Parameters};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Diagnostics go to stderr; stdout carries only the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_logging();

    match calculate(&Parameters::default()) {
        Ok(report) => print!("{}", report),
        Err(err) => {
            error!("Calculation aborted: {}", err);
            process::exit(1);
        }
    }
}
