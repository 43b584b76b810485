//! Integrate command implementation
//!
//! Runs the Riemann-sum pipeline once per requested worker count and prints
//! the estimated integral and elapsed time for each run.

use tracing::info;

use montequad_core::{run_integration_experiment, IntegrationConfig};

use crate::Result;

/// Run the integrate command
pub fn run(lower: f64, upper: f64, intervals: usize, workers: &[usize]) -> Result<()> {
    let config = IntegrationConfig::builder()
        .bounds(lower, upper)
        .intervals(intervals)
        .build()?;

    super::warn_on_oversubscription(workers);
    info!("Starting integration experiment...");

    println!(
        "Numerical Integration of ln(x)/x from {} to {}",
        config.bounds().lower(),
        config.bounds().upper()
    );
    println!("Number of intervals: {}", config.intervals());
    println!();

    let runs = run_integration_experiment(&config, workers)?;
    for run in &runs {
        println!("Workers: {}", run.workers);
        println!("  Result: {:.6}", run.value);
        println!(
            "  Calculation time: {:.6} seconds",
            run.elapsed.as_secs_f64()
        );
        println!();
    }

    info!("Integration experiment complete");
    Ok(())
}
