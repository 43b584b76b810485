//! Mandelbrot command implementation
//!
//! Runs the Monte Carlo area pipeline sequentially as a baseline, then once
//! per requested worker count, and prints each run's area estimate, elapsed
//! time, and scaling metrics.

use tracing::info;

use montequad_core::{run_area_experiment, MonteCarloConfig};

use crate::Result;

/// Run the mandelbrot command
pub fn run(points: usize, max_iter: u32, workers: &[usize], seed: Option<u64>) -> Result<()> {
    let mut builder = MonteCarloConfig::builder()
        .points(points)
        .max_iterations(max_iter);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    super::warn_on_oversubscription(workers);
    info!("Starting Mandelbrot area experiment...");

    println!("Mandelbrot Set Area Approximation using Monte Carlo Method");
    println!("Number of points: {}", config.points());
    println!("Maximum iterations: {}", config.max_iterations());
    println!();

    let report = run_area_experiment(&config, workers)?;

    println!("Sequential Execution:");
    println!("  Area: {:.6}", report.baseline.value);
    println!(
        "  Time: {:.6} seconds",
        report.baseline.elapsed.as_secs_f64()
    );
    println!();

    println!("Parallel Execution Results:");
    for run in &report.runs {
        println!("Workers: {}", run.workers);
        println!("  Area: {:.6}", run.value);
        println!("  Time: {:.6} seconds", run.elapsed.as_secs_f64());
        println!("  Speedup: {:.2}x", run.speedup);
        println!("  Efficiency: {:.2}", run.efficiency);
        println!();
    }

    info!("Mandelbrot area experiment complete");
    Ok(())
}
