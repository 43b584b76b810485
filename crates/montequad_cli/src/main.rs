//! Montequad CLI - Parallel Estimation Experiments
//!
//! Entry point for running the two scaling experiments against the
//! montequad_core kernels.
//!
//! # Commands
//!
//! - `montequad integrate` - Riemann-sum integration of ln(x)/x per worker count
//! - `montequad mandelbrot` - Monte Carlo Mandelbrot-area estimation with
//!   speedup and efficiency against a sequential baseline
//! - `montequad all` - both experiments with their reference parameters
//!
//! All parameters are plain flags with defaults matching the reference
//! experiment; there is no configuration file.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Parallel numerical estimation experiments
#[derive(Parser)]
#[command(name = "montequad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate ln(x)/x over [lower, upper] with a Riemann sum
    Integrate {
        /// Lower integration bound (strictly positive)
        #[arg(long, default_value_t = 1.0)]
        lower: f64,

        /// Upper integration bound
        #[arg(long, default_value_t = 10.0)]
        upper: f64,

        /// Number of equal-width subintervals
        #[arg(short = 'n', long, default_value_t = 1_000_000)]
        intervals: usize,

        /// Worker counts to run, in any order (e.g. 1,2,4)
        #[arg(short, long, value_delimiter = ',', default_values_t = vec![1usize, 2, 4])]
        workers: Vec<usize>,
    },

    /// Estimate the Mandelbrot set area by Monte Carlo sampling
    Mandelbrot {
        /// Number of random draws per run
        #[arg(short, long, default_value_t = 10_000_000)]
        points: usize,

        /// Escape-time iteration budget per point
        #[arg(long, default_value_t = 1000)]
        max_iter: u32,

        /// Worker counts to run, in any order (e.g. 1,2,4)
        #[arg(short, long, value_delimiter = ',', default_values_t = vec![1usize, 2, 4])]
        workers: Vec<usize>,

        /// Experiment seed for reproducible draws (fresh entropy if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run both experiments with the reference parameters
    All,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Integrate {
            lower,
            upper,
            intervals,
            workers,
        } => commands::integrate::run(lower, upper, intervals, &workers),
        Commands::Mandelbrot {
            points,
            max_iter,
            workers,
            seed,
        } => commands::mandelbrot::run(points, max_iter, &workers, seed),
        Commands::All => {
            commands::integrate::run(1.0, 10.0, 1_000_000, &[1, 2, 4])?;
            println!();
            commands::mandelbrot::run(10_000_000, 1000, &[1, 2, 4], None)
        }
    }
}
