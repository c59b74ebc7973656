//! Command-line front end for the polynomial root finder.
//!
//! Polynomials are passed as JSON arrays of coefficients, constant term first:
//! - `rolle zeros '[0.557, 0, 0, 0.5, -2, -1, 1]'`
//! - `rolle eval '[1, 2]' --x 2`
//! - `rolle derivative '[-1, 0, 1]'`
//! - `rolle degree '[1, 2, 0, 0]'`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::info;
use serde::Serialize;

use rolle_core::{Config, Polynomial, Solver, TOLERANCE};

#[derive(Parser)]
#[command(name = "rolle")]
#[command(about = "Real roots of single-variable polynomials", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("ROLLE_BUILD_SHA"), ")"))]
struct Cli {
    /// Values of |p(x)| at or below this count as roots
    #[arg(short, long, global = true, default_value_t = TOLERANCE)]
    tolerance: f64,

    /// Print results as JSON
    #[arg(short, long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all real roots, ascending
    Zeros {
        /// Coefficients (JSON array, constant term first)
        poly: String,
    },

    /// Evaluate the polynomial at a point
    Eval {
        /// Coefficients (JSON array, constant term first)
        poly: String,

        /// Point to evaluate at
        #[arg(short, long, allow_hyphen_values = true)]
        x: f64,
    },

    /// Print the derivative's coefficients
    Derivative {
        /// Coefficients (JSON array, constant term first)
        poly: String,
    },

    /// Print the effective degree (highest power with a nonzero coefficient)
    Degree {
        /// Coefficients (JSON array, constant term first)
        poly: String,
    },
}

fn parse_polynomial(poly: &str) -> Result<Polynomial> {
    serde_json::from_str(poly).with_context(|| format!("parsing coefficients {:?}", poly))
}

fn emit<T: Serialize>(json: bool, value: &T, plain: String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", plain);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let solver = Solver::new(Config::with_tolerance(cli.tolerance));

    match cli.command {
        Commands::Zeros { poly } => {
            let p = parse_polynomial(&poly)?;
            info!("solving {}", p);
            let zeros = solver.zeros(&p).with_context(|| format!("finding zeros of {}", p))?;
            let plain = zeros.iter().join("\n");
            emit(cli.json, &zeros, plain)
        }
        Commands::Eval { poly, x } => {
            let p = parse_polynomial(&poly)?;
            let value = p.eval(x);
            emit(cli.json, &value, value.to_string())
        }
        Commands::Derivative { poly } => {
            let p = parse_polynomial(&poly)?;
            let d = p.derivative();
            let plain = d.to_string();
            emit(cli.json, &d, plain)
        }
        Commands::Degree { poly } => {
            let p = parse_polynomial(&poly)?;
            let degree = p.degree();
            emit(cli.json, &degree, degree.to_string())
        }
    }
}
