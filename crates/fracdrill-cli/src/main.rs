//! fracdrill CLI — an interactive fraction arithmetic drill.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fracdrill_core::{load_config_from, Denominator, DrillConfig, Operator, Session};

mod console;
mod logging;

#[derive(Parser)]
#[command(name = "fracdrill", version, about = "Fraction arithmetic drill")]
struct Cli {
    /// The logging verbosity (10 debug, 20 info, 30 warning, 40 error)
    #[arg(short, long, default_value_t = 20, value_name = "LEVEL")]
    verbosity: u32,

    /// The denominator to randomize between: 2, 4, 8, 16, 32, 64 or 128 [default: 16]
    #[arg(short, long, value_name = "DENOMINATOR")]
    denominator: Option<Denominator>,

    /// The operator(s) to use; choices: ADD, SUB [default: ADD]
    #[arg(short, long, num_args = 1.., value_name = "TYPE")]
    operators: Option<Vec<Operator>>,

    /// Require the canonical answer, i.e. 1-3/8
    #[arg(short = 'x', long)]
    canonical: bool,

    /// Show the estimated value too, i.e. 1.375
    #[arg(short, long, visible_short_alias = '~')]
    estimate: bool,

    /// Seed for a reproducible sequence of problems
    #[arg(short, long)]
    seed: Option<u64>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "starting drill");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut session = Session::new(config, rng)?;
    let mut source = console::ConsoleSource::stdin();
    let mut stdout = std::io::stdout();
    session.run(&mut source, &mut stdout).await?;

    Ok(())
}

/// Layer command-line flags over the config file.
///
/// Boolean flags can only switch a feature on.
fn resolve_config(cli: &Cli) -> Result<DrillConfig> {
    let mut config = load_config_from(cli.config.as_deref())?;

    if let Some(denominator) = cli.denominator {
        config.denominator = denominator;
    }
    if let Some(operators) = &cli.operators {
        config.operators = operators.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.canonical |= cli.canonical;
    config.show_estimate |= cli.estimate;

    config.validate()?;
    Ok(config)
}
