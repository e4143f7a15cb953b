use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use secret_santa::cp::SearchConfig;
use secret_santa::{PairingSolver, Strategy};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "secret-santa", about = "Assign secret santa pairs avoiding forbidden pairings")]
struct Cli {
    /// JSON file with `participants` and `rules`
    config: PathBuf,

    /// Seed for picking among valid pairings (deterministic without one)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = StrategyArg::Constraint)]
    strategy: StrategyArg,

    /// Print the pairs as a JSON array
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Constraint,
    Matching,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Constraint => Strategy::Constraint,
            StrategyArg::Matching => Strategy::Matching,
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut search = SearchConfig::default();
    if let Some(seed) = cli.seed {
        search = search.with_seed(seed);
    }

    let solver = PairingSolver::from_path(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_config(search)
        .with_strategy(cli.strategy.into());

    let pairs = solver.solve()?;
    if pairs.is_empty() && solver.config().group_count() > 0 {
        eprintln!("no valid pairing exists for these rules");
        return Ok(ExitCode::from(2));
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
    } else {
        for pair in &pairs {
            println!("{} <-> {}", pair.0, pair.1);
        }
    }
    Ok(ExitCode::SUCCESS)
}
