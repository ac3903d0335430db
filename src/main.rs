//! Criar CLI.
//!
//! Commands:
//! - run: Evolve the population toward a goal phrase once
//! - sweep: Run the generation-count x init-strategy grid and print the
//!   aggregate results table

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use criar::config::{EvolveConfig, PopulationInit};
use criar::engine::Evolution;
use criar::message::validate_text;
use criar::sweep::{run_sweep, SweepConfig};

/// Default goal phrase when none is given.
const DEFAULT_GOAL: &str = "SKYNET IS NOW ONLINE";

#[derive(Parser)]
#[command(name = "criar")]
#[command(version)]
#[command(about = "Evolve strings toward a goal phrase")]
struct Cli {
    /// Enable verbose logging (per-generation rows)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single evolution and print the logbook
    Run {
        /// Goal phrase (words are joined with spaces)
        goal: Vec<String>,

        /// Number of generations
        #[arg(long, default_value = "500")]
        generations: u64,

        /// Population size
        #[arg(long, default_value = "300")]
        population: usize,

        /// Random seed (omit for an entropy-seeded run)
        #[arg(long)]
        seed: Option<u64>,

        /// Start from a uniform population of TEXT instead of random
        /// strings; with no TEXT, a run of 'A's the length of the goal
        #[arg(long, require_equals = true, num_args = 0..=1, default_missing_value = "")]
        uniform: Option<String>,

        /// Stop as soon as the goal is reached
        #[arg(long)]
        halt_on_perfect: bool,

        /// Emit the logbook as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run the generation-count x init-strategy grid
    Sweep {
        /// Goal phrase (words are joined with spaces)
        goal: Vec<String>,

        /// Generation budgets to try (comma-separated)
        #[arg(long, default_value = "500,1000,2000", value_delimiter = ',')]
        generations: Vec<u64>,

        /// Population size
        #[arg(long, default_value = "300")]
        population: usize,

        /// Base random seed for a reproducible sweep
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Save the full experiment store (runs, metrics, artifacts) as JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging: RUST_LOG wins, --verbose raises the default
    let default_filter = if cli.verbose { "criar=debug" } else { "criar=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Commands::Run {
            goal,
            generations,
            population,
            seed,
            uniform,
            halt_on_perfect,
            json,
        } => {
            let goal = join_goal(&goal);
            validate_text(&goal)?;

            let mut builder = EvolveConfig::builder(&goal)
                .generations(generations)
                .population_size(population)
                .halt_on_perfect(halt_on_perfect);
            if let Some(text) = uniform {
                builder = builder.init(PopulationInit::Uniform {
                    text: default_uniform_text(text, &goal),
                });
            }
            if let Some(seed) = seed {
                builder = builder.seed(seed);
            }

            let outcome = Evolution::new(builder.build()?)?.run()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.logbook)?);
            } else {
                print!("{}", outcome.logbook.render());
                println!();
                println!("best: {} (distance {})", outcome.best, outcome.best_distance);
                if let Some(generation) = outcome.converged_at {
                    println!("goal reached at generation {generation}");
                }
            }
        }

        Commands::Sweep {
            goal,
            generations,
            population,
            seed,
            json,
            save,
        } => {
            let goal = join_goal(&goal);
            validate_text(&goal)?;

            let mut config = SweepConfig::new(
                &goal,
                generations,
                default_uniform_text(String::new(), &goal),
            )
            .with_population_size(population);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let report = run_sweep(&config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report.summaries)?);
            } else {
                print!("{}", report.render_table());
            }
            if let Some(path) = save {
                report.store.save_json(&path)?;
                println!("experiment store saved to {}", path.display());
            }
        }
    }

    Ok(())
}

/// Join goal words with spaces, falling back to the default phrase.
fn join_goal(words: &[String]) -> String {
    if words.is_empty() {
        DEFAULT_GOAL.to_string()
    } else {
        words.join(" ")
    }
}

/// Uniform-init text: the given text, or a run of 'A's the length of the
/// goal when empty.
fn default_uniform_text(text: String, goal: &str) -> String {
    if text.is_empty() {
        "A".repeat(goal.chars().count())
    } else {
        text
    }
}
