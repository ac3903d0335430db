//! Basic Criar usage: configure, run, inspect the logbook
//!
//! This example demonstrates:
//! - Building a validated run configuration
//! - Running a seeded evolution
//! - Reading the per-generation logbook and outcome
//!
//! Run with: cargo run --example basic_usage

use criar::config::{EvolveConfig, PopulationInit};
use criar::engine::Evolution;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Criar Basic Usage Example ===\n");

    // Configure a seeded run
    println!("Configuring run...");
    let config = EvolveConfig::builder("HELLO WORLD")
        .population_size(150)
        .generations(120)
        .seed(4)
        .build()?;
    println!("  ✓ Goal: {}", config.goal);
    println!("  ✓ Population: {}", config.population_size);
    println!("  ✓ Generations: {}\n", config.generations);

    // Run the evolution
    println!("Evolving...");
    let outcome = Evolution::new(config)?.run()?;
    println!("  ✓ Best individual: {}", outcome.best);
    println!("  ✓ Distance to goal: {}", outcome.best_distance);
    if let Some(generation) = outcome.converged_at {
        println!("  ✓ Goal first reached at generation {generation}");
    }
    println!();

    // The logbook holds one row per generation
    println!("First and last logbook rows:");
    let rows = outcome.logbook.rows();
    for row in [&rows[0], rows.last().expect("non-empty logbook")] {
        println!(
            "  gen {:>4}: avg {:.4}, std {:.4}, min {}, max {}",
            row.generation, row.avg, row.std, row.min, row.max
        );
    }
    println!();

    // Uniform initialization: every individual starts identical
    println!("Uniform-init comparison run...");
    let uniform = EvolveConfig::builder("HELLO WORLD")
        .population_size(150)
        .generations(120)
        .init(PopulationInit::Uniform {
            text: "AAAAAAAAAAA".to_string(),
        })
        .seed(4)
        .build()?;
    let uniform_outcome = Evolution::new(uniform)?.run()?;
    println!(
        "  ✓ gen 0 spread is zero by construction: std = {}",
        uniform_outcome.logbook.rows()[0].std
    );
    println!(
        "  ✓ Best after {} generations: {} (distance {})",
        uniform_outcome.logbook.len() - 1,
        uniform_outcome.best,
        uniform_outcome.best_distance
    );

    Ok(())
}
