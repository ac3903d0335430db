//! Experiment Tracking Example
//!
//! Demonstrates the experiment schema for evolution runs: one experiment
//! per goal, runs with lifecycle + summary rows, per-generation metric
//! series, and content-addressed artifacts.
//!
//! Run with: cargo run --example experiment_tracking

use criar::config::EvolveConfig;
use criar::engine::Evolution;
use criar::experiment::{
    ArtifactRecord, ExperimentRecord, ExperimentStore, MetricRecord, RunRecord, RunStatus,
    RunSummary,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Criar Experiment Tracking ===\n");

    // Create the experiment store
    let mut store = ExperimentStore::new();

    // -------------------------------------------------------------------------
    // 1. Create an experiment with configuration
    // -------------------------------------------------------------------------
    println!("1. Creating experiment...");

    let config = EvolveConfig::builder("SKYNET IS NOW ONLINE")
        .population_size(200)
        .generations(60)
        .seed(4)
        .build()?;

    let experiment = ExperimentRecord::builder("exp-skynet-001", "Skynet baseline", &config.goal)
        .config(serde_json::to_value(&config)?)
        .build();

    println!("   Experiment ID: {}", experiment.experiment_id());
    println!("   Goal: {}", experiment.goal());
    println!("   Created: {}", experiment.created_at());

    store.add_experiment(experiment.clone());

    // -------------------------------------------------------------------------
    // 2. Start a run
    // -------------------------------------------------------------------------
    println!("\n2. Starting run...");

    let mut run = RunRecord::new("run-001", experiment.experiment_id());
    run.start();

    println!("   Run ID: {}", run.run_id());
    println!("   Status: {:?}", run.status());

    // -------------------------------------------------------------------------
    // 3. Evolve and log the per-generation metric series
    // -------------------------------------------------------------------------
    println!("\n3. Evolving ({} generations)...", config.generations);

    let init_label = config.init.label();
    let population_size = config.population_size;
    let outcome = Evolution::new(config)?.run()?;

    for row in outcome.logbook.rows() {
        for metric in MetricRecord::from_stats(run.run_id(), row) {
            store.add_metric(metric);
        }
    }
    println!("   Logged {} metric points", store.metric_count());

    // -------------------------------------------------------------------------
    // 4. Store artifacts and complete the run with its summary row
    // -------------------------------------------------------------------------
    println!("\n4. Completing run...");

    store.add_artifact(ArtifactRecord::from_bytes(
        run.run_id(),
        "best.txt",
        outcome.best.text().as_bytes(),
    ));
    store.add_artifact(ArtifactRecord::from_bytes(
        run.run_id(),
        "logbook.json",
        &serde_json::to_vec(&outcome.logbook)?,
    ));

    let last = outcome.logbook.last().expect("completed run");
    let summary = RunSummary::new(
        last.generation,
        population_size,
        init_label,
        last.avg,
        last.std,
        last.min,
        last.max,
    )
    .with_best_text(outcome.best.text());
    run.complete_with_summary(RunStatus::Success, summary);
    store.add_run(run.clone());

    println!("   Status: {:?}", run.status());
    println!("   Best: {} (distance {})", outcome.best, outcome.best_distance);

    // -------------------------------------------------------------------------
    // 5. Query the store
    // -------------------------------------------------------------------------
    println!("\n5. Querying the store...");

    let avg_curve = store.get_metrics_for_run("run-001", "avg");
    println!("   avg series: {} points", avg_curve.len());
    println!(
        "   avg gen 0 -> final: {:.4} -> {:.4}",
        avg_curve.first().expect("non-empty").value(),
        avg_curve.last().expect("non-empty").value()
    );

    for (run_id, row) in store.results_table() {
        println!(
            "   {} | gens {} pop {} init {} | avg {:.4} std {:.4} min {} max {}",
            run_id,
            row.generations,
            row.population_size,
            row.init,
            row.avg,
            row.std,
            row.min,
            row.max
        );
    }

    for artifact in store.get_artifacts_for_run("run-001") {
        println!(
            "   artifact {} ({} bytes): {}",
            artifact.key(),
            artifact.size_bytes(),
            artifact.cas_hash()
        );
    }

    println!("\n=== Done ===");
    Ok(())
}
