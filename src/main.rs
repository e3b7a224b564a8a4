//! Pinnacle Outfits - Entry Point
//!
//! Loads an exported armor catalog, runs the optimizer for the configured
//! archetypes and prints either a JSON summary or the per-armor text report.
//! With `--report-dir`, one `armor-report-<archetype>.json` per archetype is
//! written for the collection annotator.

use clap::Parser;
use pinnacle_outfits::armor::loader::load_catalog_file;
use pinnacle_outfits::core::config::OptimizerConfig;
use pinnacle_outfits::core::error::{OptimizerError, Result};
use pinnacle_outfits::core::types::Archetype;
use pinnacle_outfits::optimizer::{OptimizationRun, Optimizer};
use pinnacle_outfits::pinnacle::report::{exotic_ranking, legendary_ranking, write_json_report, write_ranking};
use std::fmt::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Find the armor worth keeping
#[derive(Parser, Debug)]
#[command(name = "pinnacle-outfits")]
#[command(about = "Enumerate armor outfits, rank pieces by unique pinnacle outfits and find eclipsed armor")]
struct Args {
    /// Armor catalog exported as a JSON array of records
    #[arg(long)]
    catalog: PathBuf,

    /// JSON list of pieces to leave out (overrides the config's ignore_list)
    #[arg(long)]
    ignore: Option<PathBuf>,

    /// TOML optimizer config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only these archetypes, in this order (repeatable)
    #[arg(long)]
    archetype: Vec<Archetype>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Directory for the per-archetype JSON armor reports
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Pieces listed per archetype in the summary
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pinnacle_outfits=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.format != "json" && args.format != "text" {
        return Err(OptimizerError::InvalidConfig(format!(
            "unknown output format '{}', expected json or text",
            args.format
        )));
    }

    let mut config = match &args.config {
        Some(path) => OptimizerConfig::load(path)?,
        None => OptimizerConfig::new(),
    };
    if !args.archetype.is_empty() {
        config.archetypes = args.archetype.clone();
    }
    if let Some(path) = &args.ignore {
        config.ignore_list = Some(path.clone());
    }

    let optimizer = Optimizer::from_config(config)?;
    let catalog = load_catalog_file(&args.catalog)?;
    let run = optimizer.run(&catalog);

    if let Some(dir) = &args.report_dir {
        for archetype_run in &run.archetypes {
            write_json_report(dir, archetype_run.archetype, &archetype_run.armor_stats)?;
        }
    }

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&run.summary(args.top))?),
        _ => print_text(&run, args.top)
            .map_err(|_| OptimizerError::InvalidConfig("failed to format text report".into()))?,
    }

    Ok(())
}

fn print_text(run: &OptimizationRun<'_>, top: usize) -> std::fmt::Result {
    for archetype_run in &run.archetypes {
        println!(
            "=== {} === {} outfits, {} pinnacle outfits across {} exotic groups",
            archetype_run.archetype,
            archetype_run.outfits.len(),
            archetype_run.pinnacles.len(),
            archetype_run.exotic_group_count()
        );

        let mut legendary = legendary_ranking(&archetype_run.armor_stats);
        legendary.truncate(top);
        let exotic = exotic_ranking(&archetype_run.armor_stats);

        let mut text = String::new();
        writeln!(text, "\n--- Legendary ---")?;
        write_ranking(&mut text, &legendary)?;
        writeln!(text, "\n--- Exotic ---")?;
        write_ranking(&mut text, &exotic)?;
        println!("{}", text);
    }

    if !run.eclipsed.is_empty() {
        println!("=== Eclipsed armor ===");
        for pair in &run.eclipsed {
            println!(
                "{} {} {} ({}) {} is eclipsed by {} ({}) {}",
                pair.eclipsed.archetype,
                pair.eclipsed.slot,
                pair.eclipsed.name,
                pair.eclipsed.instance_id,
                pair.eclipsed.stats,
                pair.dominator.name,
                pair.dominator.instance_id,
                pair.dominator.stats,
            );
        }
    }

    Ok(())
}
