//! Outfit generation stress test
//!
//! Times enumeration, pinnacle selection and the eclipsed scan on synthetic
//! catalogs of growing size.

use clap::Parser;
use pinnacle_outfits::armor::synthetic::SyntheticCatalog;
use pinnacle_outfits::core::error::Result;
use pinnacle_outfits::core::identity::SeededIds;
use pinnacle_outfits::core::types::Archetype;
use pinnacle_outfits::eclipse::find_eclipsed_armor;
use pinnacle_outfits::outfit::generator::OutfitGenerator;
use pinnacle_outfits::pinnacle::selector::PinnacleSelector;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "outfit_stress")]
#[command(about = "Time outfit generation on synthetic catalogs")]
struct Args {
    /// Legendary pieces per slot to test, comma separated
    #[arg(long, value_delimiter = ',', default_value = "4,6,8,10")]
    sizes: Vec<usize>,

    /// Exotic pieces per slot
    #[arg(long, default_value_t = 2)]
    exotics: usize,

    /// Chance a legendary piece is artifice
    #[arg(long, default_value_t = 0.2)]
    artifice_chance: f64,

    /// Random seed for deterministic catalogs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Enumerate passes sequentially
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let generator = OutfitGenerator::new().with_parallel(!args.sequential);
    let selector = PinnacleSelector::new();

    for size in args.sizes {
        println!("\n=== Testing {} legendary pieces per slot ===", size);

        let shape = SyntheticCatalog {
            legendary_per_slot: size,
            exotics_per_slot: args.exotics,
            artifice_chance: args.artifice_chance,
            seed: args.seed,
            ..SyntheticCatalog::default()
        };
        shape.validate()?;
        let catalog = shape.build(&mut SeededIds::new(args.seed));

        let generate_start = Instant::now();
        let outfits = generator.generate(&catalog, Archetype::Warlock, |_| true);
        let generate_time = generate_start.elapsed();
        println!("Outfits: {} in {:?}", outfits.len(), generate_time);
        println!(
            "Outfits/sec: {:.0}",
            outfits.len() as f64 / generate_time.as_secs_f64().max(f64::EPSILON)
        );

        let select_start = Instant::now();
        let pinnacles = selector.select(&outfits);
        println!("Pinnacle outfits: {} in {:?}", pinnacles.len(), select_start.elapsed());

        let eclipse_start = Instant::now();
        let eclipsed = find_eclipsed_armor(&catalog, |_| true);
        println!("Eclipsed pairs: {} in {:?}", eclipsed.len(), eclipse_start.elapsed());
    }

    Ok(())
}
