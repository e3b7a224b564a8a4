use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pinnacle_outfits::armor::synthetic::SyntheticCatalog;
use pinnacle_outfits::core::identity::SeededIds;
use pinnacle_outfits::core::types::Archetype;
use pinnacle_outfits::outfit::generator::OutfitGenerator;
use pinnacle_outfits::pinnacle::selector::PinnacleSelector;

fn catalog_shape(size: usize) -> SyntheticCatalog {
    SyntheticCatalog {
        legendary_per_slot: size,
        exotics_per_slot: 1,
        artifice_chance: 0.2,
        ..SyntheticCatalog::default()
    }
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(10);
    for size in [3, 5, 7] {
        let catalog = catalog_shape(size).build(&mut SeededIds::new(7));
        let generator = OutfitGenerator::new().with_parallel(false);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| generator.generate(black_box(catalog), Archetype::Warlock, |_| true))
        });
    }
    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let catalog = catalog_shape(5).build(&mut SeededIds::new(7));
    let outfits = OutfitGenerator::new().generate(&catalog, Archetype::Warlock, |_| true);
    let selector = PinnacleSelector::new();
    c.bench_function("select_pinnacles", |b| b.iter(|| selector.select(black_box(&outfits))));
}

criterion_group!(benches, bench_generate, bench_select);
criterion_main!(benches);
