//! Eclipsed armor property tests
//!
//! Random collections of one archetype across every slot and rarity. Every
//! reported pair must be a genuine same-kind dominance, never reported in
//! both directions, and no dominance may be missed.

use pinnacle_outfits::armor::catalog::ArmorCatalog;
use pinnacle_outfits::armor::piece::ArmorPiece;
use pinnacle_outfits::core::identity::SequentialIds;
use pinnacle_outfits::core::types::{Slot, TypeHash};
use pinnacle_outfits::eclipse::find_eclipsed_armor;
use proptest::prelude::*;

/// (slot index, exotic type or none, power, stats)
type PieceShape = (usize, Option<u64>, u32, [u32; 6]);

fn piece_shape() -> impl Strategy<Value = PieceShape> {
    (
        0usize..4,
        prop::option::of(1u64..3),
        1800u32..1803,
        prop::array::uniform6(0u32..4),
    )
}

fn build_catalog(shapes: &[PieceShape]) -> ArmorCatalog {
    let mut ids = SequentialIds::new();
    let pieces: Vec<ArmorPiece> = shapes
        .iter()
        .map(|&(slot, exotic, power, stats)| {
            let builder = ArmorPiece::builder(&mut ids, Slot::ALL[slot])
                .power(power)
                .stats(stats);
            match exotic {
                Some(hash) => builder.exotic(TypeHash(hash)).build(),
                None => builder.build(),
            }
        })
        .collect();
    ArmorCatalog::from_pieces(pieces)
}

fn comparable(a: &ArmorPiece, b: &ArmorPiece) -> bool {
    a.archetype == b.archetype
        && a.slot == b.slot
        && a.rarity == b.rarity
        && (!a.is_exotic() || a.type_hash == b.type_hash)
}

proptest! {
    #[test]
    fn test_pairs_are_same_kind_dominance(shapes in prop::collection::vec(piece_shape(), 0..24)) {
        let catalog = build_catalog(&shapes);
        for pair in find_eclipsed_armor(&catalog, |_| true) {
            prop_assert!(comparable(pair.eclipsed, pair.dominator));
            prop_assert!(pair.dominator.stats.covers(&pair.eclipsed.stats));
            prop_assert_ne!(pair.eclipsed.instance_id, pair.dominator.instance_id);
            prop_assert_ne!(pair.eclipsed.slot, Slot::ClassItem);
        }
    }

    #[test]
    fn test_no_pair_reported_both_ways(shapes in prop::collection::vec(piece_shape(), 0..24)) {
        let catalog = build_catalog(&shapes);
        let pairs = find_eclipsed_armor(&catalog, |_| true);
        for pair in &pairs {
            let reversed = pairs.iter().any(|other| {
                other.eclipsed.instance_id == pair.dominator.instance_id
                    && other.dominator.instance_id == pair.eclipsed.instance_id
            });
            prop_assert!(!reversed);
        }
    }

    #[test]
    fn test_every_strict_dominance_found(shapes in prop::collection::vec(piece_shape(), 0..24)) {
        let catalog = build_catalog(&shapes);
        let pairs = find_eclipsed_armor(&catalog, |_| true);
        let pieces = catalog.pieces();

        for weaker in pieces {
            for stronger in pieces {
                if weaker.instance_id == stronger.instance_id
                    || !comparable(weaker, stronger)
                    || weaker.stats == stronger.stats
                    || !stronger.stats.covers(&weaker.stats)
                {
                    continue;
                }
                let found = pairs.iter().any(|pair| {
                    pair.eclipsed.instance_id == weaker.instance_id
                        && pair.dominator.instance_id == stronger.instance_id
                });
                prop_assert!(found);
            }
        }
    }
}

#[test]
fn test_identical_twins_reported_once_in_power_order() {
    let mut ids = SequentialIds::new();
    let first = ArmorPiece::builder(&mut ids, Slot::Helmet).all_stats(10).power(1800).build();
    let second = ArmorPiece::builder(&mut ids, Slot::Helmet).all_stats(10).power(1800).build();
    let catalog = ArmorCatalog::from_pieces([first.clone(), second.clone()]);

    let pairs = find_eclipsed_armor(&catalog, |_| true);
    assert_eq!(pairs.len(), 1);
    // equal power keeps catalog order, so the earlier piece dominates
    assert_eq!(pairs[0].dominator.instance_id, first.instance_id);
    assert_eq!(pairs[0].eclipsed.instance_id, second.instance_id);
}
