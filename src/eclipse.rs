//! Eclipsed armor detection
//!
//! A piece is eclipsed when another piece of the same archetype, slot and
//! rarity is at least as good on all six stats. Exotics only eclipse copies
//! of the same item. Class items are skipped: within a rarity their stats
//! are identical.
//!
//! Pieces are scanned in descending power order. When two pieces have
//! identical stats, the one scanned first is the dominator, so a pair is
//! never reported both ways.

use crate::armor::catalog::ArmorCatalog;
use crate::armor::piece::ArmorPiece;
use crate::core::types::{Archetype, Rarity, Slot, TypeHash};
use ahash::AHashMap;
use serde::Serialize;

/// `eclipsed` is matched or beaten on every stat by `dominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EclipsedPair<'a> {
    pub eclipsed: &'a ArmorPiece,
    pub dominator: &'a ArmorPiece,
}

/// Pieces that may eclipse each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CompareKey {
    archetype: Archetype,
    slot: Slot,
    rarity: Rarity,
    exotic_type: Option<TypeHash>,
}

impl CompareKey {
    fn of(piece: &ArmorPiece) -> Self {
        Self {
            archetype: piece.archetype,
            slot: piece.slot,
            rarity: piece.rarity,
            exotic_type: piece.is_exotic().then_some(piece.type_hash),
        }
    }
}

/// Find every eclipsed piece in the catalog
pub fn find_eclipsed_armor<F>(catalog: &ArmorCatalog, include: F) -> Vec<EclipsedPair<'_>>
where
    F: Fn(&ArmorPiece) -> bool,
{
    let mut ordered: Vec<&ArmorPiece> = catalog
        .pieces()
        .iter()
        .filter(|piece| piece.slot != Slot::ClassItem && include(*piece))
        .collect();
    // stable: equal power keeps ingestion order
    ordered.sort_by_key(|piece| std::cmp::Reverse(piece.power));

    let mut groups: AHashMap<CompareKey, Vec<&ArmorPiece>> = AHashMap::new();
    let mut keys: Vec<CompareKey> = Vec::new();
    for piece in ordered {
        let key = CompareKey::of(piece);
        groups
            .entry(key)
            .or_insert_with(|| {
                keys.push(key);
                Vec::new()
            })
            .push(piece);
    }

    let mut pairs = Vec::new();
    for key in &keys {
        let group = &groups[key];
        for (i, weaker) in group.iter().enumerate() {
            for (j, stronger) in group.iter().enumerate() {
                if i == j || stronger.instance_id == weaker.instance_id {
                    continue;
                }
                if dominates(stronger, j, weaker, i) {
                    pairs.push(EclipsedPair {
                        eclipsed: *weaker,
                        dominator: *stronger,
                    });
                }
            }
        }
    }

    tracing::info!("Found {} eclipsed armor pairs", pairs.len());
    pairs
}

/// `a` (scan position `a_pos`) eclipses `b`
fn dominates(a: &ArmorPiece, a_pos: usize, b: &ArmorPiece, b_pos: usize) -> bool {
    if !a.stats.covers(&b.stats) {
        return false;
    }
    a.stats != b.stats || a_pos < b_pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::SequentialIds;

    #[test]
    fn test_strictly_better_piece_eclipses() {
        let mut ids = SequentialIds::new();
        let weak = ArmorPiece::builder(&mut ids, Slot::Helmet).stats([2, 10, 10, 2, 10, 2]).build();
        let strong = ArmorPiece::builder(&mut ids, Slot::Helmet).stats([2, 12, 10, 2, 10, 6]).build();
        let catalog = ArmorCatalog::from_pieces([weak.clone(), strong.clone()]);

        let pairs = find_eclipsed_armor(&catalog, |_| true);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].eclipsed.instance_id, weak.instance_id);
        assert_eq!(pairs[0].dominator.instance_id, strong.instance_id);
    }

    #[test]
    fn test_trade_offs_do_not_eclipse() {
        let mut ids = SequentialIds::new();
        let a = ArmorPiece::builder(&mut ids, Slot::Gauntlets).stats([20, 2, 10, 2, 10, 2]).build();
        let b = ArmorPiece::builder(&mut ids, Slot::Gauntlets).stats([2, 20, 10, 2, 10, 2]).build();
        let catalog = ArmorCatalog::from_pieces([a, b]);
        assert!(find_eclipsed_armor(&catalog, |_| true).is_empty());
    }

    #[test]
    fn test_identical_stats_reported_once() {
        let mut ids = SequentialIds::new();
        let low = ArmorPiece::builder(&mut ids, Slot::ChestArmor).all_stats(10).power(1800).build();
        let high = ArmorPiece::builder(&mut ids, Slot::ChestArmor).all_stats(10).power(1810).build();
        let catalog = ArmorCatalog::from_pieces([low.clone(), high.clone()]);

        let pairs = find_eclipsed_armor(&catalog, |_| true);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].eclipsed.instance_id, low.instance_id);
        assert_eq!(pairs[0].dominator.instance_id, high.instance_id);
    }

    #[test]
    fn test_exotics_compare_only_same_item() {
        let mut ids = SequentialIds::new();
        let weak = ArmorPiece::builder(&mut ids, Slot::Helmet).exotic(TypeHash(1)).all_stats(5).build();
        let strong_other = ArmorPiece::builder(&mut ids, Slot::Helmet).exotic(TypeHash(2)).all_stats(20).build();
        let strong_same = ArmorPiece::builder(&mut ids, Slot::Helmet).exotic(TypeHash(1)).all_stats(8).build();
        let legendary = ArmorPiece::builder(&mut ids, Slot::Helmet).all_stats(30).build();
        let catalog = ArmorCatalog::from_pieces([weak.clone(), strong_other, strong_same.clone(), legendary]);

        let pairs = find_eclipsed_armor(&catalog, |_| true);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].eclipsed.instance_id, weak.instance_id);
        assert_eq!(pairs[0].dominator.instance_id, strong_same.instance_id);
    }

    #[test]
    fn test_class_items_and_other_archetypes_skipped() {
        let mut ids = SequentialIds::new();
        let class_a = ArmorPiece::builder(&mut ids, Slot::ClassItem).build();
        let class_b = ArmorPiece::builder(&mut ids, Slot::ClassItem).build();
        let warlock = ArmorPiece::builder(&mut ids, Slot::LegArmor).all_stats(2).build();
        let titan = ArmorPiece::builder(&mut ids, Slot::LegArmor)
            .archetype(Archetype::Titan)
            .all_stats(20)
            .build();
        let catalog = ArmorCatalog::from_pieces([class_a, class_b, warlock, titan]);
        assert!(find_eclipsed_armor(&catalog, |_| true).is_empty());
    }

    #[test]
    fn test_include_filter_respected() {
        let mut ids = SequentialIds::new();
        let weak = ArmorPiece::builder(&mut ids, Slot::Helmet).all_stats(2).build();
        let strong = ArmorPiece::builder(&mut ids, Slot::Helmet).all_stats(20).build();
        let strong_id = strong.instance_id;
        let catalog = ArmorCatalog::from_pieces([weak, strong]);
        assert!(find_eclipsed_armor(&catalog, |p| p.instance_id != strong_id).is_empty());
    }
}
