//! Per-armor pinnacle participation
//!
//! For every piece, which exotic groups and weighted metrics it reached a
//! pinnacle outfit in, and whether another piece in the same slot covers the
//! same (group, metric) pair. Uncovered pairs are "unique pinnacle outfits",
//! the count that decides whether a piece is worth keeping.

use crate::armor::catalog::ArmorCatalog;
use crate::armor::piece::ArmorPiece;
use crate::core::error::Result;
use crate::core::types::{Archetype, InstanceId, Rarity, Slot};
use crate::outfit::model::ExoticGroup;
use crate::pinnacle::selector::PinnacleOutfit;
use crate::pinnacle::subsets::WeightedSubset;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Group label for outfits without an exotic
pub const NO_EXOTIC_LABEL: &str = "No Exotic";

/// Metric -> still unique
pub type MetricFlags = BTreeMap<WeightedSubset, bool>;

/// One piece's pinnacle metrics, keyed by exotic group label
#[derive(Debug, Clone, PartialEq)]
pub struct ArmorPinnacleStats {
    pub armor: ArmorPiece,
    pub by_exotic: BTreeMap<String, MetricFlags>,
}

impl ArmorPinnacleStats {
    pub fn new(armor: ArmorPiece) -> Self {
        Self {
            armor,
            by_exotic: BTreeMap::new(),
        }
    }

    pub fn pinnacle_exotic_count(&self) -> usize {
        self.by_exotic.len()
    }

    pub fn total_pinnacle_outfits(&self) -> usize {
        self.by_exotic.values().map(|metrics| metrics.len()).sum()
    }

    pub fn unique_pinnacle_outfits(&self) -> usize {
        self.by_exotic
            .values()
            .map(|metrics| metrics.values().filter(|&&unique| unique).count())
            .sum()
    }

    pub fn grade(&self) -> UpoGrade {
        UpoGrade::from_count(self.unique_pinnacle_outfits())
    }
}

impl fmt::Display for ArmorPinnacleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let armor = &self.armor;
        write!(
            f,
            "id:{} -- {} -- {} -- {} Σ:{} α:{} -- total pinnacle outfits: {} -- unique pinnacle outfits: {}",
            armor.instance_id,
            armor.name,
            armor.slot,
            armor.stats,
            armor.total_stats(),
            if armor.is_artifice { "T" } else { "F" },
            self.total_pinnacle_outfits(),
            self.unique_pinnacle_outfits(),
        )?;

        let mut groups: Vec<_> = self.by_exotic.iter().collect();
        groups.sort_by_key(|(_, metrics)| std::cmp::Reverse(metrics.len()));

        for (exotic, metrics) in groups {
            let mut labels: Vec<String> = metrics
                .iter()
                .map(|(subset, &unique)| {
                    if unique {
                        subset.label()
                    } else {
                        format!("~{}~", subset.label())
                    }
                })
                .collect();
            labels.sort();
            let unique = metrics.values().filter(|&&u| u).count();
            write!(f, "\n\t {} - {} - {}", exotic, unique, labels.join("  "))?;
        }
        Ok(())
    }
}

/// Display label of an exotic group
pub fn exotic_label(catalog: &ArmorCatalog, group: ExoticGroup) -> String {
    match group {
        ExoticGroup::NoExotic => NO_EXOTIC_LABEL.to_string(),
        ExoticGroup::Exotic(hash) => catalog
            .exotic_name(hash)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Exotic {}", hash)),
    }
}

/// Pinnacle participation for every included piece of an archetype
///
/// Pieces are listed in catalog order, including those in no pinnacle outfit.
pub fn armor_pinnacle_stats<F>(
    catalog: &ArmorCatalog,
    archetype: Archetype,
    pinnacles: &[PinnacleOutfit],
    include: F,
) -> Vec<ArmorPinnacleStats>
where
    F: Fn(&ArmorPiece) -> bool,
{
    let mut stats: Vec<ArmorPinnacleStats> = catalog
        .for_archetype(archetype)
        .filter(|piece| include(*piece))
        .map(|piece| ArmorPinnacleStats::new(piece.clone()))
        .collect();

    let index: AHashMap<InstanceId, usize> = stats
        .iter()
        .enumerate()
        .map(|(i, s)| (s.armor.instance_id, i))
        .collect();

    let all = WeightedSubset::all();
    let mut labels: AHashMap<ExoticGroup, String> = AHashMap::new();

    for pinnacle in pinnacles {
        let label = labels
            .entry(pinnacle.outfit.exotic)
            .or_insert_with(|| exotic_label(catalog, pinnacle.outfit.exotic))
            .clone();
        for id in pinnacle.outfit.pieces {
            let Some(&i) = index.get(&id) else { continue };
            let metrics = stats[i].by_exotic.entry(label.clone()).or_default();
            for subset in pinnacle.pinnacle_subsets.indices() {
                metrics.insert(all[subset], true);
            }
        }
    }

    mark_shared(&mut stats);
    stats
}

/// Clear the unique flag on pairs another same-slot piece also reaches
fn mark_shared(stats: &mut [ArmorPinnacleStats]) {
    let mut shared: Vec<(usize, String, WeightedSubset)> = Vec::new();

    for (i, piece) in stats.iter().enumerate() {
        for (exotic, metrics) in &piece.by_exotic {
            for (j, other) in stats.iter().enumerate() {
                if i == j || other.armor.slot != piece.armor.slot {
                    continue;
                }
                // an exotic only competes with copies of itself
                if other.armor.is_exotic() && &other.armor.name != exotic {
                    continue;
                }
                let Some(other_metrics) = other.by_exotic.get(exotic) else { continue };
                for subset in metrics.keys() {
                    if other_metrics.contains_key(subset) {
                        shared.push((i, exotic.clone(), *subset));
                    }
                }
            }
        }
    }

    for (i, exotic, subset) in shared {
        if let Some(flag) = stats[i]
            .by_exotic
            .get_mut(&exotic)
            .and_then(|metrics| metrics.get_mut(&subset))
        {
            *flag = false;
        }
    }
}

/// Legendary pieces, most unique pinnacle outfits first
pub fn legendary_ranking(stats: &[ArmorPinnacleStats]) -> Vec<&ArmorPinnacleStats> {
    let mut ranked: Vec<_> = stats.iter().filter(|s| !s.armor.is_exotic()).collect();
    ranked.sort_by_key(|s| std::cmp::Reverse((s.unique_pinnacle_outfits(), s.total_pinnacle_outfits())));
    ranked
}

/// Exotic pieces by name, then most unique pinnacle outfits first
pub fn exotic_ranking(stats: &[ArmorPinnacleStats]) -> Vec<&ArmorPinnacleStats> {
    let mut ranked: Vec<_> = stats.iter().filter(|s| s.armor.is_exotic()).collect();
    ranked.sort_by(|a, b| {
        a.armor.name.cmp(&b.armor.name).then_with(|| {
            (b.unique_pinnacle_outfits(), b.total_pinnacle_outfits())
                .cmp(&(a.unique_pinnacle_outfits(), a.total_pinnacle_outfits()))
        })
    });
    ranked
}

/// One line per piece, then a `Total pieces: N` footer
pub fn write_ranking<W: fmt::Write>(out: &mut W, ranking: &[&ArmorPinnacleStats]) -> fmt::Result {
    for stats in ranking {
        writeln!(out, "{}", stats)?;
    }
    writeln!(out, "Total pieces: {}", ranking.len())
}

/// Keep-or-discard grade from the unique pinnacle outfit count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UpoGrade {
    F,
    D,
    C,
    B,
    A,
    S,
}

impl UpoGrade {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => UpoGrade::F,
            1..=4 => UpoGrade::D,
            5..=10 => UpoGrade::C,
            11..=30 => UpoGrade::B,
            31..=49 => UpoGrade::A,
            _ => UpoGrade::S,
        }
    }

    /// Annotation note, e.g. `#UPO-B-12`
    pub fn note(&self, count: usize) -> String {
        format!("#UPO-{:?}-{}", self, count)
    }
}

/// One row of the per-archetype JSON armor report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorReportEntry {
    pub id: InstanceId,
    pub name: String,
    pub slot: Slot,
    pub rarity: Rarity,
    pub unique_pinnacle_outfit_count: usize,
    pub total_pinnacle_outfit_count: usize,
    pub grade: UpoGrade,
    pub note: String,
}

impl From<&ArmorPinnacleStats> for ArmorReportEntry {
    fn from(stats: &ArmorPinnacleStats) -> Self {
        let unique = stats.unique_pinnacle_outfits();
        let grade = UpoGrade::from_count(unique);
        Self {
            id: stats.armor.instance_id,
            name: stats.armor.name.clone(),
            slot: stats.armor.slot,
            rarity: stats.armor.rarity,
            unique_pinnacle_outfit_count: unique,
            total_pinnacle_outfit_count: stats.total_pinnacle_outfits(),
            grade,
            note: grade.note(unique),
        }
    }
}

pub fn report_entries(stats: &[ArmorPinnacleStats]) -> Vec<ArmorReportEntry> {
    stats.iter().map(ArmorReportEntry::from).collect()
}

/// Write `armor-report-<archetype>.json` into `dir`
pub fn write_json_report(dir: &Path, archetype: Archetype, stats: &[ArmorPinnacleStats]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("armor-report-{}.json", archetype.name().to_lowercase()));
    let json = serde_json::to_string_pretty(&report_entries(stats))?;
    std::fs::write(&path, json)?;
    tracing::info!("Wrote {} armor report rows to {}", stats.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::SequentialIds;
    use crate::core::types::{StatBlock, TypeHash};
    use crate::outfit::model::Outfit;
    use crate::pinnacle::subsets::SubsetMask;

    fn pinnacle(pieces: [InstanceId; 5], exotic: ExoticGroup, subsets: &[usize]) -> PinnacleOutfit {
        let mut mask = SubsetMask::default();
        for &i in subsets {
            mask.insert(i);
        }
        PinnacleOutfit {
            outfit: Outfit {
                stats: StatBlock::splat(10),
                pieces,
                exotic,
                artifice_count: 0,
            },
            total_stats: 60,
            pinnacle_subsets: mask,
        }
    }

    #[test]
    fn test_upo_grades() {
        assert_eq!(UpoGrade::from_count(0), UpoGrade::F);
        assert_eq!(UpoGrade::from_count(4), UpoGrade::D);
        assert_eq!(UpoGrade::from_count(5), UpoGrade::C);
        assert_eq!(UpoGrade::from_count(11), UpoGrade::B);
        assert_eq!(UpoGrade::from_count(49), UpoGrade::A);
        assert_eq!(UpoGrade::from_count(50), UpoGrade::S);
        assert_eq!(UpoGrade::B.note(12), "#UPO-B-12");
    }

    #[test]
    fn test_shared_metrics_not_unique() {
        let mut ids = SequentialIds::new();
        let set: Vec<ArmorPiece> = Slot::ALL
            .iter()
            .map(|&slot| ArmorPiece::builder(&mut ids, slot).build())
            .collect();
        let rival_helmet = ArmorPiece::builder(&mut ids, Slot::Helmet).name("Rival").build();
        let mut catalog_pieces = set.clone();
        catalog_pieces.push(rival_helmet.clone());
        let catalog = ArmorCatalog::from_pieces(catalog_pieces);

        let first: [InstanceId; 5] = std::array::from_fn(|i| set[i].instance_id);
        let mut second = first;
        second[0] = rival_helmet.instance_id;

        let pinnacles = vec![
            pinnacle(first, ExoticGroup::NoExotic, &[0, 1]),
            pinnacle(second, ExoticGroup::NoExotic, &[1]),
        ];
        let stats = armor_pinnacle_stats(&catalog, Archetype::Warlock, &pinnacles, |_| true);

        let helmet = stats.iter().find(|s| s.armor.instance_id == set[0].instance_id).unwrap();
        assert_eq!(helmet.total_pinnacle_outfits(), 2);
        assert_eq!(helmet.unique_pinnacle_outfits(), 1);
        assert_eq!(helmet.pinnacle_exotic_count(), 1);

        let rival = stats.iter().find(|s| s.armor.instance_id == rival_helmet.instance_id).unwrap();
        assert_eq!(rival.unique_pinnacle_outfits(), 0);

        // gauntlets have no same-slot competitor
        let gauntlets = stats.iter().find(|s| s.armor.slot == Slot::Gauntlets).unwrap();
        assert_eq!(gauntlets.unique_pinnacle_outfits(), 2);

        let ranking = legendary_ranking(&stats);
        assert_eq!(ranking[0].unique_pinnacle_outfits(), 2);
        assert_eq!(ranking.last().unwrap().armor.instance_id, rival_helmet.instance_id);
    }

    #[test]
    fn test_exotic_copies_share_only_their_own_group() {
        let mut ids = SequentialIds::new();
        let set: Vec<ArmorPiece> = Slot::ALL
            .iter()
            .map(|&slot| ArmorPiece::builder(&mut ids, slot).build())
            .collect();
        let x_first = ArmorPiece::builder(&mut ids, Slot::Helmet).name("X").exotic(TypeHash(200)).build();
        let x_second = ArmorPiece::builder(&mut ids, Slot::Helmet).name("X").exotic(TypeHash(200)).build();
        let y = ArmorPiece::builder(&mut ids, Slot::Helmet).name("Y").exotic(TypeHash(300)).build();
        let mut catalog_pieces = set.clone();
        catalog_pieces.extend([x_first.clone(), x_second.clone(), y.clone()]);
        let catalog = ArmorCatalog::from_pieces(catalog_pieces);

        let with_helmet = |helmet: &ArmorPiece| -> [InstanceId; 5] {
            let mut pieces: [InstanceId; 5] = std::array::from_fn(|i| set[i].instance_id);
            pieces[0] = helmet.instance_id;
            pieces
        };
        let pinnacles = vec![
            pinnacle(with_helmet(&x_first), ExoticGroup::Exotic(TypeHash(200)), &[0]),
            pinnacle(with_helmet(&x_second), ExoticGroup::Exotic(TypeHash(200)), &[0]),
            pinnacle(with_helmet(&y), ExoticGroup::Exotic(TypeHash(300)), &[0]),
        ];
        let stats = armor_pinnacle_stats(&catalog, Archetype::Warlock, &pinnacles, |_| true);
        let find = |id: InstanceId| stats.iter().find(|s| s.armor.instance_id == id).unwrap();

        for copy in [&x_first, &x_second] {
            let copy_stats = find(copy.instance_id);
            assert_eq!(copy_stats.by_exotic.keys().collect::<Vec<_>>(), vec!["X"]);
            assert_eq!(copy_stats.total_pinnacle_outfits(), 1);
            assert_eq!(copy_stats.unique_pinnacle_outfits(), 0);
        }

        // a different exotic in the same slot never competes
        let y_stats = find(y.instance_id);
        assert_eq!(y_stats.by_exotic.keys().collect::<Vec<_>>(), vec!["Y"]);
        assert_eq!(y_stats.unique_pinnacle_outfits(), 1);

        let ranking = exotic_ranking(&stats);
        let names: Vec<&str> = ranking.iter().map(|s| s.armor.name.as_str()).collect();
        assert_eq!(names, vec!["X", "X", "Y"]);
    }

    #[test]
    fn test_ranking_ends_with_piece_total() {
        let mut ids = SequentialIds::new();
        let stats: Vec<ArmorPinnacleStats> = [Slot::Helmet, Slot::Gauntlets]
            .iter()
            .map(|&slot| ArmorPinnacleStats::new(ArmorPiece::builder(&mut ids, slot).build()))
            .collect();

        let mut text = String::new();
        write_ranking(&mut text, &legendary_ranking(&stats)).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("Total pieces: 2\n"));

        let mut empty = String::new();
        write_ranking(&mut empty, &exotic_ranking(&stats)).unwrap();
        assert_eq!(empty, "Total pieces: 0\n");
    }

    #[test]
    fn test_exotic_label_uses_item_name() {
        let mut ids = SequentialIds::new();
        let exotic = ArmorPiece::builder(&mut ids, Slot::Helmet)
            .name("Crown of Tempests")
            .exotic(TypeHash(200))
            .build();
        let catalog = ArmorCatalog::from_pieces([exotic]);

        assert_eq!(exotic_label(&catalog, ExoticGroup::NoExotic), NO_EXOTIC_LABEL);
        assert_eq!(exotic_label(&catalog, ExoticGroup::Exotic(TypeHash(200))), "Crown of Tempests");
        assert_eq!(exotic_label(&catalog, ExoticGroup::Exotic(TypeHash(9))), "Exotic 9");
    }

    #[test]
    fn test_display_marks_shared_metrics() {
        let mut ids = SequentialIds::new();
        let mut stats = ArmorPinnacleStats::new(ArmorPiece::builder(&mut ids, Slot::Helmet).build());
        let all = WeightedSubset::all();
        let metrics = stats.by_exotic.entry(NO_EXOTIC_LABEL.to_string()).or_default();
        metrics.insert(all[0], true);
        metrics.insert(all[1], false);

        let text = stats.to_string();
        assert!(text.contains("total pinnacle outfits: 2"));
        assert!(text.contains("unique pinnacle outfits: 1"));
        assert!(text.ends_with("\n\t No Exotic - 1 - mob/res/rec  ~mob/res/dis~"));
    }

    #[test]
    fn test_report_entry_from_stats() {
        let mut ids = SequentialIds::new();
        let stats = ArmorPinnacleStats::new(ArmorPiece::builder(&mut ids, Slot::LegArmor).build());
        let entry = ArmorReportEntry::from(&stats);
        assert_eq!(entry.grade, UpoGrade::F);
        assert_eq!(entry.note, "#UPO-F-0");
        assert_eq!(entry.slot, Slot::LegArmor);
    }
}
