//! Pinnacle outfit selection
//!
//! Outfits are grouped by exotic. Within a group, each of the twenty
//! weighted metrics has a maximum; an outfit is a pinnacle outfit when it
//! reaches at least one of them. Ties all qualify.

use crate::outfit::model::{ExoticGroup, Outfit};
use crate::pinnacle::subsets::{SubsetMask, WeightedSubset, SUBSET_COUNT};
use ahash::AHashMap;
use serde::Serialize;

/// Per-metric scores or maxima, indexed like [`WeightedSubset::all`]
pub type MetricScores = [u32; SUBSET_COUNT];

/// An outfit that tops at least one weighted metric in its group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinnacleOutfit {
    pub outfit: Outfit,
    /// Sum of the six tiered stats
    pub total_stats: u32,
    /// Metrics on which this outfit reaches its group maximum
    pub pinnacle_subsets: SubsetMask,
}

/// Reduces a full outfit enumeration to its pinnacle members
#[derive(Debug, Clone)]
pub struct PinnacleSelector {
    subsets: [WeightedSubset; SUBSET_COUNT],
}

impl PinnacleSelector {
    pub fn new() -> Self {
        Self {
            subsets: WeightedSubset::all(),
        }
    }

    pub fn subsets(&self) -> &[WeightedSubset; SUBSET_COUNT] {
        &self.subsets
    }

    /// Weighted score of one outfit on every metric
    pub fn scores(&self, outfit: &Outfit) -> MetricScores {
        self.subsets.map(|subset| subset.weighted(&outfit.stats))
    }

    /// Running maximum of every metric per exotic group
    pub fn group_maxima(&self, outfits: &[Outfit]) -> AHashMap<ExoticGroup, MetricScores> {
        let mut maxima: AHashMap<ExoticGroup, MetricScores> = AHashMap::new();
        for outfit in outfits {
            let scores = self.scores(outfit);
            let best = maxima.entry(outfit.exotic).or_insert([0; SUBSET_COUNT]);
            for (max, score) in best.iter_mut().zip(scores) {
                *max = (*max).max(score);
            }
        }
        maxima
    }

    /// Pinnacle members in input order
    pub fn select(&self, outfits: &[Outfit]) -> Vec<PinnacleOutfit> {
        let maxima = self.group_maxima(outfits);

        let pinnacles: Vec<PinnacleOutfit> = outfits
            .iter()
            .filter_map(|outfit| {
                let best = maxima.get(&outfit.exotic)?;
                let mut mask = SubsetMask::default();
                for (i, score) in self.scores(outfit).into_iter().enumerate() {
                    if score == best[i] {
                        mask.insert(i);
                    }
                }
                (!mask.is_empty()).then(|| PinnacleOutfit {
                    outfit: *outfit,
                    total_stats: outfit.total_stats(),
                    pinnacle_subsets: mask,
                })
            })
            .collect();

        tracing::debug!(
            "{} exotic groups, {} of {} outfits are pinnacle",
            maxima.len(),
            pinnacles.len(),
            outfits.len()
        );
        pinnacles
    }
}

impl Default for PinnacleSelector {
    fn default() -> Self {
        Self::new()
    }
}
