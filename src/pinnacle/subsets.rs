//! The twenty three-stat weighted metrics
//!
//! Each metric counts every stat once and the three chosen stats twice, so
//! an outfit scores well by concentrating on one three-stat build without
//! ignoring the rest.

use crate::core::types::{Stat, StatBlock};
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of 3-element subsets of six stats
pub const SUBSET_COUNT: usize = 20;

/// Three stats weighted double
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedSubset {
    stats: [Stat; 3],
}

impl WeightedSubset {
    /// All twenty subsets, lexicographic by stat order
    pub fn all() -> [WeightedSubset; SUBSET_COUNT] {
        let mut subsets = [WeightedSubset {
            stats: [Stat::Mobility; 3],
        }; SUBSET_COUNT];
        let mut n = 0;
        for i in 0..Stat::COUNT {
            for j in (i + 1)..Stat::COUNT {
                for k in (j + 1)..Stat::COUNT {
                    subsets[n] = WeightedSubset {
                        stats: [Stat::ALL[i], Stat::ALL[j], Stat::ALL[k]],
                    };
                    n += 1;
                }
            }
        }
        subsets
    }

    pub fn stats(&self) -> [Stat; 3] {
        self.stats
    }

    pub fn contains(&self, stat: Stat) -> bool {
        self.stats.contains(&stat)
    }

    /// Total of all stats plus the subset's stats again
    #[inline]
    pub fn weighted(&self, stats: &StatBlock) -> u32 {
        stats.total() + self.stats.iter().map(|&stat| stats[stat]).sum::<u32>()
    }

    /// Report label, e.g. `mob/res/rec`
    pub fn label(&self) -> String {
        let [a, b, c] = self.stats;
        format!("{}/{}/{}", a.short(), b.short(), c.short())
    }
}

impl fmt::Display for WeightedSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for WeightedSubset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Set of subsets, one bit per index into [`WeightedSubset::all`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SubsetMask(u32);

impl SubsetMask {
    pub fn insert(&mut self, index: usize) {
        self.0 |= 1 << index;
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SUBSET_COUNT).filter(move |&i| self.contains(i))
    }

    pub fn subsets(&self) -> Vec<WeightedSubset> {
        let all = WeightedSubset::all();
        self.indices().map(|i| all[i]).collect()
    }
}

impl Serialize for SubsetMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.subsets())
    }
}
