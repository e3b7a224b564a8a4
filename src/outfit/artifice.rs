//! Artifice mod distributions
//!
//! `n` artifice pieces give `n` indivisible +3 mods, each placed on any one
//! stat. Every way of doing so is a composition of `n` into six
//! non-negative parts. The lists for n = 0..=5 are built once and shared.

use crate::core::types::{Stat, StatBlock};
use crate::outfit::constants::{ARTIFICE_BONUS, MAX_ARTIFICE_PIECES};
use crate::outfit::tier::quantize_block;
use ahash::AHashSet;

/// Mods per stat for one distribution
pub type Composition = [u8; Stat::COUNT];

/// Precomputed compositions for every possible artifice count
#[derive(Debug, Clone)]
pub struct ArtificeCompositions {
    by_count: Vec<Vec<Composition>>,
}

impl ArtificeCompositions {
    pub fn new() -> Self {
        let by_count = (0..=MAX_ARTIFICE_PIECES)
            .map(|n| compositions(n as u8))
            .collect();
        Self { by_count }
    }

    /// Compositions of `n` mods over six stats
    ///
    /// Counts above the piece limit are clamped; an outfit never has more
    /// artifice pieces than slots.
    pub fn for_count(&self, n: usize) -> &[Composition] {
        &self.by_count[n.min(MAX_ARTIFICE_PIECES)]
    }

    /// Distinct quantized stat blocks reachable from `base` with `n` mods
    ///
    /// Results keep the order of the first composition producing them.
    pub fn expand(&self, base: StatBlock, n: usize) -> Vec<StatBlock> {
        if n == 0 {
            return vec![quantize_block(base)];
        }

        let mut seen = AHashSet::new();
        let mut distinct = Vec::new();
        for composition in self.for_count(n) {
            let tiers = quantize_block(apply(base, composition));
            if seen.insert(tiers) {
                distinct.push(tiers);
            }
        }
        distinct
    }
}

impl Default for ArtificeCompositions {
    fn default() -> Self {
        Self::new()
    }
}

/// Add the mod bonuses of one composition
pub fn apply(base: StatBlock, composition: &Composition) -> StatBlock {
    let mut stats = base;
    for stat in Stat::ALL {
        stats[stat] += ARTIFICE_BONUS * composition[stat.index()] as u32;
    }
    stats
}

/// All compositions of `n` into six parts, lexicographically descending by first part
pub fn compositions(n: u8) -> Vec<Composition> {
    let mut out = Vec::new();
    let mut current = [0u8; Stat::COUNT];
    fill(n, 0, &mut current, &mut out);
    out
}

fn fill(remaining: u8, axis: usize, current: &mut Composition, out: &mut Vec<Composition>) {
    if axis == Stat::COUNT - 1 {
        current[axis] = remaining;
        out.push(*current);
        return;
    }
    for part in (0..=remaining).rev() {
        current[axis] = part;
        fill(remaining - part, axis + 1, current, out);
    }
}
