//! Reproducible random catalogs for tests, benchmarks and stress runs

use crate::armor::catalog::ArmorCatalog;
use crate::armor::piece::ArmorPiece;
use crate::core::error::{OptimizerError, Result};
use crate::core::identity::IdentitySource;
use crate::core::types::{Archetype, Slot, Stat};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shape of a synthetic catalog
#[derive(Debug, Clone)]
pub struct SyntheticCatalog {
    pub archetypes: Vec<Archetype>,
    /// Legendary pieces per slot, class items included
    pub legendary_per_slot: usize,
    /// Exotic pieces per slot, class items excluded
    pub exotics_per_slot: usize,
    /// Chance a legendary piece is artifice
    pub artifice_chance: f64,
    /// Inclusive per-stat range
    pub stat_range: (u32, u32),
    pub seed: u64,
}

impl Default for SyntheticCatalog {
    fn default() -> Self {
        Self {
            archetypes: vec![Archetype::Warlock],
            legendary_per_slot: 10,
            exotics_per_slot: 0,
            artifice_chance: 0.0,
            stat_range: (1, 42),
            seed: 42,
        }
    }
}

impl SyntheticCatalog {
    /// Check the shape before building from user input
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.artifice_chance) {
            return Err(OptimizerError::InvalidConfig(format!(
                "artifice chance {} is outside 0..=1",
                self.artifice_chance
            )));
        }

        let (lo, hi) = self.stat_range;
        if lo > hi {
            return Err(OptimizerError::InvalidConfig(format!(
                "stat range {}..={} is empty",
                lo, hi
            )));
        }

        Ok(())
    }

    /// Random pieces with identities from `ids`
    ///
    /// Out-of-range shapes are tolerated: the chance saturates and a
    /// reversed stat range is read low to high.
    pub fn pieces(&self, ids: &mut impl IdentitySource) -> Vec<ArmorPiece> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut pieces = Vec::new();

        for &archetype in &self.archetypes {
            for slot in Slot::ALL {
                for _ in 0..self.legendary_per_slot {
                    let mut builder = ArmorPiece::builder(ids, slot)
                        .archetype(archetype)
                        .stats(self.random_stats(&mut rng))
                        .power(rng.gen_range(1750..=1810));
                    if rng.gen::<f64>() < self.artifice_chance {
                        builder = builder.artifice();
                    }
                    pieces.push(builder.build());
                }

                if slot == Slot::ClassItem {
                    continue;
                }
                for n in 0..self.exotics_per_slot {
                    let hash = ids.next_type_hash();
                    let piece = ArmorPiece::builder(ids, slot)
                        .name(format!("Exotic {} {}", slot, n + 1))
                        .archetype(archetype)
                        .exotic(hash)
                        .stats(self.random_stats(&mut rng))
                        .power(rng.gen_range(1750..=1810))
                        .build();
                    pieces.push(piece);
                }
            }
        }

        pieces
    }

    pub fn build(&self, ids: &mut impl IdentitySource) -> ArmorCatalog {
        ArmorCatalog::from_pieces(self.pieces(ids))
    }

    fn random_stats(&self, rng: &mut ChaCha8Rng) -> [u32; Stat::COUNT] {
        let (a, b) = self.stat_range;
        let (lo, hi) = (a.min(b), a.max(b));
        std::array::from_fn(|_| rng.gen_range(lo..=hi))
    }
}
