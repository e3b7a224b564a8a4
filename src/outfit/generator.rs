//! Outfit enumeration
//!
//! For one archetype, every outfit is the product of five per-slot lists.
//! The base pass uses the non-Exotic list in every slot; each single-exotic
//! pass swaps in one slot's Exotic list, so no outfit holds two exotics.
//! Every tuple gets the flat masterwork bonus, then its artifice mods are
//! distributed every possible way and the distinct tiered results kept.
//!
//! Passes are independent. With `parallel` set they run on the rayon pool
//! and are concatenated in pass order, so output never depends on it.

use crate::armor::catalog::{ArmorCatalog, GroupedArmor};
use crate::armor::piece::ArmorPiece;
use crate::core::types::{Archetype, Slot, StatBlock};
use crate::outfit::artifice::ArtificeCompositions;
use crate::outfit::constants::{MASTERWORK_BONUS, PIECES_PER_OUTFIT};
use crate::outfit::model::{ExoticGroup, Outfit};
use rayon::prelude::*;

/// One cartesian product over five slot lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Non-Exotic pieces in every slot
    Base,
    /// Exotic pieces in this slot, non-Exotic elsewhere
    SingleExotic(Slot),
}

impl Pass {
    /// Base pass first, then one pass per slot in slot order
    pub fn all() -> [Pass; PIECES_PER_OUTFIT + 1] {
        [
            Pass::Base,
            Pass::SingleExotic(Slot::Helmet),
            Pass::SingleExotic(Slot::Gauntlets),
            Pass::SingleExotic(Slot::ChestArmor),
            Pass::SingleExotic(Slot::LegArmor),
            Pass::SingleExotic(Slot::ClassItem),
        ]
    }

    /// Slot lists this pass multiplies together
    pub fn lists<'g, 'a>(&self, grouped: &'g GroupedArmor<'a>) -> [&'g [&'a ArmorPiece]; PIECES_PER_OUTFIT] {
        std::array::from_fn(|i| match self {
            Pass::SingleExotic(slot) if slot.index() == i => grouped.exotic[i].as_slice(),
            _ => grouped.non_exotic[i].as_slice(),
        })
    }
}

/// Enumerates every legal outfit for an archetype
#[derive(Debug, Clone)]
pub struct OutfitGenerator {
    compositions: ArtificeCompositions,
    parallel: bool,
}

impl OutfitGenerator {
    pub fn new() -> Self {
        Self {
            compositions: ArtificeCompositions::new(),
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Group the archetype's armor and enumerate its outfits
    pub fn generate<F>(&self, catalog: &ArmorCatalog, archetype: Archetype, include: F) -> Vec<Outfit>
    where
        F: Fn(&ArmorPiece) -> bool,
    {
        let grouped = catalog.group(archetype, &Slot::ALL, include);
        let outfits = self.generate_grouped(&grouped);
        tracing::info!("{}: generated {} outfits", archetype, outfits.len());
        outfits
    }

    /// Enumerate outfits from already-grouped armor
    pub fn generate_grouped(&self, grouped: &GroupedArmor<'_>) -> Vec<Outfit> {
        let passes = Pass::all();

        let per_pass: Vec<Vec<Outfit>> = if self.parallel {
            passes[..].par_iter().map(|pass| self.run_pass(grouped, *pass)).collect()
        } else {
            passes.iter().map(|pass| self.run_pass(grouped, *pass)).collect()
        };

        per_pass.into_iter().flatten().collect()
    }

    /// Cartesian product of one pass, last slot varying fastest
    pub fn run_pass(&self, grouped: &GroupedArmor<'_>, pass: Pass) -> Vec<Outfit> {
        let lists = pass.lists(grouped);
        if lists.iter().any(|list| list.is_empty()) {
            return Vec::new();
        }

        let tuples: usize = lists.iter().map(|list| list.len()).product();
        let mut outfits = Vec::with_capacity(tuples);
        let mut cursor = [0usize; PIECES_PER_OUTFIT];

        'product: loop {
            let pieces: [&ArmorPiece; PIECES_PER_OUTFIT] = std::array::from_fn(|i| lists[i][cursor[i]]);
            self.emit(&pieces, &mut outfits);

            let mut slot = PIECES_PER_OUTFIT;
            loop {
                if slot == 0 {
                    break 'product;
                }
                slot -= 1;
                cursor[slot] += 1;
                if cursor[slot] < lists[slot].len() {
                    break;
                }
                cursor[slot] = 0;
            }
        }

        tracing::debug!("{:?}: {} tuples -> {} outfits", pass, tuples, outfits.len());
        outfits
    }

    /// Push one outfit per distinct tiered result of this tuple
    fn emit(&self, pieces: &[&ArmorPiece; PIECES_PER_OUTFIT], out: &mut Vec<Outfit>) {
        let mut base = StatBlock::splat(MASTERWORK_BONUS);
        let mut artifice_count = 0u8;
        let mut exotic = ExoticGroup::NoExotic;

        for piece in pieces {
            base += piece.stats;
            if piece.is_artifice {
                artifice_count += 1;
            }
            if piece.is_exotic() {
                exotic = ExoticGroup::Exotic(piece.type_hash);
            }
        }

        let ids = pieces.map(|piece| piece.instance_id);
        for stats in self.compositions.expand(base, artifice_count as usize) {
            out.push(Outfit {
                stats,
                pieces: ids,
                exotic,
                artifice_count,
            });
        }
    }
}

impl Default for OutfitGenerator {
    fn default() -> Self {
        Self::new()
    }
}
