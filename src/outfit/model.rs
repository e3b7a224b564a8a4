//! Generated outfit values

use crate::core::types::{InstanceId, Slot, Stat, StatBlock, TypeHash};
use crate::outfit::constants::PIECES_PER_OUTFIT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which exotic an outfit is built around
///
/// Pinnacle selection compares outfits only within one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExoticGroup {
    NoExotic,
    Exotic(TypeHash),
}

impl ExoticGroup {
    pub fn type_hash(&self) -> Option<TypeHash> {
        match self {
            ExoticGroup::NoExotic => None,
            ExoticGroup::Exotic(hash) => Some(*hash),
        }
    }
}

impl fmt::Display for ExoticGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExoticGroup::NoExotic => f.write_str("No Exotic"),
            ExoticGroup::Exotic(hash) => write!(f, "Exotic {}", hash),
        }
    }
}

/// Five pieces, one per slot, with their tiered stat totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outfit {
    /// Quantized stats after masterwork and artifice bonuses
    pub stats: StatBlock,
    /// Piece ids in [`Slot::ALL`] order
    pub pieces: [InstanceId; PIECES_PER_OUTFIT],
    pub exotic: ExoticGroup,
    pub artifice_count: u8,
}

impl Outfit {
    pub fn piece(&self, slot: Slot) -> InstanceId {
        self.pieces[slot.index()]
    }

    pub fn stat(&self, stat: Stat) -> u32 {
        self.stats[stat]
    }

    pub fn total_stats(&self) -> u32 {
        self.stats.total()
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.pieces.contains(&id)
    }
}
