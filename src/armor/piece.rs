//! A single armor piece as ingested from the player's collection
//!
//! Stats are base values: masterwork and mod bonuses are applied by the
//! outfit generator, never stored on the piece.

use crate::core::identity::IdentitySource;
use crate::core::types::{Archetype, InstanceId, Rarity, Slot, Stat, StatBlock, TypeHash};
use serde::{Deserialize, Serialize};

/// Immutable armor record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorPiece {
    pub instance_id: InstanceId,
    pub type_hash: TypeHash,
    pub name: String,
    pub archetype: Archetype,
    pub slot: Slot,
    pub rarity: Rarity,
    #[serde(default)]
    pub power: u32,
    pub stats: StatBlock,
    #[serde(default)]
    pub is_artifice: bool,
}

impl ArmorPiece {
    /// Start a placeholder piece with identities drawn from `ids`
    ///
    /// Defaults: Legendary Warlock piece named "Generic Armor", all stats zero.
    pub fn builder(ids: &mut impl IdentitySource, slot: Slot) -> ArmorPieceBuilder {
        ArmorPieceBuilder {
            piece: ArmorPiece {
                instance_id: ids.next_instance_id(),
                type_hash: ids.next_type_hash(),
                name: "Generic Armor".to_string(),
                archetype: Archetype::Warlock,
                slot,
                rarity: Rarity::Legendary,
                power: 0,
                stats: StatBlock::ZERO,
                is_artifice: false,
            },
        }
    }

    pub fn is_exotic(&self) -> bool {
        self.rarity == Rarity::Exotic
    }

    pub fn total_stats(&self) -> u32 {
        self.stats.total()
    }

    pub fn stat(&self, stat: Stat) -> u32 {
        self.stats[stat]
    }

    /// "Warlock Helmet" style label
    pub fn class_slot(&self) -> String {
        format!("{} {}", self.archetype, self.slot)
    }
}

/// Fluent construction for placeholder pieces
#[derive(Debug, Clone)]
pub struct ArmorPieceBuilder {
    piece: ArmorPiece,
}

impl ArmorPieceBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.piece.name = name.into();
        self
    }

    pub fn archetype(mut self, archetype: Archetype) -> Self {
        self.piece.archetype = archetype;
        self
    }

    /// Mark as Exotic; exotics sharing a `type_hash` are copies of one item
    pub fn exotic(mut self, type_hash: TypeHash) -> Self {
        self.piece.rarity = Rarity::Exotic;
        self.piece.type_hash = type_hash;
        self
    }

    pub fn type_hash(mut self, type_hash: TypeHash) -> Self {
        self.piece.type_hash = type_hash;
        self
    }

    pub fn power(mut self, power: u32) -> Self {
        self.piece.power = power;
        self
    }

    pub fn stats(mut self, values: [u32; Stat::COUNT]) -> Self {
        self.piece.stats = StatBlock::new(values);
        self
    }

    pub fn all_stats(mut self, value: u32) -> Self {
        self.piece.stats = StatBlock::splat(value);
        self
    }

    pub fn artifice(mut self) -> Self {
        self.piece.is_artifice = true;
        self
    }

    pub fn build(self) -> ArmorPiece {
        self.piece
    }
}
