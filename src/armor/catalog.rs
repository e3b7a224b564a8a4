//! In-memory armor catalog and per-slot grouping
//!
//! Grouping partitions one archetype's armor into Exotic and non-Exotic
//! lists per slot, each in ingestion order. Non-Exotic class items are
//! collapsed to a single representative: within a rarity they share base
//! stats, so only the artifice distinction changes an outfit.

use crate::armor::piece::ArmorPiece;
use crate::core::types::{Archetype, InstanceId, Slot, TypeHash};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Per-slot piece lists, indexed by [`Slot::index`]
pub type SlotLists<'a> = [Vec<&'a ArmorPiece>; 5];

/// Result of [`ArmorCatalog::group`]
#[derive(Debug, Clone, Default)]
pub struct GroupedArmor<'a> {
    pub exotic: SlotLists<'a>,
    pub non_exotic: SlotLists<'a>,
}

impl<'a> GroupedArmor<'a> {
    pub fn exotic_in(&self, slot: Slot) -> &[&'a ArmorPiece] {
        &self.exotic[slot.index()]
    }

    pub fn non_exotic_in(&self, slot: Slot) -> &[&'a ArmorPiece] {
        &self.non_exotic[slot.index()]
    }

    /// Number of slots holding at least one Exotic piece
    pub fn exotic_slot_count(&self) -> usize {
        self.exotic.iter().filter(|list| !list.is_empty()).count()
    }
}

/// Pieces left out of every analysis, keyed by instance id
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    ids: AHashSet<InstanceId>,
}

/// One ignore-list record as written by the collection exporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredArmor {
    pub instance_id: InstanceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tag: String,
}

impl IgnoreList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[IgnoredArmor]) -> Self {
        Self {
            ids: records.iter().map(|record| record.instance_id).collect(),
        }
    }

    pub fn insert(&mut self, id: InstanceId) {
        self.ids.insert(id);
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.ids.contains(&id)
    }

    /// Include-filter for [`ArmorCatalog::group`]
    pub fn admits(&self, piece: &ArmorPiece) -> bool {
        !self.contains(piece.instance_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The player's whole armor collection
#[derive(Debug, Clone, Default)]
pub struct ArmorCatalog {
    pieces: Vec<ArmorPiece>,
    by_id: AHashMap<InstanceId, usize>,
}

impl ArmorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from validated records; a repeated instance id replaces the earlier record
    pub fn from_pieces(pieces: impl IntoIterator<Item = ArmorPiece>) -> Self {
        let mut catalog = Self::new();
        for piece in pieces {
            catalog.insert(piece);
        }
        catalog
    }

    pub fn insert(&mut self, piece: ArmorPiece) {
        match self.by_id.get(&piece.instance_id) {
            Some(&idx) => self.pieces[idx] = piece,
            None => {
                self.by_id.insert(piece.instance_id, self.pieces.len());
                self.pieces.push(piece);
            }
        }
    }

    pub fn get(&self, id: InstanceId) -> Option<&ArmorPiece> {
        self.by_id.get(&id).map(|&idx| &self.pieces[idx])
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// All pieces in ingestion order
    pub fn pieces(&self) -> &[ArmorPiece] {
        &self.pieces
    }

    pub fn for_archetype(&self, archetype: Archetype) -> impl Iterator<Item = &ArmorPiece> + '_ {
        self.pieces.iter().filter(move |piece| piece.archetype == archetype)
    }

    /// Display name of an exotic item, from any copy in the catalog
    pub fn exotic_name(&self, type_hash: TypeHash) -> Option<&str> {
        self.pieces
            .iter()
            .find(|piece| piece.is_exotic() && piece.type_hash == type_hash)
            .map(|piece| piece.name.as_str())
    }

    /// Partition one archetype's armor by slot and exotic status
    ///
    /// Only `slots` are populated; other slot lists stay empty. Pieces
    /// rejected by `include` are skipped.
    pub fn group<F>(&self, archetype: Archetype, slots: &[Slot], include: F) -> GroupedArmor<'_>
    where
        F: Fn(&ArmorPiece) -> bool,
    {
        let mut grouped = GroupedArmor::default();

        for piece in self.for_archetype(archetype) {
            if !slots.contains(&piece.slot) || !include(piece) {
                continue;
            }
            let lists = if piece.is_exotic() {
                &mut grouped.exotic
            } else {
                &mut grouped.non_exotic
            };
            lists[piece.slot.index()].push(piece);
        }

        let class_items = &mut grouped.non_exotic[Slot::ClassItem.index()];
        if let Some(representative) = class_item_representative(class_items) {
            *class_items = vec![representative];
        }

        grouped
    }
}

/// First artifice class item, else the first class item
fn class_item_representative<'a>(class_items: &[&'a ArmorPiece]) -> Option<&'a ArmorPiece> {
    class_items
        .iter()
        .find(|piece| piece.is_artifice)
        .or_else(|| class_items.first())
        .copied()
}
