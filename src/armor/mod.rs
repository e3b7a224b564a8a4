//! Armor pieces, the player's catalog, and catalog ingestion

pub mod catalog;
pub mod loader;
pub mod piece;
pub mod synthetic;

pub use catalog::{ArmorCatalog, GroupedArmor, IgnoreList, IgnoredArmor, SlotLists};
pub use loader::{ArmorRecord, LoadError};
pub use piece::{ArmorPiece, ArmorPieceBuilder};
pub use synthetic::SyntheticCatalog;
