//! Load armor catalogs and ignore lists from JSON
//!
//! The collection exporter writes one flat record per armor piece. This
//! module turns those records into [`ArmorPiece`]s and rejects the few
//! things serde cannot: repeated instance ids.

use crate::armor::catalog::{ArmorCatalog, IgnoreList, IgnoredArmor};
use crate::armor::piece::ArmorPiece;
use crate::core::types::{Archetype, InstanceId, Rarity, Slot, StatBlock, TypeHash};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a catalog
#[derive(Debug, Error)]
pub enum LoadError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Two records share an instance id
    #[error("Duplicate armor instance id: {0}")]
    DuplicateInstance(InstanceId),
    /// File I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Flat armor record as exported from the player's collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorRecord {
    pub instance_id: InstanceId,
    #[serde(alias = "item_hash")]
    pub type_hash: TypeHash,
    #[serde(alias = "item_name", default = "default_name")]
    pub name: String,
    #[serde(alias = "d2_class")]
    pub archetype: Archetype,
    pub slot: Slot,
    pub rarity: Rarity,
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub mobility: u32,
    #[serde(default)]
    pub resilience: u32,
    #[serde(default)]
    pub recovery: u32,
    #[serde(default)]
    pub discipline: u32,
    #[serde(default)]
    pub intellect: u32,
    #[serde(default)]
    pub strength: u32,
    #[serde(default)]
    pub is_artifice: bool,
}

fn default_name() -> String {
    "Generic Armor".to_string()
}

impl From<ArmorRecord> for ArmorPiece {
    fn from(record: ArmorRecord) -> Self {
        ArmorPiece {
            instance_id: record.instance_id,
            type_hash: record.type_hash,
            name: record.name,
            archetype: record.archetype,
            slot: record.slot,
            rarity: record.rarity,
            power: record.power,
            stats: StatBlock::new([
                record.mobility,
                record.resilience,
                record.recovery,
                record.discipline,
                record.intellect,
                record.strength,
            ]),
            is_artifice: record.is_artifice,
        }
    }
}

/// Build a catalog from parsed records
pub fn catalog_from_records(records: Vec<ArmorRecord>) -> Result<ArmorCatalog, LoadError> {
    let mut catalog = ArmorCatalog::new();
    for record in records {
        if catalog.get(record.instance_id).is_some() {
            return Err(LoadError::DuplicateInstance(record.instance_id));
        }
        catalog.insert(record.into());
    }
    Ok(catalog)
}

/// Load a catalog from a JSON array of armor records
pub fn load_catalog_from_json(json: &str) -> Result<ArmorCatalog, LoadError> {
    let records: Vec<ArmorRecord> = serde_json::from_str(json)?;
    catalog_from_records(records)
}

/// Load a catalog from a JSON file on disk
pub fn load_catalog_file(path: &Path) -> Result<ArmorCatalog, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let catalog = load_catalog_from_json(&content)?;
    tracing::info!("Loaded {} armor pieces from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load an ignore list from a JSON array of `{instance_id, name, tag}`
pub fn load_ignore_list_from_json(json: &str) -> Result<IgnoreList, LoadError> {
    let records: Vec<IgnoredArmor> = serde_json::from_str(json)?;
    Ok(IgnoreList::from_records(&records))
}

pub fn load_ignore_list_file(path: &Path) -> Result<IgnoreList, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let ignore = load_ignore_list_from_json(&content)?;
    tracing::info!("Ignoring {} armor pieces listed in {}", ignore.len(), path.display());
    Ok(ignore)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Stat;

    const CATALOG_JSON: &str = r#"[
        {
            "instance_id": 6917529860806551003,
            "item_hash": 2244604734,
            "item_name": "Phoenix Protocol",
            "d2_class": "Warlock",
            "slot": "Chest Armor",
            "rarity": "Exotic",
            "power": 1810,
            "mobility": 2, "resilience": 20, "recovery": 10,
            "discipline": 16, "intellect": 2, "strength": 14
        },
        {
            "instance_id": 42,
            "type_hash": 7,
            "name": "Bond of Forbidden Magic",
            "archetype": "Warlock",
            "slot": "Warlock Bond",
            "rarity": "Legendary",
            "is_artifice": true
        }
    ]"#;

    #[test]
    fn test_load_catalog_records() {
        let catalog = load_catalog_from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.len(), 2);

        let chest = catalog.get(InstanceId(6917529860806551003)).unwrap();
        assert!(chest.is_exotic());
        assert_eq!(chest.slot, Slot::ChestArmor);
        assert_eq!(chest.stat(Stat::Resilience), 20);
        assert_eq!(chest.total_stats(), 64);
        assert_eq!(chest.power, 1810);

        let bond = catalog.get(InstanceId(42)).unwrap();
        assert_eq!(bond.slot, Slot::ClassItem);
        assert!(bond.is_artifice);
        assert_eq!(bond.total_stats(), 0);
    }

    #[test]
    fn test_duplicate_instance_rejected() {
        let json = r#"[
            {"instance_id": 1, "type_hash": 1, "archetype": "Titan", "slot": "Helmet", "rarity": "Legendary"},
            {"instance_id": 1, "type_hash": 2, "archetype": "Titan", "slot": "Helmet", "rarity": "Legendary"}
        ]"#;
        let result = load_catalog_from_json(json);
        assert!(matches!(result, Err(LoadError::DuplicateInstance(InstanceId(1)))));
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let json = r#"[{"instance_id": 1, "type_hash": 1, "archetype": "Titan", "slot": "Boots", "rarity": "Legendary"}]"#;
        assert!(matches!(load_catalog_from_json(json), Err(LoadError::JsonError(_))));
    }

    #[test]
    fn test_negative_stat_rejected() {
        let json = r#"[{"instance_id": 1, "type_hash": 1, "archetype": "Titan", "slot": "Helmet", "rarity": "Legendary", "mobility": -2}]"#;
        assert!(matches!(load_catalog_from_json(json), Err(LoadError::JsonError(_))));
    }

    #[test]
    fn test_load_ignore_list() {
        let json = r##"[
            {"instance_id": 42, "name": "Bond of Forbidden Magic", "tag": "junk"},
            {"instance_id": 43, "name": "Old Helmet", "tag": "#ignore"}
        ]"##;
        let ignore = load_ignore_list_from_json(json).unwrap();
        assert_eq!(ignore.len(), 2);
        assert!(ignore.contains(InstanceId(42)));
        assert!(!ignore.contains(InstanceId(44)));
    }
}
