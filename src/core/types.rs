//! Core type definitions used throughout the codebase

use crate::core::error::OptimizerError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Unique identifier for one physical armor piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub u64);

/// Identifier shared by every copy of the same named item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeHash(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Character class an armor piece belongs to
///
/// Deserializes case-insensitively, matching the `FromStr` used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Archetype {
    Titan,
    Hunter,
    Warlock,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [Archetype::Warlock, Archetype::Hunter, Archetype::Titan];

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Titan => "Titan",
            Archetype::Hunter => "Hunter",
            Archetype::Warlock => "Warlock",
        }
    }

    /// Case-insensitive lookup by class name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|archetype| archetype.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::str::FromStr for Archetype {
    type Err = OptimizerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| OptimizerError::UnknownArchetype(name.to_string()))
    }
}

impl<'de> Deserialize<'de> for Archetype {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| serde::de::Error::unknown_variant(&name, &["Titan", "Hunter", "Warlock"]))
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Equipment position; an outfit fills each exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    Helmet,
    Gauntlets,
    #[serde(rename = "Chest Armor")]
    ChestArmor,
    #[serde(rename = "Leg Armor")]
    LegArmor,
    #[serde(rename = "Class Item", alias = "Warlock Bond", alias = "Titan Mark", alias = "Hunter Cloak")]
    ClassItem,
}

impl Slot {
    /// Slot order used for outfit piece arrays and single-exotic passes
    pub const ALL: [Slot; 5] = [
        Slot::Helmet,
        Slot::Gauntlets,
        Slot::ChestArmor,
        Slot::LegArmor,
        Slot::ClassItem,
    ];

    pub fn index(&self) -> usize {
        match self {
            Slot::Helmet => 0,
            Slot::Gauntlets => 1,
            Slot::ChestArmor => 2,
            Slot::LegArmor => 3,
            Slot::ClassItem => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Slot::Helmet => "Helmet",
            Slot::Gauntlets => "Gauntlets",
            Slot::ChestArmor => "Chest Armor",
            Slot::LegArmor => "Leg Armor",
            Slot::ClassItem => "Class Item",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rarity tier; at most one Exotic piece per outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Legendary,
    Exotic,
}

/// The six armor attribute axes, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stat {
    Mobility,
    Resilience,
    Recovery,
    Discipline,
    Intellect,
    Strength,
}

impl Stat {
    pub const COUNT: usize = 6;

    pub const ALL: [Stat; Stat::COUNT] = [
        Stat::Mobility,
        Stat::Resilience,
        Stat::Recovery,
        Stat::Discipline,
        Stat::Intellect,
        Stat::Strength,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Mobility => "mobility",
            Stat::Resilience => "resilience",
            Stat::Recovery => "recovery",
            Stat::Discipline => "discipline",
            Stat::Intellect => "intellect",
            Stat::Strength => "strength",
        }
    }

    /// Three-letter label used in reports ("mob", "res", ...)
    pub fn short(&self) -> &'static str {
        &self.name()[..3]
    }
}

/// Values on all six axes, indexed by [`Stat`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatBlock(pub [u32; Stat::COUNT]);

impl StatBlock {
    pub const ZERO: StatBlock = StatBlock([0; Stat::COUNT]);

    pub fn new(values: [u32; Stat::COUNT]) -> Self {
        Self(values)
    }

    /// Same value on every axis
    pub fn splat(value: u32) -> Self {
        Self([value; Stat::COUNT])
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// True when every axis is at least the other's value
    pub fn covers(&self, other: &StatBlock) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a >= b)
    }

    pub fn map(&self, f: impl Fn(u32) -> u32) -> Self {
        Self(self.0.map(f))
    }

    pub fn values(&self) -> &[u32; Stat::COUNT] {
        &self.0
    }
}

impl Index<Stat> for StatBlock {
    type Output = u32;

    fn index(&self, stat: Stat) -> &u32 {
        &self.0[stat.index()]
    }
}

impl IndexMut<Stat> for StatBlock {
    fn index_mut(&mut self, stat: Stat) -> &mut u32 {
        &mut self.0[stat.index()]
    }
}

impl std::ops::Add for StatBlock {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for (a, b) in out.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
        out
    }
}

impl std::ops::AddAssign for StatBlock {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for StatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [mob, res, rec, dis, int, stren] = self.0;
        write!(f, "m:{} r:{} r:{} d:{} i:{} s:{}", mob, res, rec, dis, int, stren)
    }
}
