pub mod config;
pub mod error;
pub mod identity;
pub mod types;

pub use config::OptimizerConfig;
pub use error::{OptimizerError, Result};
pub use identity::{IdentitySource, SeededIds, SequentialIds};
pub use types::{Archetype, InstanceId, Rarity, Slot, Stat, StatBlock, TypeHash};
