//! Pinnacle outfit selection and per-armor pinnacle reports

pub mod report;
pub mod selector;
pub mod subsets;

pub use report::{
    armor_pinnacle_stats, exotic_ranking, legendary_ranking, ArmorPinnacleStats, ArmorReportEntry,
    UpoGrade, write_ranking,
};
pub use selector::{PinnacleOutfit, PinnacleSelector};
pub use subsets::{SubsetMask, WeightedSubset, SUBSET_COUNT};
