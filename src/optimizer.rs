//! Whole-collection optimization run
//!
//! Archetypes are independent: each gets its own outfit enumeration,
//! pinnacle selection and armor report. The eclipsed-armor scan reads the
//! catalog directly and runs once. Archetypes run on the rayon pool when the
//! config asks for it; results always come back in configured order.

use crate::armor::catalog::{ArmorCatalog, IgnoreList};
use crate::armor::loader::load_ignore_list_file;
use crate::armor::piece::ArmorPiece;
use crate::core::config::OptimizerConfig;
use crate::core::error::Result;
use crate::core::types::{Archetype, InstanceId, Slot};
use crate::eclipse::{find_eclipsed_armor, EclipsedPair};
use crate::outfit::generator::OutfitGenerator;
use crate::outfit::model::Outfit;
use crate::pinnacle::report::{armor_pinnacle_stats, legendary_ranking, ArmorPinnacleStats, ArmorReportEntry};
use crate::pinnacle::selector::{PinnacleOutfit, PinnacleSelector};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// Everything computed for one archetype
#[derive(Debug, Clone)]
pub struct ArchetypeRun {
    pub archetype: Archetype,
    pub outfits: Vec<Outfit>,
    pub pinnacles: Vec<PinnacleOutfit>,
    pub armor_stats: Vec<ArmorPinnacleStats>,
}

impl ArchetypeRun {
    /// Number of distinct exotic groups among the pinnacle outfits
    pub fn exotic_group_count(&self) -> usize {
        let mut groups: Vec<_> = self.pinnacles.iter().map(|p| p.outfit.exotic).collect();
        groups.sort();
        groups.dedup();
        groups.len()
    }
}

/// Result of [`Optimizer::run`]
#[derive(Debug, Clone)]
pub struct OptimizationRun<'a> {
    pub archetypes: Vec<ArchetypeRun>,
    pub eclipsed: Vec<EclipsedPair<'a>>,
}

impl OptimizationRun<'_> {
    pub fn archetype(&self, archetype: Archetype) -> Option<&ArchetypeRun> {
        self.archetypes.iter().find(|run| run.archetype == archetype)
    }

    /// Compact, serializable digest for reporting
    pub fn summary(&self, top: usize) -> RunSummary {
        RunSummary {
            archetypes: self
                .archetypes
                .iter()
                .map(|run| ArchetypeSummary {
                    archetype: run.archetype,
                    outfit_count: run.outfits.len(),
                    pinnacle_count: run.pinnacles.len(),
                    exotic_groups: run.exotic_group_count(),
                    top_legendary: legendary_ranking(&run.armor_stats)
                        .into_iter()
                        .take(top)
                        .map(ArmorReportEntry::from)
                        .collect(),
                })
                .collect(),
            eclipsed: self
                .eclipsed
                .iter()
                .map(|pair| EclipsedSummary {
                    archetype: pair.eclipsed.archetype,
                    slot: pair.eclipsed.slot,
                    eclipsed_id: pair.eclipsed.instance_id,
                    eclipsed_name: pair.eclipsed.name.clone(),
                    dominator_id: pair.dominator.instance_id,
                    dominator_name: pair.dominator.name.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub archetypes: Vec<ArchetypeSummary>,
    pub eclipsed: Vec<EclipsedSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeSummary {
    pub archetype: Archetype,
    pub outfit_count: usize,
    pub pinnacle_count: usize,
    pub exotic_groups: usize,
    pub top_legendary: Vec<ArmorReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EclipsedSummary {
    pub archetype: Archetype,
    pub slot: Slot,
    pub eclipsed_id: InstanceId,
    pub eclipsed_name: String,
    pub dominator_id: InstanceId,
    pub dominator_name: String,
}

/// Runs generation, selection and analysis for a catalog
#[derive(Debug, Clone)]
pub struct Optimizer {
    config: OptimizerConfig,
    generator: OutfitGenerator,
    selector: PinnacleSelector,
    ignore: IgnoreList,
}

impl Optimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        let generator = OutfitGenerator::new().with_parallel(config.parallel);
        Self {
            config,
            generator,
            selector: PinnacleSelector::new(),
            ignore: IgnoreList::new(),
        }
    }

    /// Validate the config and load its ignore list, if any
    pub fn from_config(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        let ignore = match &config.ignore_list {
            Some(path) => load_ignore_list_file(path)?,
            None => IgnoreList::new(),
        };
        Ok(Self::new(config).with_ignore_list(ignore))
    }

    pub fn with_ignore_list(mut self, ignore: IgnoreList) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Enumerate, select and report for one archetype
    pub fn run_archetype(&self, catalog: &ArmorCatalog, archetype: Archetype) -> ArchetypeRun {
        let start = Instant::now();
        let include = |piece: &ArmorPiece| self.ignore.admits(piece);

        let outfits = self.generator.generate(catalog, archetype, include);
        let pinnacles = self.selector.select(&outfits);
        let armor_stats = armor_pinnacle_stats(catalog, archetype, &pinnacles, include);

        tracing::info!(
            "{}: {} pinnacle outfits of {} in {:?}",
            archetype,
            pinnacles.len(),
            outfits.len(),
            start.elapsed()
        );

        ArchetypeRun {
            archetype,
            outfits,
            pinnacles,
            armor_stats,
        }
    }

    /// Full run over every configured archetype
    pub fn run<'a>(&self, catalog: &'a ArmorCatalog) -> OptimizationRun<'a> {
        let archetypes: Vec<ArchetypeRun> = if self.config.parallel {
            self.config
                .archetypes
                .par_iter()
                .map(|&archetype| self.run_archetype(catalog, archetype))
                .collect()
        } else {
            self.config
                .archetypes
                .iter()
                .map(|&archetype| self.run_archetype(catalog, archetype))
                .collect()
        };

        let eclipsed = if self.config.eclipsed_analysis {
            find_eclipsed_armor(catalog, |piece| {
                self.config.archetypes.contains(&piece.archetype) && self.ignore.admits(piece)
            })
        } else {
            Vec::new()
        };

        OptimizationRun { archetypes, eclipsed }
    }
}
