//! Pinnacle Outfits - armor outfit optimizer
//!
//! Enumerates every five-piece outfit a player's armor collection can
//! build, keeps the outfits that top at least one weighted three-stat
//! metric within their exotic group, and reports which pieces are worth
//! keeping and which are eclipsed by a strictly better copy.

pub mod armor;
pub mod core;
pub mod eclipse;
pub mod optimizer;
pub mod outfit;
pub mod pinnacle;
