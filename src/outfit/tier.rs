//! Stat tier quantization
//!
//! Stats only pay off in whole tiers of 10, up to 100. Quantizing is lossy
//! on purpose: outfits that differ only below a tier boundary collapse to
//! the same result and are deduplicated by the generator.

use crate::core::types::StatBlock;
use crate::outfit::constants::{TIER_CEILING, TIER_STEP};

/// Useful tier of a raw stat value: floored to a multiple of 10, capped at 100
#[inline]
pub fn quantize(value: u32) -> u32 {
    if value > TIER_CEILING {
        TIER_CEILING
    } else {
        value - value % TIER_STEP
    }
}

/// Quantize every axis
#[inline]
pub fn quantize_block(stats: StatBlock) -> StatBlock {
    stats.map(quantize)
}
