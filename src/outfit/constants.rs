//! Outfit arithmetic constants
//!
//! Every outfit is assumed fully masterworked, and only whole tiers matter.

// Masterwork: +2 per piece on every stat, five pieces, applied once per outfit
pub const MASTERWORK_BONUS_PER_PIECE: u32 = 2;
pub const MASTERWORK_BONUS: u32 = MASTERWORK_BONUS_PER_PIECE * PIECES_PER_OUTFIT as u32;

// Artifice: one mod slot per artifice piece, +3 to a single stat
pub const ARTIFICE_BONUS: u32 = 3;
pub const MAX_ARTIFICE_PIECES: usize = PIECES_PER_OUTFIT;

// Tiers
pub const TIER_STEP: u32 = 10;
pub const TIER_CEILING: u32 = 100;

pub const PIECES_PER_OUTFIT: usize = 5;
