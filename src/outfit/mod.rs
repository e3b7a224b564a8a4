//! Outfit generation: tiering, artifice expansion and enumeration

pub mod artifice;
pub mod constants;
pub mod generator;
pub mod model;
pub mod tier;

pub use artifice::ArtificeCompositions;
pub use generator::{OutfitGenerator, Pass};
pub use model::{ExoticGroup, Outfit};
pub use tier::{quantize, quantize_block};
