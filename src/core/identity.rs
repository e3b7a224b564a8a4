//! Identity generation for placeholder and synthetic armor pieces
//!
//! Pieces ingested from a real collection carry their own ids. Pieces built
//! in tests, benchmarks or synthetic catalogs draw ids from an
//! [`IdentitySource`] handed to the builder, so callers choose between a
//! plain counter and a seeded random stream.

use crate::core::types::{InstanceId, TypeHash};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of fresh armor identities
pub trait IdentitySource {
    fn next_instance_id(&mut self) -> InstanceId;
    fn next_type_hash(&mut self) -> TypeHash;
}

/// Monotonic counter; instance ids and type hashes share one sequence
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    fn bump(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentitySource for SequentialIds {
    fn next_instance_id(&mut self) -> InstanceId {
        InstanceId(self.bump())
    }

    fn next_type_hash(&mut self) -> TypeHash {
        TypeHash(self.bump())
    }
}

/// Seeded random 63-bit identities; same seed, same sequence
#[derive(Debug, Clone)]
pub struct SeededIds {
    rng: ChaCha8Rng,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IdentitySource for SeededIds {
    fn next_instance_id(&mut self) -> InstanceId {
        InstanceId(self.rng.gen_range(0..=i64::MAX as u64))
    }

    fn next_type_hash(&mut self) -> TypeHash {
        TypeHash(self.rng.gen_range(0..=i64::MAX as u64))
    }
}
