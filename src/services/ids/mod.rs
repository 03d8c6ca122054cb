//! Identifier generation.
//!
//! Events, tasks and lists minted at runtime get their ids from an
//! [`IdGenerator`]. Ids must never repeat, even for drops that land within the
//! same clock tick.

use uuid::Uuid;

pub trait IdGenerator {
    /// Produce a fresh id of the form `<prefix>-<unique part>`.
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Random v4 UUID ids; the default for the running application.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self, prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4())
    }
}

/// Monotonic counter ids; deterministic, used by tests and benchmarks.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{}-{}", prefix, self.next);
        self.next += 1;
        id
    }
}
