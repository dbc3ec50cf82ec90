//! Workload Module
//!
//! Operation-stream generator and the cached-versus-uncached equivalence harness.

mod generator;
mod harness;

pub use generator::{generate, random_array, Operation, WorkloadConfig};
pub use harness::{compare, run_operations, EquivalenceReport};
