//! Simulation domain models.
//!
//! Core data types for a scheduling run: the process record a policy
//! mutates while it simulates, and the execution timeline it emits.

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{ExecutionBlock, Timeline};
