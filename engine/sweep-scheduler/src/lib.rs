//! sweep-scheduler - Drives the engine's periodic sweeps
//!
//! Two independent cadences, mirroring the production jobs: a frequent
//! scoring sweep (feed sync, result processing, average refresh) and a
//! slow price sweep. Sweeps run sequentially on one task, which gives the
//! single-writer-per-competition guarantee the processor requires.

pub mod config;
pub mod scheduler;

pub use config::SweepConfig;
pub use scheduler::SweepScheduler;
