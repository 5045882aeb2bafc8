//! Background Tasks Module
//!
//! Contains background tasks that run periodically during gateway operation.
//!
//! # Tasks
//! - Cache Prune: Removes cache entries past the retention age at configured intervals

mod prune;

pub use prune::spawn_prune_task;
