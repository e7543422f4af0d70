//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the owning service.
//!
//! # Tasks
//! - TTL Sweep: Purges expired cached search results at configured intervals

mod sweep;

pub use sweep::spawn_sweep_task;
