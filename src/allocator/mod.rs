//! Greedy day-by-day allocation and plan quality metrics.
//!
//! # Algorithm
//!
//! `Allocator` runs a single deterministic forward pass over the date
//! range: a break block is reserved up front for light workloads, then
//! each study day is filled from the largest-remaining subject down in
//! deep-work blocks of at most 2 hours. It is a fast, reproducible
//! heuristic — not an optimizer.
//!
//! # KPI
//!
//! `PlanKpi` computes quality indicators from a finished plan: planned
//! vs. requested hours, leftover, busiest day, and capacity utilization.

mod heuristic;
mod kpi;

pub use heuristic::{Allocator, PlanRequest, MAX_BLOCK_HOURS, MIN_HOURS_PER_DAY};
pub use kpi::PlanKpi;
