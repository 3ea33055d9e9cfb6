//! Deterministic day-by-day study-time allocation.
//!
//! Given named subjects with required hours, a calendar date range, and a
//! daily capacity, produces a per-day plan that consumes the hours in
//! bounded deep-work blocks and inserts rest days when the workload is
//! light. The crate is a pure library: no I/O, no persistence, no
//! accounts — the hosting service owns all of that.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Subject`, `DateRange`, `Session`,
//!   `ScheduleDay`, `Plan`, `PlanMeta`
//! - **`normalize`**: Permissive cleanup of raw subject entries
//! - **`allocator`**: The day-by-day heuristic packer and plan KPIs
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use study_plan::allocator::Allocator;
//! use study_plan::models::{DateRange, Subject};
//!
//! let subjects = vec![
//!     Subject::new("Math", 4.0),
//!     Subject::new("Physics", 2.0),
//! ];
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
//! );
//!
//! let plan = Allocator::new().allocate(&subjects, range, 2.0);
//! assert_eq!(plan.day_count(), 3);
//! assert!((plan.total_planned_hours() - 6.0).abs() <= 0.5);
//! ```
//!
//! # Guarantees
//!
//! The allocator never fails: degenerate inputs (reversed dates, tiny
//! capacity, empty subject lists) are clamped or answered with an empty
//! plan. Every run is a pure, synchronous computation that owns its
//! working state, so concurrent calls need no coordination.

pub mod allocator;
pub mod models;
pub mod normalize;
