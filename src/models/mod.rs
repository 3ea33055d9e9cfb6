//! Study-planning domain models.
//!
//! Provides the core data types for describing an allocation request and
//! its result. All types are plain values: constructed fresh per request,
//! serialized with serde, never shared across allocation runs.
//!
//! # Type Map
//!
//! | Type | Role |
//! |------|------|
//! | `Subject` | Named unit of required work (input) |
//! | `DateRange` | Inclusive calendar window (input) |
//! | `Session` | One subject's slot within a day (output) |
//! | `ScheduleDay` | One calendar day of the plan (output) |
//! | `Plan` | Full ordered schedule plus request metadata (output) |

mod date_range;
mod plan;
mod subject;

pub use date_range::DateRange;
pub use plan::{DayKind, Plan, PlanMeta, ScheduleDay, Session};
pub use subject::Subject;
