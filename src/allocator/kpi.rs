//! Plan quality metrics (KPIs).
//!
//! Derives summary indicators from a completed plan and the subjects it
//! was built from. Pure reporting — computing KPIs never alters a plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Requested Hours | Sum of input subject hours |
//! | Planned Hours | Sum of `hoursPlanned` across all days |
//! | Leftover Hours | Requested minus planned (never negative) |
//! | Busiest Day | Largest single-day `hoursPlanned` |
//! | Avg Hours/Study Day | Planned hours over study-day count |
//! | Utilization | Planned hours over study-day capacity |

use crate::models::{Plan, Subject};

use super::MIN_HOURS_PER_DAY;

/// Summary indicators for a completed plan.
///
/// All hour values carry the plan's 2-decimal rounding; compare with a
/// tolerance, not exact equality.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Total hours the subjects asked for.
    pub requested_hours: f64,
    /// Total hours the plan actually scheduled.
    pub planned_hours: f64,
    /// Requested hours left unscheduled (0 when fully placed).
    pub leftover_hours: f64,
    /// Largest single-day load.
    pub busiest_day_hours: f64,
    /// Mean load across study days (0 for an empty plan).
    pub avg_hours_per_study_day: f64,
    /// Planned hours over total study-day capacity (0.0..1.0 range for
    /// a capacity-respecting plan).
    pub utilization: f64,
    /// Number of study days.
    pub study_days: usize,
    /// Number of break days.
    pub break_days: usize,
}

impl PlanKpi {
    /// Computes KPIs from a plan and the subjects it was built from.
    ///
    /// Capacity-based metrics use the clamped daily cap (the request's
    /// `hoursPerDay` floored at 0.5), matching what the allocator used.
    pub fn calculate(plan: &Plan, subjects: &[Subject]) -> Self {
        let requested_hours: f64 = subjects.iter().map(|s| s.hours).sum();
        let planned_hours = plan.total_planned_hours();
        let study_days = plan.study_day_count();
        let break_days = plan.break_day_count();

        let busiest_day_hours = plan
            .days
            .iter()
            .map(|d| d.hours_planned)
            .fold(0.0, f64::max);

        let avg_hours_per_study_day = if study_days == 0 {
            0.0
        } else {
            planned_hours / study_days as f64
        };

        let capacity = plan.meta.hours_per_day.max(MIN_HOURS_PER_DAY);
        let total_capacity = study_days as f64 * capacity;
        let utilization = if total_capacity > 0.0 {
            planned_hours / total_capacity
        } else {
            0.0
        };

        Self {
            requested_hours,
            planned_hours,
            leftover_hours: (requested_hours - planned_hours).max(0.0),
            busiest_day_hours,
            avg_hours_per_study_day,
            utilization,
            study_days,
            break_days,
        }
    }

    /// Whether the plan placed enough work and spread it evenly enough.
    pub fn meets_thresholds(&self, max_leftover_hours: f64, max_busiest_day_hours: f64) -> bool {
        self.leftover_hours <= max_leftover_hours && self.busiest_day_hours <= max_busiest_day_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::Allocator;
    use crate::models::{DateRange, PlanMeta};
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn subjects(pairs: &[(&str, f64)]) -> Vec<Subject> {
        pairs.iter().map(|&(n, h)| Subject::new(n, h)).collect()
    }

    #[test]
    fn test_kpi_full_placement() {
        let subs = subjects(&[("Math", 4.0), ("Physics", 2.0)]);
        let range = DateRange::new(d(1), d(3));
        let plan = Allocator::new().allocate(&subs, range, 2.0);

        let kpi = PlanKpi::calculate(&plan, &subs);
        assert!((kpi.requested_hours - 6.0).abs() < 1e-9);
        assert!((kpi.planned_hours - 6.0).abs() <= 0.5);
        assert!(kpi.leftover_hours <= 0.5);
        assert_eq!(kpi.study_days, 3);
        assert_eq!(kpi.break_days, 0);
        assert!(kpi.busiest_day_hours <= 2.0 + 1e-9);
        assert!(kpi.utilization <= 1.0 + 1e-9);
    }

    #[test]
    fn test_kpi_counts_breaks() {
        let subs = subjects(&[("History", 1.0)]);
        let range = DateRange::new(d(1), d(10));
        let plan = Allocator::new().allocate(&subs, range, 3.0);

        let kpi = PlanKpi::calculate(&plan, &subs);
        assert_eq!(kpi.break_days, 1);
        assert_eq!(kpi.study_days, 9);
        assert!(kpi.utilization < 0.1);
    }

    #[test]
    fn test_kpi_leftover_on_tight_range() {
        // 12h into 2 days at 2h/day: one 2h block per day, 8h leftover.
        let subs = subjects(&[("Math", 12.0)]);
        let range = DateRange::new(d(1), d(2));
        let plan = Allocator::new().allocate(&subs, range, 2.0);

        let kpi = PlanKpi::calculate(&plan, &subs);
        assert!((kpi.planned_hours - 4.0).abs() < 1e-9);
        assert!((kpi.leftover_hours - 8.0).abs() < 1e-9);
        assert!(!kpi.meets_thresholds(0.5, 2.0));
        assert!(kpi.meets_thresholds(8.0, 2.0));
    }

    #[test]
    fn test_kpi_empty_plan() {
        let meta = PlanMeta::new(DateRange::new(d(1), d(3)), 2.0);
        let kpi = PlanKpi::calculate(&Plan::empty(meta), &[]);
        assert!((kpi.requested_hours - 0.0).abs() < 1e-9);
        assert!((kpi.planned_hours - 0.0).abs() < 1e-9);
        assert!((kpi.avg_hours_per_study_day - 0.0).abs() < 1e-9);
        assert!((kpi.utilization - 0.0).abs() < 1e-9);
        assert_eq!(kpi.study_days, 0);
    }

    #[test]
    fn test_kpi_uses_clamped_capacity() {
        // Requested 0.1h/day is floored to 0.5 by the allocator, so
        // utilization must be measured against 0.5 as well.
        let subs = subjects(&[("Math", 2.0)]);
        let range = DateRange::new(d(1), d(4));
        let plan = Allocator::new().allocate(&subs, range, 0.1);

        let kpi = PlanKpi::calculate(&plan, &subs);
        assert!(kpi.utilization <= 1.0 + 1e-9);
    }
}
