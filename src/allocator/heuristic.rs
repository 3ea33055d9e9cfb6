//! Day-by-day greedy study allocator.
//!
//! # Algorithm
//!
//! 1. Compute the total workload and, once up front, decide whether the
//!    range earns a contiguous block of break days in its middle.
//! 2. Walk the date range in ascending order, one day at a time.
//! 3. For each study day, derive a target from the hours still owed and
//!    the study days still ahead (with a 15% overshoot allowance).
//! 4. Fill the day from the largest-remaining subject down, in blocks of
//!    at most 2 hours rounded to the nearest half hour.
//!
//! The pass is a single deterministic forward sweep: no backtracking, no
//! retries, no I/O. Residual fractions below half an hour stay in
//! rotation until a later day absorbs them, so totals converge to the
//! requested hours within rounding tolerance rather than by an explicit
//! final dump.
//!
//! # Complexity
//! O(days * subjects log subjects) for the per-day sort of the live set.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::models::{DateRange, Plan, PlanMeta, ScheduleDay, Session, Subject};

/// Floor applied to the caller's daily capacity.
pub const MIN_HOURS_PER_DAY: f64 = 0.5;

/// Ceiling on any single session (one deep-work focus block).
pub const MAX_BLOCK_HOURS: f64 = 2.0;

/// Remaining hours at or below this are treated as exhausted.
const EXHAUSTED: f64 = 0.01;

/// Per-day target multiplier so late days are not starved by rounding.
const TARGET_OVERSHOOT: f64 = 1.15;

/// Breaks are earned when the ideal daily load sits below this fraction
/// of capacity.
const LIGHT_LOAD_RATIO: f64 = 0.6;

/// Ranges of at most this many days never earn breaks.
const MIN_DAYS_FOR_BREAKS: i64 = 5;

/// Input container for one allocation run.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Subjects to schedule (assumed already normalized).
    pub subjects: Vec<Subject>,
    /// Calendar window to fill. May arrive reversed; it is normalized
    /// before the pass.
    pub range: DateRange,
    /// Maximum study hours per non-break day.
    pub hours_per_day: f64,
}

impl PlanRequest {
    /// Creates a request with the default 2-hour daily capacity.
    pub fn new(subjects: Vec<Subject>, range: DateRange) -> Self {
        Self {
            subjects,
            range,
            hours_per_day: 2.0,
        }
    }

    /// Sets the daily capacity.
    pub fn with_hours_per_day(mut self, hours_per_day: f64) -> Self {
        self.hours_per_day = hours_per_day;
        self
    }
}

/// The contiguous run of break days reserved for a range, as 0-based day
/// indices `[start, start + count)`. `count == 0` means no breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BreakWindow {
    start: i64,
    count: i64,
}

impl BreakWindow {
    const NONE: Self = Self { start: 0, count: 0 };

    #[inline]
    fn contains(&self, day_index: i64) -> bool {
        self.count > 0 && day_index >= self.start && day_index < self.start + self.count
    }
}

/// One subject's mutable remainder during a single allocation run.
///
/// Lives only inside one `allocate` call; the slice position is the
/// original input order, used as the tie-breaker when sorting.
#[derive(Debug, Clone)]
struct WorkingSubject {
    name: String,
    remaining: f64,
}

/// Deterministic day-by-day study allocator.
///
/// A pure, synchronous computation: every call owns its working state,
/// so concurrent callers need no coordination. The allocator never
/// fails — degenerate inputs are clamped (capacity floored, reversed
/// ranges swapped) or answered with an empty plan.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use study_plan::allocator::Allocator;
/// use study_plan::models::{DateRange, Subject};
///
/// let subjects = vec![Subject::new("Math", 4.0), Subject::new("Physics", 2.0)];
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
/// );
///
/// let plan = Allocator::new().allocate(&subjects, range, 2.0);
/// assert_eq!(plan.day_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allocator;

impl Allocator {
    /// Creates a new allocator.
    pub fn new() -> Self {
        Self
    }

    /// Allocates subjects across a date range.
    ///
    /// Returns one [`ScheduleDay`] per date in the normalized range, or
    /// an empty plan when there is nothing to schedule (no subjects, or
    /// all hours zero). The plan's metadata echoes the normalized range
    /// and the capacity exactly as requested.
    pub fn allocate(&self, subjects: &[Subject], range: DateRange, hours_per_day: f64) -> Plan {
        let range = range.normalized();
        let meta = PlanMeta::new(range, hours_per_day);
        let capacity = hours_per_day.max(MIN_HOURS_PER_DAY);

        let total_hours: f64 = subjects.iter().map(|s| s.hours).sum();
        if subjects.is_empty() || total_hours <= 0.0 {
            debug!("nothing to schedule, returning empty plan");
            return Plan::empty(meta);
        }

        let total_days = range.total_days();
        let ideal_per_day = total_hours / total_days as f64;
        let breaks = break_window(total_days, ideal_per_day, capacity);
        debug!(
            total_days,
            total_hours,
            capacity,
            break_days = breaks.count,
            "starting allocation pass"
        );

        // Working copy owned by this call; never shared across runs.
        let mut working: Vec<WorkingSubject> = subjects
            .iter()
            .map(|s| WorkingSubject {
                name: s.name.clone(),
                remaining: round2(s.hours),
            })
            .collect();

        let mut days = Vec::with_capacity(total_days as usize);
        for (day_index, date) in range.iter().enumerate() {
            let day_index = day_index as i64;
            if breaks.contains(day_index) {
                trace!(%date, "break day");
                days.push(ScheduleDay::break_day(date));
                continue;
            }
            days.push(fill_study_day(
                date,
                day_index,
                total_days,
                &breaks,
                capacity,
                &mut working,
            ));
        }

        Plan::new(days, meta)
    }

    /// Allocates from a request container.
    pub fn allocate_request(&self, request: &PlanRequest) -> Plan {
        self.allocate(&request.subjects, request.range, request.hours_per_day)
    }
}

/// Decides the break block for a range, computed once up front.
///
/// A range earns breaks iff it is longer than [`MIN_DAYS_FOR_BREAKS`]
/// days AND the ideal daily load is light relative to capacity. The
/// block is `max(1, total_days / 7)` days starting at `total_days / 2`.
fn break_window(total_days: i64, ideal_per_day: f64, capacity: f64) -> BreakWindow {
    if total_days > MIN_DAYS_FOR_BREAKS && ideal_per_day < capacity * LIGHT_LOAD_RATIO {
        BreakWindow {
            start: total_days / 2,
            count: (total_days / 7).max(1),
        }
    } else {
        BreakWindow::NONE
    }
}

/// Fills one study day from the working set and records it.
fn fill_study_day(
    date: NaiveDate,
    day_index: i64,
    total_days: i64,
    breaks: &BreakWindow,
    capacity: f64,
    working: &mut [WorkingSubject],
) -> ScheduleDay {
    // Study days left from today (inclusive), skipping the break block.
    let remaining_study_days = (day_index..total_days)
        .filter(|&d| !breaks.contains(d))
        .count();
    let remaining_hours: f64 = working
        .iter()
        .filter(|s| s.remaining > EXHAUSTED)
        .map(|s| s.remaining)
        .sum();

    let target = if remaining_hours > EXHAUSTED && remaining_study_days > 0 {
        capacity.min(remaining_hours / remaining_study_days as f64 * TARGET_OVERSHOOT)
    } else {
        0.0
    };

    // Transient view sorted by remaining hours descending; the stable
    // sort keeps input order on ties and the canonical slice order is
    // never mutated.
    let mut order: Vec<usize> = (0..working.len())
        .filter(|&i| working[i].remaining > EXHAUSTED)
        .collect();
    order.sort_by(|&a, &b| working[b].remaining.total_cmp(&working[a].remaining));

    let mut sessions = Vec::new();
    let mut used = 0.0;
    for &i in &order {
        if used >= target - EXHAUSTED {
            break;
        }
        let subject = &mut working[i];

        // Deep-work block: at most 2 hours, rounded to the nearest half
        // hour, re-clamped so it never exceeds the subject's remainder
        // or the day's target.
        let ideal_block = MAX_BLOCK_HOURS.min(subject.remaining).min(target - used);
        let block = round_half(ideal_block)
            .min(subject.remaining)
            .min(target - used);
        if block > EXHAUSTED {
            subject.remaining = round2(subject.remaining - block);
            used = round2(used + block);
            sessions.push(Session::new(subject.name.clone(), block));
        }
    }

    trace!(%date, hours = used, sessions = sessions.len(), "study day");
    ScheduleDay::study(date, sessions, round2(used))
}

/// Rounds to 2 decimal places.
#[inline]
fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Rounds to the nearest half hour.
#[inline]
fn round_half(hours: f64) -> f64 {
    (hours * 2.0).round() / 2.0
}
