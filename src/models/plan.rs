//! Plan (solution) model.
//!
//! A plan is the complete output of one allocation run: one
//! [`ScheduleDay`] per calendar date in the requested range, in ascending
//! order, plus echo-back metadata for the caller.
//!
//! # Wire Shape
//! Serialization matches the planner's JSON contract: camelCase field
//! names, dates as `YYYY-MM-DD`, and the `type` field omitted for study
//! days (only break days carry `"type": "break"`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// One subject's time allocation within a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Subject name ("Break" for the break-day sentinel).
    pub subject: String,
    /// Allocated hours (0 for the break-day sentinel).
    pub hours: f64,
}

impl Session {
    /// Creates a new session.
    pub fn new(subject: impl Into<String>, hours: f64) -> Self {
        Self {
            subject: subject.into(),
            hours,
        }
    }
}

/// Classification of a scheduled day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    /// A working day carrying zero or more study sessions.
    #[default]
    Study,
    /// A deliberate rest day with no study sessions.
    Break,
}

impl DayKind {
    /// Whether this is a study day.
    #[inline]
    pub fn is_study(&self) -> bool {
        matches!(self, DayKind::Study)
    }

    /// Whether this is a break day.
    #[inline]
    pub fn is_break(&self) -> bool {
        matches!(self, DayKind::Break)
    }
}

/// One calendar day of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    /// Calendar date (unique within a plan).
    pub date: NaiveDate,
    /// Ordered sessions for the day. A break day holds a single
    /// zero-hour "Break" sentinel.
    pub sessions: Vec<Session>,
    /// Total hours planned for the day, rounded to 2 decimals.
    pub hours_planned: f64,
    /// Day classification. Omitted from JSON for study days.
    #[serde(rename = "type", default, skip_serializing_if = "DayKind::is_study")]
    pub kind: DayKind,
}

impl ScheduleDay {
    /// Creates a study day.
    pub fn study(date: NaiveDate, sessions: Vec<Session>, hours_planned: f64) -> Self {
        Self {
            date,
            sessions,
            hours_planned,
            kind: DayKind::Study,
        }
    }

    /// Creates a break day with the zero-hour sentinel session.
    pub fn break_day(date: NaiveDate) -> Self {
        Self {
            date,
            sessions: vec![Session::new("Break", 0.0)],
            hours_planned: 0.0,
            kind: DayKind::Break,
        }
    }

    /// Whether any study hours were planned for this day.
    pub fn has_sessions(&self) -> bool {
        self.kind.is_study() && !self.sessions.is_empty()
    }
}

/// Echo-back metadata describing the request a plan answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMeta {
    /// First day of the (normalized) range.
    pub start_date: NaiveDate,
    /// Last day of the (normalized) range.
    pub end_date: NaiveDate,
    /// Daily capacity as requested by the caller (pre-clamping).
    pub hours_per_day: f64,
}

impl PlanMeta {
    /// Creates metadata from a normalized range and the requested capacity.
    pub fn new(range: DateRange, hours_per_day: f64) -> Self {
        Self {
            start_date: range.start,
            end_date: range.end,
            hours_per_day,
        }
    }
}

/// A complete study plan: one entry per date, ascending and contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Scheduled days covering the requested range.
    pub days: Vec<ScheduleDay>,
    /// Echo-back request metadata.
    pub meta: PlanMeta,
}

impl Plan {
    /// Creates a plan from scheduled days and metadata.
    pub fn new(days: Vec<ScheduleDay>, meta: PlanMeta) -> Self {
        Self { days, meta }
    }

    /// Creates an empty plan ("nothing to schedule").
    pub fn empty(meta: PlanMeta) -> Self {
        Self {
            days: Vec::new(),
            meta,
        }
    }

    /// Whether the plan has no days at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of days in the plan.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of study days.
    pub fn study_day_count(&self) -> usize {
        self.days.iter().filter(|d| d.kind.is_study()).count()
    }

    /// Number of break days.
    pub fn break_day_count(&self) -> usize {
        self.days.iter().filter(|d| d.kind.is_break()).count()
    }

    /// Total hours planned across every day.
    pub fn total_planned_hours(&self) -> f64 {
        self.days.iter().map(|d| d.hours_planned).sum()
    }

    /// Finds the day scheduled on a given date.
    pub fn day_for_date(&self, date: NaiveDate) -> Option<&ScheduleDay> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Returns every session allocated to a given subject, in plan order.
    pub fn sessions_for_subject(&self, subject: &str) -> Vec<&Session> {
        self.days
            .iter()
            .flat_map(|d| d.sessions.iter())
            .filter(|s| s.subject == subject)
            .collect()
    }

    /// Total hours allocated to a given subject across the plan.
    pub fn subject_hours(&self, subject: &str) -> f64 {
        self.sessions_for_subject(subject)
            .iter()
            .map(|s| s.hours)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn sample_plan() -> Plan {
        let days = vec![
            ScheduleDay::study(
                d(1),
                vec![Session::new("Math", 2.0), Session::new("Physics", 1.0)],
                3.0,
            ),
            ScheduleDay::break_day(d(2)),
            ScheduleDay::study(d(3), vec![Session::new("Math", 1.5)], 1.5),
        ];
        let meta = PlanMeta::new(DateRange::new(d(1), d(3)), 3.0);
        Plan::new(days, meta)
    }

    #[test]
    fn test_plan_counts() {
        let plan = sample_plan();
        assert_eq!(plan.day_count(), 3);
        assert_eq!(plan.study_day_count(), 2);
        assert_eq!(plan.break_day_count(), 1);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_total_planned_hours() {
        let plan = sample_plan();
        assert!((plan.total_planned_hours() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_day_for_date() {
        let plan = sample_plan();
        let day = plan.day_for_date(d(2)).unwrap();
        assert!(day.kind.is_break());
        assert!(plan.day_for_date(d(4)).is_none());
    }

    #[test]
    fn test_sessions_for_subject() {
        let plan = sample_plan();
        let math = plan.sessions_for_subject("Math");
        assert_eq!(math.len(), 2);
        assert!((plan.subject_hours("Math") - 3.5).abs() < 1e-10);
        assert!((plan.subject_hours("Chemistry") - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_break_day_sentinel() {
        let day = ScheduleDay::break_day(d(2));
        assert_eq!(day.sessions.len(), 1);
        assert_eq!(day.sessions[0].subject, "Break");
        assert!((day.sessions[0].hours - 0.0).abs() < 1e-10);
        assert!((day.hours_planned - 0.0).abs() < 1e-10);
        assert!(!day.has_sessions());
    }

    #[test]
    fn test_empty_plan() {
        let meta = PlanMeta::new(DateRange::new(d(1), d(3)), 2.0);
        let plan = Plan::empty(meta);
        assert!(plan.is_empty());
        assert_eq!(plan.day_count(), 0);
        assert!((plan.total_planned_hours() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_study_day_json_omits_type() {
        let day = ScheduleDay::study(d(1), vec![Session::new("Math", 2.0)], 2.0);
        let json = serde_json::to_value(&day).unwrap();
        assert!(json.get("type").is_none());
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["hoursPlanned"], 2.0);
        assert_eq!(json["sessions"][0]["subject"], "Math");
    }

    #[test]
    fn test_break_day_json_carries_type() {
        let day = ScheduleDay::break_day(d(2));
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["type"], "break");
        assert_eq!(json["hoursPlanned"], 0.0);
    }

    #[test]
    fn test_day_json_roundtrip_defaults_to_study() {
        let day = ScheduleDay::study(d(1), vec![Session::new("Math", 2.0)], 2.0);
        let json = serde_json::to_string(&day).unwrap();
        let back: ScheduleDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, DayKind::Study);
        assert_eq!(back, day);
    }

    #[test]
    fn test_meta_json_camel_case() {
        let meta = PlanMeta::new(DateRange::new(d(1), d(10)), 2.0);
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json["startDate"], "2024-03-01");
        assert_eq!(json["endDate"], "2024-03-10");
        assert_eq!(json["hoursPerDay"], 2.0);
    }
}
