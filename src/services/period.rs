//! Report period planning
//!
//! Validates the requested range and lays out the ordered period labels a
//! report is bucketed into. [`PeriodPlan`] is the single source of labels:
//! every section of a report assigns dates through the same plan, so a record
//! can never land under a label the plan did not produce.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{FinreportError, FinreportResult, RangeError};
use crate::models::{Granularity, Money, Month, PeriodAmounts, TOTAL_LABEL};

/// Longest range a report may cover, in month steps
pub const MAX_RANGE_MONTHS: i32 = 12;

/// Check that `start <= end` and the range spans at most [`MAX_RANGE_MONTHS`]
///
/// The span counts month steps and ignores the day of month, so
/// 2024-01-01..2024-12-31 (11 steps) passes and 2024-01-01..2025-02-01
/// (13 steps) fails.
pub fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<(), RangeError> {
    if start > end {
        return Err(RangeError::Inverted { start, end });
    }

    let months = Month::containing(start).months_until(Month::containing(end));
    if months > MAX_RANGE_MONTHS {
        return Err(RangeError::TooLong {
            start,
            end,
            months,
            max_months: MAX_RANGE_MONTHS,
        });
    }

    Ok(())
}

/// Ordered period labels for a range
///
/// `["Total"]` for yearly; one label per calendar month from `start`'s month
/// through `end`'s month inclusive for monthly.
pub fn build_periods(start: NaiveDate, end: NaiveDate, granularity: Granularity) -> Vec<String> {
    match granularity {
        Granularity::Yearly => vec![TOTAL_LABEL.to_string()],
        Granularity::Monthly => {
            let last = Month::containing(end);
            let mut month = Month::containing(start);
            let mut periods = Vec::new();
            while month <= last {
                periods.push(month.label());
                month = month.next();
            }
            periods
        }
    }
}

/// Period label a date falls under
pub fn assign_period(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Yearly => TOTAL_LABEL.to_string(),
        Granularity::Monthly => Month::containing(date).label(),
    }
}

/// Convert a short pattern like `%d/%m/%Y` into a human hint
fn describe_date_format(fmt: &str) -> String {
    let pattern = fmt.replace("%d", "DD").replace("%m", "MM").replace("%Y", "YYYY");
    let example = fmt
        .replace("%d", "25")
        .replace("%m", "12")
        .replace("%Y", "2025");
    format!("{} (e.g., {})", pattern, example)
}

/// Parse a boundary date, naming the offending field on failure
pub fn parse_report_date(field: &'static str, value: &str, fmt: &str) -> FinreportResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), fmt).map_err(|_| FinreportError::InvalidDate {
        field,
        value: value.to_string(),
        expected: describe_date_format(fmt),
    })
}

/// Validated range plus its period layout
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodPlan {
    start: NaiveDate,
    end: NaiveDate,
    granularity: Granularity,
    first_month: Month,
    periods: Vec<String>,
}

impl PeriodPlan {
    /// Validate the range and plan its periods
    pub fn new(start: NaiveDate, end: NaiveDate, granularity: Granularity) -> FinreportResult<Self> {
        validate_range(start, end)?;

        let periods = build_periods(start, end, granularity);
        debug!(%start, %end, %granularity, count = periods.len(), "Planned report periods");

        Ok(Self {
            start,
            end,
            granularity,
            first_month: Month::containing(start),
            periods,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Period labels in chronological order
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    /// Number of periods
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Label `date` falls under
    pub fn assign_period(&self, date: NaiveDate) -> String {
        assign_period(date, self.granularity)
    }

    /// Index of the period containing `date`, `None` when outside the plan
    pub fn slot_of(&self, date: NaiveDate) -> Option<usize> {
        match self.granularity {
            Granularity::Yearly => Some(0),
            Granularity::Monthly => {
                let offset = self.first_month.months_until(Month::containing(date));
                usize::try_from(offset).ok().filter(|i| *i < self.periods.len())
            }
        }
    }

    /// One zero accumulator per period
    pub fn empty_slots(&self) -> Vec<Money> {
        vec![Money::zero(); self.periods.len()]
    }

    /// Every period present with `0.0`
    pub fn zeroed(&self) -> PeriodAmounts {
        PeriodAmounts::zeroed(&self.periods)
    }

    /// Label per-slot sums with this plan's periods
    pub fn amounts(&self, slots: &[Money]) -> PeriodAmounts {
        PeriodAmounts::from_slots(&self.periods, slots)
    }
}
