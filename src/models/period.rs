//! Report period representation
//!
//! A report is either collapsed into a single `"Total"` column (yearly) or
//! split into calendar months labelled like `"sep-24"` (monthly).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinreportError;

/// Label of the single period in a yearly report
pub const TOTAL_LABEL: &str = "Total";

/// Report granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One `"Total"` column over the whole range (default)
    #[default]
    Yearly,
    /// One column per calendar month
    Monthly,
}

impl Granularity {
    /// Lower-case name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = FinreportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yearly" => Ok(Self::Yearly),
            "monthly" => Ok(Self::Monthly),
            other => Err(FinreportError::Format(other.to_string())),
        }
    }
}

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // year/month always come from a valid NaiveDate
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of month steps from `self` to `other` (negative if `other` is earlier)
    pub fn months_until(&self, other: Month) -> i32 {
        (other.year - self.year) * 12 + (other.month as i32 - self.month as i32)
    }

    /// Report label: lower-case three-letter month and two-digit year, e.g. `"sep-24"`
    pub fn label(&self) -> String {
        self.first_day().format("%b-%y").to_string().to_lowercase()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_granularity_parse() {
        assert_eq!("yearly".parse::<Granularity>().unwrap(), Granularity::Yearly);
        assert_eq!("monthly".parse::<Granularity>().unwrap(), Granularity::Monthly);

        let err = "weekly".parse::<Granularity>().unwrap_err();
        assert!(matches!(err, FinreportError::Format(ref f) if f == "weekly"));
        // Case-sensitive, like the query parameter it mirrors
        assert!("Monthly".parse::<Granularity>().is_err());
    }

    #[test]
    fn test_month_label() {
        assert_eq!(Month::containing(date(2024, 9, 15)).label(), "sep-24");
        assert_eq!(Month::containing(date(2025, 1, 31)).label(), "jan-25");
        assert_eq!(Month::containing(date(2000, 12, 1)).label(), "dec-00");
    }

    #[test]
    fn test_month_navigation() {
        let dec = Month::containing(date(2024, 12, 10));
        let jan = dec.next();
        assert_eq!(jan, Month::containing(date(2025, 1, 1)));
        assert_eq!(dec.months_until(jan), 1);
        assert_eq!(jan.months_until(dec), -1);
        assert_eq!(dec.first_day(), date(2024, 12, 1));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Granularity::Monthly).unwrap();
        assert_eq!(json, "\"monthly\"");
    }
}
