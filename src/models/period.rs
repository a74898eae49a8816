//! Filter periods and the date windows they describe
//!
//! A [`Period`] paired with a reference date yields an inclusive
//! [`DateWindow`]. Weeks start on Monday (ISO 8601).

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// Filter granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    pub fn all() -> &'static [Period] {
        &[Period::Day, Period::Week, Period::Month, Period::Year]
    }

    /// Compute the inclusive window of this period containing `reference`
    pub fn window(&self, reference: NaiveDate) -> DateWindow {
        match self {
            Self::Day => DateWindow {
                start: reference,
                end: reference,
            },
            Self::Week => {
                let offset = reference.weekday().num_days_from_monday() as i64;
                let start = reference - Duration::days(offset);
                DateWindow {
                    start,
                    end: start + Duration::days(6),
                }
            }
            Self::Month => {
                let (year, month) = (reference.year(), reference.month());
                let next_month = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1)
                };
                DateWindow {
                    start: reference - Duration::days(reference.day0() as i64),
                    // Only December of the last representable year has no successor
                    end: next_month
                        .and_then(|d| d.pred_opt())
                        .unwrap_or(NaiveDate::MAX),
                }
            }
            Self::Year => DateWindow {
                start: reference - Duration::days(reference.ordinal0() as i64),
                end: NaiveDate::from_ymd_opt(reference.year(), 12, 31).unwrap_or(NaiveDate::MAX),
            },
        }
    }

    /// Label used in summary headers ("Of Current Month")
    pub fn title(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_lowercase())
    }
}

impl FromStr for Period {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(ExpenseError::InvalidPeriod(s.to_string())),
        }
    }
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Check if a date falls within this window (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
