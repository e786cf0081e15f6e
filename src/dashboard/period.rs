//! Date range covered by the analysed dataset.

use chrono::NaiveDate;
use std::fmt;

/// Inclusive range of order dates in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisPeriod {
    /// First order date
    pub start: NaiveDate,
    /// Last order date
    pub end: NaiveDate,
}

impl AnalysisPeriod {
    /// Create a period; the bounds are swapped if given in reverse.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// The Olist public dataset window.
    pub fn olist() -> Option<Self> {
        Some(Self::new(
            NaiveDate::from_ymd_opt(2016, 9, 4)?,
            NaiveDate::from_ymd_opt(2018, 9, 3)?,
        ))
    }

    /// Number of days, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Length rounded to whole years.
    pub fn whole_years(&self) -> i64 {
        (self.days() as f64 / 365.25).round() as i64
    }

    /// `"2016-2018"` style label.
    pub fn year_span(&self) -> String {
        format!("{}-{}", self.start.format("%Y"), self.end.format("%Y"))
    }
}

impl fmt::Display for AnalysisPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ~ {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
