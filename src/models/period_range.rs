//! Calendar ranges a budget is tracked over
//!
//! Supports monthly, ISO-weekly, bi-weekly and custom inclusive date ranges.
//! Dates are resolved once at construction, so every accessor is infallible.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The kind of recurring period a budget uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Calendar months (e.g., "2025-01")
    #[default]
    Monthly,
    /// ISO weeks (e.g., "2025-W03")
    Weekly,
    /// Fourteen-day periods anchored on the first Monday of the year
    BiWeekly,
    /// Arbitrary inclusive date range
    Custom,
}

/// An inclusive date range with the kind it was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodRangeRecord")]
pub struct PeriodRange {
    kind: PeriodKind,
    start: NaiveDate,
    end: NaiveDate,
}

/// Stored form of a range, checked against its kind when loaded
#[derive(Deserialize)]
struct PeriodRangeRecord {
    kind: PeriodKind,
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<PeriodRangeRecord> for PeriodRange {
    type Error = PeriodParseError;

    fn try_from(record: PeriodRangeRecord) -> Result<Self, Self::Error> {
        let PeriodRangeRecord { kind, start, end } = record;
        let rebuilt = match kind {
            PeriodKind::Monthly => Self::monthly(start.year(), start.month())?,
            PeriodKind::Weekly => Self::weekly(start.iso_week().year(), start.iso_week().week())?,
            PeriodKind::BiWeekly => Self::bi_weekly(start)?,
            PeriodKind::Custom => Self::custom(start, end)?,
        };

        if rebuilt.start != start || rebuilt.end != end {
            return Err(PeriodParseError::BoundsMismatch { kind, start, end });
        }
        Ok(rebuilt)
    }
}

impl PeriodRange {
    /// Create a monthly range
    pub fn monthly(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(PeriodParseError::OutOfRange)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or(PeriodParseError::OutOfRange)?;

        Ok(Self {
            kind: PeriodKind::Monthly,
            start,
            end: next - Duration::days(1),
        })
    }

    /// Create an ISO week range (Monday through Sunday)
    pub fn weekly(year: i32, week: u32) -> Result<Self, PeriodParseError> {
        let start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            .ok_or(PeriodParseError::InvalidWeek(week))?;
        Ok(Self {
            kind: PeriodKind::Weekly,
            start,
            end: shift(start, 6)?,
        })
    }

    /// Create a fourteen-day range starting on the given date
    pub fn bi_weekly(start_date: NaiveDate) -> Result<Self, PeriodParseError> {
        Ok(Self {
            kind: PeriodKind::BiWeekly,
            start: start_date,
            end: shift(start_date, 13)?,
        })
    }

    /// Create a custom inclusive range
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodParseError> {
        if end < start {
            return Err(PeriodParseError::EndBeforeStart { start, end });
        }
        Ok(Self {
            kind: PeriodKind::Custom,
            start,
            end,
        })
    }

    /// The range of the given kind that contains `date`
    ///
    /// `PeriodKind::Custom` has no natural boundaries and resolves to the
    /// single day `date`.
    pub fn containing(kind: PeriodKind, date: NaiveDate) -> Result<Self, PeriodParseError> {
        match kind {
            PeriodKind::Monthly => Self::monthly(date.year(), date.month()),
            PeriodKind::Weekly => Self::weekly(date.iso_week().year(), date.iso_week().week()),
            PeriodKind::BiWeekly => {
                let anchor = biweekly_anchor(date.year()).ok_or(PeriodParseError::OutOfRange)?;
                let periods = (date - anchor).num_days().div_euclid(14);
                Self::bi_weekly(shift(anchor, periods * 14)?)
            }
            PeriodKind::Custom => Self::custom(date, date),
        }
    }

    /// The range of the same kind immediately after this one
    ///
    /// Months roll over into January, ISO weeks into week 1 of the next
    /// ISO year, bi-weekly ranges move 14 days and custom ranges move by
    /// their own length.
    pub fn next(&self) -> Result<Self, PeriodParseError> {
        match self.kind {
            PeriodKind::Monthly | PeriodKind::Weekly => {
                Self::containing(self.kind, shift(self.end, 1)?)
            }
            PeriodKind::BiWeekly => Self::bi_weekly(shift(self.start, 14)?),
            PeriodKind::Custom => {
                let len = i64::from(self.total_days());
                Self::custom(shift(self.start, len)?, shift(self.end, len)?)
            }
        }
    }

    /// The range of the same kind immediately before this one
    pub fn prev(&self) -> Result<Self, PeriodParseError> {
        match self.kind {
            PeriodKind::Monthly | PeriodKind::Weekly => {
                Self::containing(self.kind, shift(self.start, -1)?)
            }
            PeriodKind::BiWeekly => Self::bi_weekly(shift(self.start, -14)?),
            PeriodKind::Custom => {
                let len = i64::from(self.total_days());
                Self::custom(shift(self.start, -len)?, shift(self.end, -len)?)
            }
        }
    }

    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, counting both ends
    pub fn total_days(&self) -> u32 {
        u32::try_from((self.end - self.start).num_days() + 1).unwrap_or(u32::MAX)
    }

    /// Check if a date falls within this range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whole days that have passed before `today`, clamped to the range
    ///
    /// The first day of the range has zero days elapsed; any day after the
    /// range has every day elapsed.
    pub fn days_elapsed(&self, today: NaiveDate) -> u32 {
        if today <= self.start {
            0
        } else if today > self.end {
            self.total_days()
        } else {
            u32::try_from((today - self.start).num_days()).unwrap_or(u32::MAX)
        }
    }

    /// Days left in the range, including `today`
    pub fn days_remaining(&self, today: NaiveDate) -> u32 {
        self.total_days() - self.days_elapsed(today)
    }

    /// Parse a range string
    ///
    /// Formats:
    /// - Monthly: "2025-01"
    /// - Weekly: "2025-W03"
    /// - Custom: "2025-01-01..2025-01-15"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let invalid = || PeriodParseError::InvalidFormat(s.to_string());

        if let Some((start, end)) = s.split_once("..") {
            let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").map_err(|_| invalid())?;
            let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").map_err(|_| invalid())?;
            return Self::custom(start, end);
        }

        if let Some((year, week)) = s.split_once("-W") {
            let year: i32 = year.parse().map_err(|_| invalid())?;
            let week: u32 = week.parse().map_err(|_| invalid())?;
            return Self::weekly(year, week);
        }

        if let Some((year, month)) = s.split_once('-') {
            let year: i32 = year.parse().map_err(|_| invalid())?;
            let month: u32 = month.parse().map_err(|_| invalid())?;
            return Self::monthly(year, month);
        }

        Err(invalid())
    }
}

/// First Monday of the year
fn biweekly_anchor(year: i32) -> Option<NaiveDate> {
    let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let days_until_monday = (7 - jan_1.weekday().num_days_from_monday()) % 7;
    jan_1.checked_add_signed(Duration::days(i64::from(days_until_monday)))
}

/// `date` moved by `days`, failing at the edge of the calendar
fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, PeriodParseError> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(PeriodParseError::OutOfRange)
}

impl fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PeriodKind::Monthly => write!(f, "{:04}-{:02}", self.start.year(), self.start.month()),
            PeriodKind::Weekly => {
                let week = self.start.iso_week();
                write!(f, "{:04}-W{:02}", week.year(), week.week())
            }
            PeriodKind::BiWeekly => write!(
                f,
                "{} - {}",
                self.start.format("%Y-%m-%d"),
                self.end.format("%Y-%m-%d")
            ),
            PeriodKind::Custom => write!(
                f,
                "{}..{}",
                self.start.format("%Y-%m-%d"),
                self.end.format("%Y-%m-%d")
            ),
        }
    }
}

/// Error type for period parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),
    #[error("Invalid ISO week: {0}")]
    InvalidWeek(u32),
    #[error("Period ends ({end}) before it starts ({start})")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("Date out of supported range")]
    OutOfRange,
    #[error("{start}..{end} is not a valid {kind:?} period")]
    BoundsMismatch {
        kind: PeriodKind,
        start: NaiveDate,
        end: NaiveDate,
    },
}
