use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Half-open publish-time window `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> DomainResult<Self> {
        if from > to {
            return Err(DomainError::InvalidRange(format!(
                "`from` ({}) is after `to` ({})",
                from.timestamp_millis(),
                to.timestamp_millis()
            )));
        }
        Ok(Self { from, to })
    }

    /// Builds a window from optional millisecond epoch bounds. A missing
    /// bound leaves that side open.
    pub fn from_millis(from: Option<i64>, to: Option<i64>) -> DomainResult<Self> {
        let from = match from {
            Some(ms) => millis_to_utc(ms)?,
            None => DateTime::<Utc>::MIN_UTC,
        };
        let to = match to {
            Some(ms) => millis_to_utc(ms)?,
            None => DateTime::<Utc>::MAX_UTC,
        };
        Self::new(from, to)
    }

    pub fn unbounded() -> Self {
        Self {
            from: DateTime::<Utc>::MIN_UTC,
            to: DateTime::<Utc>::MAX_UTC,
        }
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Lower bound, or `None` when the window is open on that side.
    pub fn lower(&self) -> Option<DateTime<Utc>> {
        (self.from != DateTime::<Utc>::MIN_UTC).then_some(self.from)
    }

    /// Upper bound, or `None` when the window is open on that side.
    pub fn upper(&self) -> Option<DateTime<Utc>> {
        (self.to != DateTime::<Utc>::MAX_UTC).then_some(self.to)
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && at < self.to
    }
}

/// Earliest instant a Postgres `timestamptz` can hold: 4714-11-24 BC 00:00 UTC.
pub const EARLIEST_STORABLE_MILLIS: i64 = -210_866_803_200_000;

fn millis_to_utc(ms: i64) -> DomainResult<DateTime<Utc>> {
    if ms < EARLIEST_STORABLE_MILLIS {
        return Err(DomainError::InvalidRange(format!(
            "timestamp {ms} is before the earliest storable instant"
        )));
    }
    DateTime::<Utc>::from_timestamp_millis(ms)
        .ok_or_else(|| DomainError::InvalidRange(format!("timestamp {ms} is out of range")))
}
