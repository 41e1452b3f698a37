//! Date-range validation and overlap detection
//!
//! Pure functions of their inputs plus an explicit `today`; no clock or
//! storage access in here.
use chrono::NaiveDate;

use crate::error::LeaveError;
use crate::request::{LeaveRequest, LeaveStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

/// Inclusive day count of [start, end], both endpoints counted.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Checks a proposed leave interval against `today` and internal ordering.
///
/// A date that fails to parse sorts like one arbitrarily far in the past:
/// a malformed start fails the past-date check, a malformed end fails the
/// range check. Equal start and end is a valid single-day leave.
pub fn validate_date_range(
    start: &str,
    end: &str,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), LeaveError> {
    let start = parse_date(start).ok_or(LeaveError::PastDate)?;
    if start < today {
        return Err(LeaveError::PastDate);
    }

    let end = parse_date(end).ok_or(LeaveError::InvalidRange)?;
    if end < start {
        return Err(LeaveError::InvalidRange);
    }

    Ok((start, end))
}

/// Scans `existing` in its given order and returns the first approved
/// request whose date range intersects [new_start, new_end].
///
/// Ranges are inclusive on both ends, so touching endpoints count as a
/// conflict. Pending and rejected requests never block, and stored records
/// whose dates do not parse are skipped rather than treated as errors.
pub fn check_overlap<'a, I>(
    new_start: NaiveDate,
    new_end: NaiveDate,
    existing: I,
) -> Option<&'a LeaveRequest>
where
    I: IntoIterator<Item = &'a LeaveRequest>,
{
    for request in existing {
        if request.status != LeaveStatus::Approved {
            continue;
        }
        let Some((start, end)) = request.dates() else {
            continue;
        };
        if new_start <= end && new_end >= start {
            return Some(request);
        }
    }
    None
}
