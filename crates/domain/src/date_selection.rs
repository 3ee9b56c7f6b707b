// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date selection rules.
//!
//! The two `is_*_selectable` predicates drive calendar cell disabling. They
//! are a convenience for the picker only. `validate_stay_dates` is the
//! authoritative gate and must run again before pricing or submission.

use crate::blocked_dates::BlockedDates;
use crate::error::DomainError;
use crate::types::StayRange;
use time::Date;

/// Longest stay, in nights, that a single booking may cover.
pub const MAX_NIGHTS: i64 = 365;

/// Returns whether `date` may be chosen as check-in.
///
/// Past dates and blocked dates are never selectable.
#[must_use]
pub fn is_check_in_selectable(date: Date, today: Date, blocked: &BlockedDates) -> bool {
    date >= today && !blocked.is_blocked(date)
}

/// Returns whether `date` may be chosen as check-out.
///
/// Requires a chosen check-in. The minimum stay is one night, so the
/// check-out must be strictly after check-in. Dates more than `MAX_NIGHTS`
/// after check-in are never selectable.
#[must_use]
pub fn is_check_out_selectable(
    date: Date,
    check_in: Option<Date>,
    blocked: &BlockedDates,
) -> bool {
    check_in.is_some_and(|check_in| {
        date > check_in
            && (date - check_in).whole_days() <= MAX_NIGHTS
            && !blocked.is_blocked(date)
    })
}

/// Validates a proposed pair of stay dates at submit time.
///
/// Checks, in order:
/// 1. Both dates are present
/// 2. Check-out is strictly after check-in
/// 3. The stay is at most `MAX_NIGHTS` nights
/// 4. Check-in is not in the past
/// 5. No date from check-in through check-out (inclusive) is blocked
///
/// # Arguments
///
/// * `check_in` - The chosen check-in, if any
/// * `check_out` - The chosen check-out, if any
/// * `today` - The current day
/// * `blocked` - Occupied dates for the apartment
///
/// # Errors
///
/// Returns the first rule violated as a `DomainError`.
pub fn validate_stay_dates(
    check_in: Option<Date>,
    check_out: Option<Date>,
    today: Date,
    blocked: &BlockedDates,
) -> Result<StayRange, DomainError> {
    let (check_in, check_out): (Date, Date) = match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        (None, None) => return Err(DomainError::MissingDates),
        (check_in, check_out) => {
            return Err(DomainError::IncompleteDates {
                has_check_in: check_in.is_some(),
                has_check_out: check_out.is_some(),
            });
        }
    };

    let stay: StayRange = StayRange::new(check_in, check_out)?;

    let nights: i64 = stay.nights();
    if nights > MAX_NIGHTS {
        return Err(DomainError::StayTooLong {
            nights,
            max_nights: MAX_NIGHTS,
        });
    }

    if check_in < today {
        return Err(DomainError::CheckInInPast { check_in, today });
    }

    if let Some(date) = blocked.first_blocked_in(check_in, check_out) {
        return Err(DomainError::DatesUnavailable { date });
    }

    Ok(stay)
}
