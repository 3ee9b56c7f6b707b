// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Blocked-date set construction.
//!
//! Converts the stored bookings of one apartment into the set of calendar
//! dates a new booking may not touch.
//!
//! Both endpoints of a blocking booking are occupied, including the
//! check-out day itself. This is one day stricter than a half-open
//! interval and is kept for compatibility with existing booking data.

use crate::error::DomainError;
use crate::types::ExistingBooking;
use std::collections::BTreeSet;
use time::Date;

/// The deduplicated set of occupied dates for one apartment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDates {
    dates: BTreeSet<Date>,
}

impl BlockedDates {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dates: BTreeSet::new(),
        }
    }

    /// Returns whether `date` is occupied.
    #[must_use]
    pub fn is_blocked(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the number of occupied dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether no date is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates the occupied dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }

    /// Returns the earliest occupied date within `[start, end]`, if any.
    #[must_use]
    pub fn first_blocked_in(&self, start: Date, end: Date) -> Option<Date> {
        if end < start {
            return None;
        }
        self.dates.range(start..=end).next().copied()
    }
}

impl FromIterator<Date> for BlockedDates {
    fn from_iter<T: IntoIterator<Item = Date>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Builds the blocked-date set from a list of stored bookings.
///
/// Only bookings whose status blocks dates (pending or confirmed) contribute.
/// Every date from check-in through check-out, inclusive, is added.
/// Input order is irrelevant.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if a booking's range runs
/// past the last representable date.
pub fn build_blocked_dates<'a, I>(bookings: I) -> Result<BlockedDates, DomainError>
where
    I: IntoIterator<Item = &'a ExistingBooking>,
{
    let mut dates: BTreeSet<Date> = BTreeSet::new();

    for booking in bookings
        .into_iter()
        .filter(|booking| booking.status().blocks_dates())
    {
        let mut current: Date = booking.check_in();
        loop {
            dates.insert(current);
            if current >= booking.check_out() {
                break;
            }
            current = current
                .next_day()
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: format!("expanding booking dates after {current}"),
                })?;
        }
    }

    Ok(BlockedDates { dates })
}
