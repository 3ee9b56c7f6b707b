// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates a requested guest count against apartment capacity.
///
/// The request arrives as a signed value so that zero and negative input
/// from a client is rejected here rather than silently wrapped.
///
/// # Arguments
///
/// * `requested` - The requested number of guests
/// * `max_guests` - The apartment capacity
///
/// # Returns
///
/// The accepted guest count.
///
/// # Errors
///
/// Returns `DomainError::GuestCountOutOfRange` unless
/// `1 <= requested <= max_guests`.
pub fn validate_guest_count(requested: i64, max_guests: u16) -> Result<u16, DomainError> {
    let out_of_range: DomainError = DomainError::GuestCountOutOfRange {
        requested,
        max_guests,
    };

    let count: u16 = u16::try_from(requested).map_err(|_| out_of_range.clone())?;
    if count == 0 || count > max_guests {
        return Err(out_of_range);
    }

    Ok(count)
}

/// The guest counts a booking form should offer for an apartment.
#[must_use]
pub fn selectable_guest_counts(max_guests: u16) -> Vec<u16> {
    (1..=max_guests).collect()
}
