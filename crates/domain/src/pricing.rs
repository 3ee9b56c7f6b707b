// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Price calculation for a stay.
//!
//! All amounts are whole currency units. The service fee is 10% of the
//! nightly subtotal, rounded once to the nearest unit with halves rounded
//! away from zero. Intermediate values are never rounded.

use crate::error::DomainError;
use crate::types::{Apartment, StayRange};
use serde::{Deserialize, Serialize};

/// Flat cleaning fee charged on every booking.
pub const CLEANING_FEE: u64 = 25;

/// Service fee as a percentage of the nightly subtotal.
pub const SERVICE_FEE_PERCENT: u64 = 10;

/// Price breakdown for a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Number of nights priced.
    pub nights: u32,
    /// Nightly rate used.
    pub price_per_night: u32,
    /// `nights * price_per_night`.
    pub subtotal: u64,
    /// Flat cleaning fee.
    pub cleaning_fee: u64,
    /// Rounded service fee.
    pub service_fee: u64,
    /// `subtotal + cleaning_fee + service_fee`.
    pub total: u64,
}

/// Rounds `amount * percent / 100` to the nearest unit, halves away from zero.
const fn percent_of_rounded(amount: u64, percent: u64) -> Option<u64> {
    match amount.checked_mul(percent) {
        Some(scaled) => match scaled.checked_add(50) {
            Some(biased) => Some(biased / 100),
            None => None,
        },
        None => None,
    }
}

/// Calculates the price breakdown for a number of nights.
///
/// # Arguments
///
/// * `nights` - Number of nights, must be at least 1
/// * `price_per_night` - Nightly rate in whole currency units
///
/// # Errors
///
/// Returns `DomainError::InvalidRange` if `nights < 1`, and
/// `DomainError::PriceOverflow` if the total cannot be represented.
pub fn calculate_price(nights: i64, price_per_night: u32) -> Result<PriceBreakdown, DomainError> {
    if nights < 1 {
        return Err(DomainError::InvalidRange { nights });
    }

    let overflow = || DomainError::PriceOverflow {
        nights,
        price_per_night,
    };

    let night_count: u32 = u32::try_from(nights).map_err(|_| overflow())?;
    let subtotal: u64 = u64::from(night_count)
        .checked_mul(u64::from(price_per_night))
        .ok_or_else(overflow)?;
    let service_fee: u64 =
        percent_of_rounded(subtotal, SERVICE_FEE_PERCENT).ok_or_else(overflow)?;
    let total: u64 = subtotal
        .checked_add(CLEANING_FEE)
        .and_then(|sum| sum.checked_add(service_fee))
        .ok_or_else(overflow)?;

    Ok(PriceBreakdown {
        nights: night_count,
        price_per_night,
        subtotal,
        cleaning_fee: CLEANING_FEE,
        service_fee,
        total,
    })
}

/// Prices a validated stay at an apartment's nightly rate.
///
/// # Errors
///
/// Returns an error if the price cannot be represented.
pub fn quote_stay(stay: &StayRange, apartment: &Apartment) -> Result<PriceBreakdown, DomainError> {
    calculate_price(stay.nights(), apartment.price_per_night())
}
