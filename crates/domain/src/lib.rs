// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability and pricing rules for a single apartment.
//!
//! Everything in this crate is pure and deterministic: no I/O, no clock.
//! Callers supply `today` and the stored bookings explicitly.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod blocked_dates;
mod date_selection;
mod error;
mod guests;
mod pricing;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use blocked_dates::{BlockedDates, build_blocked_dates};
pub use date_selection::{
    MAX_NIGHTS, is_check_in_selectable, is_check_out_selectable, validate_stay_dates,
};
pub use error::DomainError;
pub use guests::{selectable_guest_counts, validate_guest_count};
pub use pricing::{CLEANING_FEE, PriceBreakdown, SERVICE_FEE_PERCENT, calculate_price, quote_stay};
pub use types::{Apartment, BookingStatus, ExistingBooking, GuestDetails, StayRange};
pub use validation::validate_guest_details;
