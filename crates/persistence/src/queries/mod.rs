// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! - `apartments`: Apartment listing lookups
//! - `bookings`: Booking lookups and the blocking-booking feed

pub mod apartments;
pub mod bookings;

pub use apartments::{get_apartment, list_apartments};
pub use bookings::{get_booking, list_blocking_bookings, list_bookings_for_apartment};
