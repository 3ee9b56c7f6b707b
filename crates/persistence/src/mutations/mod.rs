// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! - `apartments`: Apartment creation and availability
//! - `bookings`: Booking creation and status changes

pub mod apartments;
pub mod bookings;

pub use apartments::{create_apartment, set_apartment_availability};
pub use bookings::{create_booking, update_booking_status};
