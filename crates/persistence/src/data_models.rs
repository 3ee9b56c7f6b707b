// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use staybook_domain::{Apartment, BookingStatus, DomainError, ExistingBooking};
use time::Date;

/// A stored apartment listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentData {
    pub apartment_id: i64,
    pub title: String,
    pub city: String,
    pub price_per_night: u32,
    pub max_guests: u16,
    pub is_available: bool,
    pub created_at: String,
}

impl ApartmentData {
    /// Returns the facts the pricing and availability rules need.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored capacity is invalid.
    pub const fn to_apartment(&self) -> Result<Apartment, DomainError> {
        Apartment::with_id(self.apartment_id, self.price_per_night, self.max_guests)
    }
}

/// The fields supplied when listing a new apartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApartment {
    pub title: String,
    pub city: String,
    pub price_per_night: u32,
    pub max_guests: u16,
}

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingData {
    pub booking_id: i64,
    pub apartment_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: Date,
    pub check_out: Date,
    pub guest_count: u16,
    pub total_price: u64,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    pub created_at: String,
}

impl BookingData {
    /// Returns the view of this booking used by the blocked-date builder.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored dates are out of order.
    pub fn to_existing_booking(&self) -> Result<ExistingBooking, DomainError> {
        ExistingBooking::new(self.check_in, self.check_out, self.status)
    }
}
