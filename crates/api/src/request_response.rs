// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross the API boundary as ISO 8601 `YYYY-MM-DD` strings and are
//! parsed with `parse_iso_date`.

use serde::{Deserialize, Serialize};

/// A bookable apartment as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentInfo {
    /// The canonical numeric identifier.
    pub apartment_id: i64,
    /// The listing title.
    pub title: String,
    /// The city the apartment is in.
    pub city: String,
    /// Nightly rate in whole currency units.
    pub price_per_night: u32,
    /// Maximum number of guests.
    pub max_guests: u16,
    /// Whether the apartment accepts bookings.
    pub is_available: bool,
    /// The guest counts a booking form should offer.
    pub guest_options: Vec<u16>,
}

/// API response listing apartments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListApartmentsResponse {
    /// The apartments.
    pub apartments: Vec<ApartmentInfo>,
}

/// API request to list a new apartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApartmentRequest {
    /// The listing title.
    pub title: String,
    /// The city the apartment is in.
    pub city: String,
    /// Nightly rate in whole currency units.
    pub price_per_night: u32,
    /// Maximum number of guests, at least 1.
    pub max_guests: u16,
}

/// API response for a successful apartment creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApartmentResponse {
    /// The canonical numeric identifier.
    pub apartment_id: i64,
    /// A success message.
    pub message: String,
}

/// The dates on which an apartment cannot be checked into or out of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedDatesResponse {
    /// The apartment.
    pub apartment_id: i64,
    /// Occupied dates, ascending.
    pub blocked_dates: Vec<String>,
}

/// API request to price a stay without booking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Check-in date (ISO 8601).
    pub check_in: String,
    /// Check-out date (ISO 8601).
    pub check_out: String,
    /// Requested number of guests.
    pub guests: i64,
}

/// The price of a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// The apartment.
    pub apartment_id: i64,
    /// Check-in date (ISO 8601).
    pub check_in: String,
    /// Check-out date (ISO 8601).
    pub check_out: String,
    /// The accepted number of guests.
    pub guests: u16,
    /// Number of nights.
    pub nights: u32,
    /// Nightly rate.
    pub price_per_night: u32,
    /// `nights * price_per_night`.
    pub subtotal: u64,
    /// Flat cleaning fee.
    pub cleaning_fee: u64,
    /// Service fee on the subtotal.
    pub service_fee: u64,
    /// Amount charged.
    pub total: u64,
}

/// API request to book a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The apartment to book.
    pub apartment_id: i64,
    /// Check-in date (ISO 8601).
    pub check_in: String,
    /// Check-out date (ISO 8601).
    pub check_out: String,
    /// Requested number of guests.
    pub guests: i64,
    /// The guest's full name.
    pub guest_name: String,
    /// The guest's email address.
    pub guest_email: String,
    /// Optional requests for the host.
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// API response for a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    /// The canonical numeric identifier.
    pub booking_id: i64,
    /// The booking status, always `pending` for a new booking.
    pub status: String,
    /// The full price breakdown.
    pub price: QuoteResponse,
    /// A success message.
    pub message: String,
}

/// A stored booking as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInfo {
    /// The canonical numeric identifier.
    pub booking_id: i64,
    /// The booked apartment.
    pub apartment_id: i64,
    /// The guest's full name.
    pub guest_name: String,
    /// The guest's email address.
    pub guest_email: String,
    /// Check-in date (ISO 8601).
    pub check_in: String,
    /// Check-out date (ISO 8601).
    pub check_out: String,
    /// Number of guests.
    pub guest_count: u16,
    /// Amount charged.
    pub total_price: u64,
    /// Optional requests for the host.
    pub special_requests: Option<String>,
    /// The booking status.
    pub status: String,
    /// When the booking was created.
    pub created_at: String,
}

/// API response listing the bookings of an apartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBookingsResponse {
    /// The apartment.
    pub apartment_id: i64,
    /// The bookings, earliest check-in first.
    pub bookings: Vec<BookingInfo>,
}

/// API request to change a booking's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookingStatusRequest {
    /// The target status (`confirmed`, `cancelled`, `completed`).
    pub status: String,
}

/// API response for a successful status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookingStatusResponse {
    /// The booking.
    pub booking_id: i64,
    /// The status before the change.
    pub previous_status: String,
    /// The status after the change.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API request to open or close an apartment for booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAvailabilityRequest {
    /// Whether the apartment accepts bookings.
    pub is_available: bool,
}

/// API response for a successful availability change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAvailabilityResponse {
    /// The apartment.
    pub apartment_id: i64,
    /// Whether the apartment now accepts bookings.
    pub is_available: bool,
    /// A success message.
    pub message: String,
}
