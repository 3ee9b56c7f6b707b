// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for Staybook.
//!
//! Translates transport-neutral requests into booking-flow commands,
//! enforces roles, and maps domain, core and persistence errors into
//! `ApiError`.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod flow;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, Role, authenticate_stub, authorize_admin};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use flow::{
    apartment_info, blocked_dates_response, booking_info, format_iso_date, parse_booking_status,
    parse_iso_date, prepare_booking, quote_stay, submission_quote, validate_new_apartment,
};
pub use handlers::{
    create_apartment, create_booking, get_apartment, get_blocked_dates, get_booking,
    list_apartment_bookings, list_apartments, quote, set_apartment_availability,
    update_booking_status,
};
pub use request_response::{
    ApartmentInfo, BlockedDatesResponse, BookingInfo, CreateApartmentRequest,
    CreateApartmentResponse, CreateBookingRequest, CreateBookingResponse, ListApartmentsResponse,
    ListBookingsResponse, QuoteRequest, QuoteResponse, UpdateAvailabilityRequest,
    UpdateAvailabilityResponse, UpdateBookingStatusRequest, UpdateBookingStatusResponse,
};
