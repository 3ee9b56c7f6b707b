// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage-free request processing.
//!
//! These functions turn API requests into validated domain values. They
//! never touch persistence, which keeps them usable from tests and from any
//! transport.

use staybook::{
    AvailabilityContext, BookingDraft, BookingSubmission, Command, TransitionResult, apply, submit,
};
use staybook_domain::{
    Apartment, BlockedDates, BookingStatus, DomainError, PriceBreakdown, StayRange,
    selectable_guest_counts, validate_guest_count, validate_stay_dates,
};
use staybook_persistence::{ApartmentData, BookingData, NewApartment};
use time::Date;
use time::macros::format_description;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ApartmentInfo, BlockedDatesResponse, BookingInfo, CreateApartmentRequest,
    CreateBookingRequest, QuoteRequest, QuoteResponse,
};

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Arguments
///
/// * `field` - The request field the value came from
/// * `value` - The text to parse
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming `field` if the value is not a
/// valid date.
pub fn parse_iso_date(field: &str, value: &str) -> Result<Date, ApiError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        let err: DomainError = DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        };
        ApiError::InvalidInput {
            field: String::from(field),
            message: err.to_string(),
        }
    })
}

/// Formats a date as ISO 8601 (`YYYY-MM-DD`).
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.to_string()
}

/// Builds the blocked-date listing for an apartment.
#[must_use]
pub fn blocked_dates_response(apartment_id: i64, blocked: &BlockedDates) -> BlockedDatesResponse {
    BlockedDatesResponse {
        apartment_id,
        blocked_dates: blocked.iter().map(format_iso_date).collect(),
    }
}

fn require_apartment_id(apartment: &Apartment) -> Result<i64, ApiError> {
    apartment.apartment_id().ok_or_else(|| ApiError::Internal {
        message: String::from("Apartment has no identifier"),
    })
}

fn quote_response(
    apartment_id: i64,
    stay: &StayRange,
    guests: u16,
    price: &PriceBreakdown,
) -> QuoteResponse {
    QuoteResponse {
        apartment_id,
        check_in: format_iso_date(stay.check_in()),
        check_out: format_iso_date(stay.check_out()),
        guests,
        nights: price.nights,
        price_per_night: price.price_per_night,
        subtotal: price.subtotal,
        cleaning_fee: price.cleaning_fee,
        service_fee: price.service_fee,
        total: price.total,
    }
}

/// Prices a stay for display before booking.
///
/// Applies the same date and guest rules as a booking.
///
/// # Errors
///
/// Returns an error if a date is malformed, the stay is invalid or
/// unavailable, or the guest count exceeds capacity.
pub fn quote_stay(
    apartment: &Apartment,
    context: &AvailabilityContext,
    request: &QuoteRequest,
) -> Result<QuoteResponse, ApiError> {
    let apartment_id: i64 = require_apartment_id(apartment)?;
    let check_in: Date = parse_iso_date("check_in", &request.check_in)?;
    let check_out: Date = parse_iso_date("check_out", &request.check_out)?;

    let stay: StayRange =
        validate_stay_dates(Some(check_in), Some(check_out), context.today, &context.blocked)
            .map_err(translate_domain_error)?;
    let guests: u16 = validate_guest_count(request.guests, apartment.max_guests())
        .map_err(translate_domain_error)?;
    let price: PriceBreakdown =
        staybook_domain::quote_stay(&stay, apartment).map_err(translate_domain_error)?;

    Ok(quote_response(apartment_id, &stay, guests, &price))
}

/// Drives the booking flow for a single request.
///
/// The request is replayed through the booking state machine one step at a
/// time, exactly as an interactive client would, then submitted.
///
/// # Returns
///
/// The final draft, kept for a retry if storage rejects the booking, and
/// the validated submission.
///
/// # Errors
///
/// Returns the first rule the request violates.
pub fn prepare_booking(
    apartment: &Apartment,
    context: &AvailabilityContext,
    request: &CreateBookingRequest,
) -> Result<(BookingDraft, BookingSubmission), ApiError> {
    let check_in: Date = parse_iso_date("check_in", &request.check_in)?;
    let check_out: Date = parse_iso_date("check_out", &request.check_out)?;

    let commands: [Command; 4] = [
        Command::SelectCheckIn { date: check_in },
        Command::SelectCheckOut { date: check_out },
        Command::SelectGuests {
            count: request.guests,
        },
        Command::EnterDetails {
            name: request.guest_name.clone(),
            email: request.guest_email.clone(),
            special_requests: request.special_requests.clone(),
        },
    ];

    let mut draft: BookingDraft = BookingDraft::new(apartment.clone());
    for command in commands {
        let result: TransitionResult =
            apply(&draft, context, command).map_err(translate_core_error)?;
        draft = result.new_draft;
    }

    let submission: BookingSubmission = submit(&draft, context).map_err(translate_core_error)?;
    Ok((draft, submission))
}

/// Describes a prepared booking's price in response form.
///
/// # Errors
///
/// Returns an error if the submission's apartment has no identifier.
pub fn submission_quote(submission: &BookingSubmission) -> Result<QuoteResponse, ApiError> {
    let apartment_id: i64 = require_apartment_id(&submission.apartment)?;
    Ok(quote_response(
        apartment_id,
        &submission.stay,
        submission.guest_count,
        &submission.price,
    ))
}

/// Validates a request to list a new apartment.
///
/// # Errors
///
/// Returns an error if the title or city is blank or the capacity is zero.
/// A nightly rate of zero is accepted.
pub fn validate_new_apartment(request: &CreateApartmentRequest) -> Result<NewApartment, ApiError> {
    let title: &str = request.title.trim();
    if title.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("title"),
            message: String::from("Title cannot be empty"),
        });
    }

    let city: &str = request.city.trim();
    if city.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("city"),
            message: String::from("City cannot be empty"),
        });
    }

    Apartment::new(request.price_per_night, request.max_guests).map_err(translate_domain_error)?;

    Ok(NewApartment {
        title: title.to_string(),
        city: city.to_string(),
        price_per_night: request.price_per_night,
        max_guests: request.max_guests,
    })
}

/// Parses a booking status from its lowercase wire name.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the status is unknown.
pub fn parse_booking_status(value: &str) -> Result<BookingStatus, ApiError> {
    value
        .trim()
        .parse::<BookingStatus>()
        .map_err(translate_domain_error)
}

/// Converts a stored apartment to its API form.
#[must_use]
pub fn apartment_info(apartment: &ApartmentData) -> ApartmentInfo {
    ApartmentInfo {
        apartment_id: apartment.apartment_id,
        title: apartment.title.clone(),
        city: apartment.city.clone(),
        price_per_night: apartment.price_per_night,
        max_guests: apartment.max_guests,
        is_available: apartment.is_available,
        guest_options: selectable_guest_counts(apartment.max_guests),
    }
}

/// Converts a stored booking to its API form.
#[must_use]
pub fn booking_info(booking: &BookingData) -> BookingInfo {
    BookingInfo {
        booking_id: booking.booking_id,
        apartment_id: booking.apartment_id,
        guest_name: booking.guest_name.clone(),
        guest_email: booking.guest_email.clone(),
        check_in: format_iso_date(booking.check_in),
        check_out: format_iso_date(booking.check_out),
        guest_count: booking.guest_count,
        total_price: booking.total_price,
        special_requests: booking.special_requests.clone(),
        status: booking.status.to_string(),
        created_at: booking.created_at.clone(),
    }
}
