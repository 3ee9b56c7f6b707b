// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler re-reads the data it validates against. Nothing is cached
//! between calls.

use staybook::{AvailabilityContext, BookingDraft, BookingSubmission, SubmissionOutcome};
use staybook_domain::{Apartment, BookingStatus, ExistingBooking};
use staybook_persistence::{ApartmentData, BookingData, NewApartment, Persistence, PersistenceError};
use time::Date;
use tracing::{info, warn};

use crate::auth::{AuthenticatedActor, authorize_admin};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::flow::{
    apartment_info, blocked_dates_response, booking_info, parse_booking_status,
    prepare_booking, quote_stay, submission_quote, validate_new_apartment,
};
use crate::request_response::{
    ApartmentInfo, BlockedDatesResponse, BookingInfo, CreateApartmentRequest,
    CreateApartmentResponse, CreateBookingRequest, CreateBookingResponse,
    ListApartmentsResponse, ListBookingsResponse, QuoteRequest, QuoteResponse,
    UpdateAvailabilityRequest, UpdateAvailabilityResponse, UpdateBookingStatusRequest,
    UpdateBookingStatusResponse,
};

fn load_apartment(
    persistence: &mut Persistence,
    apartment_id: i64,
) -> Result<ApartmentData, ApiError> {
    persistence
        .get_apartment(apartment_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Apartment"),
            message: format!("Apartment {apartment_id} does not exist"),
        })
}

/// Loads an apartment that accepts bookings together with its current
/// availability.
fn load_bookable(
    persistence: &mut Persistence,
    apartment_id: i64,
    today: Date,
) -> Result<(Apartment, AvailabilityContext), ApiError> {
    let data: ApartmentData = load_apartment(persistence, apartment_id)?;
    if !data.is_available {
        return Err(translate_persistence_error(
            PersistenceError::ApartmentUnavailable(apartment_id),
        ));
    }

    let apartment: Apartment = data.to_apartment().map_err(translate_domain_error)?;
    let bookings: Vec<ExistingBooking> = persistence
        .list_blocking_bookings(apartment_id)
        .map_err(translate_persistence_error)?;
    let context: AvailabilityContext =
        AvailabilityContext::from_bookings(today, &bookings).map_err(translate_domain_error)?;

    Ok((apartment, context))
}

/// Lists the apartments that accept bookings.
///
/// # Errors
///
/// Returns an error if the apartments cannot be read.
pub fn list_apartments(persistence: &mut Persistence) -> Result<ListApartmentsResponse, ApiError> {
    let apartments: Vec<ApartmentData> = persistence
        .list_apartments(true)
        .map_err(translate_persistence_error)?;

    Ok(ListApartmentsResponse {
        apartments: apartments.iter().map(apartment_info).collect(),
    })
}

/// Retrieves a single apartment.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the apartment does not exist.
pub fn get_apartment(
    persistence: &mut Persistence,
    apartment_id: i64,
) -> Result<ApartmentInfo, ApiError> {
    let apartment: ApartmentData = load_apartment(persistence, apartment_id)?;
    Ok(apartment_info(&apartment))
}

/// Lists a new apartment.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The apartment to create
/// * `authenticated_actor` - The actor performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The request is invalid
/// - The apartment cannot be stored
pub fn create_apartment(
    persistence: &mut Persistence,
    request: &CreateApartmentRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<CreateApartmentResponse, ApiError> {
    authorize_admin(authenticated_actor, "create_apartment")?;

    let apartment: NewApartment = validate_new_apartment(request)?;
    let apartment_id: i64 = persistence
        .create_apartment(&apartment)
        .map_err(translate_persistence_error)?;

    info!(
        apartment_id,
        actor = %authenticated_actor.id,
        "Apartment listed"
    );

    Ok(CreateApartmentResponse {
        apartment_id,
        message: format!("Created apartment '{}' in {}", apartment.title, apartment.city),
    })
}

/// Opens or closes an apartment for booking.
///
/// Existing bookings are untouched. A closed apartment keeps its listing
/// but rejects quotes and new bookings.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `apartment_id` - The apartment to change
/// * `request` - The new availability flag
/// * `authenticated_actor` - The actor performing this action
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the apartment does not
/// exist.
pub fn set_apartment_availability(
    persistence: &mut Persistence,
    apartment_id: i64,
    request: &UpdateAvailabilityRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<UpdateAvailabilityResponse, ApiError> {
    authorize_admin(authenticated_actor, "set_apartment_availability")?;

    persistence
        .set_apartment_availability(apartment_id, request.is_available)
        .map_err(translate_persistence_error)?;

    info!(
        apartment_id,
        is_available = request.is_available,
        actor = %authenticated_actor.id,
        "Apartment availability changed"
    );

    let state: &str = if request.is_available {
        "open for booking"
    } else {
        "closed for booking"
    };
    Ok(UpdateAvailabilityResponse {
        apartment_id,
        is_available: request.is_available,
        message: format!("Apartment {apartment_id} is now {state}"),
    })
}

/// Returns the dates on which an apartment is occupied.
///
/// # Errors
///
/// Returns an error if the apartment does not exist or its bookings cannot
/// be read.
pub fn get_blocked_dates(
    persistence: &mut Persistence,
    apartment_id: i64,
    today: Date,
) -> Result<BlockedDatesResponse, ApiError> {
    load_apartment(persistence, apartment_id)?;
    let bookings: Vec<ExistingBooking> = persistence
        .list_blocking_bookings(apartment_id)
        .map_err(translate_persistence_error)?;
    let context: AvailabilityContext =
        AvailabilityContext::from_bookings(today, &bookings).map_err(translate_domain_error)?;

    Ok(blocked_dates_response(apartment_id, &context.blocked))
}

/// Prices a stay without booking it.
///
/// # Errors
///
/// Returns an error if the apartment does not exist or is not bookable, or
/// the requested stay is invalid.
pub fn quote(
    persistence: &mut Persistence,
    apartment_id: i64,
    request: &QuoteRequest,
    today: Date,
) -> Result<QuoteResponse, ApiError> {
    let (apartment, context) = load_bookable(persistence, apartment_id, today)?;
    quote_stay(&apartment, &context, request)
}

/// Books a stay.
///
/// Availability is read fresh, the request is validated and priced, and
/// storage re-checks the dates while holding the write lock.
///
/// # Errors
///
/// Returns an error if:
/// - The apartment does not exist or is not bookable
/// - Any field of the request is invalid
/// - Any date of the stay is taken (`ApiError::Conflict`), including by a
///   booking committed after validation
pub fn create_booking(
    persistence: &mut Persistence,
    request: &CreateBookingRequest,
    today: Date,
) -> Result<CreateBookingResponse, ApiError> {
    let (apartment, context) = load_bookable(persistence, request.apartment_id, today)?;
    let (draft, submission): (BookingDraft, BookingSubmission) =
        prepare_booking(&apartment, &context, request)?;
    let price: QuoteResponse = submission_quote(&submission)?;

    let stored: Result<i64, PersistenceError> = persistence.create_booking(&submission);
    match SubmissionOutcome::from_storage(draft, stored) {
        SubmissionOutcome::Succeeded { booking_id } => {
            info!(
                booking_id,
                apartment_id = request.apartment_id,
                total = price.total,
                "Booking submitted"
            );
            Ok(CreateBookingResponse {
                booking_id,
                status: submission.status().to_string(),
                price,
                message: String::from("Booking received and awaiting confirmation"),
            })
        }
        SubmissionOutcome::Failed { error, .. } => {
            warn!(
                apartment_id = request.apartment_id,
                error = %error,
                "Booking submission failed"
            );
            Err(translate_persistence_error(error))
        }
    }
}

/// Retrieves a booking, including the guest's contact details.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the booking does not
/// exist.
pub fn get_booking(
    persistence: &mut Persistence,
    booking_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<BookingInfo, ApiError> {
    authorize_admin(authenticated_actor, "get_booking")?;

    let booking: BookingData = persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {booking_id} does not exist"),
        })?;
    Ok(booking_info(&booking))
}

/// Lists every booking of an apartment.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the apartment does not
/// exist.
pub fn list_apartment_bookings(
    persistence: &mut Persistence,
    apartment_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListBookingsResponse, ApiError> {
    authorize_admin(authenticated_actor, "list_bookings")?;
    load_apartment(persistence, apartment_id)?;

    let bookings: Vec<BookingData> = persistence
        .list_bookings_for_apartment(apartment_id)
        .map_err(translate_persistence_error)?;

    Ok(ListBookingsResponse {
        apartment_id,
        bookings: bookings.iter().map(booking_info).collect(),
    })
}

/// Changes a booking's status.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The status is unknown or the transition is not permitted
/// - The booking does not exist
pub fn update_booking_status(
    persistence: &mut Persistence,
    booking_id: i64,
    request: &UpdateBookingStatusRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<UpdateBookingStatusResponse, ApiError> {
    authorize_admin(authenticated_actor, "update_booking_status")?;

    let target: BookingStatus = parse_booking_status(&request.status)?;
    let previous: BookingStatus = persistence
        .update_booking_status(booking_id, target)
        .map_err(translate_persistence_error)?;

    info!(
        booking_id,
        from = %previous,
        to = %target,
        actor = %authenticated_actor.id,
        "Booking status updated"
    );

    Ok(UpdateBookingStatusResponse {
        booking_id,
        previous_status: previous.to_string(),
        status: target.to_string(),
        message: format!("Booking {booking_id} is now {target}"),
    })
}
