// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staybook::BookingSubmission;
use staybook_domain::{BlockedDates, BookingStatus, ExistingBooking, build_blocked_dates};
use tracing::{info, warn};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::columns::{format_date, from_u64, parse_status};
use crate::data_models::ApartmentData;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use crate::queries::{get_apartment, list_blocking_bookings};

/// Stores a validated booking with status `pending`.
///
/// Runs inside an immediate transaction, which takes the database write
/// lock before reading. The apartment's blocking bookings are re-read and
/// the whole inclusive range is checked again, so two submissions for
/// overlapping dates cannot both succeed.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `submission` - The validated and priced booking
///
/// # Returns
///
/// The ID assigned to the new booking.
///
/// # Errors
///
/// Returns an error if:
/// - The apartment has no ID, does not exist, or is not accepting bookings
/// - Any date of the stay is occupied (`PersistenceError::DatesUnavailable`)
/// - The insert fails
pub fn create_booking(
    conn: &mut SqliteConnection,
    submission: &BookingSubmission,
) -> Result<i64, PersistenceError> {
    let apartment_id: i64 = submission
        .apartment
        .apartment_id()
        .ok_or(PersistenceError::UnsavedApartment)?;
    let check_in: String = format_date(submission.stay.check_in())?;
    let check_out: String = format_date(submission.stay.check_out())?;
    let total_price: i64 = from_u64(submission.price.total, "total_price")?;

    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let apartment: ApartmentData = get_apartment(conn, apartment_id)?
            .ok_or(PersistenceError::ApartmentNotFound(apartment_id))?;
        if !apartment.is_available {
            return Err(PersistenceError::ApartmentUnavailable(apartment_id));
        }

        let existing: Vec<ExistingBooking> = list_blocking_bookings(conn, apartment_id)?;
        let blocked: BlockedDates = build_blocked_dates(&existing)?;
        if let Some(date) =
            blocked.first_blocked_in(submission.stay.check_in(), submission.stay.check_out())
        {
            warn!(apartment_id, %date, "Rejecting booking for occupied dates");
            return Err(PersistenceError::DatesUnavailable { apartment_id, date });
        }

        diesel::insert_into(bookings::table)
            .values((
                bookings::apartment_id.eq(apartment_id),
                bookings::guest_name.eq(submission.guest.name()),
                bookings::guest_email.eq(submission.guest.email()),
                bookings::check_in_date.eq(&check_in),
                bookings::check_out_date.eq(&check_out),
                bookings::guest_count.eq(i32::from(submission.guest_count)),
                bookings::total_price.eq(total_price),
                bookings::special_requests.eq(submission.special_requests.as_deref()),
                bookings::status.eq(submission.status().as_str()),
            ))
            .execute(conn)?;

        let booking_id: i64 = get_last_insert_rowid(conn)?;

        info!(
            booking_id,
            apartment_id,
            check_in = %check_in,
            check_out = %check_out,
            total_price,
            "Booking created"
        );
        Ok(booking_id)
    })
}

/// Moves a booking to a new status.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking_id` - The booking to update
/// * `target` - The requested status
///
/// # Returns
///
/// The status the booking had before the change.
///
/// # Errors
///
/// Returns an error if the booking does not exist or the transition is not
/// permitted from its current status.
pub fn update_booking_status(
    conn: &mut SqliteConnection,
    booking_id: i64,
    target: BookingStatus,
) -> Result<BookingStatus, PersistenceError> {
    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let stored: Option<String> = bookings::table
            .filter(bookings::booking_id.eq(booking_id))
            .select(bookings::status)
            .first(conn)
            .optional()?;
        let current: BookingStatus =
            parse_status(&stored.ok_or(PersistenceError::BookingNotFound(booking_id))?)?;

        let next: BookingStatus = current.transition_to(target)?;

        diesel::update(bookings::table)
            .filter(bookings::booking_id.eq(booking_id))
            .set(bookings::status.eq(next.as_str()))
            .execute(conn)?;

        info!(booking_id, from = %current, to = %next, "Booking status changed");
        Ok(current)
    })
}
