// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staybook_domain::{BookingStatus, ExistingBooking};
use tracing::debug;

use crate::columns::{parse_date, parse_status, to_u16, to_u64};
use crate::data_models::BookingData;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Diesel Queryable struct for booking rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct BookingRow {
    booking_id: i64,
    apartment_id: i64,
    guest_name: String,
    guest_email: String,
    check_in_date: String,
    check_out_date: String,
    guest_count: i32,
    total_price: i64,
    special_requests: Option<String>,
    status: String,
    created_at: String,
}

impl TryFrom<BookingRow> for BookingData {
    type Error = PersistenceError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Self {
            booking_id: row.booking_id,
            apartment_id: row.apartment_id,
            guest_name: row.guest_name,
            guest_email: row.guest_email,
            check_in: parse_date(&row.check_in_date)?,
            check_out: parse_date(&row.check_out_date)?,
            guest_count: to_u16(row.guest_count, "guest_count")?,
            total_price: to_u64(row.total_price, "total_price")?,
            special_requests: row.special_requests,
            status: parse_status(&row.status)?,
            created_at: row.created_at,
        })
    }
}

/// Statuses whose bookings occupy dates.
fn blocking_statuses() -> [&'static str; 2] {
    [
        BookingStatus::Pending.as_str(),
        BookingStatus::Confirmed.as_str(),
    ]
}

/// Retrieves a booking by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is malformed.
/// Returns `Ok(None)` if the booking is not found.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<BookingData>, PersistenceError> {
    debug!(booking_id, "Looking up booking");

    let result: Result<BookingRow, diesel::result::Error> = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(BookingRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(BookingData::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists every booking for an apartment, earliest check-in first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_bookings_for_apartment(
    conn: &mut SqliteConnection,
    apartment_id: i64,
) -> Result<Vec<BookingData>, PersistenceError> {
    debug!(apartment_id, "Listing bookings for apartment");

    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::apartment_id.eq(apartment_id))
        .order((bookings::check_in_date.asc(), bookings::booking_id.asc()))
        .select(BookingRow::as_select())
        .load(conn)?;

    rows.into_iter().map(BookingData::try_from).collect()
}

/// Fetches the bookings that occupy dates for an apartment.
///
/// Only pending and confirmed bookings are returned. The result feeds the
/// blocked-date builder and must be re-read for every interaction.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_blocking_bookings(
    conn: &mut SqliteConnection,
    apartment_id: i64,
) -> Result<Vec<ExistingBooking>, PersistenceError> {
    debug!(apartment_id, "Fetching blocking bookings");

    let rows: Vec<(String, String, String)> = bookings::table
        .filter(bookings::apartment_id.eq(apartment_id))
        .filter(bookings::status.eq_any(blocking_statuses()))
        .select((
            bookings::check_in_date,
            bookings::check_out_date,
            bookings::status,
        ))
        .load(conn)?;

    rows.iter()
        .map(|(check_in, check_out, status)| {
            ExistingBooking::new(
                parse_date(check_in)?,
                parse_date(check_out)?,
                parse_status(status)?,
            )
            .map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))
        })
        .collect()
}
