// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::NewApartment;
use crate::diesel_schema::apartments;
use crate::error::PersistenceError;

/// Creates a new apartment listing, available for booking.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_apartment(
    conn: &mut SqliteConnection,
    apartment: &NewApartment,
) -> Result<i64, PersistenceError> {
    info!(
        title = %apartment.title,
        city = %apartment.city,
        price_per_night = apartment.price_per_night,
        max_guests = apartment.max_guests,
        "Creating apartment"
    );

    diesel::insert_into(apartments::table)
        .values((
            apartments::title.eq(&apartment.title),
            apartments::city.eq(&apartment.city),
            apartments::price_per_night.eq(i64::from(apartment.price_per_night)),
            apartments::max_guests.eq(i32::from(apartment.max_guests)),
        ))
        .execute(conn)?;

    let apartment_id: i64 = get_last_insert_rowid(conn)?;

    info!(apartment_id, "Apartment created");
    Ok(apartment_id)
}

/// Opens or closes an apartment for new bookings.
///
/// Existing bookings are unaffected.
///
/// # Errors
///
/// Returns `PersistenceError::ApartmentNotFound` if no apartment has the ID.
pub fn set_apartment_availability(
    conn: &mut SqliteConnection,
    apartment_id: i64,
    is_available: bool,
) -> Result<(), PersistenceError> {
    info!(apartment_id, is_available, "Setting apartment availability");

    let updated: usize = diesel::update(apartments::table)
        .filter(apartments::apartment_id.eq(apartment_id))
        .set(apartments::is_available.eq(i32::from(is_available)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::ApartmentNotFound(apartment_id));
    }

    Ok(())
}
