// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::columns::{to_u16, to_u32};
use crate::data_models::ApartmentData;
use crate::diesel_schema::apartments;
use crate::error::PersistenceError;

/// Diesel Queryable struct for apartment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = apartments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct ApartmentRow {
    apartment_id: i64,
    title: String,
    city: String,
    price_per_night: i64,
    max_guests: i32,
    is_available: i32,
    created_at: String,
}

impl TryFrom<ApartmentRow> for ApartmentData {
    type Error = PersistenceError;

    fn try_from(row: ApartmentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            apartment_id: row.apartment_id,
            title: row.title,
            city: row.city,
            price_per_night: to_u32(row.price_per_night, "price_per_night")?,
            max_guests: to_u16(row.max_guests, "max_guests")?,
            is_available: row.is_available != 0,
            created_at: row.created_at,
        })
    }
}

/// Retrieves an apartment by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is malformed.
/// Returns `Ok(None)` if the apartment is not found.
pub fn get_apartment(
    conn: &mut SqliteConnection,
    apartment_id: i64,
) -> Result<Option<ApartmentData>, PersistenceError> {
    debug!(apartment_id, "Looking up apartment");

    let result: Result<ApartmentRow, diesel::result::Error> = apartments::table
        .filter(apartments::apartment_id.eq(apartment_id))
        .select(ApartmentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(ApartmentData::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists apartments ordered by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `available_only` - Skip apartments that are not accepting bookings
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_apartments(
    conn: &mut SqliteConnection,
    available_only: bool,
) -> Result<Vec<ApartmentData>, PersistenceError> {
    debug!(available_only, "Listing apartments");

    let rows: Vec<ApartmentRow> = if available_only {
        apartments::table
            .filter(apartments::is_available.eq(1))
            .order(apartments::apartment_id.asc())
            .select(ApartmentRow::as_select())
            .load(conn)?
    } else {
        apartments::table
            .order(apartments::apartment_id.asc())
            .select(ApartmentRow::as_select())
            .load(conn)?
    };

    rows.into_iter().map(ApartmentData::try_from).collect()
}
