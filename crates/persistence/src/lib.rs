// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Staybook.
//!
//! Stores apartments and bookings in `SQLite` via Diesel. Migrations are
//! embedded and applied when a connection is opened.
//!
//! ## Availability Guarantee
//!
//! The blocked-date check performed before submission runs against a
//! snapshot that may be stale by the time the booking is written.
//! `create_booking` therefore repeats the check inside an immediate
//! transaction and rejects the insert with
//! `PersistenceError::DatesUnavailable` if another booking now occupies
//! any date of the stay.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives every caller its own shared-cache
//! in-memory database, so tests never observe each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use staybook::BookingSubmission;
use staybook_domain::{BookingStatus, ExistingBooking};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod columns;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{ApartmentData, BookingData, NewApartment};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for apartments and bookings.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:memdb_staybook_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Apartments
    // ========================================================================

    /// Creates a new apartment listing.
    ///
    /// # Returns
    ///
    /// The ID assigned to the apartment.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_apartment(&mut self, apartment: &NewApartment) -> Result<i64, PersistenceError> {
        mutations::create_apartment(&mut self.conn, apartment)
    }

    /// Retrieves an apartment by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if the
    /// apartment does not exist.
    pub fn get_apartment(
        &mut self,
        apartment_id: i64,
    ) -> Result<Option<ApartmentData>, PersistenceError> {
        queries::get_apartment(&mut self.conn, apartment_id)
    }

    /// Lists apartments, optionally only those accepting bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_apartments(
        &mut self,
        available_only: bool,
    ) -> Result<Vec<ApartmentData>, PersistenceError> {
        queries::list_apartments(&mut self.conn, available_only)
    }

    /// Opens or closes an apartment for new bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the apartment does not exist or the update fails.
    pub fn set_apartment_availability(
        &mut self,
        apartment_id: i64,
        is_available: bool,
    ) -> Result<(), PersistenceError> {
        mutations::set_apartment_availability(&mut self.conn, apartment_id, is_available)
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Fetches the pending and confirmed bookings of an apartment.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored booking is malformed.
    pub fn list_blocking_bookings(
        &mut self,
        apartment_id: i64,
    ) -> Result<Vec<ExistingBooking>, PersistenceError> {
        queries::list_blocking_bookings(&mut self.conn, apartment_id)
    }

    /// Stores a validated booking with status `pending`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DatesUnavailable` if any date of the stay
    /// was taken since the submission was validated, or another error if the
    /// apartment is missing or the insert fails.
    pub fn create_booking(
        &mut self,
        submission: &BookingSubmission,
    ) -> Result<i64, PersistenceError> {
        mutations::create_booking(&mut self.conn, submission)
    }

    /// Retrieves a booking by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if the
    /// booking does not exist.
    pub fn get_booking(
        &mut self,
        booking_id: i64,
    ) -> Result<Option<BookingData>, PersistenceError> {
        queries::get_booking(&mut self.conn, booking_id)
    }

    /// Lists every booking of an apartment, earliest check-in first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings_for_apartment(
        &mut self,
        apartment_id: i64,
    ) -> Result<Vec<BookingData>, PersistenceError> {
        queries::list_bookings_for_apartment(&mut self.conn, apartment_id)
    }

    /// Moves a booking to a new status.
    ///
    /// # Returns
    ///
    /// The status the booking had before the change.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the transition is
    /// not permitted.
    pub fn update_booking_status(
        &mut self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<BookingStatus, PersistenceError> {
        mutations::update_booking_status(&mut self.conn, booking_id, status)
    }
}
