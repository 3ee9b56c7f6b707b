// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staybook_domain::DomainError;
use time::Date;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A stored value could not be converted into its domain type.
    InvalidStoredValue(String),
    /// A value could not be converted for storage.
    SerializationError(String),
    /// The requested apartment does not exist.
    ApartmentNotFound(i64),
    /// The apartment exists but is not accepting bookings.
    ApartmentUnavailable(i64),
    /// A booking was submitted for an apartment without an identifier.
    UnsavedApartment,
    /// The requested booking does not exist.
    BookingNotFound(i64),
    /// The requested dates overlap a booking committed concurrently.
    DatesUnavailable {
        /// The apartment being booked.
        apartment_id: i64,
        /// The first occupied date inside the requested stay.
        date: Date,
    },
    /// A domain rule rejected the operation.
    DomainViolation(DomainError),
    /// The requested resource was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::InvalidStoredValue(msg) => write!(f, "Invalid stored value: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::ApartmentNotFound(id) => write!(f, "Apartment not found: {id}"),
            Self::ApartmentUnavailable(id) => {
                write!(f, "Apartment {id} is not accepting bookings")
            }
            Self::UnsavedApartment => write!(f, "Apartment has not been saved"),
            Self::BookingNotFound(id) => write!(f, "Booking not found: {id}"),
            Self::DatesUnavailable { apartment_id, date } => {
                write!(f, "Apartment {apartment_id} is already booked on {date}")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
