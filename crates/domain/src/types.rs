// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_guest_details;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Lifecycle status of a stored booking.
///
/// Only `Pending` and `Confirmed` bookings occupy calendar dates. New
/// bookings are always created as `Pending`; no payment is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// Requested by a guest, awaiting confirmation.
    #[default]
    Pending,
    /// Accepted by an administrator.
    Confirmed,
    /// Withdrawn or rejected. Releases its dates.
    Cancelled,
    /// The stay has ended.
    Completed,
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Returns whether a booking in this status occupies its dates.
    #[must_use]
    pub const fn blocks_dates(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Confirmed
    /// - Pending → Cancelled
    /// - Confirmed → Cancelled
    /// - Confirmed → Completed
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled | Self::Completed)
        )
    }

    /// Validates a transition, returning the target status on success.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is not
    /// permitted.
    pub fn transition_to(self, target: Self) -> Result<Self, DomainError> {
        if !self.can_transition_to(target) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        Ok(target)
    }
}

/// The apartment facts the availability and pricing engine needs.
///
/// Existence and listing visibility are checked upstream; this value is
/// trusted input. Deserialization goes through the same capacity check as
/// `Apartment::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ApartmentFields")]
pub struct Apartment {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the apartment has not been persisted yet.
    apartment_id: Option<i64>,
    /// Nightly rate in whole currency units.
    price_per_night: u32,
    /// Maximum number of guests.
    max_guests: u16,
}

impl Apartment {
    /// Creates a new `Apartment` without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `price_per_night` - Nightly rate in whole currency units
    /// * `max_guests` - Capacity, must be at least 1
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCapacity` if `max_guests` is zero.
    pub const fn new(price_per_night: u32, max_guests: u16) -> Result<Self, DomainError> {
        if max_guests == 0 {
            return Err(DomainError::InvalidCapacity { max_guests });
        }
        Ok(Self {
            apartment_id: None,
            price_per_night,
            max_guests,
        })
    }

    /// Creates an `Apartment` with an existing persisted ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCapacity` if `max_guests` is zero.
    pub const fn with_id(
        apartment_id: i64,
        price_per_night: u32,
        max_guests: u16,
    ) -> Result<Self, DomainError> {
        if max_guests == 0 {
            return Err(DomainError::InvalidCapacity { max_guests });
        }
        Ok(Self {
            apartment_id: Some(apartment_id),
            price_per_night,
            max_guests,
        })
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn apartment_id(&self) -> Option<i64> {
        self.apartment_id
    }

    /// Returns the nightly rate.
    #[must_use]
    pub const fn price_per_night(&self) -> u32 {
        self.price_per_night
    }

    /// Returns the guest capacity.
    #[must_use]
    pub const fn max_guests(&self) -> u16 {
        self.max_guests
    }
}

/// Unchecked wire shape of an `Apartment`.
#[derive(Deserialize)]
struct ApartmentFields {
    apartment_id: Option<i64>,
    price_per_night: u32,
    max_guests: u16,
}

impl TryFrom<ApartmentFields> for Apartment {
    type Error = DomainError;

    fn try_from(fields: ApartmentFields) -> Result<Self, Self::Error> {
        match fields.apartment_id {
            Some(apartment_id) => {
                Self::with_id(apartment_id, fields.price_per_night, fields.max_guests)
            }
            None => Self::new(fields.price_per_night, fields.max_guests),
        }
    }
}

/// A stored booking as seen by the blocked-date builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookingFields")]
pub struct ExistingBooking {
    check_in: Date,
    check_out: Date,
    status: BookingStatus,
}

impl ExistingBooking {
    /// Creates a new `ExistingBooking`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingDates` unless `check_in < check_out`.
    pub fn new(
        check_in: Date,
        check_out: Date,
        status: BookingStatus,
    ) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidBookingDates {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
            status,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Returns the booking status.
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }
}

/// Unchecked wire shape of an `ExistingBooking`.
#[derive(Deserialize)]
struct BookingFields {
    check_in: Date,
    check_out: Date,
    status: BookingStatus,
}

impl TryFrom<BookingFields> for ExistingBooking {
    type Error = DomainError;

    fn try_from(fields: BookingFields) -> Result<Self, Self::Error> {
        Self::new(fields.check_in, fields.check_out, fields.status)
    }
}

/// A validated pair of stay dates with `check_in < check_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StayFields")]
pub struct StayRange {
    check_in: Date,
    check_out: Date,
}

impl StayRange {
    /// Creates a new `StayRange`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CheckOutNotAfterCheckIn` unless
    /// `check_in < check_out`.
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::CheckOutNotAfterCheckIn {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Number of nights between check-in and check-out. Always at least 1.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).whole_days()
    }
}

/// Unchecked wire shape of a `StayRange`.
#[derive(Deserialize)]
struct StayFields {
    check_in: Date,
    check_out: Date,
}

impl TryFrom<StayFields> for StayRange {
    type Error = DomainError;

    fn try_from(fields: StayFields) -> Result<Self, Self::Error> {
        Self::new(fields.check_in, fields.check_out)
    }
}

/// Contact details of the guest making a booking.
///
/// Values are stored trimmed. Use `validate_guest_details` to construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GuestFields")]
pub struct GuestDetails {
    name: String,
    email: String,
}

impl GuestDetails {
    pub(crate) const fn from_validated(name: String, email: String) -> Self {
        Self { name, email }
    }

    /// Returns the guest's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the guest's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Unchecked wire shape of `GuestDetails`.
#[derive(Deserialize)]
struct GuestFields {
    name: String,
    email: String,
}

impl TryFrom<GuestFields> for GuestDetails {
    type Error = DomainError;

    fn try_from(fields: GuestFields) -> Result<Self, Self::Error> {
        validate_guest_details(&fields.name, &fields.email)
    }
}
