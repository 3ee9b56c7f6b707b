// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during availability and pricing validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Neither check-in nor check-out has been chosen.
    MissingDates,
    /// Only one of check-in and check-out has been chosen.
    IncompleteDates {
        /// Whether the check-in date is present.
        has_check_in: bool,
        /// Whether the check-out date is present.
        has_check_out: bool,
    },
    /// Check-out is on or before check-in.
    CheckOutNotAfterCheckIn {
        /// The requested check-in date.
        check_in: Date,
        /// The requested check-out date.
        check_out: Date,
    },
    /// The stay spans more nights than a single booking may hold.
    StayTooLong {
        /// The requested number of nights.
        nights: i64,
        /// The longest permitted stay.
        max_nights: i64,
    },
    /// Check-in lies before the current day.
    CheckInInPast {
        /// The requested check-in date.
        check_in: Date,
        /// The current day.
        today: Date,
    },
    /// A date of the requested stay is already occupied.
    DatesUnavailable {
        /// The first occupied date inside the requested stay.
        date: Date,
    },
    /// Requested guest count is outside `[1, max_guests]`.
    GuestCountOutOfRange {
        /// The requested number of guests.
        requested: i64,
        /// The apartment capacity.
        max_guests: u16,
    },
    /// Guest name is empty or invalid.
    InvalidGuestName(String),
    /// Guest email is empty or invalid.
    InvalidEmail(String),
    /// Apartment capacity must be positive.
    InvalidCapacity {
        /// The invalid capacity value.
        max_guests: u16,
    },
    /// An existing booking has check-out on or before check-in.
    InvalidBookingDates {
        /// The stored check-in date.
        check_in: Date,
        /// The stored check-out date.
        check_out: Date,
    },
    /// A price was requested for fewer than one night.
    InvalidRange {
        /// The night count that reached the calculator.
        nights: i64,
    },
    /// Price arithmetic exceeded the representable range.
    PriceOverflow {
        /// The number of nights.
        nights: i64,
        /// The nightly rate.
        price_per_night: u32,
    },
    /// Booking status string is not recognised.
    InvalidBookingStatus(String),
    /// Booking status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl DomainError {
    /// Returns whether this error is a user-correctable validation failure.
    ///
    /// `InvalidRange` and `PriceOverflow` are contract violations inside the
    /// engine and are never shown to a guest as-is.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::InvalidRange { .. } | Self::PriceOverflow { .. })
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDates => write!(f, "Please select dates"),
            Self::IncompleteDates { .. } => {
                write!(f, "Please select both check-in and check-out dates")
            }
            Self::CheckOutNotAfterCheckIn {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out date {check_out} must be after check-in date {check_in}"
                )
            }
            Self::StayTooLong { nights, max_nights } => {
                write!(
                    f,
                    "A stay of {nights} nights exceeds the maximum of {max_nights} nights"
                )
            }
            Self::CheckInInPast { check_in, today } => {
                write!(
                    f,
                    "Check-in date {check_in} is in the past (today is {today})"
                )
            }
            Self::DatesUnavailable { date } => {
                write!(f, "The apartment is not available on {date}")
            }
            Self::GuestCountOutOfRange {
                requested,
                max_guests,
            } => {
                write!(
                    f,
                    "Invalid guest count: {requested}. Must be between 1 and {max_guests}"
                )
            }
            Self::InvalidGuestName(msg) => write!(f, "Invalid guest name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidCapacity { max_guests } => {
                write!(
                    f,
                    "Invalid apartment capacity: {max_guests}. Must be greater than 0"
                )
            }
            Self::InvalidBookingDates {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Booking check-out {check_out} is not after check-in {check_in}"
                )
            }
            Self::InvalidRange { nights } => {
                write!(f, "Cannot price a stay of {nights} nights")
            }
            Self::PriceOverflow {
                nights,
                price_per_night,
            } => {
                write!(
                    f,
                    "Price overflow for {nights} nights at {price_per_night} per night"
                )
            }
            Self::InvalidBookingStatus(status) => {
                write!(f, "Invalid booking status: {status}")
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot change booking status from {from} to {to}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
