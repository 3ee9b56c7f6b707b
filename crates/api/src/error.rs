// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use staybook::CoreError;
use staybook_domain::DomainError;
use staybook_persistence::PersistenceError;
use tracing::error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The requested dates are already taken.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

fn invalid_input(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: String::from(field),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::MissingDates | DomainError::IncompleteDates { .. } => {
            invalid_input("dates", &err)
        }
        DomainError::CheckOutNotAfterCheckIn { .. } | DomainError::StayTooLong { .. } => {
            invalid_input("check_out", &err)
        }
        DomainError::CheckInInPast { .. } => invalid_input("check_in", &err),
        DomainError::DatesUnavailable { .. } => ApiError::Conflict {
            message: err.to_string(),
        },
        DomainError::GuestCountOutOfRange { .. } => invalid_input("guests", &err),
        DomainError::InvalidGuestName(_) => invalid_input("guest_name", &err),
        DomainError::InvalidEmail(_) => invalid_input("guest_email", &err),
        DomainError::InvalidCapacity { .. } => invalid_input("max_guests", &err),
        DomainError::InvalidBookingStatus(_) => invalid_input("status", &err),
        DomainError::DateArithmeticOverflow { .. } | DomainError::DateParseError { .. } => {
            invalid_input("date", &err)
        }
        DomainError::InvalidStatusTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("booking_status_transition"),
            message: err.to_string(),
        },
        DomainError::InvalidBookingDates { .. }
        | DomainError::InvalidRange { .. }
        | DomainError::PriceOverflow { .. } => {
            error!(error = %err, "Booking engine contract violated");
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::IncompleteBooking { missing } => ApiError::InvalidInput {
            field: missing.replace(' ', "_"),
            message: format!("Booking is incomplete: {missing} not provided"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Storage failures other than missing resources and taken dates are
/// logged and reported with a generic message.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DatesUnavailable { apartment_id, date } => ApiError::Conflict {
            message: format!("Apartment {apartment_id} is no longer available on {date}"),
        },
        PersistenceError::ApartmentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Apartment"),
            message: format!("Apartment {id} does not exist"),
        },
        PersistenceError::BookingNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {id} does not exist"),
        },
        PersistenceError::ApartmentUnavailable(id) => ApiError::DomainRuleViolation {
            rule: String::from("apartment_available"),
            message: format!("Apartment {id} is not accepting bookings"),
        },
        PersistenceError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        other => {
            error!(error = %other, "Persistence failure");
            ApiError::Internal {
                message: String::from("A storage error occurred"),
            }
        }
    }
}
