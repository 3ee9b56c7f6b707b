// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::july;
use crate::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
use staybook::CoreError;
use staybook_domain::DomainError;
use staybook_persistence::PersistenceError;

#[test]
fn test_guest_count_maps_to_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::GuestCountOutOfRange {
        requested: 9,
        max_guests: 4,
    });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("guests"),
            message: String::from("Invalid guest count: 9. Must be between 1 and 4"),
        }
    );
}

#[test]
fn test_unavailable_dates_map_to_conflict() {
    let err: ApiError = translate_domain_error(DomainError::DatesUnavailable { date: july(3) });

    assert_eq!(
        err,
        ApiError::Conflict {
            message: String::from("The apartment is not available on 2025-07-03"),
        }
    );
}

#[test]
fn test_invalid_range_is_internal() {
    assert!(matches!(
        translate_domain_error(DomainError::InvalidRange { nights: 0 }),
        ApiError::Internal { .. }
    ));
}

#[test]
fn test_status_transition_is_rule_violation() {
    let err: ApiError = translate_domain_error(DomainError::InvalidStatusTransition {
        from: String::from("cancelled"),
        to: String::from("confirmed"),
    });

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "booking_status_transition"
    ));
}

#[test]
fn test_incomplete_booking_names_missing_field() {
    let err: ApiError = translate_core_error(CoreError::IncompleteBooking {
        missing: "guest details",
    });

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "guest_details"
    ));
}

#[test]
fn test_storage_conflict_maps_to_conflict() {
    let err: ApiError = translate_persistence_error(PersistenceError::DatesUnavailable {
        apartment_id: 3,
        date: july(4),
    });

    assert!(matches!(err, ApiError::Conflict { .. }));
}

#[test]
fn test_storage_failure_hides_details() {
    let err: ApiError =
        translate_persistence_error(PersistenceError::DatabaseError(String::from("disk I/O")));

    assert_eq!(
        err,
        ApiError::Internal {
            message: String::from("A storage error occurred"),
        }
    );
}

#[test]
fn test_auth_error_conversion() {
    let err: ApiError = ApiError::from(AuthError::AuthenticationFailed {
        reason: String::from("no id"),
    });

    assert_eq!(err.to_string(), "Authentication failed: no id");
}
