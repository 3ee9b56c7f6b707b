// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, GuestDetails, validate_guest_details};

#[test]
fn test_validate_guest_details_accepts_valid_guest() {
    let guest: GuestDetails = validate_guest_details("Ada Lovelace", "ada@example.com").unwrap();

    assert_eq!(guest.name(), "Ada Lovelace");
    assert_eq!(guest.email(), "ada@example.com");
}

#[test]
fn test_validate_guest_details_trims_values() {
    let guest: GuestDetails =
        validate_guest_details("  Ada Lovelace \n", "\tada@example.com ").unwrap();

    assert_eq!(guest.name(), "Ada Lovelace");
    assert_eq!(guest.email(), "ada@example.com");
}

#[test]
fn test_validate_guest_details_rejects_empty_name() {
    let result: Result<GuestDetails, DomainError> =
        validate_guest_details("", "ada@example.com");
    assert!(matches!(result, Err(DomainError::InvalidGuestName(_))));
}

#[test]
fn test_validate_guest_details_rejects_whitespace_name() {
    let result: Result<GuestDetails, DomainError> =
        validate_guest_details("   ", "ada@example.com");
    assert!(matches!(result, Err(DomainError::InvalidGuestName(_))));
}

#[test]
fn test_validate_guest_details_rejects_empty_email() {
    let result: Result<GuestDetails, DomainError> = validate_guest_details("Ada", "  ");
    assert!(matches!(result, Err(DomainError::InvalidEmail(_))));
}

#[test]
fn test_validate_guest_details_rejects_malformed_email() {
    for email in [
        "ada",
        "@example.com",
        "ada@",
        "ada@@example.com",
        "ada@exa@mple.com",
        "ada lovelace@example.com",
    ] {
        let result: Result<GuestDetails, DomainError> = validate_guest_details("Ada", email);
        assert!(
            matches!(result, Err(DomainError::InvalidEmail(_))),
            "expected '{email}' to be rejected"
        );
    }
}

#[test]
fn test_validate_guest_details_checks_name_before_email() {
    let result: Result<GuestDetails, DomainError> = validate_guest_details("", "");
    assert!(matches!(result, Err(DomainError::InvalidGuestName(_))));
}
