// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::GuestDetails;

/// Validates the guest's contact details.
///
/// Both values are trimmed before checking.
///
/// # Arguments
///
/// * `name` - The guest's name
/// * `email` - The guest's email address
///
/// # Returns
///
/// * `Ok(GuestDetails)` holding the trimmed values
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty after trimming
/// - The email is empty after trimming
/// - The email does not have exactly one `@` with text on both sides
/// - The email contains whitespace
pub fn validate_guest_details(name: &str, email: &str) -> Result<GuestDetails, DomainError> {
    let name: &str = name.trim();
    let email: &str = email.trim();

    // Rule: name must not be empty
    if name.is_empty() {
        return Err(DomainError::InvalidGuestName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: email must not be empty
    if email.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email cannot be empty",
        )));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidEmail(String::from(
            "Email cannot contain whitespace",
        )));
    }

    let mut parts = email.split('@');
    let local: &str = parts.next().unwrap_or_default();
    let domain: Option<&str> = parts.next();
    if local.is_empty() || domain.is_none_or(str::is_empty) || parts.next().is_some() {
        return Err(DomainError::InvalidEmail(format!(
            "'{email}' is not a valid email address"
        )));
    }

    Ok(GuestDetails::from_validated(
        name.to_string(),
        email.to_string(),
    ))
}
