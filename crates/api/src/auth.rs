// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types.
//!
//! Identity is owned by an external provider. The server only receives an
//! actor ID and a role, which `authenticate_stub` accepts as given.

use std::str::FromStr;

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Hosts and staff: may list apartments and manage bookings.
    Admin,
    /// Anyone browsing apartments or booking a stay.
    Guest,
}

impl Role {
    /// Returns the lowercase wire name of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Guest => "guest",
        }
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "guest" => Ok(Self::Guest),
            other => Err(AuthError::AuthenticationFailed {
                reason: format!("Unknown role '{other}'"),
            }),
        }
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// Stub authentication that trusts the supplied identity.
///
/// # Errors
///
/// Returns an error if the actor ID is empty.
pub fn authenticate_stub(actor_id: String, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}

/// Checks that an actor holds the Admin role.
///
/// # Arguments
///
/// * `actor` - The authenticated actor
/// * `action` - The action being attempted, used in the error
///
/// # Errors
///
/// Returns an error if the actor does not have the Admin role.
pub fn authorize_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Guest => Err(AuthError::Unauthorized {
            action: String::from(action),
            required_role: String::from("Admin"),
        }),
    }
}
