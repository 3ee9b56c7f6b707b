// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking flow state machine.
//!
//! A guest builds a [`BookingDraft`] one [`Command`] at a time. Each
//! command is validated against an [`AvailabilityContext`] and produces a
//! new draft; a rejected command leaves the previous draft untouched.
//! [`submit`] re-runs every rule and prices the stay for storage.

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

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use staybook_domain::is_check_out_selectable;
use time::Date;

// Re-export public types and functions
pub use apply::{apply, submit};
pub use command::Command;
pub use error::CoreError;
pub use state::{
    AvailabilityContext, BookingDraft, BookingStage, BookingSubmission, SubmissionOutcome,
    TransitionResult,
};

/// Returns whether `date` may be offered as check-out for the draft.
///
/// Uses the draft's current check-in. Intended for disabling calendar
/// cells; `apply` performs the authoritative check.
#[must_use]
pub fn check_out_offered(draft: &BookingDraft, context: &AvailabilityContext, date: Date) -> bool {
    is_check_out_selectable(date, draft.check_in, &context.blocked)
}
