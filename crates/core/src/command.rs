// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// A command represents one guest interaction with the booking form.
///
/// Commands are the only way to change a booking draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose a check-in date.
    SelectCheckIn {
        /// The chosen date.
        date: Date,
    },
    /// Choose a check-out date. Requires a check-in.
    SelectCheckOut {
        /// The chosen date.
        date: Date,
    },
    /// Forget both chosen dates.
    ClearDates,
    /// Choose the number of guests.
    SelectGuests {
        /// The requested count, as received from the client.
        count: i64,
    },
    /// Provide the guest's contact details.
    EnterDetails {
        /// The guest's name.
        name: String,
        /// The guest's email address.
        email: String,
        /// Free-form requests for the host.
        special_requests: Option<String>,
    },
}

impl Command {
    /// Returns the command name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectCheckIn { .. } => "SelectCheckIn",
            Self::SelectCheckOut { .. } => "SelectCheckOut",
            Self::ClearDates => "ClearDates",
            Self::SelectGuests { .. } => "SelectGuests",
            Self::EnterDetails { .. } => "EnterDetails",
        }
    }
}
