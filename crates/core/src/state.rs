// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staybook_domain::{
    Apartment, BlockedDates, BookingStatus, DomainError, ExistingBooking, GuestDetails,
    PriceBreakdown, StayRange, build_blocked_dates,
};
use time::Date;

/// The facts a draft is validated against.
///
/// Built fresh from storage for every interaction; never cached between
/// requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityContext {
    /// The current day. Earlier check-in dates are rejected.
    pub today: Date,
    /// Occupied dates for the apartment.
    pub blocked: BlockedDates,
}

impl AvailabilityContext {
    /// Creates a context from an already built blocked-date set.
    #[must_use]
    pub const fn new(today: Date, blocked: BlockedDates) -> Self {
        Self { today, blocked }
    }

    /// Creates a context from the apartment's stored bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the blocked dates cannot be computed.
    pub fn from_bookings(today: Date, bookings: &[ExistingBooking]) -> Result<Self, DomainError> {
        Ok(Self {
            today,
            blocked: build_blocked_dates(bookings)?,
        })
    }
}

/// How far a draft has progressed through the booking form.
///
/// Each stage implies every invariant of the stages before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingStage {
    /// No dates chosen.
    Empty,
    /// Check-in and check-out chosen, check-in before check-out, none blocked.
    DatesSelected,
    /// Guest count chosen within capacity.
    GuestsSelected,
    /// Guest name and email present.
    DetailsEntered,
}

/// A not-yet-persisted booking being built by one guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    /// The apartment being booked.
    pub apartment: Apartment,
    /// The chosen check-in date.
    pub check_in: Option<Date>,
    /// The chosen check-out date.
    pub check_out: Option<Date>,
    /// The chosen number of guests.
    pub guest_count: Option<u16>,
    /// The guest's contact details.
    pub guest: Option<GuestDetails>,
    /// Optional requests for the host.
    pub special_requests: Option<String>,
}

impl BookingDraft {
    /// Creates an empty draft for an apartment.
    #[must_use]
    pub const fn new(apartment: Apartment) -> Self {
        Self {
            apartment,
            check_in: None,
            check_out: None,
            guest_count: None,
            guest: None,
            special_requests: None,
        }
    }

    /// Returns the furthest stage whose invariants, and all earlier ones, hold.
    #[must_use]
    pub const fn stage(&self) -> BookingStage {
        if self.check_in.is_none() || self.check_out.is_none() {
            return BookingStage::Empty;
        }
        if self.guest_count.is_none() {
            return BookingStage::DatesSelected;
        }
        if self.guest.is_none() {
            return BookingStage::GuestsSelected;
        }
        BookingStage::DetailsEntered
    }
}

/// The result of a successful command.
///
/// Transitions are atomic: they either succeed completely or leave the
/// input draft untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The draft after the command.
    pub new_draft: BookingDraft,
    /// The stage of the new draft.
    pub stage: BookingStage,
}

/// A fully validated and priced booking, ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSubmission {
    /// The apartment being booked.
    pub apartment: Apartment,
    /// The validated stay dates.
    pub stay: StayRange,
    /// The validated guest count.
    pub guest_count: u16,
    /// The validated guest contact details.
    pub guest: GuestDetails,
    /// Optional requests for the host.
    pub special_requests: Option<String>,
    /// The computed price.
    pub price: PriceBreakdown,
}

impl BookingSubmission {
    /// Status a submitted booking is stored with.
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        BookingStatus::Pending
    }
}

/// The end of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome<E> {
    /// Storage created the booking.
    Succeeded {
        /// The identifier assigned by storage.
        booking_id: i64,
    },
    /// Validation or storage failed. The draft is kept for a retry.
    Failed {
        /// What went wrong.
        error: E,
        /// The draft as it was before submission.
        draft: BookingDraft,
    },
}

impl<E> SubmissionOutcome<E> {
    /// Combines a storage result with the draft that produced it.
    ///
    /// On success the draft is discarded; on failure it is handed back.
    #[must_use]
    pub fn from_storage(draft: BookingDraft, result: Result<i64, E>) -> Self {
        match result {
            Ok(booking_id) => Self::Succeeded { booking_id },
            Err(error) => Self::Failed { error, draft },
        }
    }

    /// Returns whether the booking was created.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}
