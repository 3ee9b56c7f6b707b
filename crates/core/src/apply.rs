// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{AvailabilityContext, BookingDraft, BookingSubmission, TransitionResult};
use staybook_domain::{
    DomainError, GuestDetails, PriceBreakdown, StayRange, is_check_in_selectable, quote_stay,
    validate_guest_count, validate_guest_details, validate_stay_dates,
};
use time::Date;

/// Applies a command to a draft, producing a new draft.
///
/// # Arguments
///
/// * `draft` - The current draft (immutable)
/// * `context` - Today's date and the apartment's blocked dates
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new draft and its stage
/// * `Err(CoreError)` if the command is invalid; `draft` is unchanged
///
/// # Errors
///
/// Returns an error if:
/// - A chosen check-in is in the past or blocked
/// - A check-out is chosen without a check-in, on or before it, or the
///   resulting stay touches a blocked date
/// - The guest count is outside the apartment's capacity
/// - The guest's name or email is invalid
pub fn apply(
    draft: &BookingDraft,
    context: &AvailabilityContext,
    command: Command,
) -> Result<TransitionResult, CoreError> {
    let mut new_draft: BookingDraft = draft.clone();

    match command {
        Command::SelectCheckIn { date } => {
            if !is_check_in_selectable(date, context.today, &context.blocked) {
                return Err(rejected_check_in(date, context).into());
            }

            new_draft.check_in = Some(date);

            // Keep a previously chosen check-out only if the stay is still valid
            if let Some(check_out) = new_draft.check_out
                && validate_stay_dates(
                    Some(date),
                    Some(check_out),
                    context.today,
                    &context.blocked,
                )
                .is_err()
            {
                new_draft.check_out = None;
            }
        }
        Command::SelectCheckOut { date } => {
            if draft.check_in.is_none() {
                return Err(CoreError::DomainViolation(DomainError::IncompleteDates {
                    has_check_in: false,
                    has_check_out: true,
                }));
            }

            let stay: StayRange = validate_stay_dates(
                draft.check_in,
                Some(date),
                context.today,
                &context.blocked,
            )?;
            new_draft.check_out = Some(stay.check_out());
        }
        Command::ClearDates => {
            new_draft.check_in = None;
            new_draft.check_out = None;
        }
        Command::SelectGuests { count } => {
            let guest_count: u16 = validate_guest_count(count, draft.apartment.max_guests())?;
            new_draft.guest_count = Some(guest_count);
        }
        Command::EnterDetails {
            name,
            email,
            special_requests,
        } => {
            let guest: GuestDetails = validate_guest_details(&name, &email)?;
            new_draft.guest = Some(guest);
            new_draft.special_requests = normalize_special_requests(special_requests);
        }
    }

    Ok(TransitionResult {
        stage: new_draft.stage(),
        new_draft,
    })
}

/// Re-validates a draft and prices it for storage.
///
/// Every rule checked interactively by `apply` is checked again here against
/// the supplied context, which should be rebuilt from storage immediately
/// before submission.
///
/// # Errors
///
/// Returns an error if:
/// - The dates are missing, out of order, in the past or blocked
/// - The guest count or guest details are missing or invalid
/// - The price cannot be computed
pub fn submit(
    draft: &BookingDraft,
    context: &AvailabilityContext,
) -> Result<BookingSubmission, CoreError> {
    let stay: StayRange = validate_stay_dates(
        draft.check_in,
        draft.check_out,
        context.today,
        &context.blocked,
    )?;

    let requested: u16 = draft.guest_count.ok_or(CoreError::IncompleteBooking {
        missing: "guest count",
    })?;
    let guest_count: u16 =
        validate_guest_count(i64::from(requested), draft.apartment.max_guests())?;

    let entered: &GuestDetails = draft.guest.as_ref().ok_or(CoreError::IncompleteBooking {
        missing: "guest details",
    })?;
    let guest: GuestDetails = validate_guest_details(entered.name(), entered.email())?;

    let price: PriceBreakdown = quote_stay(&stay, &draft.apartment)?;

    Ok(BookingSubmission {
        apartment: draft.apartment.clone(),
        stay,
        guest_count,
        guest,
        special_requests: normalize_special_requests(draft.special_requests.clone()),
        price,
    })
}

fn rejected_check_in(date: Date, context: &AvailabilityContext) -> DomainError {
    if date < context.today {
        DomainError::CheckInInPast {
            check_in: date,
            today: context.today,
        }
    } else {
        DomainError::DatesUnavailable { date }
    }
}

fn normalize_special_requests(special_requests: Option<String>) -> Option<String> {
    special_requests
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
