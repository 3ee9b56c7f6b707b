// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{apply_all, create_empty_draft, create_test_context, july};
use crate::{
    AvailabilityContext, BookingDraft, BookingStage, Command, CoreError, TransitionResult, apply,
    check_out_offered,
};
use staybook_domain::{DomainError, GuestDetails};
use time::{Date, Month};

#[test]
fn test_select_check_in_sets_date() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = create_empty_draft();

    let result: TransitionResult =
        apply(&draft, &context, Command::SelectCheckIn { date: july(5) }).unwrap();

    assert_eq!(result.new_draft.check_in, Some(july(5)));
    assert_eq!(result.new_draft.check_out, None);
    assert_eq!(result.stage, BookingStage::Empty);
}

#[test]
fn test_select_check_in_rejects_past_date() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = create_empty_draft();
    let yesterday: Date = Date::from_calendar_date(2025, Month::June, 14).unwrap();

    let result: Result<TransitionResult, CoreError> =
        apply(&draft, &context, Command::SelectCheckIn { date: yesterday });

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::CheckInInPast { .. }))
    ));
}

#[test]
fn test_select_check_in_rejects_blocked_checkout_day() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = create_empty_draft();

    let result: Result<TransitionResult, CoreError> =
        apply(&draft, &context, Command::SelectCheckIn { date: july(3) });

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DatesUnavailable {
            date: july(3)
        }))
    );
}

#[test]
fn test_select_check_in_allows_cancelled_booking_dates() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = create_empty_draft();

    let result: Result<TransitionResult, CoreError> =
        apply(&draft, &context, Command::SelectCheckIn { date: july(12) });

    assert!(result.is_ok());
}

#[test]
fn test_select_check_out_requires_check_in() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = create_empty_draft();

    let result: Result<TransitionResult, CoreError> =
        apply(&draft, &context, Command::SelectCheckOut { date: july(8) });

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::IncompleteDates {
            has_check_in: false,
            has_check_out: true,
        }))
    );
}

#[test]
fn test_select_check_out_rejects_same_day() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = apply_all(&context, vec![Command::SelectCheckIn { date: july(5) }]);

    let result: Result<TransitionResult, CoreError> =
        apply(&draft, &context, Command::SelectCheckOut { date: july(5) });

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::CheckOutNotAfterCheckIn { .. }
        ))
    ));
}

#[test]
fn test_select_check_out_rejects_range_across_blocked_dates() {
    let context: AvailabilityContext = create_test_context();
    let check_in: Date = Date::from_calendar_date(2025, Month::June, 28).unwrap();
    let draft: BookingDraft = apply_all(&context, vec![Command::SelectCheckIn { date: check_in }]);

    let result: Result<TransitionResult, CoreError> =
        apply(&draft, &context, Command::SelectCheckOut { date: july(6) });

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DatesUnavailable {
            date: july(1)
        }))
    );
}

#[test]
fn test_select_check_out_reaches_dates_selected() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = apply_all(&context, vec![Command::SelectCheckIn { date: july(4) }]);

    let result: TransitionResult =
        apply(&draft, &context, Command::SelectCheckOut { date: july(9) }).unwrap();

    assert_eq!(result.new_draft.check_out, Some(july(9)));
    assert_eq!(result.stage, BookingStage::DatesSelected);
}

#[test]
fn test_rejected_command_leaves_draft_unchanged() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = apply_all(
        &context,
        vec![
            Command::SelectCheckIn { date: july(4) },
            Command::SelectCheckOut { date: july(9) },
        ],
    );
    let before: BookingDraft = draft.clone();

    let result: Result<TransitionResult, CoreError> =
        apply(&draft, &context, Command::SelectGuests { count: 9 });

    assert!(result.is_err());
    assert_eq!(draft, before);
}

#[test]
fn test_new_check_in_keeps_still_valid_check_out() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = apply_all(
        &context,
        vec![
            Command::SelectCheckIn { date: july(5) },
            Command::SelectCheckOut { date: july(8) },
            Command::SelectCheckIn { date: july(6) },
        ],
    );

    assert_eq!(draft.check_in, Some(july(6)));
    assert_eq!(draft.check_out, Some(july(8)));
}

#[test]
fn test_new_check_in_after_check_out_clears_check_out() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = apply_all(
        &context,
        vec![
            Command::SelectCheckIn { date: july(5) },
            Command::SelectCheckOut { date: july(8) },
            Command::SelectCheckIn { date: july(9) },
        ],
    );

    assert_eq!(draft.check_in, Some(july(9)));
    assert_eq!(draft.check_out, None);
    assert_eq!(draft.stage(), BookingStage::Empty);
}

#[test]
fn test_new_check_in_before_blocked_range_clears_check_out() {
    let context: AvailabilityContext = create_test_context();
    let check_in: Date = Date::from_calendar_date(2025, Month::June, 28).unwrap();
    let draft: BookingDraft = apply_all(
        &context,
        vec![
            Command::SelectCheckIn { date: july(5) },
            Command::SelectCheckOut { date: july(8) },
            Command::SelectCheckIn { date: check_in },
        ],
    );

    assert_eq!(draft.check_in, Some(check_in));
    assert_eq!(draft.check_out, None);
}

#[test]
fn test_clear_dates_resets_to_empty() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = apply_all(
        &context,
        vec![
            Command::SelectCheckIn { date: july(5) },
            Command::SelectCheckOut { date: july(8) },
            Command::SelectGuests { count: 2 },
        ],
    );

    let result: TransitionResult = apply(&draft, &context, Command::ClearDates).unwrap();

    assert_eq!(result.new_draft.check_in, None);
    assert_eq!(result.new_draft.check_out, None);
    assert_eq!(result.new_draft.guest_count, Some(2));
    assert_eq!(result.stage, BookingStage::Empty);
}

#[test]
fn test_select_guests_within_capacity() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = apply_all(
        &context,
        vec![
            Command::SelectCheckIn { date: july(5) },
            Command::SelectCheckOut { date: july(8) },
        ],
    );

    let result: TransitionResult =
        apply(&draft, &context, Command::SelectGuests { count: 4 }).unwrap();

    assert_eq!(result.new_draft.guest_count, Some(4));
    assert_eq!(result.stage, BookingStage::GuestsSelected);
}

#[test]
fn test_select_guests_rejects_out_of_range_counts() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = create_empty_draft();

    for count in [-1, 0, 5, 70_000] {
        let result: Result<TransitionResult, CoreError> =
            apply(&draft, &context, Command::SelectGuests { count });
        assert_eq!(
            result,
            Err(CoreError::DomainViolation(
                DomainError::GuestCountOutOfRange {
                    requested: count,
                    max_guests: 4,
                }
            )),
            "expected {count} guests to be rejected"
        );
    }
}

#[test]
fn test_enter_details_trims_and_reaches_details_entered() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = apply_all(
        &context,
        vec![
            Command::SelectCheckIn { date: july(5) },
            Command::SelectCheckOut { date: july(8) },
            Command::SelectGuests { count: 3 },
        ],
    );

    let result: TransitionResult = apply(
        &draft,
        &context,
        Command::EnterDetails {
            name: String::from("  Grace Hopper "),
            email: String::from("grace@example.com"),
            special_requests: Some(String::from("  Late arrival ")),
        },
    )
    .unwrap();

    let guest: &GuestDetails = result.new_draft.guest.as_ref().unwrap();
    assert_eq!(guest.name(), "Grace Hopper");
    assert_eq!(
        result.new_draft.special_requests.as_deref(),
        Some("Late arrival")
    );
    assert_eq!(result.stage, BookingStage::DetailsEntered);
}

#[test]
fn test_enter_details_drops_blank_special_requests() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = create_empty_draft();

    let result: TransitionResult = apply(
        &draft,
        &context,
        Command::EnterDetails {
            name: String::from("Grace"),
            email: String::from("grace@example.com"),
            special_requests: Some(String::from("   ")),
        },
    )
    .unwrap();

    assert_eq!(result.new_draft.special_requests, None);
    assert_eq!(result.stage, BookingStage::Empty);
}

#[test]
fn test_enter_details_rejects_invalid_email() {
    let context: AvailabilityContext = create_test_context();
    let draft: BookingDraft = create_empty_draft();

    let result: Result<TransitionResult, CoreError> = apply(
        &draft,
        &context,
        Command::EnterDetails {
            name: String::from("Grace"),
            email: String::from("grace.example.com"),
            special_requests: None,
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidEmail(_)))
    ));
}

#[test]
fn test_check_out_offered_follows_draft_check_in() {
    let context: AvailabilityContext = create_test_context();
    let empty: BookingDraft = create_empty_draft();
    let draft: BookingDraft = apply_all(&context, vec![Command::SelectCheckIn { date: july(5) }]);

    assert!(!check_out_offered(&empty, &context, july(8)));
    assert!(!check_out_offered(&draft, &context, july(5)));
    assert!(check_out_offered(&draft, &context, july(8)));
}
