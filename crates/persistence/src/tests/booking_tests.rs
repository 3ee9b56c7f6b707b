// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_persistence, create_test_submission, july};
use crate::{BookingData, Persistence, PersistenceError};
use staybook::BookingSubmission;
use staybook_domain::{BookingStatus, ExistingBooking};

#[test]
fn test_create_booking_stores_pending_booking() {
    let (mut persistence, apartment_id) = create_test_persistence();
    let submission: BookingSubmission = create_test_submission(apartment_id, july(10), july(14));

    let booking_id: i64 = persistence.create_booking(&submission).unwrap();
    let booking: BookingData = persistence.get_booking(booking_id).unwrap().unwrap();

    assert_eq!(booking.apartment_id, apartment_id);
    assert_eq!(booking.guest_name, "Ada Lovelace");
    assert_eq!(booking.guest_email, "ada@example.com");
    assert_eq!(booking.check_in, july(10));
    assert_eq!(booking.check_out, july(14));
    assert_eq!(booking.guest_count, 2);
    assert_eq!(booking.total_price, 377);
    assert_eq!(booking.special_requests.as_deref(), Some("Quiet room"));
    assert_eq!(booking.status, BookingStatus::Pending);
}

#[test]
fn test_created_booking_blocks_dates() {
    let (mut persistence, apartment_id) = create_test_persistence();
    let submission: BookingSubmission = create_test_submission(apartment_id, july(1), july(3));
    persistence.create_booking(&submission).unwrap();

    let blocking: Vec<ExistingBooking> = persistence.list_blocking_bookings(apartment_id).unwrap();

    assert_eq!(blocking.len(), 1);
    assert_eq!(blocking[0].check_in(), july(1));
    assert_eq!(blocking[0].check_out(), july(3));
    assert_eq!(blocking[0].status(), BookingStatus::Pending);
}

#[test]
fn test_overlapping_booking_is_rejected() {
    let (mut persistence, apartment_id) = create_test_persistence();
    let first: BookingSubmission = create_test_submission(apartment_id, july(5), july(9));
    let second: BookingSubmission = create_test_submission(apartment_id, july(7), july(12));

    persistence.create_booking(&first).unwrap();
    let result: Result<i64, PersistenceError> = persistence.create_booking(&second);

    assert_eq!(
        result,
        Err(PersistenceError::DatesUnavailable {
            apartment_id,
            date: july(7)
        })
    );
    assert_eq!(
        persistence
            .list_bookings_for_apartment(apartment_id)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_booking_starting_on_previous_checkout_is_rejected() {
    let (mut persistence, apartment_id) = create_test_persistence();
    let first: BookingSubmission = create_test_submission(apartment_id, july(1), july(3));
    let second: BookingSubmission = create_test_submission(apartment_id, july(3), july(5));

    persistence.create_booking(&first).unwrap();

    assert_eq!(
        persistence.create_booking(&second),
        Err(PersistenceError::DatesUnavailable {
            apartment_id,
            date: july(3)
        })
    );
}

#[test]
fn test_booking_ending_on_next_check_in_is_rejected() {
    let (mut persistence, apartment_id) = create_test_persistence();
    let later: BookingSubmission = create_test_submission(apartment_id, july(10), july(12));
    let earlier: BookingSubmission = create_test_submission(apartment_id, july(7), july(10));

    persistence.create_booking(&later).unwrap();

    assert!(matches!(
        persistence.create_booking(&earlier),
        Err(PersistenceError::DatesUnavailable { .. })
    ));
}

#[test]
fn test_cancelled_booking_frees_dates() {
    let (mut persistence, apartment_id) = create_test_persistence();
    let submission: BookingSubmission = create_test_submission(apartment_id, july(5), july(9));

    let booking_id: i64 = persistence.create_booking(&submission).unwrap();
    persistence
        .update_booking_status(booking_id, BookingStatus::Cancelled)
        .unwrap();

    assert!(
        persistence
            .list_blocking_bookings(apartment_id)
            .unwrap()
            .is_empty()
    );
    assert!(persistence.create_booking(&submission).is_ok());
}

#[test]
fn test_booking_for_missing_apartment_is_rejected() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let submission: BookingSubmission = create_test_submission(77, july(5), july(9));

    assert_eq!(
        persistence.create_booking(&submission),
        Err(PersistenceError::ApartmentNotFound(77))
    );
}

#[test]
fn test_booking_for_unavailable_apartment_is_rejected() {
    let (mut persistence, apartment_id) = create_test_persistence();
    persistence
        .set_apartment_availability(apartment_id, false)
        .unwrap();
    let submission: BookingSubmission = create_test_submission(apartment_id, july(5), july(9));

    assert_eq!(
        persistence.create_booking(&submission),
        Err(PersistenceError::ApartmentUnavailable(apartment_id))
    );
}

#[test]
fn test_bookings_are_listed_by_check_in() {
    let (mut persistence, apartment_id) = create_test_persistence();
    let later: BookingSubmission = create_test_submission(apartment_id, july(20), july(22));
    let earlier: BookingSubmission = create_test_submission(apartment_id, july(2), july(4));

    persistence.create_booking(&later).unwrap();
    persistence.create_booking(&earlier).unwrap();

    let bookings: Vec<BookingData> = persistence
        .list_bookings_for_apartment(apartment_id)
        .unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].check_in, july(2));
    assert_eq!(bookings[1].check_in, july(20));
}

#[test]
fn test_get_missing_booking_returns_none() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    assert_eq!(persistence.get_booking(5).unwrap(), None);
}
