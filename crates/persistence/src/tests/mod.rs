// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod booking_tests;

use crate::{NewApartment, Persistence};
use staybook::{AvailabilityContext, BookingDraft, BookingSubmission, Command, apply, submit};
use staybook_domain::{Apartment, BlockedDates};
use time::{Date, Month};

pub fn july(day: u8) -> Date {
    Date::from_calendar_date(2025, Month::July, day).unwrap()
}

pub fn create_test_today() -> Date {
    Date::from_calendar_date(2025, Month::June, 1).unwrap()
}

pub fn create_test_new_apartment() -> NewApartment {
    NewApartment {
        title: String::from("Harbour loft"),
        city: String::from("Lisbon"),
        price_per_night: 80,
        max_guests: 4,
    }
}

/// Creates a fresh database holding one apartment and returns its ID.
pub fn create_test_persistence() -> (Persistence, i64) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let apartment_id: i64 = persistence
        .create_apartment(&create_test_new_apartment())
        .unwrap();
    (persistence, apartment_id)
}

/// Builds a submission validated against an empty calendar.
///
/// Storage must still reject it if the dates have since been taken.
pub fn create_test_submission(
    apartment_id: i64,
    check_in: Date,
    check_out: Date,
) -> BookingSubmission {
    let apartment: Apartment = Apartment::with_id(apartment_id, 80, 4).unwrap();
    let context: AvailabilityContext =
        AvailabilityContext::new(create_test_today(), BlockedDates::new());

    let draft: BookingDraft = [
        Command::SelectCheckIn { date: check_in },
        Command::SelectCheckOut { date: check_out },
        Command::SelectGuests { count: 2 },
        Command::EnterDetails {
            name: String::from("Ada Lovelace"),
            email: String::from("ada@example.com"),
            special_requests: Some(String::from("Quiet room")),
        },
    ]
    .into_iter()
    .fold(BookingDraft::new(apartment), |draft, command| {
        apply(&draft, &context, command).unwrap().new_draft
    });

    submit(&draft, &context).unwrap()
}
