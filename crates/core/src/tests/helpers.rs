// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AvailabilityContext, BookingDraft, Command, TransitionResult, apply};
use staybook_domain::{Apartment, BookingStatus, ExistingBooking};
use time::{Date, Month};

pub fn july(day: u8) -> Date {
    Date::from_calendar_date(2025, Month::July, day).unwrap()
}

pub fn create_test_apartment() -> Apartment {
    Apartment::with_id(7, 80, 4).unwrap()
}

/// Today is 2025-06-15. July 1 through July 3 is held by a confirmed
/// booking; July 10 through July 14 was cancelled.
pub fn create_test_context() -> AvailabilityContext {
    let bookings: Vec<ExistingBooking> = vec![
        ExistingBooking::new(july(1), july(3), BookingStatus::Confirmed).unwrap(),
        ExistingBooking::new(july(10), july(14), BookingStatus::Cancelled).unwrap(),
    ];
    let today: Date = Date::from_calendar_date(2025, Month::June, 15).unwrap();
    AvailabilityContext::from_bookings(today, &bookings).unwrap()
}

pub fn create_empty_draft() -> BookingDraft {
    BookingDraft::new(create_test_apartment())
}

pub fn apply_all(context: &AvailabilityContext, commands: Vec<Command>) -> BookingDraft {
    commands
        .into_iter()
        .fold(create_empty_draft(), |draft, command| {
            let result: TransitionResult = apply(&draft, context, command).unwrap();
            result.new_draft
        })
}

pub fn create_complete_draft(context: &AvailabilityContext) -> BookingDraft {
    apply_all(
        context,
        vec![
            Command::SelectCheckIn { date: july(10) },
            Command::SelectCheckOut { date: july(14) },
            Command::SelectGuests { count: 2 },
            Command::EnterDetails {
                name: String::from("Ada Lovelace"),
                email: String::from("ada@example.com"),
                special_requests: None,
            },
        ],
    )
}
