// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use staybook::AvailabilityContext;
use staybook_domain::{Apartment, BookingStatus, ExistingBooking};
use staybook_persistence::{NewApartment, Persistence};
use time::{Date, Month};

use crate::{AuthenticatedActor, CreateBookingRequest, Role};

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-123"), Role::Admin)
}

pub fn create_test_guest() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("guest-456"), Role::Guest)
}

pub fn create_test_today() -> Date {
    Date::from_calendar_date(2025, Month::June, 1).unwrap()
}

pub fn july(day: u8) -> Date {
    Date::from_calendar_date(2025, Month::July, day).unwrap()
}

pub fn create_test_apartment() -> Apartment {
    Apartment::with_id(1, 80, 4).unwrap()
}

/// July 1 through July 3 is held by a confirmed booking.
pub fn create_test_context() -> AvailabilityContext {
    let bookings: Vec<ExistingBooking> =
        vec![ExistingBooking::new(july(1), july(3), BookingStatus::Confirmed).unwrap()];
    AvailabilityContext::from_bookings(create_test_today(), &bookings).unwrap()
}

pub fn create_booking_request(
    apartment_id: i64,
    check_in: &str,
    check_out: &str,
) -> CreateBookingRequest {
    CreateBookingRequest {
        apartment_id,
        check_in: String::from(check_in),
        check_out: String::from(check_out),
        guests: 2,
        guest_name: String::from("Ada Lovelace"),
        guest_email: String::from("ada@example.com"),
        special_requests: None,
    }
}

pub fn create_test_persistence() -> (Persistence, i64) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let apartment_id: i64 = persistence
        .create_apartment(&NewApartment {
            title: String::from("Harbour loft"),
            city: String::from("Lisbon"),
            price_per_night: 80,
            max_guests: 4,
        })
        .unwrap();
    (persistence, apartment_id)
}
