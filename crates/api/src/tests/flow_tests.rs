// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_booking_request, create_test_apartment, create_test_context, july,
};
use crate::{
    ApiError, BlockedDatesResponse, CreateApartmentRequest, CreateBookingRequest, QuoteRequest,
    QuoteResponse, blocked_dates_response, parse_booking_status, parse_iso_date,
    prepare_booking, quote_stay, validate_new_apartment,
};
use staybook::{AvailabilityContext, BookingDraft, BookingStage, BookingSubmission};
use staybook_domain::BookingStatus;
use staybook_persistence::NewApartment;

#[test]
fn test_parse_iso_date() {
    assert_eq!(parse_iso_date("check_in", "2025-07-03").unwrap(), july(3));
    assert_eq!(parse_iso_date("check_in", " 2025-07-03 ").unwrap(), july(3));
}

#[test]
fn test_parse_iso_date_names_field() {
    for value in ["", "03/07/2025", "2025-02-30", "tomorrow"] {
        let result: Result<_, ApiError> = parse_iso_date("check_out", value);
        assert!(
            matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "check_out"),
            "expected '{value}' to be rejected"
        );
    }
}

#[test]
fn test_blocked_dates_response_lists_inclusive_range() {
    let context: AvailabilityContext = create_test_context();

    let response: BlockedDatesResponse = blocked_dates_response(1, &context.blocked);

    assert_eq!(
        response.blocked_dates,
        vec!["2025-07-01", "2025-07-02", "2025-07-03"]
    );
}

#[test]
fn test_quote_stay_prices_free_stay() {
    let request: QuoteRequest = QuoteRequest {
        check_in: String::from("2025-07-10"),
        check_out: String::from("2025-07-15"),
        guests: 3,
    };

    let quote: QuoteResponse =
        quote_stay(&create_test_apartment(), &create_test_context(), &request).unwrap();

    assert_eq!(quote.nights, 5);
    assert_eq!(quote.subtotal, 400);
    assert_eq!(quote.cleaning_fee, 25);
    assert_eq!(quote.service_fee, 40);
    assert_eq!(quote.total, 465);
    assert_eq!(quote.guests, 3);
}

#[test]
fn test_quote_stay_rejects_blocked_checkout_day() {
    let request: QuoteRequest = QuoteRequest {
        check_in: String::from("2025-07-03"),
        check_out: String::from("2025-07-05"),
        guests: 2,
    };

    let result: Result<QuoteResponse, ApiError> =
        quote_stay(&create_test_apartment(), &create_test_context(), &request);

    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_quote_stay_rejects_too_many_guests() {
    let request: QuoteRequest = QuoteRequest {
        check_in: String::from("2025-07-10"),
        check_out: String::from("2025-07-12"),
        guests: 5,
    };

    let result: Result<QuoteResponse, ApiError> =
        quote_stay(&create_test_apartment(), &create_test_context(), &request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "guests"
    ));
}

#[test]
fn test_prepare_booking_completes_every_step() {
    let request: CreateBookingRequest = create_booking_request(1, "2025-07-04", "2025-07-06");

    let (draft, submission): (BookingDraft, BookingSubmission) =
        prepare_booking(&create_test_apartment(), &create_test_context(), &request).unwrap();

    assert_eq!(draft.stage(), BookingStage::DetailsEntered);
    assert_eq!(submission.stay.nights(), 2);
    assert_eq!(submission.price.total, 201);
    assert_eq!(submission.status(), BookingStatus::Pending);
}

#[test]
fn test_prepare_booking_rejects_invalid_email() {
    let mut request: CreateBookingRequest = create_booking_request(1, "2025-07-04", "2025-07-06");
    request.guest_email = String::from("ada.example.com");

    let result: Result<(BookingDraft, BookingSubmission), ApiError> =
        prepare_booking(&create_test_apartment(), &create_test_context(), &request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "guest_email"
    ));
}

#[test]
fn test_prepare_booking_rejects_reversed_dates() {
    let request: CreateBookingRequest = create_booking_request(1, "2025-07-08", "2025-07-06");

    let result: Result<(BookingDraft, BookingSubmission), ApiError> =
        prepare_booking(&create_test_apartment(), &create_test_context(), &request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "check_out"
    ));
}

#[test]
fn test_validate_new_apartment_trims_fields() {
    let request: CreateApartmentRequest = CreateApartmentRequest {
        title: String::from("  Harbour loft "),
        city: String::from(" Lisbon"),
        price_per_night: 80,
        max_guests: 4,
    };

    let apartment: NewApartment = validate_new_apartment(&request).unwrap();

    assert_eq!(apartment.title, "Harbour loft");
    assert_eq!(apartment.city, "Lisbon");
}

#[test]
fn test_validate_new_apartment_accepts_free_apartment() {
    let request: CreateApartmentRequest = CreateApartmentRequest {
        title: String::from("Spare room"),
        city: String::from("Lisbon"),
        price_per_night: 0,
        max_guests: 1,
    };

    let apartment: NewApartment = validate_new_apartment(&request).unwrap();

    assert_eq!(apartment.price_per_night, 0);
}

#[test]
fn test_validate_new_apartment_rejects_bad_values() {
    let valid: CreateApartmentRequest = CreateApartmentRequest {
        title: String::from("Loft"),
        city: String::from("Lisbon"),
        price_per_night: 80,
        max_guests: 4,
    };

    let cases: [(CreateApartmentRequest, &str); 3] = [
        (
            CreateApartmentRequest {
                title: String::from(" "),
                ..valid.clone()
            },
            "title",
        ),
        (
            CreateApartmentRequest {
                city: String::new(),
                ..valid.clone()
            },
            "city",
        ),
        (
            CreateApartmentRequest {
                max_guests: 0,
                ..valid
            },
            "max_guests",
        ),
    ];

    for (request, expected_field) in cases {
        let result: Result<NewApartment, ApiError> = validate_new_apartment(&request);
        assert!(
            matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == expected_field),
            "expected {expected_field} to be rejected"
        );
    }
}

#[test]
fn test_parse_booking_status() {
    assert_eq!(
        parse_booking_status("confirmed").unwrap(),
        BookingStatus::Confirmed
    );
    assert!(matches!(
        parse_booking_status("archived"),
        Err(ApiError::InvalidInput { ref field, .. }) if field == "status"
    ));
}
