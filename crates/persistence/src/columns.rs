// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions between domain values and their column representations.
//!
//! Dates are stored as ISO 8601 `YYYY-MM-DD` text so that lexical order
//! matches calendar order.

use staybook_domain::BookingStatus;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::PersistenceError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(format!("date {date}: {e}")))
}

pub fn parse_date(value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, DATE_FORMAT)
        .map_err(|e| PersistenceError::InvalidStoredValue(format!("date '{value}': {e}")))
}

pub fn parse_status(value: &str) -> Result<BookingStatus, PersistenceError> {
    value
        .parse::<BookingStatus>()
        .map_err(|e| PersistenceError::InvalidStoredValue(e.to_string()))
}

pub fn to_u16(value: i32, column: &str) -> Result<u16, PersistenceError> {
    u16::try_from(value)
        .map_err(|_| PersistenceError::InvalidStoredValue(format!("{column} = {value}")))
}

pub fn to_u32(value: i64, column: &str) -> Result<u32, PersistenceError> {
    u32::try_from(value)
        .map_err(|_| PersistenceError::InvalidStoredValue(format!("{column} = {value}")))
}

pub fn to_u64(value: i64, column: &str) -> Result<u64, PersistenceError> {
    u64::try_from(value)
        .map_err(|_| PersistenceError::InvalidStoredValue(format!("{column} = {value}")))
}

pub fn from_u64(value: u64, column: &str) -> Result<i64, PersistenceError> {
    i64::try_from(value)
        .map_err(|_| PersistenceError::SerializationError(format!("{column} = {value}")))
}
