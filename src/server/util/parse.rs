use chrono::{NaiveDate, NaiveTime};

use crate::server::{
    error::AppError,
    model::football_match::{DATE_FORMAT, TIME_FORMAT},
};

/// Parses a kick-off time in 24-hour `HH:MM` form.
///
/// # Returns
/// - `Ok(NaiveTime)` - Parsed time with zero seconds
/// - `Err(AppError::BadRequest)` - Value is not a valid `HH:MM` time
pub fn parse_match_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| AppError::BadRequest("invalid time format. Use HH:MM".to_string()))
}

/// Parses a match date in `YYYY-MM-DD` form.
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed calendar date
/// - `Err(AppError::BadRequest)` - Value is not a valid date
pub fn parse_match_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::BadRequest("invalid date format. Use YYYY-MM-DD".to_string()))
}
