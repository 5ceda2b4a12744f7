use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an enum stored as text in the database.
///
/// # Arguments
/// - `column` - Table and column the value came from, used in the error
/// - `value` - Stored text
///
/// # Returns
/// - `Ok(T)` - The parsed value
/// - `Err(AppError::InternalErr(UnknownStoredValue))` - The value is not a known variant
pub fn parse_stored<T: FromStr>(column: &'static str, value: &str) -> Result<T, AppError> {
    let parsed = value
        .parse::<T>()
        .map_err(|_| InternalError::UnknownStoredValue {
            column,
            value: value.to_string(),
        })?;

    Ok(parsed)
}
