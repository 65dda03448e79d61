use std::time::Duration;

use crate::error::ValidationError;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;

pub(crate) fn parse_bool_setting(name: &'static str, s: &str) -> Result<bool, ValidationError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(ValidationError::InvalidBoolean {
            name,
            value: s.to_owned(),
        }),
    }
}

/// Parses `<number>[ms|s|m|h]`; a bare number is seconds.
pub(crate) fn parse_duration_setting(
    name: &'static str,
    s: &str,
) -> Result<Duration, ValidationError> {
    parse_duration_value(s).map_err(|message| ValidationError::InvalidDuration { name, message })
}

fn parse_duration_value(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Duration must not be empty.".to_owned());
    }

    let digits_len = value
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(format!("Invalid duration '{}'.", value));
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| format!("Invalid duration '{}': {}", value, err))?;

    let duration = match unit_part {
        "ms" => Duration::from_millis(number),
        "" | "s" => Duration::from_secs(number),
        "m" => Duration::from_secs(
            number
                .checked_mul(SECS_PER_MINUTE)
                .ok_or_else(|| "Duration overflow.".to_owned())?,
        ),
        "h" => Duration::from_secs(
            number
                .checked_mul(SECS_PER_HOUR)
                .ok_or_else(|| "Duration overflow.".to_owned())?,
        ),
        unit => return Err(format!("Invalid duration unit '{}'.", unit)),
    };

    if duration.is_zero() {
        return Err("Duration must be > 0.".to_owned());
    }

    Ok(duration)
}
