use std::time::Duration;

const NANOS_PER_TICK: u128 = 100;
const TICKS_PER_SECOND: u128 = 10_000_000;
const SECONDS_PER_MINUTE: u128 = 60;
const MINUTES_PER_HOUR: u128 = 60;
const HOURS_PER_DAY: u128 = 24;

/// Formats a duration as `[d.]hh:mm:ss.fffffff`, truncated to 100ns ticks.
#[must_use]
pub fn format_timespan(duration: Duration) -> String {
    let ticks = duration.as_nanos().checked_div(NANOS_PER_TICK).unwrap_or(0);
    let fraction = ticks.checked_rem(TICKS_PER_SECOND).unwrap_or(0);
    let total_seconds = ticks.checked_div(TICKS_PER_SECOND).unwrap_or(0);
    let seconds = total_seconds.checked_rem(SECONDS_PER_MINUTE).unwrap_or(0);
    let total_minutes = total_seconds.checked_div(SECONDS_PER_MINUTE).unwrap_or(0);
    let minutes = total_minutes.checked_rem(MINUTES_PER_HOUR).unwrap_or(0);
    let total_hours = total_minutes.checked_div(MINUTES_PER_HOUR).unwrap_or(0);
    let hours = total_hours.checked_rem(HOURS_PER_DAY).unwrap_or(0);
    let days = total_hours.checked_div(HOURS_PER_DAY).unwrap_or(0);

    if days > 0 {
        format!(
            "{}.{:02}:{:02}:{:02}.{:07}",
            days, hours, minutes, seconds, fraction
        )
    } else {
        format!("{:02}:{:02}:{:02}.{:07}", hours, minutes, seconds, fraction)
    }
}
