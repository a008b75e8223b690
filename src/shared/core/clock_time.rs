// Conversion between wall-clock strings and fractional hours.
//
// Purpose
// - Decode the `H:MM` values stored on attendance records.
// - Render computed hour buckets back as `H:MM` for summaries and reports.
//
// Responsibilities
// - Never fail loudly: anything that is not a valid time of day decodes to None.
// - Normalize rounding so minutes never render as `60`.

const MINUTES_PER_HOUR: u32 = 60;

/// Parses a wall-clock time into minutes since midnight.
///
/// Accepts `H:MM`, `HH:MM` and `HH:MM:SS` (seconds are validated and dropped).
/// Empty, non-numeric or out-of-range input yields `None`.
pub fn parse_clock_minutes(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let mut parts = value.split(':');
    let hours = parse_component(parts.next()?, 23)?;
    let minutes = parse_component(parts.next()?, 59)?;
    if let Some(seconds) = parts.next() {
        parse_component(seconds, 59)?;
    }
    if parts.next().is_some() {
        return None;
    }

    Some(hours * MINUTES_PER_HOUR + minutes)
}

/// Parses a wall-clock time into fractional hours (`"9:30"` is `9.5`).
pub fn parse_clock_time(value: &str) -> Option<f64> {
    parse_clock_minutes(value).map(minutes_to_hours)
}

/// Formats fractional hours as `H:MM`. The hour is not zero padded.
///
/// Non-finite and non-positive values render as `0:00`.
pub fn format_hours_to_clock(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return "0:00".to_string();
    }

    let mut whole_hours = hours.floor();
    let mut minutes = ((hours - whole_hours) * f64::from(MINUTES_PER_HOUR)).round();
    if minutes >= f64::from(MINUTES_PER_HOUR) {
        whole_hours += 1.0;
        minutes = 0.0;
    }

    format!("{}:{:02}", whole_hours as u64, minutes as u64)
}

pub fn minutes_to_hours(minutes: u32) -> f64 {
    f64::from(minutes) / f64::from(MINUTES_PER_HOUR)
}

fn parse_component(raw: &str, max: u32) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|value| *value <= max)
}
