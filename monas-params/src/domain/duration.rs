use crate::domain::error::CoerceError;

const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = 60.0 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: f64 = 60.0 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: f64 = 24.0 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: f64 = 7.0 * MILLIS_PER_DAY;
const MILLIS_PER_YEAR: f64 = 365.25 * MILLIS_PER_DAY;
const MILLIS_PER_MONTH: f64 = MILLIS_PER_YEAR / 12.0;

fn unit_millis(unit: &str) -> Option<f64> {
    let millis = match unit.to_lowercase().as_str() {
        "ns" | "nanosecond" | "nanoseconds" => 1e-6,
        "us" | "µs" | "microsecond" | "microseconds" => 1e-3,
        "ms" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => MILLIS_PER_SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MILLIS_PER_MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => MILLIS_PER_HOUR,
        "d" | "day" | "days" => MILLIS_PER_DAY,
        "w" | "wk" | "wks" | "week" | "weeks" => MILLIS_PER_WEEK,
        "b" | "month" | "months" => MILLIS_PER_MONTH,
        "y" | "yr" | "yrs" | "year" | "years" => MILLIS_PER_YEAR,
        _ => return None,
    };
    Some(millis)
}

/// Parse a human-readable duration into whole milliseconds.
///
/// Supported formats:
/// - `N<unit>` - e.g. `500ms`, `30s`, `1.5h`, `2 days`, `1e3ms`
/// - `N` - N milliseconds (default unit)
/// - several groups in sequence, summed: `1h30m`, `1m 15s`
///
/// A month (`b`) is a twelfth of a 365.25-day year. Fractional results are
/// rounded to the nearest millisecond. Signs and unknown units are rejected.
pub fn parse_duration(input: &str) -> Result<u64, CoerceError> {
    let invalid = |reason: String| CoerceError::InvalidDuration(format!("{input:?}: {reason}"));

    let mut rest = input.trim();
    if rest.is_empty() {
        return Err(invalid("empty duration".to_string()));
    }

    let mut total = 0.0_f64;
    while !rest.is_empty() {
        let (number, tail) = rest.split_at(number_len(rest));
        if number.is_empty() {
            return Err(invalid(format!("expected a number at {rest:?}")));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| invalid(format!("invalid number: {number}")))?;

        let tail = tail.trim_start();
        let unit_len = tail
            .find(|c: char| !c.is_alphabetic())
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let factor = if unit.is_empty() {
            1.0
        } else {
            unit_millis(unit).ok_or_else(|| invalid(format!("unknown unit: {unit}")))?
        };

        total += value * factor;
        rest = tail.trim_start();
    }

    let millis = total.round();
    if !millis.is_finite() || millis > u64::MAX as f64 {
        return Err(invalid("duration out of range".to_string()));
    }

    Ok(millis as u64)
}

/// Length of the leading `digits[.digits][e[+-]digits]` run.
fn number_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut len = bytes
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b'.')
        .count();

    if len > 0 && matches!(bytes.get(len), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(len + 1), Some(b'+' | b'-')));
        let digits = bytes[len + 1 + sign..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits > 0 {
            len += 1 + sign + digits;
        }
    }
    len
}
