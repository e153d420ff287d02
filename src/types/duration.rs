use chrono::TimeDelta;

/// Formats a signed duration as an RFC 5545 `DURATION` value.
///
/// Sub-second precision is dropped. A zero duration renders as `PT0S`.
pub fn format_duration(duration: TimeDelta) -> String {
    let sign = if duration < TimeDelta::zero() { "-" } else { "" };
    let total = duration.num_seconds().unsigned_abs();
    let days = total / 86_400;
    let rem = total % 86_400;
    let (hours, minutes, seconds) = (rem / 3600, rem % 3600 / 60, rem % 60);

    let mut out = format!("{sign}P");
    if days > 0 {
        out += &format!("{days}D");
    }
    if rem > 0 || days == 0 {
        out.push('T');
        if hours > 0 {
            out += &format!("{hours}H");
        }
        // dur-hour may only be followed by dur-minute
        if minutes > 0 || (hours > 0 && seconds > 0) {
            out += &format!("{minutes}M");
        }
        if seconds > 0 || rem == 0 {
            out += &format!("{seconds}S");
        }
    }
    out
}
