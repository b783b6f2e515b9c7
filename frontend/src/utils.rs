const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;

pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Short form used on cards: `1.2M`, `3.4K`, `999`.
pub fn format_compact(number: u64) -> String {
    if number >= 1_000_000 {
        format!("{:.1}M", number as f64 / 1_000_000.0)
    } else if number >= 1_000 {
        format!("{:.1}K", number as f64 / 1_000.0)
    } else {
        number.to_string()
    }
}

pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}", ratio)
}

/// At most `max_chars` characters, with `...` appended when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// Transcript segment offsets arrive in milliseconds.
pub fn format_millis(milliseconds: u64) -> String {
    format_duration_seconds(milliseconds / 1000)
}

/// Total seconds of an ISO-8601 duration such as `PT1H2M3S` or `P1DT4M`.
///
/// Anything that is not a well-formed day/time duration (years, months,
/// fractions, stray characters, overflow) yields `0`.
pub fn parse_iso8601_duration(duration: &str) -> u64 {
    try_parse_iso8601_duration(duration).unwrap_or(0)
}

fn try_parse_iso8601_duration(duration: &str) -> Option<u64> {
    let rest = duration.trim().strip_prefix('P')?;

    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut in_time = false;

    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if c == 'T' {
            if in_time || !digits.is_empty() {
                return None;
            }
            in_time = true;
            continue;
        }

        let unit = match (in_time, c) {
            (false, 'W') => SECONDS_PER_WEEK,
            (false, 'D') => SECONDS_PER_DAY,
            (true, 'H') => SECONDS_PER_HOUR,
            (true, 'M') => SECONDS_PER_MINUTE,
            (true, 'S') => 1,
            _ => return None,
        };
        if digits.is_empty() {
            return None;
        }
        let value: u64 = digits.parse().ok()?;
        total = total.checked_add(value.checked_mul(unit)?)?;
        digits.clear();
    }

    // A trailing number without a designator is malformed.
    if !digits.is_empty() {
        return None;
    }
    Some(total)
}

/// `mm:ss`, or `hh:mm:ss` once the duration reaches an hour.
pub fn format_duration_seconds(total_seconds: u64) -> String {
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    if hours != 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

pub fn format_iso8601_duration(duration: &str) -> String {
    format_duration_seconds(parse_iso8601_duration(duration))
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

pub fn channel_url(channel_id: &str) -> String {
    format!("https://www.youtube.com/channel/{channel_id}")
}
