/// Format a server timestamp for display.
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and bare dates; anything else is
/// returned as-is.
pub fn format_date(date: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        dt.format("%b %d, %Y").to_string()
    } else if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S") {
        dt.format("%b %d, %Y").to_string()
    } else if let Ok(d) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        d.format("%b %d, %Y").to_string()
    } else {
        date.to_string()
    }
}

/// First line of `text`, cut to `max_len` characters with an ellipsis.
pub fn excerpt(text: &str, max_len: usize) -> String {
    let line = text.lines().next().unwrap_or("").trim();
    if line.chars().count() <= max_len {
        line.to_string()
    } else if max_len <= 3 {
        line.chars().take(max_len).collect()
    } else {
        let truncated: String = line.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Compact counter: 999, 1.2k, 3.4M. Negative values (unknown) show as "-".
pub fn format_count(n: i64) -> String {
    match n {
        i64::MIN..=-1 => "-".to_string(),
        0..=999 => n.to_string(),
        1_000..=999_999 => format!("{:.1}k", n as f64 / 1_000.0),
        _ => format!("{:.1}M", n as f64 / 1_000_000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-01"), "Jan 01, 2024");
        assert_eq!(format_date("2024-03-15 08:30:00"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-15T08:30:00Z"), "Mar 15, 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("Hello", 10), "Hello");
        assert_eq!(excerpt("Hello World", 8), "Hello...");
        assert_eq!(excerpt("first line\nsecond", 20), "first line");
        assert_eq!(excerpt("你好世界你好", 5), "你好...");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(-1), "-");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(1_240), "1.2k");
        assert_eq!(format_count(3_400_000), "3.4M");
    }
}
