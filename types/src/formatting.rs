//! Centralized text formatting for material rows and status lines.
//!
//! Every front-end renders rows through these helpers so the quantity,
//! cap and label columns look the same in the terminal and anywhere else.

/// Format a material grade for display.
///
/// Grade 0 marks special/ungraded materials (Guardian, Thargoid) and is
/// shown as `?`.
///
/// # Examples
/// ```
/// use matfarm_types::formatting::format_grade;
/// assert_eq!(format_grade(4), "G4");
/// assert_eq!(format_grade(0), "G?");
/// ```
pub fn format_grade(grade: u8) -> String {
    if grade == 0 {
        "G?".to_string()
    } else {
        format!("G{}", grade)
    }
}

/// Format the label column of a material row: `G{grade} {name}`.
///
/// # Examples
/// ```
/// use matfarm_types::formatting::format_row_label;
/// assert_eq!(format_row_label(3, "Tungsten"), "G3 Tungsten");
/// assert_eq!(format_row_label(0, "Guardian Power Cell"), "G? Guardian Power Cell");
/// ```
pub fn format_row_label(grade: u8, name: &str) -> String {
    format!("{} {}", format_grade(grade), name)
}

/// Format the cap column of a material row.
///
/// # Examples
/// ```
/// use matfarm_types::formatting::format_cap;
/// assert_eq!(format_cap(150), "/150");
/// assert_eq!(format_cap(0), "/0");
/// ```
pub fn format_cap(cap: u32) -> String {
    format!("/{}", cap)
}

/// Format a number with thousands separators (used for system population).
///
/// # Examples
/// ```
/// use matfarm_types::formatting::format_thousands;
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(500), "500");
/// assert_eq!(format_thousands(12_500_000), "12,500,000");
/// ```
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format the time left on a temporary row.
///
/// - Values >= 60s: `M:SS`
/// - Values > 0: whole seconds with an `s` suffix
/// - Values <= 0: empty string (the row is about to be swept)
///
/// # Examples
/// ```
/// use matfarm_types::formatting::format_remaining;
/// assert_eq!(format_remaining(75), "1:15");
/// assert_eq!(format_remaining(9), "9s");
/// assert_eq!(format_remaining(0), "");
/// ```
pub fn format_remaining(secs: i64) -> String {
    if secs <= 0 {
        return String::new();
    }
    if secs >= 60 {
        format_duration(secs)
    } else {
        format!("{}s", secs)
    }
}

/// Format a duration as `M:SS`.
///
/// # Examples
/// ```
/// use matfarm_types::formatting::format_duration;
/// assert_eq!(format_duration(125), "2:05");
/// assert_eq!(format_duration(59), "0:59");
/// assert_eq!(format_duration(0), "0:00");
/// ```
pub fn format_duration(secs: i64) -> String {
    let mins = secs / 60;
    let secs = secs % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grade() {
        for grade in 1..=5 {
            assert_eq!(format_grade(grade), format!("G{}", grade));
        }
        assert_eq!(format_grade(0), "G?");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(100_000), "100,000");
        assert_eq!(format_thousands(10_000_000), "10,000,000");
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(90), "1:30");
        assert_eq!(format_remaining(60), "1:00");
        assert_eq!(format_remaining(59), "59s");
        assert_eq!(format_remaining(1), "1s");
        assert_eq!(format_remaining(-3), "");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(125), "2:05");
    }
}
