//! Clock-face formatting for remaining time.

/// Render seconds as `H:MM:SS` when there is at least one hour, else `M:SS`.
///
/// Hours are never padded; minutes are padded only after an hour field.
pub fn format_clock(total_secs: u64) -> String {
    let hrs = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    if hrs > 0 {
        format!("{hrs}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_a_minute() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(7), "0:07");
        assert_eq!(format_clock(59), "0:59");
    }

    #[test]
    fn minutes_are_not_padded_without_hours() {
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(25 * 60 + 3), "25:03");
    }

    #[test]
    fn hours_pad_minutes() {
        assert_eq!(format_clock(3600), "1:00:00");
        assert_eq!(format_clock(5415), "1:30:15");
        assert_eq!(format_clock(3600 + 5 * 60 + 9), "1:05:09");
        assert_eq!(format_clock(12 * 3600), "12:00:00");
    }
}
