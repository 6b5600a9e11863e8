/// Formats a duration in seconds as `mm:ss` for the countdown and the
/// results page.
#[must_use]
pub fn format_mm_ss(seconds: u64) -> String {
    let minutes = seconds / 60;
    let rest = seconds % 60;
    format!("{minutes:02}:{rest:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(9), "00:09");
        assert_eq!(format_mm_ss(75), "01:15");
        assert_eq!(format_mm_ss(600), "10:00");
    }
}
