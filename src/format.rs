//! Display Formatting

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Browser's offset from UTC in minutes (east positive)
pub fn local_offset_minutes() -> i32 {
    // getTimezoneOffset() is UTC minus local
    -(js_sys::Date::new_0().get_timezone_offset() as i32)
}

/// "Mar 1, 2024, 09:30 AM" in the given offset
pub fn format_created(at: DateTime<Utc>, offset_minutes: i32) -> String {
    let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap_or_else(|| Utc.fix());
    at.with_timezone(&offset).format("%b %-d, %Y, %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_created() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_created(at, 0), "Mar 1, 2024, 09:30 AM");
        assert_eq!(format_created(at, 120), "Mar 1, 2024, 11:30 AM");
        assert_eq!(format_created(at, -600), "Feb 29, 2024, 11:30 PM");
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_utc() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_created(at, 24 * 60), "Mar 1, 2024, 09:30 AM");
    }
}
