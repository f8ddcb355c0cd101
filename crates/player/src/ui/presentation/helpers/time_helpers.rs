//! Time helper functions
//!
//! Pure readings of the platform's local clock, testable without Dioxus.

use chrono::{NaiveDateTime, Timelike};

/// Greeting for the dashboard header, by the player's local hour
///
/// # Examples
/// ```
/// use reelhouse_player::ui::presentation::helpers::time_helpers::greeting_at;
/// use chrono::NaiveDate;
///
/// let breakfast = NaiveDate::from_ymd_opt(2025, 10, 17)
///     .unwrap()
///     .and_hms_opt(8, 30, 0)
///     .unwrap();
/// assert_eq!(greeting_at(breakfast), "Good morning");
/// ```
pub fn greeting_at(now: NaiveDateTime) -> &'static str {
    greeting_for_hour(now.hour())
}

/// Greeting by hour of day (0-23)
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;
    use crate::ports::outbound::PlatformPort;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 17)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("valid time")
    }

    #[test]
    fn greetings_cover_the_day() {
        assert_eq!(greeting_for_hour(6), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(23), "Good evening");
        assert_eq!(greeting_for_hour(2), "Good evening");
    }

    #[test]
    fn greeting_follows_the_platform_local_hour() {
        // 09:15 local is morning whatever UTC says
        let platform = create_mock_platform(at(9, 15));
        assert_eq!(greeting_at(platform.local_now()), "Good morning");

        let platform = create_mock_platform(at(19, 45));
        assert_eq!(greeting_at(platform.local_now()), "Good evening");
    }

    #[test]
    fn boundaries() {
        assert_eq!(greeting_at(at(4, 59)), "Good evening");
        assert_eq!(greeting_at(at(5, 0)), "Good morning");
        assert_eq!(greeting_at(at(17, 59)), "Good afternoon");
        assert_eq!(greeting_at(at(18, 0)), "Good evening");
    }
}
