//! Random value providers shared by the chart generators
//!
//! Small stateless helpers over [`rand`] and [`fake`]. Each call draws fresh
//! entropy from the thread-local RNG; nothing here is seedable or
//! reproducible on purpose.

use chrono::{Datelike, Local};
use fake::Fake;
use fake::faker::color::en::Color;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Word;
use rand::Rng;

/// Short lowercase word for series and axis labels
pub fn word() -> String {
    Word().fake()
}

/// Business-style name for radar series labels
pub fn company_name() -> String {
    CompanyName().fake()
}

/// Human-readable color word for pie and doughnut slice labels
pub fn color_name() -> String {
    Color().fake()
}

/// Date within the current month, no later than today, as `YYYY-MM-DD`
pub fn date_this_month() -> String {
    let today = Local::now().date_naive();
    let day = rand::thread_rng().gen_range(1..=today.day());
    let date = today.with_day(day).unwrap_or(today);
    date.format("%Y-%m-%d").to_string()
}

/// Uniform integer in `[min, max]`; callers must keep `min <= max`
pub fn int_between(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

/// Uniform float in `[min, max)`; callers must keep `min < max`
pub fn float_between(min: f64, max: f64) -> f64 {
    rand::thread_rng().gen_range(min..max)
}

/// Random `rgba(r, g, b, a)` color string with the given alpha
///
/// Channels are drawn independently in `[0, 255]`. The alpha is rendered via
/// `f64` Display, so `1.0` prints as `1` and `0.6` stays `0.6`.
pub fn rgba(alpha: f64) -> String {
    let mut rng = rand::thread_rng();
    format!(
        "rgba({}, {}, {}, {})",
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        alpha
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn word_is_nonempty() {
        assert!(!word().is_empty());
        assert!(!company_name().is_empty());
        assert!(!color_name().is_empty());
    }

    #[test]
    fn date_this_month_is_iso_and_current() {
        let today = Local::now().date_naive();
        for _ in 0..50 {
            let raw = date_this_month();
            let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .unwrap_or_else(|_| panic!("unparsable date: {raw}"));
            assert_eq!(date.year(), today.year());
            assert_eq!(date.month(), today.month());
            assert!(date <= today);
        }
    }

    #[test]
    fn int_between_is_inclusive() {
        for _ in 0..200 {
            let value = int_between(1, 3);
            assert!((1..=3).contains(&value));
        }
        assert_eq!(int_between(7, 7), 7);
    }

    #[test]
    fn float_between_stays_in_range() {
        for _ in 0..200 {
            let value = float_between(0.0, 100.0);
            assert!((0.0..100.0).contains(&value));
        }
    }

    #[test]
    fn rgba_renders_integer_alpha_without_decimal_point() {
        let color = rgba(1.0);
        assert!(color.ends_with(", 1)"), "unexpected alpha rendering: {color}");
        let translucent = rgba(0.6);
        assert!(translucent.ends_with(", 0.6)"));
    }

    #[test]
    fn rgba_channels_are_in_byte_range() {
        for _ in 0..50 {
            let color = rgba(0.2);
            let inner = color
                .strip_prefix("rgba(")
                .and_then(|c| c.strip_suffix(')'))
                .unwrap_or_else(|| panic!("malformed color: {color}"));
            let parts: Vec<&str> = inner.split(", ").collect();
            assert_eq!(parts.len(), 4);
            for channel in &parts[..3] {
                let value: i64 = channel.parse().unwrap();
                assert!((0..=255).contains(&value));
            }
        }
    }
}
