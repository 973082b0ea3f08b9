//! Human readable "time since" phrases.

use super::config::Locale;
use chrono::TimeDelta;

/// Word form picked for a count: 1, 2 to 4, and everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    One,
    Few,
    Many,
}

pub fn plural_form(n: i64) -> PluralForm {
    match n {
        1 => PluralForm::One,
        2..=4 => PluralForm::Few,
        _ => PluralForm::Many,
    }
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Day,
    Hour,
    Minute,
}

fn unit_word(locale: Locale, unit: Unit, form: PluralForm) -> &'static str {
    use PluralForm::*;
    match (locale, unit, form) {
        (Locale::En, Unit::Day, One) => "day",
        (Locale::En, Unit::Day, _) => "days",
        (Locale::En, Unit::Hour, One) => "hour",
        (Locale::En, Unit::Hour, _) => "hours",
        (Locale::En, Unit::Minute, One) => "minute",
        (Locale::En, Unit::Minute, _) => "minutes",
        (Locale::Ru, Unit::Day, One) => "день",
        (Locale::Ru, Unit::Day, Few) => "дня",
        (Locale::Ru, Unit::Day, Many) => "дней",
        (Locale::Ru, Unit::Hour, One) => "час",
        (Locale::Ru, Unit::Hour, Few) => "часа",
        (Locale::Ru, Unit::Hour, Many) => "часов",
        (Locale::Ru, Unit::Minute, One) => "минуту",
        (Locale::Ru, Unit::Minute, Few) => "минуты",
        (Locale::Ru, Unit::Minute, Many) => "минут",
    }
}

fn phrase(locale: Locale, unit: Unit, n: i64) -> String {
    let word = unit_word(locale, unit, plural_form(n));
    match locale {
        Locale::En => format!("{n} {word} ago"),
        Locale::Ru => format!("{n} {word} назад"),
    }
}

fn just_now(locale: Locale) -> String {
    match locale {
        Locale::En => "just now".to_string(),
        Locale::Ru => "только что".to_string(),
    }
}

/// Formats an elapsed duration as days, hours or minutes ago.
///
/// More than 24 whole hours counts in days, 1 to 24 hours in hours, and
/// anything shorter in minutes. Under a minute, or a negative duration,
/// is "just now".
pub fn format_time_ago(elapsed: TimeDelta, locale: Locale) -> String {
    if elapsed <= TimeDelta::zero() {
        return just_now(locale);
    }

    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes() % 60;

    if hours > 24 {
        phrase(locale, Unit::Day, hours / 24)
    } else if hours > 0 {
        phrase(locale, Unit::Hour, hours)
    } else if minutes > 0 {
        phrase(locale, Unit::Minute, minutes)
    } else {
        just_now(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_form_thresholds() {
        assert_eq!(plural_form(0), PluralForm::Many);
        assert_eq!(plural_form(1), PluralForm::One);
        assert_eq!(plural_form(2), PluralForm::Few);
        assert_eq!(plural_form(4), PluralForm::Few);
        assert_eq!(plural_form(5), PluralForm::Many);
        assert_eq!(plural_form(21), PluralForm::Many);
    }

    #[test]
    fn test_bucket_selection() {
        let en = Locale::En;
        assert_eq!(format_time_ago(TimeDelta::zero(), en), "just now");
        assert_eq!(format_time_ago(TimeDelta::seconds(59), en), "just now");
        assert_eq!(format_time_ago(TimeDelta::minutes(1), en), "1 minute ago");
        assert_eq!(format_time_ago(TimeDelta::minutes(3), en), "3 minutes ago");
        assert_eq!(format_time_ago(TimeDelta::minutes(59), en), "59 minutes ago");
        assert_eq!(format_time_ago(TimeDelta::minutes(90), en), "1 hour ago");
        assert_eq!(format_time_ago(TimeDelta::hours(24), en), "24 hours ago");
        assert_eq!(format_time_ago(TimeDelta::hours(25), en), "1 day ago");
        assert_eq!(format_time_ago(TimeDelta::hours(49), en), "2 days ago");
    }

    #[test]
    fn test_negative_elapsed_is_just_now() {
        assert_eq!(format_time_ago(TimeDelta::hours(-3), Locale::En), "just now");
    }

    #[test]
    fn test_russian_word_forms() {
        let ru = Locale::Ru;
        assert_eq!(format_time_ago(TimeDelta::zero(), ru), "только что");
        assert_eq!(format_time_ago(TimeDelta::minutes(1), ru), "1 минуту назад");
        assert_eq!(format_time_ago(TimeDelta::minutes(3), ru), "3 минуты назад");
        assert_eq!(format_time_ago(TimeDelta::minutes(7), ru), "7 минут назад");
        assert_eq!(format_time_ago(TimeDelta::hours(1), ru), "1 час назад");
        assert_eq!(format_time_ago(TimeDelta::hours(4), ru), "4 часа назад");
        assert_eq!(format_time_ago(TimeDelta::hours(5), ru), "5 часов назад");
        assert_eq!(format_time_ago(TimeDelta::hours(30), ru), "1 день назад");
        assert_eq!(format_time_ago(TimeDelta::days(3), ru), "3 дня назад");
        assert_eq!(format_time_ago(TimeDelta::days(6), ru), "6 дней назад");
    }
}
