// Italian calendar labels for the exported sheets and reports.

use chrono::{Datelike, Month, NaiveDate, Weekday};

use crate::shared::core::month_key::MonthKey;

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunedì",
        Weekday::Tue => "martedì",
        Weekday::Wed => "mercoledì",
        Weekday::Thu => "giovedì",
        Weekday::Fri => "venerdì",
        Weekday::Sat => "sabato",
        Weekday::Sun => "domenica",
    }
}

pub fn weekday_abbreviation(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lun",
        Weekday::Tue => "mar",
        Weekday::Wed => "mer",
        Weekday::Thu => "gio",
        Weekday::Fri => "ven",
        Weekday::Sat => "sab",
        Weekday::Sun => "dom",
    }
}

pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "gennaio",
        Month::February => "febbraio",
        Month::March => "marzo",
        Month::April => "aprile",
        Month::May => "maggio",
        Month::June => "giugno",
        Month::July => "luglio",
        Month::August => "agosto",
        Month::September => "settembre",
        Month::October => "ottobre",
        Month::November => "novembre",
        Month::December => "dicembre",
    }
}

fn calendar_month(date: NaiveDate) -> Option<Month> {
    u8::try_from(date.month())
        .ok()
        .and_then(|month| Month::try_from(month).ok())
}

fn month_name_of(date: NaiveDate) -> &'static str {
    calendar_month(date).map(month_name).unwrap_or_default()
}

/// `"martedì, 1 aprile 2025"`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name_of(date),
        date.year()
    )
}

/// `"aprile 2025"`
pub fn month_label(month: MonthKey) -> String {
    format!("{} {}", month_name_of(month.first_day()), month.year())
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
