//! pt-BR display formatting for dates, times and labels.

use std::fmt::Display;

use chrono::{DateTime, Local, Locale, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use portal_api_types::{parse_date_prefix, TrainingStatus};

const LOCALE: Locale = Locale::pt_BR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `sexta-feira, 1 de março de 2024`
    Long,
    /// `01/03/2024`
    Short,
    /// `1 de mar`
    DayMonth,
}

pub struct FmtDate {
    date: NaiveDate,
    style: DateStyle,
}

impl FmtDate {
    // Localized formatting is only offered on zoned date-times.
    fn midnight(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }
}

impl Display for FmtDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.style {
            DateStyle::Long => write!(
                f,
                "{}",
                self.midnight().format_localized("%A, %-d de %B de %Y", LOCALE)
            ),
            DateStyle::Short => write!(f, "{}", self.date.format("%d/%m/%Y")),
            DateStyle::DayMonth => write!(
                f,
                "{}",
                self.midnight().format_localized("%-d de %b", LOCALE)
            ),
        }
    }
}

pub trait AsLocalDate {
    fn as_local_date(&self, style: DateStyle) -> FmtDate;
}

impl AsLocalDate for NaiveDate {
    fn as_local_date(&self, style: DateStyle) -> FmtDate {
        FmtDate { date: *self, style }
    }
}

/// `Hoje`, `Amanhã`, otherwise the long date.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Hoje".to_owned()
    } else if today.succ_opt() == Some(date) {
        "Amanhã".to_owned()
    } else {
        date.as_local_date(DateStyle::Long).to_string()
    }
}

/// `19:30:00` or `19:30` as `19:30`.
pub fn time_of_day(value: &str) -> Option<String> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
        .map(|time| time.format("%H:%M").to_string())
}

/// Renders a backend timestamp in local time. RFC 3339 values are converted
/// to the local zone, naive date-times are taken as local, bare dates print
/// without a time and anything else is returned unchanged.
pub fn timestamp(value: &str) -> String {
    let value = value.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return date_time(at.with_timezone(&Local).naive_local());
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"));
    if let Ok(at) = naive {
        return date_time(at);
    }

    match parse_date_prefix(value) {
        Some(date) => date.as_local_date(DateStyle::Short).to_string(),
        None => value.to_owned(),
    }
}

fn date_time(at: NaiveDateTime) -> String {
    format!("{} às {}", at.date().format("%d/%m/%Y"), at.format("%H:%M"))
}

/// `45 min`, `2h`, `1h30`.
pub fn duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, minutes) => format!("{minutes} min"),
        (hours, 0) => format!("{hours}h"),
        (hours, minutes) => format!("{hours}h{minutes:02}"),
    }
}

pub fn status_label(status: TrainingStatus) -> &'static str {
    match status {
        TrainingStatus::Scheduled => "Agendado",
        TrainingStatus::InProgress => "Em andamento",
        TrainingStatus::Completed => "Concluído",
        TrainingStatus::Cancelled => "Cancelado",
    }
}
