//! Presentation-only derivations over fetched lists. Nothing here talks to
//! the network; views and the CLI share these functions.

pub mod agenda;
pub mod faqs;
pub mod format;
pub mod news;
pub mod squads;
pub mod trainings;

use chrono::NaiveDate;

/// Local calendar date of "now"; groups dated before it are in the past.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
