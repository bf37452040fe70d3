// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Tour schedule classification.
//!
//! Concert dates are stored without a year, the year comes from the bucket the
//! concert was listed under. This module resolves those partial dates,
//! decides which concerts are still to come and picks the "next shows"
//! highlights.
//!
//! Nothing here is cached. Every render asks again with the current moment,
//! so a concert drops out of the upcoming list once its day has passed.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    error::DateError,
    model::{ConcertDate, TourDocument},
};

/// The year buckets a tour document carries, in display order.
pub(crate) const TOUR_YEARS: [&str; 3] = ["2024", "2025", "2026"];

/// Buckets searched for the next shows. 2024 is assumed to be over.
const NEXT_SHOWS_YEARS: [&str; 2] = ["2025", "2026"];

pub(crate) const NEXT_SHOWS_LIMIT: usize = 6;

const DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%d %b, %Y"];

/// Looks up the concerts listed for a year.
///
/// Any year other than the known buckets gives an empty list.
pub(crate) fn get_year_data<'a>(document: &'a TourDocument, year: &str) -> &'a [ConcertDate] {
    match year {
        "2024" => &document.temporal_info.concerts_2024,
        "2025" => &document.temporal_info.concerts_2025,
        "2026" => &document.temporal_info.concerts_2026,
        _ => &[],
    }
}

/// A concert date resolved against its year, split into display labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MaterializedDate {
    pub(crate) date: NaiveDate,
    /// Day of month, always two digits.
    pub(crate) day: String,
    pub(crate) month: String,
    pub(crate) weekday: String,
}

/// Resolves a partial date such as `"March 14"` against `year`.
///
/// The two are joined as `"March 14, 2025"` and parsed as an English month
/// and day. A month name is recognised by its first three letters, so `"Mar"`,
/// `"March"` and `"Sept."` all work, and days need not be padded.
///
/// # Errors
///
/// Returns [`DateError::Unparseable`] if the joined string is not a real
/// calendar date.
pub(crate) fn materialize_date(partial: &str, year: &str) -> Result<MaterializedDate, DateError> {
    let full = format!("{}, {}", normalize_month(partial), year.trim());

    let date = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&full, format).ok())
        .ok_or_else(|| DateError::Unparseable(format!("{}, {}", partial.trim(), year.trim())))?;

    Ok(MaterializedDate {
        date,
        day: date.format("%d").to_string(),
        month: date.format("%b").to_string(),
        weekday: date.format("%a").to_string(),
    })
}

/// Cuts every word of letters down to its first three, dots dropped.
fn normalize_month(partial: &str) -> String {
    partial
        .replace('.', "")
        .split_whitespace()
        .map(|word| {
            if word.chars().all(char::is_alphabetic) {
                word.chars().take(3).collect()
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Whether a concert is on or after the day of `now`.
///
/// A concert stays upcoming for the whole of its own day. Dates that cannot
/// be resolved are never upcoming.
pub(crate) fn is_upcoming(partial: &str, year: &str, now: NaiveDateTime) -> bool {
    materialize_date(partial, year)
        .map(|resolved| resolved.date >= now.date())
        .unwrap_or(false)
}

/// A concert together with the year bucket it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScheduledConcert<'a> {
    pub(crate) year: &'a str,
    pub(crate) concert: &'a ConcertDate,
}

impl ScheduledConcert<'_> {
    pub(crate) fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        is_upcoming(&self.concert.date, self.year, now)
    }

    pub(crate) fn materialize(&self) -> Result<MaterializedDate, DateError> {
        materialize_date(&self.concert.date, self.year)
    }
}

/// All concerts for a year, in the order the document lists them.
pub(crate) fn scheduled_for_year<'a>(document: &'a TourDocument, year: &'a str) -> Vec<ScheduledConcert<'a>> {
    get_year_data(document, year)
        .iter()
        .map(|concert| ScheduledConcert { year, concert })
        .collect()
}

/// Picks the highlighted next shows.
///
/// The 2025 bucket is followed by the 2026 bucket, past shows are dropped and
/// the first [`NEXT_SHOWS_LIMIT`] remaining are kept. The buckets are taken
/// in document order and are not sorted by date first.
pub(crate) fn next_shows(document: &TourDocument, now: NaiveDateTime) -> Vec<ScheduledConcert<'_>> {
    NEXT_SHOWS_YEARS
        .into_iter()
        .flat_map(|year| scheduled_for_year(document, year))
        .filter(|scheduled| scheduled.is_upcoming(now))
        .take(NEXT_SHOWS_LIMIT)
        .collect()
}
