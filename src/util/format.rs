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

use crate::{error::DateError, model::schedule::MaterializedDate};

const PLACEHOLDER_DAY: &str = "??";
const PLACEHOLDER_MONTH: &str = "---";
const PLACEHOLDER_WEEKDAY: &str = "---";

/// Formats a concert date for a card, e.g. `"Sat 28 Jun"`.
///
/// A date that could not be resolved is shown as placeholders rather than
/// hidden, so a bad entry in the tour data is visible.
///
/// # Examples
///
/// ```ignore
/// let date = materialize_date("March 3", "2025");
/// assert_eq!(date_label(&date), "Mon 03 Mar");
/// ```
pub(crate) fn date_label(date: &Result<MaterializedDate, DateError>) -> String {
    match date {
        Ok(date) => format!("{} {} {}", date.weekday, date.day, date.month),
        Err(_) => format!("{PLACEHOLDER_WEEKDAY} {PLACEHOLDER_DAY} {PLACEHOLDER_MONTH}"),
    }
}

/// Text for the supporting act line, if there is a supporting act.
pub(crate) fn support_label(acts: Option<&str>) -> String {
    acts.map(|acts| format!("with {acts}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schedule::materialize_date;

    #[test]
    fn labels_resolved_date() {
        assert_eq!(date_label(&materialize_date("March 3", "2025")), "Mon 03 Mar");
    }

    #[test]
    fn labels_unresolved_date_with_placeholders() {
        assert_eq!(date_label(&materialize_date("TBA", "2025")), "--- ?? ---");
    }

    #[test]
    fn support_label_is_empty_without_act() {
        assert_eq!(support_label(None), "");
        assert_eq!(support_label(Some("Spiritbox")), "with Spiritbox");
    }
}
