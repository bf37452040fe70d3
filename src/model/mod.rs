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

//! Domain models and core data structures.
//!
//! This module defines the tour document as it arrives over the wire: the
//! aggregate statistics, the concert dates grouped by year and the list of
//! cancelled shows. The document is deserialized straight into these types so
//! that a payload with the wrong shape is rejected at the boundary.

pub(crate) mod clock;
pub(crate) mod schedule;

use serde::Deserialize;

use crate::error::DocumentError;

/// Value used by the tour data to say "no supporting act".
pub(crate) const NO_SUPPORT_SENTINEL: &str = "\u{2014}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ConcertDate {
    /// Month and day only, the year comes from the bucket holding the concert.
    pub(crate) date: String,
    pub(crate) city: String,
    pub(crate) country: String,
    pub(crate) venue: String,
    #[serde(default, alias = "supportingActs")]
    pub(crate) supporting_acts: Option<String>,
    #[serde(default)]
    pub(crate) attendance: Option<String>,
    #[serde(default)]
    pub(crate) revenue: Option<String>,
}

impl ConcertDate {
    /// The supporting act, if there is one worth showing.
    pub(crate) fn supporting_acts(&self) -> Option<&str> {
        self.supporting_acts
            .as_deref()
            .map(str::trim)
            .filter(|acts| !acts.is_empty() && *acts != NO_SUPPORT_SENTINEL)
    }

    /// The attendance figure, attendance is usually given as "actual /
    /// capacity" and only the first part is shown.
    pub(crate) fn attendance_figure(&self) -> Option<&str> {
        self.attendance
            .as_deref()
            .and_then(|attendance| attendance.split('/').next())
            .map(str::trim)
            .filter(|figure| !figure.is_empty())
    }

    pub(crate) fn revenue(&self) -> Option<&str> {
        self.revenue
            .as_deref()
            .map(str::trim)
            .filter(|revenue| !revenue.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct CancelledShow {
    pub(crate) date: String,
    pub(crate) city: String,
    pub(crate) country: String,
    pub(crate) venue: String,
    pub(crate) reason: String,
}

/// Precomputed display totals, shown as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct TourStatistics {
    #[serde(rename = "total_reported_attendance", alias = "totalAttendance")]
    pub(crate) total_attendance: String,
    #[serde(rename = "total_reported_revenue", alias = "totalRevenue")]
    pub(crate) total_revenue: String,
    #[serde(rename = "number_of_shows_listed", alias = "showCount")]
    pub(crate) show_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct TemporalInfo {
    #[serde(default)]
    pub(crate) start_date: Option<String>,
    #[serde(default)]
    pub(crate) end_date: Option<String>,
    #[serde(default)]
    pub(crate) concerts_2024: Vec<ConcertDate>,
    #[serde(default)]
    pub(crate) concerts_2025: Vec<ConcertDate>,
    #[serde(default)]
    pub(crate) concerts_2026: Vec<ConcertDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct TourDocument {
    #[serde(default)]
    pub(crate) extracted_information: Option<String>,
    pub(crate) statistics: TourStatistics,
    #[serde(default)]
    pub(crate) temporal_info: TemporalInfo,
    #[serde(default, alias = "cancelledShows")]
    pub(crate) cancelled_shows: Vec<CancelledShow>,
}

impl TourDocument {
    /// Parses and validates a tour document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Malformed`] if the payload is not JSON of the
    /// expected shape, or [`DocumentError::BlankField`] if a concert or
    /// cancellation is missing its place.
    pub(crate) fn from_json(payload: &[u8]) -> Result<Self, DocumentError> {
        let document: TourDocument = serde_json::from_slice(payload)?;
        document.validate()?;
        Ok(document)
    }

    /// Human readable tour span, if the document gives one.
    pub(crate) fn span(&self) -> Option<String> {
        match (&self.temporal_info.start_date, &self.temporal_info.end_date) {
            (Some(start), Some(end)) => Some(format!("{start} - {end}")),
            (Some(start), None) => Some(format!("from {start}")),
            (None, Some(end)) => Some(format!("until {end}")),
            (None, None) => None,
        }
    }

    fn validate(&self) -> Result<(), DocumentError> {
        let buckets = [
            ("concerts_2024", &self.temporal_info.concerts_2024),
            ("concerts_2025", &self.temporal_info.concerts_2025),
            ("concerts_2026", &self.temporal_info.concerts_2026),
        ];

        for (section, concerts) in buckets {
            for (index, concert) in concerts.iter().enumerate() {
                require(section, index, "city", &concert.city)?;
                require(section, index, "country", &concert.country)?;
                require(section, index, "venue", &concert.venue)?;
            }
        }

        for (index, show) in self.cancelled_shows.iter().enumerate() {
            require("cancelled_shows", index, "city", &show.city)?;
            require("cancelled_shows", index, "country", &show.country)?;
            require("cancelled_shows", index, "venue", &show.venue)?;
        }

        Ok(())
    }
}

fn require(section: &str, index: usize, field: &'static str, value: &str) -> Result<(), DocumentError> {
    if value.trim().is_empty() {
        return Err(DocumentError::BlankField {
            section: section.to_string(),
            index,
            field,
        });
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "extracted_information": "From Zero World Tour",
        "statistics": {
            "total_reported_attendance": "1,234,567",
            "total_reported_revenue": "$150,000,000",
            "number_of_shows_listed": 3
        },
        "temporal_info": {
            "start_date": "September 5, 2024",
            "end_date": "2026",
            "concerts_2024": [
                { "date": "September 11", "city": "Los Angeles", "country": "United States",
                  "venue": "Kia Forum", "supporting_acts": "—",
                  "attendance": "17,000 / 17,000", "revenue": "$2,000,000" }
            ],
            "concerts_2025": [
                { "date": "June 28", "city": "Hamburg", "country": "Germany", "venue": "Volksparkstadion",
                  "supporting_acts": "Spiritbox" }
            ]
        },
        "cancelled_shows": [
            { "date": "May 3", "city": "Springfield", "country": "USA",
              "venue": "Civic Hall", "reason": "Venue unavailable" }
        ]
    }"#;

    #[test]
    fn parses_wire_document() {
        let document = TourDocument::from_json(SAMPLE.as_bytes()).unwrap();

        assert_eq!(document.statistics.show_count, 3);
        assert_eq!(document.statistics.total_attendance, "1,234,567");
        assert_eq!(document.temporal_info.concerts_2024.len(), 1);
        assert_eq!(document.temporal_info.concerts_2025.len(), 1);
        assert!(document.temporal_info.concerts_2026.is_empty());
        assert_eq!(document.cancelled_shows.len(), 1);
        assert_eq!(document.span().as_deref(), Some("September 5, 2024 - 2026"));
    }

    #[test]
    fn accepts_camel_case_statistics() {
        let payload = r#"{
            "statistics": { "totalAttendance": "10", "totalRevenue": "$1", "showCount": 1 }
        }"#;

        let document = TourDocument::from_json(payload.as_bytes()).unwrap();

        assert_eq!(document.statistics.total_revenue, "$1");
        assert!(document.cancelled_shows.is_empty());
    }

    #[test]
    fn rejects_missing_statistics() {
        let payload = r#"{ "temporal_info": {}, "cancelled_shows": [] }"#;

        let err = TourDocument::from_json(payload.as_bytes()).unwrap_err();

        assert!(matches!(err, DocumentError::Malformed(_)));
    }

    #[test]
    fn rejects_concert_without_venue() {
        let payload = r#"{
            "statistics": { "total_reported_attendance": "0", "total_reported_revenue": "0",
                            "number_of_shows_listed": 0 },
            "temporal_info": { "concerts_2025": [ { "date": "May 1", "city": "Paris", "country": "France" } ] }
        }"#;

        assert!(TourDocument::from_json(payload.as_bytes()).is_err());
    }

    #[test]
    fn rejects_blank_city() {
        let payload = r#"{
            "statistics": { "total_reported_attendance": "0", "total_reported_revenue": "0",
                            "number_of_shows_listed": 0 },
            "temporal_info": { "concerts_2026": [
                { "date": "May 1", "city": "Paris", "country": "France", "venue": "Stade" },
                { "date": "May 2", "city": "  ", "country": "France", "venue": "Stade" }
            ] }
        }"#;

        let err = TourDocument::from_json(payload.as_bytes()).unwrap_err();

        match err {
            DocumentError::BlankField { section, index, field } => {
                assert_eq!(section, "concerts_2026");
                assert_eq!(index, 1);
                assert_eq!(field, "city");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_cancellation_without_country() {
        let payload = r#"{
            "statistics": { "total_reported_attendance": "0", "total_reported_revenue": "0",
                            "number_of_shows_listed": 0 },
            "cancelled_shows": [
                { "date": "May 3", "city": "Springfield", "country": "", "venue": "Civic Hall",
                  "reason": "Venue unavailable" }
            ]
        }"#;

        let err = TourDocument::from_json(payload.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            DocumentError::BlankField { ref section, index: 0, field: "country" } if section == "cancelled_shows"
        ));
    }

    #[test]
    fn sentinel_supporting_act_is_absent() {
        let mut concert = fixtures::concert("March 3", "Oslo");
        assert_eq!(concert.supporting_acts(), None);

        concert.supporting_acts = Some(NO_SUPPORT_SENTINEL.to_string());
        assert_eq!(concert.supporting_acts(), None);

        concert.supporting_acts = Some("Architects".to_string());
        assert_eq!(concert.supporting_acts(), Some("Architects"));
    }

    #[test]
    fn attendance_figure_is_first_segment() {
        let mut concert = fixtures::concert("March 3", "Oslo");
        assert_eq!(concert.attendance_figure(), None);

        concert.attendance = Some("45,123 / 50,000".to_string());
        assert_eq!(concert.attendance_figure(), Some("45,123"));

        concert.attendance = Some("12,000".to_string());
        assert_eq!(concert.attendance_figure(), Some("12,000"));
    }
}
