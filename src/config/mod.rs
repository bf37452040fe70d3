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

//! Application configuration.
//!
//! This module manages the application configuration file. A missing or
//! unreadable file falls back to the defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "tourview";

pub(crate) const DEFAULT_DATA_SOURCE: &str = "http://localhost:5173/data/from_zero_tour_dates.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub version: u32,
    /// URL or file path of the tour document.
    pub data_source: String,
    pub default_year: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_file: String,
    /// Pins "today" to a date instead of reading the clock.
    pub as_of: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            default_year: "2025".to_string(),
            request_timeout_secs: 10,
            log_level: "info".to_string(),
            log_file: "tourview.log".to_string(),
            as_of: None,
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "data_source": "tour.json", "as_of": "2025-06-01" }"#).unwrap();

        assert_eq!(config.data_source, "tour.json");
        assert_eq!(config.default_year, "2025");
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2025, 6, 1));
    }
}
