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

//! Tour document retrieval.
//!
//! The document normally comes from a fixed URL, a local file path is also
//! accepted so the viewer can be pointed at a copy on disk.

use std::{fs, path::PathBuf, time::Duration};

use reqwest::blocking::Client;

use crate::{config::AppConfig, error::DocumentError, model::TourDocument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DocumentSource {
    Http(String),
    File(PathBuf),
}

impl DocumentSource {
    pub(crate) fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Http(source.to_string())
        } else {
            let path = source.strip_prefix("file://").unwrap_or(source);
            Self::File(PathBuf::from(path))
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Http(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Fetches and validates the tour document.
pub(crate) struct DocumentLoader {
    source: DocumentSource,
    client: Client,
}

impl DocumentLoader {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub(crate) fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            source: DocumentSource::parse(&config.data_source),
            client,
        })
    }

    pub(crate) fn source_name(&self) -> String {
        self.source.name()
    }

    /// Retrieves the document in full, blocking until it arrives or fails.
    pub(crate) fn fetch(&self) -> Result<TourDocument, DocumentError> {
        let payload = match &self.source {
            DocumentSource::Http(url) => self.fetch_http(url)?,
            DocumentSource::File(path) => fs::read(path).map_err(|error| DocumentError::Io {
                path: path.display().to_string(),
                error,
            })?,
        };

        TourDocument::from_json(&payload)
    }

    fn fetch_http(&self, url: &str) -> Result<Vec<u8>, DocumentError> {
        let transport = |error: reqwest::Error| DocumentError::Transport {
            source_name: url.to_string(),
            error,
        };

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(transport)?;

        let body = response.bytes().map_err(transport)?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{
        env,
        io::{BufRead, BufReader, Write},
        net::TcpListener,
        sync::atomic::{AtomicUsize, Ordering},
        thread,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    pub(crate) const VALID_DOCUMENT: &str = r#"{
        "statistics": {
            "total_reported_attendance": "500,000",
            "total_reported_revenue": "$50,000,000",
            "number_of_shows_listed": 1
        },
        "temporal_info": {
            "concerts_2025": [
                { "date": "June 28", "city": "Hamburg", "country": "Germany", "venue": "Volksparkstadion" }
            ]
        },
        "cancelled_shows": []
    }"#;

    static NEXT_FILE: AtomicUsize = AtomicUsize::new(0);

    /// Writes `contents` to a fresh file under the temp dir.
    pub(crate) fn temp_document(contents: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let sequence = NEXT_FILE.fetch_add(1, Ordering::Relaxed);

        let path = env::temp_dir().join(format!("tourview_test_{suffix}_{sequence}.json"));
        fs::write(&path, contents).expect("write temp document");
        path
    }

    /// Nothing listens on port 1, connections are refused.
    pub(crate) const REFUSED_URL: &str = "http://127.0.0.1:1/data/from_zero_tour_dates.json";

    /// Answers a single HTTP request with `status` and `body`, returning the
    /// URL to request.
    pub(crate) fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("local addr").port();

        thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");

            let mut reader = BufReader::new(&stream);
            let mut line = String::new();
            while reader.read_line(&mut line).expect("read request") > 0 && line != "\r\n" {
                line.clear();
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            (&stream).write_all(response.as_bytes()).expect("write response");
        });

        format!("http://127.0.0.1:{port}/data/from_zero_tour_dates.json")
    }

    pub(crate) fn loader_for(source: &str) -> DocumentLoader {
        let config = AppConfig {
            data_source: source.to_string(),
            ..AppConfig::default()
        };
        DocumentLoader::new(&config).expect("build loader")
    }

    #[test]
    fn parses_sources() {
        assert_eq!(
            DocumentSource::parse("https://example.com/data/tour.json"),
            DocumentSource::Http("https://example.com/data/tour.json".to_string())
        );
        assert_eq!(
            DocumentSource::parse("file:///srv/tour.json"),
            DocumentSource::File(PathBuf::from("/srv/tour.json"))
        );
        assert_eq!(
            DocumentSource::parse(" data/tour.json "),
            DocumentSource::File(PathBuf::from("data/tour.json"))
        );
    }

    #[test]
    fn loads_document_from_file() {
        let path = temp_document(VALID_DOCUMENT);

        let document = loader_for(&path.to_string_lossy()).fetch().expect("fetch");

        assert_eq!(document.statistics.show_count, 1);
        assert_eq!(document.temporal_info.concerts_2025[0].city, "Hamburg");

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn malformed_file_is_rejected() {
        let path = temp_document("{ not json");

        let err = loader_for(&path.to_string_lossy()).fetch().unwrap_err();
        assert!(matches!(err, DocumentError::Malformed(_)));

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = loader_for("/nonexistent/tourview/tour.json").fetch().unwrap_err();

        assert!(matches!(err, DocumentError::Io { .. }));
    }

    #[test]
    fn loads_document_over_http() {
        let url = serve_once("200 OK", VALID_DOCUMENT);

        let document = loader_for(&url).fetch().expect("fetch");

        assert_eq!(document.statistics.total_revenue, "$50,000,000");
        assert_eq!(document.temporal_info.concerts_2025[0].venue, "Volksparkstadion");
    }

    #[test]
    fn http_error_status_is_a_transport_error() {
        let url = serve_once("404 Not Found", "{}");

        let err = loader_for(&url).fetch().unwrap_err();

        match err {
            DocumentError::Transport { source_name, error } => {
                assert_eq!(source_name, url);
                assert_eq!(error.status(), Some(reqwest::StatusCode::NOT_FOUND));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        let err = loader_for(REFUSED_URL).fetch().unwrap_err();

        assert!(matches!(err, DocumentError::Transport { .. }));
    }

    #[test]
    fn malformed_http_body_is_rejected() {
        let url = serve_once("200 OK", "<html>not json</html>");

        let err = loader_for(&url).fetch().unwrap_err();

        assert!(matches!(err, DocumentError::Malformed(_)));
    }
}
