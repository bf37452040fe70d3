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

//! Domain error types.
//!
//! Application plumbing uses [`anyhow`], these types cover the failures that
//! the tour schedule logic itself distinguishes between.

use thiserror::Error;

/// Failure to acquire or accept a tour document.
///
/// None of these are fatal, the loader logs them and the view simply stays in
/// its loading state.
#[derive(Debug, Error)]
pub(crate) enum DocumentError {
    #[error("failed to fetch tour document from {source_name}: {error}")]
    Transport {
        source_name: String,
        #[source]
        error: reqwest::Error,
    },

    #[error("failed to read tour document from {path}: {error}")]
    Io {
        path: String,
        #[source]
        error: std::io::Error,
    },

    #[error("malformed tour document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid tour document: {section}[{index}] has a blank `{field}`")]
    BlankField {
        section: String,
        index: usize,
        field: &'static str,
    },
}

/// A partial date string that could not be resolved against its year.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum DateError {
    #[error("unparseable concert date `{0}`")]
    Unparseable(String),
}
