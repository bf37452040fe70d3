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

use anyhow::Result;
use tracing::{debug, error, info};

use crate::{
    events::AppEvent,
    tasks::{LoadTicket, TaskContext},
};

/// Fetches the tour document and hands it to the view.
///
/// A failed fetch is logged and otherwise swallowed, the view keeps showing
/// its loading screen. There is no retry.
pub(super) fn load_tour_document(ctx: &mut TaskContext, ticket: LoadTicket) -> Result<()> {
    let document = match ctx.loader.fetch() {
        Ok(document) => document,
        Err(e) => {
            error!(error = %e, ticket = ticket.0, "Error loading tour data");
            return Ok(());
        }
    };

    info!(
        ticket = ticket.0,
        shows = document.statistics.show_count,
        cancelled = document.cancelled_shows.len(),
        "Tour document loaded"
    );

    // The receiver is gone once the application has shut down.
    if ctx
        .event_tx
        .send(AppEvent::TourDocumentLoaded(ticket, Box::new(document)))
        .is_err()
    {
        debug!(ticket = ticket.0, "Dropping tour document, application has exited");
    }

    Ok(())
}
