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

//! Tour schedule view state.
//!
//! The view starts out loading and becomes ready once a tour document has
//! been delivered for the load it is waiting on. Within the ready state the
//! only thing that changes is the selected year.
//!
//! A document is only accepted for the outstanding [`LoadTicket`], so a late
//! result from a superseded load, or one arriving after the view has been
//! unmounted, is dropped rather than written into the view.

mod event;
mod render;

use chrono::NaiveDateTime;
use ratatui::widgets::TableState;
use tracing::debug;

use crate::{
    model::{
        CancelledShow, TourDocument,
        schedule::{self, ScheduledConcert, TOUR_YEARS},
    },
    tasks::LoadTicket,
};

#[derive(Debug)]
pub(crate) enum ScheduleState {
    Loading,
    Ready(Box<TourDocument>),
}

pub(crate) struct TourScheduleView {
    state: ScheduleState,
    selected_year: String,
    pending: Option<LoadTicket>,
    last_ticket: LoadTicket,
    mounted: bool,
    pub(crate) table_state: TableState,
}

impl TourScheduleView {
    pub(crate) fn new(default_year: &str) -> Self {
        Self {
            state: ScheduleState::Loading,
            selected_year: default_year.to_string(),
            pending: None,
            last_ticket: LoadTicket(0),
            mounted: true,
            table_state: TableState::new(),
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.state, ScheduleState::Loading)
    }

    pub(crate) fn document(&self) -> Option<&TourDocument> {
        match &self.state {
            ScheduleState::Loading => None,
            ScheduleState::Ready(document) => Some(&**document),
        }
    }

    /// Issues a ticket for a new document load.
    ///
    /// Any earlier load still in flight is superseded. Returns `None` once the
    /// view has been unmounted.
    pub(crate) fn begin_load(&mut self) -> Option<LoadTicket> {
        if !self.mounted {
            return None;
        }

        let ticket = self.last_ticket.next();
        self.last_ticket = ticket;
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Takes delivery of a loaded document.
    ///
    /// The document replaces whatever the view held before. Returns `false`
    /// and leaves the view untouched if `ticket` is not the outstanding load.
    pub(crate) fn accept_document(&mut self, ticket: LoadTicket, document: Box<TourDocument>) -> bool {
        if !self.mounted || self.pending != Some(ticket) {
            debug!(ticket = ticket.0, pending = ?self.pending, "Ignoring stale tour document");
            return false;
        }

        self.pending = None;
        self.state = ScheduleState::Ready(document);
        self.reset_table_selection();
        true
    }

    /// Tears the view down, any load still in flight is ignored when it lands.
    pub(crate) fn unmount(&mut self) {
        self.mounted = false;
        self.pending = None;
    }

    pub(crate) fn selected_year(&self) -> &str {
        &self.selected_year
    }

    pub(crate) fn select_year(&mut self, year: &str) {
        self.selected_year = year.to_string();
        self.reset_table_selection();
    }

    /// The year after the selected one, wrapping around.
    pub(crate) fn following_year(&self) -> &'static str {
        match self.year_index() {
            Some(i) => TOUR_YEARS[(i + 1) % TOUR_YEARS.len()],
            None => TOUR_YEARS[0],
        }
    }

    /// The year before the selected one, wrapping around.
    pub(crate) fn preceding_year(&self) -> &'static str {
        match self.year_index() {
            Some(0) => TOUR_YEARS[TOUR_YEARS.len() - 1],
            Some(i) => TOUR_YEARS[i - 1],
            None => TOUR_YEARS[TOUR_YEARS.len() - 1],
        }
    }

    pub(crate) fn year_index(&self) -> Option<usize> {
        TOUR_YEARS.iter().position(|year| *year == self.selected_year)
    }

    /// Concerts for the selected year, empty while loading.
    pub(crate) fn selected_concerts(&self) -> Vec<ScheduledConcert<'_>> {
        self.document()
            .map(|document| schedule::scheduled_for_year(document, &self.selected_year))
            .unwrap_or_default()
    }

    /// The highlighted next shows as of `now`, empty while loading.
    pub(crate) fn next_shows(&self, now: NaiveDateTime) -> Vec<ScheduledConcert<'_>> {
        self.document()
            .map(|document| schedule::next_shows(document, now))
            .unwrap_or_default()
    }

    pub(crate) fn cancelled_shows(&self) -> &[CancelledShow] {
        self.document()
            .map(|document| document.cancelled_shows.as_slice())
            .unwrap_or_default()
    }

    fn scroll_down(&mut self) {
        let len = self.selected_concerts().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn scroll_up(&mut self) {
        if self.selected_concerts().is_empty() {
            return;
        }
        let i = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(i));
    }

    fn reset_table_selection(&mut self) {
        self.table_state = TableState::new();
    }
}
