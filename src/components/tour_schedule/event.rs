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

//! Event routing for the tour schedule view.
//!
//! Year changes are posted back as application events so that keys and the
//! command line go through the same path. Scrolling is handled in place.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::TourScheduleView,
    events::{AppEvent, AppEventProcessor},
    model::schedule::TOUR_YEARS,
};

impl AppEventProcessor for TourScheduleView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        // Nothing to navigate until the document has arrived.
        if self.is_loading() {
            return Ok(false);
        }

        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                event_tx.send(AppEvent::SelectYear(TOUR_YEARS[index].to_string()))?;
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => {
                event_tx.send(AppEvent::SelectYear(self.following_year().to_string()))?;
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
                event_tx.send(AppEvent::SelectYear(self.preceding_year().to_string()))?;
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),
            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::fixtures::{concert, document};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ready_view() -> TourScheduleView {
        let mut view = TourScheduleView::new("2025");
        let ticket = view.begin_load().unwrap();
        view.accept_document(ticket, Box::new(document(vec![], vec![concert("May 1", "Oslo")], vec![])));
        view
    }

    #[test]
    fn number_keys_select_year() {
        let mut view = ready_view();
        let (event_tx, event_rx) = mpsc::channel();

        assert!(view.process_event(key(KeyCode::Char('1')), &event_tx).unwrap());
        assert!(view.process_event(key(KeyCode::Char('3')), &event_tx).unwrap());

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::SelectYear(year)) if year == "2024"));
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::SelectYear(year)) if year == "2026"));
    }

    #[test]
    fn arrows_cycle_year() {
        let mut view = ready_view();
        let (event_tx, event_rx) = mpsc::channel();

        view.process_event(key(KeyCode::Right), &event_tx).unwrap();
        view.process_event(key(KeyCode::Char('h')), &event_tx).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::SelectYear(year)) if year == "2026"));
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::SelectYear(year)) if year == "2024"));
    }

    #[test]
    fn keys_are_ignored_while_loading() {
        let mut view = TourScheduleView::new("2025");
        let (event_tx, event_rx) = mpsc::channel();

        assert!(!view.process_event(key(KeyCode::Char('1')), &event_tx).unwrap());
        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn unrelated_keys_fall_through() {
        let mut view = ready_view();
        let (event_tx, _event_rx) = mpsc::channel();

        assert!(!view.process_event(key(KeyCode::Char('q')), &event_tx).unwrap());
    }
}
