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
use tracing::{debug, info};

use crate::{
    App,
    model::TourDocument,
    tasks::{AppTask, LoadTicket},
};

pub(super) fn handle_tour_document_loaded(app: &mut App, ticket: LoadTicket, document: Box<TourDocument>) {
    if app.schedule_view.accept_document(ticket, document) {
        info!(ticket = ticket.0, "Tour schedule ready");
    }
}

pub(super) fn handle_load_tour_document(app: &mut App) -> Result<()> {
    match app.schedule_view.begin_load() {
        Some(ticket) => {
            debug!(ticket = ticket.0, "Requesting tour document");
            app.task_tx.send(AppTask::LoadTourDocument(ticket))?;
        }
        None => debug!("Schedule view unmounted, not loading"),
    }

    Ok(())
}

pub(super) fn handle_select_year(app: &mut App, year: &str) {
    app.schedule_view.select_year(year);
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::{
        config::AppConfig,
        events::{AppEvent, handle_event},
        model::fixtures::{concert, document},
    };

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    /// Feeds every event queued on the application channel back through the
    /// handlers, as the main loop would.
    fn drain(app: &mut App) {
        while let Ok(event) = app.event_rx.try_recv() {
            handle_event(app, event).unwrap();
        }
    }

    #[test]
    fn load_request_reaches_worker_with_ticket() {
        let (mut app, task_rx) = app();

        handle_event(&mut app, AppEvent::LoadTourDocument).unwrap();

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadTourDocument(LoadTicket(1)))));
        assert!(app.schedule_view.is_loading());
    }

    #[test]
    fn loaded_document_makes_view_ready() {
        let (mut app, _task_rx) = app();
        handle_event(&mut app, AppEvent::LoadTourDocument).unwrap();

        let document = Box::new(document(vec![], vec![concert("May 1", "Oslo")], vec![]));
        handle_event(&mut app, AppEvent::TourDocumentLoaded(LoadTicket(1), document)).unwrap();

        assert!(!app.schedule_view.is_loading());
        assert_eq!(app.schedule_view.selected_concerts().len(), 1);
    }

    #[test]
    fn stale_document_is_ignored() {
        let (mut app, _task_rx) = app();
        handle_event(&mut app, AppEvent::LoadTourDocument).unwrap();
        handle_event(&mut app, AppEvent::LoadTourDocument).unwrap();

        let document = Box::new(document(vec![], vec![], vec![]));
        handle_event(&mut app, AppEvent::TourDocumentLoaded(LoadTicket(1), document)).unwrap();

        assert!(app.schedule_view.is_loading());
    }

    #[test]
    fn year_keys_change_selected_year() {
        let (mut app, _task_rx) = app();
        handle_event(&mut app, AppEvent::LoadTourDocument).unwrap();
        let document = Box::new(document(vec![concert("May 1", "Oslo")], vec![], vec![]));
        handle_event(&mut app, AppEvent::TourDocumentLoaded(LoadTicket(1), document)).unwrap();

        press(&mut app, KeyCode::Char('1'));
        drain(&mut app);
        assert_eq!(app.schedule_view.selected_year(), "2024");

        press(&mut app, KeyCode::Left);
        drain(&mut app);
        assert_eq!(app.schedule_view.selected_year(), "2026");
    }

    #[test]
    fn command_line_selects_year_and_reloads() {
        let (mut app, task_rx) = app();

        press(&mut app, KeyCode::Char(':'));
        for c in "year 2024".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        drain(&mut app);
        assert_eq!(app.schedule_view.selected_year(), "2024");
        assert!(!app.commander.active());

        press(&mut app, KeyCode::Char(':'));
        for c in "reload".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        drain(&mut app);
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadTourDocument(_))));
    }

    #[test]
    fn r_key_requests_reload() {
        let (mut app, task_rx) = app();

        press(&mut app, KeyCode::Char('r'));
        drain(&mut app);

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadTourDocument(_))));
    }

    #[test]
    fn unmounted_view_requests_nothing() {
        let (mut app, task_rx) = app();
        app.schedule_view.unmount();

        handle_event(&mut app, AppEvent::LoadTourDocument).unwrap();

        assert!(task_rx.try_recv().is_err());
    }
}
