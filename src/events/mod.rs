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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), background worker results (the tour
//! document) and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and posts tasks to the background worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
use handlers::*;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::TourDocument, render::draw, tasks::LoadTicket};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    TourDocumentLoaded(LoadTicket, Box<TourDocument>),
    LoadTourDocument,

    SelectYear(String),

    Tick,

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    /// Handles an input event, returning whether it was consumed.
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    app.schedule_view.unmount();

    Ok(())
}

/// Applies a single event to the application state.
fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::TourDocumentLoaded(ticket, document) => handle_tour_document_loaded(app, ticket, document),
        AppEvent::LoadTourDocument => handle_load_tour_document(app)?,
        AppEvent::SelectYear(year) => handle_select_year(app, &year),
        AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// The command line gets first refusal while it is open, then the schedule
/// view, and only keys neither of them consumed reach the global bindings.
///
/// # Errors
///
/// Returns an error if an event or task fails to send.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.commander.handle_event(event.clone(), &app.event_tx)? {
        return Ok(());
    }

    if app.schedule_view.process_event(event, &app.event_tx)? {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('r') => app.event_tx.send(AppEvent::LoadTourDocument)?,
        _ => {}
    }

    Ok(())
}
