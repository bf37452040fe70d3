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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to keep blocking work off
//! the main UI thread. A dedicated worker loop translates [`AppTask`] requests
//! into document fetches and posts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Everything else is an event.

mod handlers;
pub(crate) mod source;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::{error, info};

use crate::{config::AppConfig, events::AppEvent, tasks::source::DocumentLoader};

/// Pairs a load request with its result.
///
/// Tickets only ever increase, a view accepts the document for the ticket it
/// is waiting on and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoadTicket(pub(crate) u64);

impl LoadTicket {
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadTourDocument(LoadTicket),
}

/// Spawns a background thread to process application tasks.
///
/// The worker builds its own document loader and enters a blocking loop,
/// listening for incoming [`AppTask`]s until the task channel closes.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(config: &AppConfig, task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>) {
    let config = config.clone();

    thread::spawn(move || {
        let loader = match DocumentLoader::new(&config) {
            Ok(loader) => loader,
            Err(e) => {
                error!(error = %e, "Failed to initialise document loader");
                return;
            }
        };

        info!(source = %loader.source_name(), "Task worker started");

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                loader: &loader,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                error!(error = %e, "Task failed");
            }
        }
    });
}

/// Bundles shared resources required by task handlers.
pub(crate) struct TaskContext<'a> {
    loader: &'a DocumentLoader,
    event_tx: &'a Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::LoadTourDocument(ticket) => handlers::load_tour_document(ctx, ticket),
    }
}
