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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for the outer
//! layout and terminal frame composition, the schedule view draws itself.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod commander;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{App, render::commander::draw_commander};

/// Renders the user interface to the terminal frame.
///
/// The current moment is read from the application clock once per frame and
/// handed to the schedule view, so every part of a frame agrees on what is
/// upcoming.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the view
///   to update its scroll position.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Main content, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let now = app.clock.now();
    app.schedule_view.draw(f, outer[0], now, &app.theme);

    draw_commander(f, outer[1], app);
}
