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

//! Command-line input logic and state management.
//!
//! Typing `:` opens the command line. Keys then go to a text input until the
//! command is submitted with enter, which posts the corresponding application
//! event, or abandoned with escape.
//!
//! | Command       | Effect                              |
//! |---------------|-------------------------------------|
//! | `q`           | quit                                |
//! | `year <year>` | show the dates for `<year>`         |
//! | `reload`      | fetch the tour document again       |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::warn;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a key event, returning whether the command line consumed it.
    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                match parse_command(&buffer) {
                    Some(event) => event_tx.send(event)?,
                    None if buffer.is_empty() => {}
                    None => warn!(command = %buffer, "Unknown command"),
                }
            }

            // Everything else is typing.
            _ => {
                self.input.handle_event(&event);
            }
        }

        Ok(true)
    }
}

fn parse_command(buffer: &str) -> Option<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] | ["quit"] => Some(AppEvent::ExitApplication),
        ["year", year] => Some(AppEvent::SelectYear(year.to_string())),
        ["reload"] => Some(AppEvent::LoadTourDocument),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_known_commands() {
        assert!(matches!(parse_command("q"), Some(AppEvent::ExitApplication)));
        assert!(matches!(parse_command("reload"), Some(AppEvent::LoadTourDocument)));
        assert!(matches!(parse_command("year  2026"), Some(AppEvent::SelectYear(year)) if year == "2026"));
        assert!(matches!(parse_command("year 1999"), Some(AppEvent::SelectYear(year)) if year == "1999"));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(parse_command("").is_none());
        assert!(parse_command("year").is_none());
        assert!(parse_command("tickets 2025").is_none());
    }

    #[test]
    fn ignores_keys_until_opened() {
        let mut commander = Commander::new();
        let (event_tx, _event_rx) = mpsc::channel();

        assert!(!commander.handle_event(key(KeyCode::Char('y')), &event_tx).unwrap());
        assert!(commander.handle_event(key(KeyCode::Char(':')), &event_tx).unwrap());
        assert!(commander.active());
    }

    #[test]
    fn escape_abandons_command() {
        let mut commander = Commander::new();
        let (event_tx, event_rx) = mpsc::channel();

        commander.handle_event(key(KeyCode::Char(':')), &event_tx).unwrap();
        commander.handle_event(key(KeyCode::Char('q')), &event_tx).unwrap();
        commander.handle_event(key(KeyCode::Esc), &event_tx).unwrap();

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(event_rx.try_recv().is_err());
    }
}
