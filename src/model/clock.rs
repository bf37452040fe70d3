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

//! Time sources.
//!
//! Whether a concert is upcoming depends on when the question is asked. The
//! schedule logic never reads the wall clock itself, the current moment is
//! always handed in from a [`Clock`].

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

pub(crate) trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The local wall clock.
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one moment, used to preview the schedule "as of" a date.
pub(crate) struct FixedClock(pub(crate) NaiveDateTime);

impl FixedClock {
    pub(crate) fn start_of(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Picks the clock for the application, pinned if a date was configured.
pub(crate) fn clock_for(as_of: Option<NaiveDate>) -> Box<dyn Clock> {
    match as_of {
        Some(date) => Box::new(FixedClock::start_of(date)),
        None => Box::new(SystemClock),
    }
}
