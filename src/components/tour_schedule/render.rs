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

//! UI rendering logic for the tour schedule view.
//!
//! The view is laid out top to bottom as the tour header with its totals, the
//! next shows, the year tabs with the selected year's dates and finally the
//! cancelled shows. Sections with nothing in them are left out.

use chrono::NaiveDateTime;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, Tabs},
};

use crate::{
    components::TourScheduleView,
    model::{
        CancelledShow, TourDocument,
        schedule::{ScheduledConcert, TOUR_YEARS},
    },
    theme::Theme,
    util::format::{date_label, support_label},
};

const TOUR_TITLE: &str = "FROM ZERO WORLD TOUR";
const LOADING_TEXT: &str = "Loading tour dates...";

impl TourScheduleView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, now: NaiveDateTime, theme: &Theme) {
        let Some(document) = self.document() else {
            draw_loading(f, area, theme);
            return;
        };

        // Everything is classified afresh against `now` on each draw.
        let header = header_lines(document, theme);
        let next_rows: Vec<Row<'static>> = self
            .next_shows(now)
            .iter()
            .map(|scheduled| concert_row(scheduled, now, theme))
            .collect();
        let year_rows: Vec<Row<'static>> = self
            .selected_concerts()
            .iter()
            .map(|scheduled| concert_row(scheduled, now, theme))
            .collect();
        let cancelled_rows: Vec<Row<'static>> = self
            .cancelled_shows()
            .iter()
            .map(|show| cancelled_row(show, theme))
            .collect();
        let selected_year = self.selected_year().to_string();
        let year_index = self.year_index();

        let next_height = if next_rows.is_empty() { 0 } else { next_rows.len() as u16 + 3 };
        let cancelled_height = if cancelled_rows.is_empty() { 0 } else { cancelled_rows.len() as u16 + 2 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(next_height),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(cancelled_height),
            ])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));
        f.render_widget(Paragraph::new(header).alignment(Alignment::Center).block(header_block), chunks[0]);

        if !next_rows.is_empty() {
            f.render_widget(concert_table(next_rows, " Next Shows ", theme), chunks[1]);
        }

        let tabs = Tabs::new(TOUR_YEARS.iter().map(|year| format!(" {year} ")))
            .select(year_index)
            .style(Style::default().fg(theme.past_fg))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .bg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(" ");
        f.render_widget(tabs, chunks[2]);

        let year_title = format!(" Tour Dates {selected_year} ");
        if year_rows.is_empty() {
            let empty = Paragraph::new(format!("No shows listed for {selected_year}"))
                .style(Style::default().fg(theme.past_fg))
                .alignment(Alignment::Center)
                .block(section_block(year_title, theme));
            f.render_widget(empty, chunks[3]);
        } else {
            let table = concert_table(year_rows, year_title, theme)
                .row_highlight_style(Style::default().bg(theme.commander_bg).add_modifier(Modifier::BOLD));
            f.render_stateful_widget(table, chunks[3], &mut self.table_state);
        }

        if !cancelled_rows.is_empty() {
            let table = Table::new(
                cancelled_rows,
                [Constraint::Fill(2), Constraint::Fill(2), Constraint::Fill(3)],
            )
            .column_spacing(2)
            .block(section_block(" Cancelled Shows ", theme));
            f.render_widget(table, chunks[4]);
        }
    }
}

fn draw_loading(f: &mut Frame, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    let loading = Paragraph::new(LOADING_TEXT)
        .style(Style::default().fg(theme.title_colour))
        .alignment(Alignment::Center);
    f.render_widget(loading, chunks[1]);
}

fn header_lines(document: &TourDocument, theme: &Theme) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        TOUR_TITLE,
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
    )];
    if let Some(span) = document.span() {
        title.push(Span::styled(format!("  {span}"), Style::default().fg(theme.past_fg)));
    }

    let label = Style::default().fg(theme.past_fg);
    let value = Style::default().fg(theme.upcoming_fg).add_modifier(Modifier::BOLD);
    let statistics = &document.statistics;

    let totals = Line::from(vec![
        Span::styled("Total Shows ", label),
        Span::styled(statistics.show_count.to_string(), value),
        Span::styled("   Total Attendance ", label),
        Span::styled(statistics.total_attendance.clone(), value),
        Span::styled("   Total Revenue ", label),
        Span::styled(statistics.total_revenue.clone(), value),
    ]);

    vec![Line::from(title), totals]
}

fn concert_row(scheduled: &ScheduledConcert, now: NaiveDateTime, theme: &Theme) -> Row<'static> {
    let concert = scheduled.concert;
    let upcoming = scheduled.is_upcoming(now);

    let date_style = if upcoming {
        Style::default().fg(theme.upcoming_fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.past_fg)
    };

    let status = if upcoming { "UPCOMING" } else { "" };

    Row::new(vec![
        Cell::from(date_label(&scheduled.materialize())).style(date_style),
        Cell::from(concert.city.clone()).style(Style::default().fg(theme.place_fg).add_modifier(Modifier::BOLD)),
        Cell::from(concert.country.clone()).style(Style::default().fg(theme.past_fg)),
        Cell::from(concert.venue.clone()),
        Cell::from(support_label(concert.supporting_acts())).style(Style::default().fg(theme.support_fg)),
        Cell::from(Line::from(concert.attendance_figure().unwrap_or_default().to_string()).alignment(Alignment::Right))
            .style(Style::default().fg(theme.attendance_fg)),
        Cell::from(Line::from(concert.revenue().unwrap_or_default().to_string()).alignment(Alignment::Right))
            .style(Style::default().fg(theme.revenue_fg)),
        Cell::from(status).style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
    ])
}

fn cancelled_row(show: &CancelledShow, theme: &Theme) -> Row<'static> {
    Row::new(vec![
        Cell::from(format!("{}, {}", show.city, show.country))
            .style(Style::default().fg(theme.place_fg).add_modifier(Modifier::BOLD)),
        Cell::from(show.venue.clone()).style(Style::default().fg(theme.past_fg)),
        Cell::from(format!("Reason: {}", show.reason)).style(Style::default().fg(theme.cancelled_fg)),
    ])
}

fn concert_table<'a>(rows: Vec<Row<'a>>, title: impl Into<Line<'a>>, theme: &Theme) -> Table<'a> {
    Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Fill(3),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from("Date"),
            Cell::from("City"),
            Cell::from("Country"),
            Cell::from("Venue"),
            Cell::from("Support"),
            Cell::from(Line::from("Attendance").alignment(Alignment::Right)),
            Cell::from(Line::from("Revenue").alignment(Alignment::Right)),
            Cell::from(""),
        ])
        .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
    )
    .column_spacing(1)
    .block(section_block(title, theme))
}

fn section_block<'a>(title: impl Into<Line<'a>>, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(title)
        .title_style(Style::default().fg(theme.title_colour).add_modifier(Modifier::BOLD))
}
