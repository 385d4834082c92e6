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
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod commander;
mod detail;
pub(crate) mod icons;
mod player;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App, Focus, Overlay,
    render::{commander::draw_commander, detail::draw_detail, player::draw_player, status::draw_status},
    state::AppState,
    theme::Theme,
};

const SIDE_PANEL_WIDTH: u16 = 36;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, state: &AppState, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The sky takes the main area with the playlist beside it. The player bar,
/// status line and command line run along the bottom, and an open star or
/// launch form is drawn over the top of everything.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(outer[0]);

    app.sky_view.is_focused = app.focus == Focus::Sky && app.overlay == Overlay::None;
    app.playlist_view.is_focused = app.focus == Focus::Playlist && app.overlay == Overlay::None;

    app.sky_view.draw(f, main[0], &app.state, &app.theme);
    app.playlist_view.draw(f, main[1], &app.state, &app.theme);

    draw_player(f, outer[1], app);
    draw_status(f, outer[2], app);
    draw_commander(f, outer[3], app);

    match app.overlay {
        Overlay::None => {}
        Overlay::Detail(id) => draw_detail(f, popup_area(outer[0], 64, 20), app, id),
        Overlay::Draft => app.draft_view.draw(f, popup_area(outer[0], 72, 22), &app.state, &app.theme),
    }
}

/// A centred rectangle of at most `width` by `height` inside `area`.
pub(crate) fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}
