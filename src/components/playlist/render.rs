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

//! UI rendering logic for the playlist panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
};

use crate::{
    components::PlaylistView,
    render::{
        Render,
        icons::{ICON_LOCK, ICON_LOOP, ICON_PLAY},
    },
    state::AppState,
    theme::Theme,
    util::format::truncate,
};

impl Render for PlaylistView {
    fn draw(&mut self, f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let playlist = state.playlist();
        let progression = state.progression();

        let border_colour = if self.is_focused { theme.accent_colour } else { theme.border_colour };

        let mut footer = Vec::new();
        if playlist.is_playing() {
            footer.push(Span::styled(format!(" {ICON_LOCK} Locked "), Style::default().fg(theme.locked_colour)));
        }
        if progression.continuous_unlocked() {
            footer.push(Span::styled(format!(" {ICON_LOOP} Loop "), Style::default().fg(theme.loop_colour)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(format!(" Playlist {}/{} ", playlist.len(), progression.capacity()))
            .title_bottom(Line::from(footer))
            .padding(Padding::horizontal(1));

        let width = block.inner(area).width.saturating_sub(6) as usize;

        let items: Vec<ListItem> = playlist
            .songs()
            .iter()
            .enumerate()
            .map(|(index, song)| {
                let is_active = index == playlist.active_index();
                let marker = if is_active && playlist.is_playing() { ICON_PLAY } else { " " };
                let style = if is_active {
                    Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{marker} ")),
                    Span::styled(format!("{:>2} ", index + 1), Style::default().fg(theme.muted_colour)),
                    Span::styled(truncate(&song.name, width), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.gauge_track_colour).add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
