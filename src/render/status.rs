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

//! The one-line constellation summary under the player bar.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, render::icons::ICON_LOOP};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let progression = app.state.progression();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(48), Constraint::Min(0)])
        .horizontal_margin(1)
        .split(area);

    let separator = Span::styled(" | ", Style::default().fg(app.theme.border_colour));

    let mut spans = vec![Span::styled(
        format!("{} Stars Empty", app.state.empty_star_count()),
        Style::default().fg(app.theme.star_empty_colour),
    )];

    // The listening readout appears once the first song has played through.
    if progression.playback_count() > 0 {
        spans.extend([
            separator.clone(),
            Span::styled(
                format!("XP: {}", progression.playback_count()),
                Style::default().fg(app.theme.accent_colour),
            ),
            separator.clone(),
            Span::styled(
                format!("Cap: {}", progression.capacity()),
                Style::default().fg(app.theme.muted_colour),
            ),
        ]);
        if progression.continuous_unlocked() {
            spans.push(separator);
            spans.push(Span::styled(
                format!("{ICON_LOOP} Play Active"),
                Style::default().fg(app.theme.loop_colour).add_modifier(Modifier::BOLD),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    if let Some(notice) = &app.notice {
        f.render_widget(
            Paragraph::new(Line::from(notice.as_str()).right_aligned())
                .style(Style::default().fg(app.theme.notice_colour)),
            chunks[1],
        );
    }
}
