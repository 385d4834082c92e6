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

//! Render an opened star: its images, its message and how often it has been
//! viewed.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    App,
    model::{StarId, star::EDIT_VIEW_THRESHOLD},
    render::icons::STAR_ACTIVE,
    util::format::{media_label, truncate},
};

pub(crate) fn draw_detail(f: &mut Frame, area: Rect, app: &App, id: StarId) {
    let Some(star) = app.state.star(id) else {
        return;
    };
    let theme = &app.theme;

    let hint = if star.can_edit() {
        " e Edit Star \u{00B7} Esc close ".to_string()
    } else {
        format!(" Edit Star at {EDIT_VIEW_THRESHOLD} opens \u{00B7} Esc close ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.star_active_colour))
        .title(format!(" {STAR_ACTIVE} Star {} ", star.id))
        .title_bottom(Line::from(hint).centered())
        .padding(Padding::uniform(1));

    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let image_rows = star.images.len().max(1) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(image_rows + 1),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("Opens: {}", star.view_count),
            Style::default().fg(theme.muted_colour),
        )),
        chunks[0],
    );

    let width = chunks[1].width.saturating_sub(4) as usize;
    let images: Vec<Line> = if star.images.is_empty() {
        vec![Line::from(Span::styled("No images", Style::default().fg(theme.muted_colour)))]
    } else {
        star.images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                Line::from(vec![
                    Span::styled(format!("{} ", index + 1), Style::default().fg(theme.muted_colour)),
                    Span::raw(truncate(&media_label(image.as_str()), width)),
                ])
            })
            .collect()
    };
    f.render_widget(Paragraph::new(images), chunks[1]);

    let message = match &star.text {
        Some(text) => Paragraph::new(text.as_str())
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::ITALIC)),
        None => Paragraph::new("No message").style(Style::default().fg(theme.muted_colour)),
    };
    f.render_widget(message.wrap(Wrap { trim: false }), chunks[2]);
}
