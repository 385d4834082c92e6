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

//! Draws the star field as a top-down canvas around the pearl.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders, Padding,
        canvas::{Canvas, Circle, Points},
    },
};

use crate::{components::SkyView, render::Render, state::AppState, theme::Theme};

const CURSOR_RADIUS: f64 = 0.9;

impl Render for SkyView {
    fn draw(&mut self, f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let border_colour = if self.is_focused { theme.accent_colour } else { theme.border_colour };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(format!(" Sky \u{00B7} {} stars ", state.stars().len()))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);

        // Terminal cells are roughly twice as tall as they are wide.
        let (x_extent, y_extent) = if inner.width == 0 || inner.height == 0 {
            (self.extent, self.extent)
        } else {
            let ratio = (inner.height as f64 * 2.0) / inner.width as f64;
            if ratio <= 1.0 {
                (self.extent / ratio, self.extent)
            } else {
                (self.extent, self.extent * ratio)
            }
        };

        let empty: Vec<(f64, f64)> = state
            .stars()
            .iter()
            .filter(|s| !s.is_active)
            .map(|s| (s.position.x, s.position.z))
            .collect();
        let active: Vec<(f64, f64)> = state
            .stars()
            .iter()
            .filter(|s| s.is_active)
            .map(|s| (s.position.x, s.position.z))
            .collect();

        let cursor = self.selected().and_then(|id| state.star(id)).map(|star| {
            let label = if star.is_active {
                format!(" {} {} ", crate::render::icons::STAR_ACTIVE, star.id)
            } else {
                format!(" {} {} ", crate::render::icons::STAR_EMPTY, star.id)
            };
            (star.position.x, star.position.z, label)
        });

        let pearl_radius = self.pearl_radius;

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(theme.background_colour)
            .x_bounds([-x_extent, x_extent])
            .y_bounds([-y_extent, y_extent])
            .paint(move |ctx| {
                if pearl_radius > 0.0 {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: pearl_radius,
                        color: theme.pearl_colour,
                    });
                }
                ctx.draw(&Points {
                    coords: &empty,
                    color: theme.star_empty_colour,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &active,
                    color: theme.star_active_colour,
                });
                if let Some((x, y, label)) = &cursor {
                    ctx.draw(&Circle {
                        x: *x,
                        y: *y,
                        radius: CURSOR_RADIUS,
                        color: theme.cursor_colour,
                    });
                    ctx.print(
                        *x,
                        *y,
                        Span::styled(
                            label.clone(),
                            Style::default().fg(theme.cursor_colour).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            });

        f.render_widget(canvas, area);
    }
}
