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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::{DraftView, draft::DraftFocus},
    model::draft::{MAX_IMAGES, MAX_TEXT_CHARS},
    render::Render,
    state::AppState,
    theme::Theme,
    util::format::{media_label, truncate},
};

impl Render for DraftView {
    fn draw(&mut self, f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let Some(editing) = state.editing() else {
            return;
        };

        let title = match self.star {
            Some(id) => format!(" Launch star {id} "),
            None => " Launch star ".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(title)
            .title_bottom(Line::from(" Tab switch \u{00B7} Ctrl+S launch \u{00B7} Esc cancel ").centered())
            .padding(Padding::uniform(1));

        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(MAX_IMAGES as u16 + 2),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let focus_colour = |focus: DraftFocus| {
            if self.focus == focus { theme.accent_colour } else { theme.border_colour }
        };

        let images = editing.draft.images();
        let width = chunks[0].width.saturating_sub(8) as usize;
        let slots: Vec<Line> = (0..MAX_IMAGES)
            .map(|slot| {
                let selected = self.focus == DraftFocus::Images && slot == self.image_cursor;
                let marker = if selected { ">" } else { " " };
                match images.get(slot) {
                    Some(image) => Line::from(vec![
                        Span::styled(format!("{marker}{} ", slot + 1), Style::default().fg(theme.muted_colour)),
                        Span::styled(
                            truncate(&media_label(image.as_str()), width),
                            if selected {
                                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
                            } else {
                                Style::default()
                            },
                        ),
                    ]),
                    None => Line::from(Span::styled(
                        format!("{marker}{} empty", slot + 1),
                        Style::default().fg(theme.muted_colour),
                    )),
                }
            })
            .collect();

        let images_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(focus_colour(DraftFocus::Images)))
            .title(format!(" Images ({}/{MAX_IMAGES}) ", images.len()));
        f.render_widget(Paragraph::new(slots).block(images_block), chunks[0]);

        let message_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(focus_colour(DraftFocus::Message)))
            .title(format!(" Message ({}/{MAX_TEXT_CHARS}) ", self.input.value().chars().count()));
        let message_area = message_block.inner(chunks[1]);

        let scroll = self.input.visual_scroll(message_area.width.max(1) as usize);
        let message = Paragraph::new(self.input.value())
            .scroll((0, scroll as u16))
            .block(message_block);
        f.render_widget(message, chunks[1]);

        if !editing.draft.text().is_empty() {
            let preview = Paragraph::new(editing.draft.text())
                .style(Style::default().fg(theme.muted_colour))
                .wrap(Wrap { trim: false });
            f.render_widget(preview, chunks[2]);
        }

        if self.focus == DraftFocus::Message {
            let x = message_area.x + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            f.set_cursor_position((x, message_area.y));
        }
    }
}
