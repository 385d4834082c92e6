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

//! Playlist panel state.
//!
//! The songs themselves live in the constellation state; this view only
//! tracks the highlighted row.

mod event;
mod render;

use ratatui::widgets::ListState;

pub(crate) struct PlaylistView {
    list_state: ListState,
    len: usize,
    pub(crate) is_focused: bool,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            list_state: ListState::default(),
            len: 0,
            is_focused: false,
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keeps the highlighted row valid after songs were added or removed.
    pub(crate) fn sync(&mut self, len: usize) {
        self.len = len;
        let selected = match (self.list_state.selected(), len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(index), _) => Some(index.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    fn next(&mut self) {
        if let Some(index) = self.list_state.selected() {
            if index + 1 < self.len {
                self.list_state.select(Some(index + 1));
            }
        }
    }

    fn previous(&mut self) {
        if let Some(index) = self.list_state.selected() {
            self.list_state.select(Some(index.saturating_sub(1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_follows_the_song_count() {
        let mut view = PlaylistView::new();
        assert_eq!(view.selected(), None);

        view.sync(3);
        assert_eq!(view.selected(), Some(0));

        view.next();
        view.next();
        view.next();
        assert_eq!(view.selected(), Some(2));

        view.sync(2);
        assert_eq!(view.selected(), Some(1));

        view.previous();
        view.previous();
        assert_eq!(view.selected(), Some(0));

        view.sync(0);
        assert_eq!(view.selected(), None);
    }
}
