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

//! The launch form for an empty star, or for re-editing a well-visited one.
//!
//! The form mirrors the staged draft held by the constellation state. Typing
//! is sent to the state as it happens, and the state has the final word on
//! what the draft contains: when it refuses a change the form is reset to
//! the accepted text.

mod event;
mod render;

use tui_input::Input;

use crate::model::StarId;

/// Which part of the form receives keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DraftFocus {
    Message,
    Images,
}

pub(crate) struct DraftView {
    star: Option<StarId>,
    input: Input,
    focus: DraftFocus,
    image_cursor: usize,
    image_count: usize,
}

impl DraftView {
    pub(crate) fn new() -> Self {
        Self {
            star: None,
            input: Input::default(),
            focus: DraftFocus::Message,
            image_cursor: 0,
            image_count: 0,
        }
    }

    pub(crate) fn open(&mut self, star: StarId, text: &str) {
        self.star = Some(star);
        self.input = Input::new(text.to_string());
        self.focus = DraftFocus::Message;
        self.image_cursor = 0;
    }

    pub(crate) fn text(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn reset_text(&mut self, text: &str) {
        if self.text() != text {
            self.input = Input::new(text.to_string());
        }
    }

    pub(crate) fn sync_images(&mut self, count: usize) {
        self.image_count = count;
        self.image_cursor = self.image_cursor.min(count.saturating_sub(1));
    }

    /// Whether printable keys belong to the message box.
    pub(crate) fn is_taking_text(&self) -> bool {
        self.focus == DraftFocus::Message
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DraftFocus::Message => DraftFocus::Images,
            DraftFocus::Images => DraftFocus::Message,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_prefills_the_message() {
        let mut view = DraftView::new();
        view.toggle_focus();
        view.open(3, "hello");

        assert_eq!(view.star, Some(3));
        assert_eq!(view.input.value(), "hello");
        assert!(view.is_taking_text());
    }

    #[test]
    fn reset_keeps_cursor_when_text_matches() {
        let mut view = DraftView::new();
        view.open(0, "abc");
        let cursor = view.input.cursor();

        view.reset_text("abc");
        assert_eq!(view.input.cursor(), cursor);

        view.reset_text("ab");
        assert_eq!(view.input.value(), "ab");
    }

    #[test]
    fn image_cursor_stays_on_a_staged_image() {
        let mut view = DraftView::new();
        view.sync_images(4);
        view.image_cursor = 3;

        view.sync_images(2);
        assert_eq!(view.image_cursor, 1);

        view.sync_images(0);
        assert_eq!(view.image_cursor, 0);
    }
}
