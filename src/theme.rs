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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's night-sky palette and provides
//! utilities for converting colors between Ratatui's internal representation
//! and external formats (such as hexadecimal strings) used for terminal
//! emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) notice_colour: Color,

    pub(crate) pearl_colour: Color,
    pub(crate) star_empty_colour: Color,
    pub(crate) star_active_colour: Color,
    pub(crate) cursor_colour: Color,

    pub(crate) locked_colour: Color,
    pub(crate) loop_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(8, 8, 32),
            accent_colour: Color::Rgb(103, 232, 249),
            border_colour: Color::Rgb(71, 85, 105),
            gauge_track_colour: Color::Rgb(21, 16, 48),
            commander_colour: Color::Rgb(216, 180, 254),
            muted_colour: Color::Rgb(148, 163, 184),
            notice_colour: Color::Rgb(251, 191, 36),

            pearl_colour: Color::Rgb(224, 231, 255),
            star_empty_colour: Color::Rgb(255, 250, 205),
            star_active_colour: Color::Rgb(255, 221, 170),
            cursor_colour: Color::Rgb(34, 211, 238),

            locked_colour: Color::Rgb(148, 163, 184),
            loop_colour: Color::Rgb(74, 222, 128),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Non-RGB colours have no hex form and yield
    /// `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_converts_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(8, 8, 32)).as_deref(), Some("#080820"));
        assert_eq!(Theme::to_hex(Color::Reset), None);
    }
}
