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

//! Interactive views.
//!
//! Each view keeps only presentation state (cursors, focus, text input) and
//! turns key presses into [`AppEvent`](crate::actions::events::AppEvent)s.
//! The constellation itself is read from
//! [`AppState`](crate::state::AppState) when drawing.

mod draft;
mod playlist;
mod sky;

pub(crate) use draft::DraftView;
pub(crate) use playlist::PlaylistView;
pub(crate) use sky::SkyView;
