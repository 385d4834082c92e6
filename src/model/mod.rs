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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, stars holding
//! memories and the songs that make up the playlist, together with the rules
//! that govern how they change.
//!
//! * [`progression`]: playlist capacity and continuous play, derived from the
//!   number of completed songs.
//! * [`star`]: the fixed field of stars and their Empty/Active lifecycle.
//! * [`draft`]: staged edits for a star, not yet launched.
//! * [`playlist`]: the bounded song list and its playback selection.

pub(crate) mod draft;
pub(crate) mod playlist;
pub(crate) mod progression;
pub(crate) mod star;

use std::fmt;

/// Stable star identity, assigned once when the field is created.
pub(crate) type StarId = usize;

/// A point in scene space. `y` is height, `x`/`z` span the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

impl Position {
    /// Distance from the vertical axis through the origin.
    pub(crate) fn horizontal_radius(&self) -> f64 {
        self.x.hypot(self.z)
    }
}

/// Opaque reference to a piece of media (an image or an audio file).
///
/// The core never looks inside; the host resolves it when it needs to show or
/// play something.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct MediaRef(String);

impl MediaRef {
    pub(crate) fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Star {
    pub(crate) id: StarId,
    pub(crate) position: Position,
    pub(crate) is_active: bool,
    pub(crate) images: Vec<MediaRef>,
    pub(crate) text: Option<String>,
    pub(crate) view_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct SongId(String);

impl SongId {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Song {
    pub(crate) id: SongId,
    pub(crate) name: String,
    pub(crate) url: MediaRef,
}

/// An uploaded audio file, before it is given an identity by the playlist.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SongSource {
    pub(crate) name: String,
    pub(crate) url: MediaRef,
}

impl SongSource {
    pub(crate) fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: MediaRef::new(url),
        }
    }
}
