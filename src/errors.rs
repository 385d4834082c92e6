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

//! Recoverable state errors.
//!
//! Every rejected operation on the constellation state is described by a
//! [`StateError`]. None of them are fatal: the message is shown to the user as
//! a notice and the application carries on.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum StateError {
    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} index {index} is out of range (have {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("playlist full (max {capacity}), keep listening to unlock more space")]
    CapacityExceeded { capacity: usize },

    #[error("message is too long ({len}/{max} characters)")]
    TooLong { len: usize, max: usize },

    #[error("{0}")]
    InvalidState(String),

    #[error("playlist is locked while a song is playing")]
    Locked,
}

impl StateError {
    pub(crate) fn star_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            kind: "star",
            id: id.to_string(),
        }
    }

    pub(crate) fn song_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            kind: "song",
            id: id.to_string(),
        }
    }
}
