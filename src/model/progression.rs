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

//! Listening progression.
//!
//! Everything the player unlocks is derived from a single counter of songs
//! that played through to the end, so the current limits can always be
//! recomputed from the counter alone.

const BASE_CAPACITY: usize = 5;
const MAX_CAPACITY: usize = 10;
const PLAYS_PER_SLOT: u64 = 10;
const CONTINUOUS_PLAY_THRESHOLD: u64 = 60;

/// Maximum number of songs the playlist may hold after `playback_count`
/// completed songs.
pub(crate) fn capacity_for(playback_count: u64) -> usize {
    let bonus = usize::try_from(playback_count / PLAYS_PER_SLOT).unwrap_or(usize::MAX);
    BASE_CAPACITY.saturating_add(bonus).min(MAX_CAPACITY)
}

/// Whether the player advances to the next song on its own.
pub(crate) fn is_continuous_unlocked(playback_count: u64) -> bool {
    playback_count >= CONTINUOUS_PLAY_THRESHOLD
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Progression {
    playback_count: u64,
}

impl Progression {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn playback_count(&self) -> u64 {
        self.playback_count
    }

    pub(crate) fn capacity(&self) -> usize {
        capacity_for(self.playback_count)
    }

    pub(crate) fn continuous_unlocked(&self) -> bool {
        is_continuous_unlocked(self.playback_count)
    }

    /// Counts one song that played through to the end.
    ///
    /// Must be called exactly once per natural song end, never for a pause,
    /// skip or manual selection.
    pub(crate) fn record_playback_completion(&mut self) {
        self.playback_count = self.playback_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_grows_every_ten_plays() {
        assert_eq!(capacity_for(0), 5);
        assert_eq!(capacity_for(9), 5);
        assert_eq!(capacity_for(10), 6);
        assert_eq!(capacity_for(45), 9);
        assert_eq!(capacity_for(50), 10);
        assert_eq!(capacity_for(200), 10);
        assert_eq!(capacity_for(u64::MAX), 10);
    }

    #[test]
    fn capacity_matches_formula_and_never_shrinks() {
        let mut previous = capacity_for(0);
        for n in 0..500u64 {
            let capacity = capacity_for(n);
            assert_eq!(capacity, (5 + (n / 10) as usize).min(10));
            assert!(capacity >= previous);
            previous = capacity;
        }
    }

    #[test]
    fn continuous_play_unlocks_at_sixty() {
        assert!(!is_continuous_unlocked(0));
        assert!(!is_continuous_unlocked(59));
        assert!(is_continuous_unlocked(60));
        assert!(is_continuous_unlocked(1_000));
    }

    #[test]
    fn completions_drive_derived_values() {
        let mut progression = Progression::new();
        assert_eq!(progression.capacity(), 5);
        assert!(!progression.continuous_unlocked());

        for _ in 0..60 {
            progression.record_playback_completion();
        }

        assert_eq!(progression.playback_count(), 60);
        assert_eq!(progression.capacity(), 10);
        assert!(progression.continuous_unlocked());
    }
}
