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

//! Playlist management.
//!
//! This module provides state for the music player playlist: an ordered list
//! of songs bounded by the capacity the listener has unlocked, the index of
//! the song being played, and whether playback is in progress.
//!
//! While a song is playing the playlist is locked, so the current song cannot
//! be swapped or removed until it ends.

use crate::{
    errors::StateError,
    model::{Song, SongId, SongSource},
};

/// What the player should do once the current song has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SongEndOutcome {
    Continue(usize),
    Stop,
}

#[derive(Debug, Default)]
pub(crate) struct Playlist {
    songs: Vec<Song>,
    active_index: usize,
    is_playing: bool,
    next_seq: u64,
}

impl Playlist {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn len(&self) -> usize {
        self.songs.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub(crate) fn active_index(&self) -> usize {
        self.active_index
    }

    pub(crate) fn active_song(&self) -> Option<&Song> {
        self.songs.get(self.active_index)
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn set_playing(&mut self, is_playing: bool) {
        self.is_playing = is_playing;
    }

    /// Appends a song and makes it the active one.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::CapacityExceeded`] if the playlist already holds
    /// `capacity` songs, in which case nothing changes.
    pub(crate) fn add_song(&mut self, capacity: usize, source: SongSource) -> Result<&Song, StateError> {
        if self.songs.len() >= capacity {
            return Err(StateError::CapacityExceeded { capacity });
        }

        let id = self.next_id();
        self.songs.push(Song {
            id,
            name: source.name,
            url: source.url,
        });
        self.active_index = self.songs.len() - 1;

        Ok(&self.songs[self.active_index])
    }

    /// Removes the song with the given id.
    ///
    /// If the active index no longer points into the list it goes back to the
    /// first song.
    pub(crate) fn remove_song(&mut self, id: &SongId) -> Result<Song, StateError> {
        if self.is_playing {
            return Err(StateError::Locked);
        }

        let position = self
            .songs
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| StateError::song_not_found(id))?;

        let removed = self.songs.remove(position);
        if self.active_index >= self.songs.len() {
            self.active_index = 0;
        }

        Ok(removed)
    }

    pub(crate) fn select_song(&mut self, index: usize) -> Result<usize, StateError> {
        if self.is_playing {
            return Err(StateError::Locked);
        }

        if index >= self.songs.len() {
            return Err(StateError::IndexOutOfRange {
                kind: "song",
                index,
                len: self.songs.len(),
            });
        }

        self.active_index = index;
        Ok(index)
    }

    /// Decides what follows a song that played through to the end.
    ///
    /// With continuous play the next song (wrapping around) becomes active and
    /// playback carries on, otherwise playback stops and waits for a manual
    /// selection.
    pub(crate) fn on_song_end(&mut self, continuous_unlocked: bool) -> SongEndOutcome {
        if continuous_unlocked && !self.is_empty() {
            self.active_index = (self.active_index + 1) % self.songs.len();
            SongEndOutcome::Continue(self.active_index)
        } else {
            self.is_playing = false;
            SongEndOutcome::Stop
        }
    }

    /// Ids come from a counter that never goes back, so a removed song's id
    /// is never handed out again.
    fn next_id(&mut self) -> SongId {
        self.next_seq += 1;
        SongId::new(format!("song-{}", self.next_seq))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn source(name: &str) -> SongSource {
        SongSource::new(name, format!("/music/{name}.mp3"))
    }

    fn playlist_with(names: &[&str]) -> Playlist {
        let mut playlist = Playlist::new();
        for name in names {
            playlist.add_song(10, source(name)).unwrap();
        }
        playlist
    }

    #[test]
    fn add_appends_and_activates_new_song() {
        let mut playlist = playlist_with(&["one", "two"]);
        let song = playlist.add_song(5, source("three")).unwrap();

        assert_eq!(song.name, "three");
        assert_eq!(playlist.active_index(), 2);
        assert_eq!(playlist.active_song().unwrap().name, "three");
    }

    #[test]
    fn add_beyond_capacity_is_rejected_unchanged() {
        let mut playlist = playlist_with(&["a", "b", "c", "d", "e"]);
        playlist.select_song(1).unwrap();
        let before: Vec<Song> = playlist.songs().to_vec();

        let err = playlist.add_song(5, source("f")).unwrap_err();

        assert_eq!(err, StateError::CapacityExceeded { capacity: 5 });
        assert_eq!(playlist.songs(), before.as_slice());
        assert_eq!(playlist.active_index(), 1);
    }

    #[test]
    fn song_ids_are_unique() {
        let mut playlist = Playlist::new();
        for _ in 0..10 {
            playlist.add_song(10, source("same")).unwrap();
        }

        let ids: HashSet<&SongId> = playlist.songs().iter().map(|s| &s.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn removed_song_ids_are_not_reused() {
        let mut playlist = playlist_with(&["a", "b"]);
        let removed = playlist.songs()[1].id.clone();
        playlist.remove_song(&removed).unwrap();

        let added = playlist.add_song(10, source("b")).unwrap().id.clone();

        assert_ne!(added, removed);
        assert_ne!(added, playlist.songs()[0].id);
    }

    #[test]
    fn song_end_on_empty_playlist_stops() {
        let mut playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.on_song_end(true), SongEndOutcome::Stop);
    }

    #[test]
    fn playing_locks_selection_and_removal() {
        let mut playlist = playlist_with(&["a", "b"]);
        playlist.set_playing(true);
        let id = playlist.songs()[0].id.clone();

        assert_eq!(playlist.select_song(0), Err(StateError::Locked));
        assert_eq!(playlist.remove_song(&id).unwrap_err(), StateError::Locked);
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.active_index(), 1);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut playlist = playlist_with(&["a"]);
        assert!(matches!(
            playlist.select_song(1),
            Err(StateError::IndexOutOfRange { index: 1, len: 1, .. })
        ));
    }

    #[test]
    fn removing_last_active_song_resets_index() {
        let mut playlist = playlist_with(&["a", "b", "c"]);
        let last = playlist.songs()[2].id.clone();

        playlist.remove_song(&last).unwrap();

        assert_eq!(playlist.active_index(), 0);
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn removing_earlier_song_keeps_index_when_still_valid() {
        let mut playlist = playlist_with(&["a", "b", "c"]);
        playlist.select_song(1).unwrap();
        let first = playlist.songs()[0].id.clone();

        playlist.remove_song(&first).unwrap();

        assert_eq!(playlist.active_index(), 1);
        assert_eq!(playlist.active_song().unwrap().name, "c");
    }

    #[test]
    fn removing_unknown_song_is_not_found() {
        let mut playlist = playlist_with(&["a"]);
        let err = playlist.remove_song(&SongId::new("missing")).unwrap_err();
        assert_eq!(err, StateError::song_not_found("missing"));
    }

    #[test]
    fn song_end_stops_without_continuous_play() {
        let mut playlist = playlist_with(&["a", "b"]);
        playlist.set_playing(true);

        assert_eq!(playlist.on_song_end(false), SongEndOutcome::Stop);
        assert!(!playlist.is_playing());
        assert_eq!(playlist.active_index(), 1);
    }

    #[test]
    fn song_end_wraps_with_continuous_play() {
        let mut playlist = playlist_with(&["a", "b", "c"]);
        playlist.set_playing(true);

        assert_eq!(playlist.on_song_end(true), SongEndOutcome::Continue(0));
        assert_eq!(playlist.on_song_end(true), SongEndOutcome::Continue(1));
        assert!(playlist.is_playing());
    }
}
