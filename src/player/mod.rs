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

//! Audio playback control and state management.
//!
//! This module provides the high-level [`AudioPlayer`] interface used by the
//! UI to control music playback. It manages a background worker thread that
//! interfaces with the underlying audio library (MPV), ensuring that heavy
//! audio operations do not block the main application thread.
//!
//! The player has no pause, seek or skip. A song plays to its end unless a
//! newly added song replaces it.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{actions::events::AppEvent, model::Song, player::commands::AudioPlayerCommand};

/// Represents the current playback status of the audio engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// What the player bar knows about the song being played.
#[derive(Debug, Default)]
pub(crate) struct NowPlaying {
    pub(crate) song: Option<Song>,
    /// The title reported by the engine, once it has one for this song.
    pub(crate) engine_title: Option<String>,
    pub(crate) duration: Option<u64>,
    pub(crate) time: Option<u64>,
    pub(crate) position: Option<f64>,
}

impl NowPlaying {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Switches to `song`, forgetting everything reported about the last one.
    pub(crate) fn start(&mut self, song: Song) {
        *self = Self {
            song: Some(song),
            ..Self::default()
        };
    }

    pub(crate) fn title(&self) -> Option<&str> {
        let song = self.song.as_ref()?;
        Some(self.engine_title.as_deref().unwrap_or(&song.name))
    }

    pub(crate) fn set_time(&mut self, seconds: f64) {
        self.time = Some(seconds as u64);
        if let Some(duration) = self.duration {
            self.position = if duration > 0 { Some(seconds / duration as f64) } else { None };
        }
    }

    pub(crate) fn finish(&mut self) {
        self.time = self.duration;
        self.position = self.duration.map(|_| 1.0);
    }
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send application-level events (like progress
    ///   updates or errors) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self { command_tx })
    }

    // Maps internal audio backend flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    /// Instructs the worker to load and play a media reference, replacing
    /// whatever is currently loaded.
    pub(crate) fn play_file(&self, filename: &str) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::PlayFile(filename.to_string()))?;
        Ok(())
    }

    /// Adjusts the playback volume relative to the current level.
    ///
    /// # Arguments
    ///
    /// * `delta` - The amount to change the volume (positive or negative).
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::AdjustVolume(delta))?;
        Ok(())
    }

    /// Toggles the audio output between muted and unmuted.
    pub(crate) fn toggle_mute(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::ToggleMute)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(name: &str) -> Song {
        Song {
            id: crate::model::SongId::new(name),
            name: name.to_string(),
            url: crate::model::MediaRef::new(format!("/music/{name}.mp3")),
        }
    }

    #[test]
    fn starting_a_song_forgets_the_previous_one() {
        let mut now_playing = NowPlaying::new();
        now_playing.start(song("first"));
        now_playing.engine_title = Some("First (Live)".to_string());
        now_playing.duration = Some(200);
        now_playing.set_time(50.0);
        assert_eq!(now_playing.title(), Some("First (Live)"));
        assert_eq!(now_playing.position, Some(0.25));

        now_playing.start(song("second"));

        assert_eq!(now_playing.title(), Some("second"));
        assert_eq!(now_playing.duration, None);
        assert_eq!(now_playing.time, None);
        assert_eq!(now_playing.position, None);
    }

    #[test]
    fn nothing_playing_has_no_title() {
        let mut now_playing = NowPlaying::new();
        now_playing.engine_title = Some("stale".to_string());
        assert_eq!(now_playing.title(), None);
    }

    #[test]
    fn idle_wins_over_pause() {
        assert_eq!(AudioPlayer::player_state(true, true), PlayerState::Stopped);
        assert_eq!(AudioPlayer::player_state(false, true), PlayerState::Stopped);
        assert_eq!(AudioPlayer::player_state(true, false), PlayerState::Paused);
        assert_eq!(AudioPlayer::player_state(false, false), PlayerState::Playing);
    }
}
