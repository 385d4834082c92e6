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

//! Constellation state and its single point of mutation.
//!
//! [`AppState`] owns the star field, the playlist, the listening progression
//! and the draft being edited. The user interface never changes any of them
//! directly: it sends an [`Action`] to [`AppState::dispatch`], which applies
//! it atomically and may hand back an [`Effect`] for the host to carry out.
//!
//! A rejected action leaves the state exactly as it was.

use tracing::{debug, info};

use crate::{
    errors::StateError,
    model::{
        MediaRef, Song, SongId, SongSource, Star, StarId,
        draft::EditDraft,
        playlist::{Playlist, SongEndOutcome},
        progression::Progression,
        star::{FieldBounds, StarField},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    UploadAudio(SongSource),
    BeginEdit(StarId),
    UploadImages(Vec<MediaRef>),
    SetDraftText(String),
    RemoveDraftImage(usize),
    LaunchStar(StarId),
    CancelDraft,
    OpenStar(StarId),
    SelectSong(usize),
    DeleteSong(SongId),
    SongEnded,
    PlaybackChanged(bool),
}

/// Work the host has to do after an action was applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Effect {
    Play(Song),
}

/// A draft together with the star it will be launched into.
#[derive(Debug, Clone)]
pub(crate) struct Editing {
    pub(crate) star: StarId,
    pub(crate) draft: EditDraft,
}

#[derive(Debug)]
pub(crate) struct AppState {
    stars: StarField,
    playlist: Playlist,
    progression: Progression,
    editing: Option<Editing>,
}

impl AppState {
    pub(crate) fn new(star_count: usize, bounds: &FieldBounds) -> Self {
        Self {
            stars: StarField::initialize(star_count, bounds),
            playlist: Playlist::new(),
            progression: Progression::new(),
            editing: None,
        }
    }

    pub(crate) fn stars(&self) -> &[Star] {
        self.stars.stars()
    }

    pub(crate) fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.star(id).ok()
    }

    pub(crate) fn empty_star_count(&self) -> usize {
        self.stars.empty_count()
    }

    pub(crate) fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub(crate) fn progression(&self) -> &Progression {
        &self.progression
    }

    pub(crate) fn editing(&self) -> Option<&Editing> {
        self.editing.as_ref()
    }

    /// Applies a single action.
    ///
    /// # Errors
    ///
    /// Returns the [`StateError`] describing why the action was rejected; the
    /// state is left untouched in that case.
    pub(crate) fn dispatch(&mut self, action: Action) -> Result<Option<Effect>, StateError> {
        match action {
            Action::UploadAudio(source) => {
                let capacity = self.progression.capacity();
                let song = self.playlist.add_song(capacity, source)?.clone();
                info!(song = %song.name, id = %song.id, len = self.playlist.len(), capacity, "song added");
                Ok(Some(Effect::Play(song)))
            }

            Action::BeginEdit(id) => {
                let star = self.stars.star(id)?;
                if star.is_active && !star.can_edit() {
                    return Err(StateError::InvalidState(format!(
                        "star {id} can be edited after {} more views",
                        crate::model::star::EDIT_VIEW_THRESHOLD - star.view_count
                    )));
                }

                let draft = self.stars.begin_edit(id)?;
                debug!(star = id, "draft opened");
                self.editing = Some(Editing { star: id, draft });
                Ok(None)
            }

            Action::UploadImages(images) => {
                let editing = self.editing_mut()?;
                let dropped = editing.draft.stage_images(images);
                if dropped > 0 {
                    debug!(star = editing.star, dropped, "image slots full, extra images dropped");
                }
                Ok(None)
            }

            Action::SetDraftText(text) => {
                self.editing_mut()?.draft.set_staged_text(text)?;
                Ok(None)
            }

            Action::RemoveDraftImage(index) => {
                self.editing_mut()?.draft.remove_staged_image(index)?;
                Ok(None)
            }

            Action::LaunchStar(id) => {
                match &self.editing {
                    Some(editing) if editing.star == id => {}
                    _ => {
                        return Err(StateError::InvalidState(format!(
                            "star {id} has no draft to launch"
                        )));
                    }
                }

                // Existence is checked before the draft is taken so a failed
                // launch keeps it.
                self.stars.star(id)?;
                let editing = self.editing.take().ok_or_else(|| {
                    StateError::InvalidState(format!("star {id} has no draft to launch"))
                })?;
                let star = self.stars.commit_launch(id, editing.draft)?;
                info!(star = id, images = star.images.len(), "star launched");
                Ok(None)
            }

            Action::CancelDraft => {
                if let Some(editing) = self.editing.take() {
                    debug!(star = editing.star, "draft discarded");
                }
                Ok(None)
            }

            Action::OpenStar(id) => {
                let views = self.stars.record_view(id)?;
                debug!(star = id, views, "star opened");

                // The form is gone once another star is open, so its draft goes too.
                if let Some(editing) = self.editing.take() {
                    debug!(star = editing.star, "draft discarded");
                }
                Ok(None)
            }

            Action::SelectSong(index) => {
                self.playlist.select_song(index)?;
                Ok(self.playlist.active_song().cloned().map(Effect::Play))
            }

            Action::DeleteSong(id) => {
                let song = self.playlist.remove_song(&id)?;
                info!(song = %song.name, id = %song.id, "song removed");
                Ok(None)
            }

            Action::SongEnded => {
                let capacity = self.progression.capacity();
                let was_unlocked = self.progression.continuous_unlocked();

                self.progression.record_playback_completion();

                let count = self.progression.playback_count();
                if self.progression.capacity() > capacity {
                    info!(count, capacity = self.progression.capacity(), "playlist capacity grew");
                }
                if !was_unlocked && self.progression.continuous_unlocked() {
                    info!(count, "continuous play unlocked");
                }

                // The song that just ended was played under the old rules, so
                // the completion that unlocks continuous play still stops.
                match self.playlist.on_song_end(was_unlocked) {
                    SongEndOutcome::Continue(next) => {
                        debug!(count, next, "advancing to next song");
                        Ok(self.playlist.active_song().cloned().map(Effect::Play))
                    }
                    SongEndOutcome::Stop => {
                        debug!(count, "playback stopped, awaiting selection");
                        Ok(None)
                    }
                }
            }

            Action::PlaybackChanged(is_playing) => {
                self.playlist.set_playing(is_playing);
                Ok(None)
            }
        }
    }

    fn editing_mut(&mut self) -> Result<&mut Editing, StateError> {
        self.editing
            .as_mut()
            .ok_or_else(|| StateError::InvalidState("no star is being edited".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(20, &FieldBounds::default())
    }

    fn song(n: usize) -> SongSource {
        SongSource::new(format!("song {n}"), format!("/music/{n}.mp3"))
    }

    fn finish_songs(state: &mut AppState, count: usize) -> Vec<Option<Effect>> {
        (0..count)
            .map(|_| {
                state.dispatch(Action::PlaybackChanged(true)).unwrap();
                state.dispatch(Action::SongEnded).unwrap()
            })
            .collect()
    }

    #[test]
    fn progression_unlocks_capacity_and_continuous_play() {
        let mut state = state();

        assert_eq!(state.stars().len(), 20);
        assert!(state.stars().iter().all(|s| !s.is_active));
        assert_eq!(state.progression().capacity(), 5);
        assert!(!state.progression().continuous_unlocked());

        for n in 0..5 {
            let effect = state.dispatch(Action::UploadAudio(song(n))).unwrap();
            assert!(matches!(effect, Some(Effect::Play(s)) if s.name == format!("song {n}")));
        }
        assert_eq!(
            state.dispatch(Action::UploadAudio(song(5))),
            Err(StateError::CapacityExceeded { capacity: 5 })
        );
        assert_eq!(state.playlist().len(), 5);

        let effects = finish_songs(&mut state, 10);
        assert!(effects.iter().all(Option::is_none));
        assert_eq!(state.progression().playback_count(), 10);
        assert_eq!(state.progression().capacity(), 6);
        assert!(state.dispatch(Action::UploadAudio(song(5))).is_ok());

        let effects = finish_songs(&mut state, 49);
        assert!(effects.iter().all(Option::is_none));
        assert!(!state.progression().continuous_unlocked());

        // The 60th completion unlocks continuous play but still stops.
        let effects = finish_songs(&mut state, 1);
        assert_eq!(state.progression().playback_count(), 60);
        assert!(state.progression().continuous_unlocked());
        assert_eq!(effects[0], None);
        assert!(!state.playlist().is_playing());

        // From the 61st on, a finished song advances to the next one.
        state.dispatch(Action::SelectSong(2)).unwrap();
        let effects = finish_songs(&mut state, 1);
        assert_eq!(state.progression().playback_count(), 61);
        assert!(matches!(&effects[0], Some(Effect::Play(s)) if s.name == "song 3"));
        assert_eq!(state.playlist().active_index(), 3);
    }

    #[test]
    fn opening_a_star_discards_the_open_draft() {
        let mut state = state();
        state.dispatch(Action::BeginEdit(0)).unwrap();
        state.dispatch(Action::LaunchStar(0)).unwrap();

        state.dispatch(Action::BeginEdit(1)).unwrap();
        state.dispatch(Action::SetDraftText("never shown".to_string())).unwrap();
        state.dispatch(Action::OpenStar(0)).unwrap();

        assert!(state.editing().is_none());
        assert!(matches!(
            state.dispatch(Action::LaunchStar(1)),
            Err(StateError::InvalidState(_))
        ));
        assert!(!state.star(1).unwrap().is_active);
    }

    #[test]
    fn opening_an_empty_star_keeps_the_draft() {
        let mut state = state();
        state.dispatch(Action::BeginEdit(1)).unwrap();

        assert!(matches!(
            state.dispatch(Action::OpenStar(2)),
            Err(StateError::InvalidState(_))
        ));
        assert_eq!(state.editing().map(|e| e.star), Some(1));
    }

    #[test]
    fn song_end_counts_once_even_when_stopping() {
        let mut state = state();
        state.dispatch(Action::UploadAudio(song(0))).unwrap();

        assert_eq!(state.dispatch(Action::SongEnded), Ok(None));
        assert_eq!(state.progression().playback_count(), 1);
        assert!(!state.playlist().is_playing());
    }

    #[test]
    fn playlist_is_locked_while_playing() {
        let mut state = state();
        state.dispatch(Action::UploadAudio(song(0))).unwrap();
        state.dispatch(Action::UploadAudio(song(1))).unwrap();
        state.dispatch(Action::PlaybackChanged(true)).unwrap();
        let id = state.playlist().songs()[0].id.clone();

        assert_eq!(state.dispatch(Action::SelectSong(0)), Err(StateError::Locked));
        assert_eq!(state.dispatch(Action::DeleteSong(id.clone())), Err(StateError::Locked));

        state.dispatch(Action::PlaybackChanged(false)).unwrap();
        assert!(matches!(
            state.dispatch(Action::SelectSong(0)),
            Ok(Some(Effect::Play(s))) if s.name == "song 0"
        ));
        assert_eq!(state.dispatch(Action::DeleteSong(id)), Ok(None));
        assert_eq!(state.playlist().len(), 1);
    }

    #[test]
    fn star_edit_unlocks_after_ten_views() {
        let mut state = state();

        state.dispatch(Action::BeginEdit(3)).unwrap();
        state
            .dispatch(Action::UploadImages(vec!["a.png".into(), "b.png".into()]))
            .unwrap();
        state.dispatch(Action::SetDraftText("hi".to_string())).unwrap();
        state.dispatch(Action::LaunchStar(3)).unwrap();

        let star = state.star(3).unwrap();
        assert!(star.is_active);
        assert_eq!(star.view_count, 0);
        assert_eq!(star.images.len(), 2);
        assert_eq!(star.text.as_deref(), Some("hi"));
        assert!(state.editing().is_none());

        for _ in 0..9 {
            state.dispatch(Action::OpenStar(3)).unwrap();
        }
        assert!(!state.star(3).unwrap().can_edit());
        assert!(matches!(
            state.dispatch(Action::BeginEdit(3)),
            Err(StateError::InvalidState(_))
        ));

        state.dispatch(Action::OpenStar(3)).unwrap();
        assert!(state.star(3).unwrap().can_edit());

        state.dispatch(Action::BeginEdit(3)).unwrap();
        assert_eq!(state.editing().unwrap().draft.text(), "hi");
        state.dispatch(Action::RemoveDraftImage(0)).unwrap();
        state.dispatch(Action::SetDraftText("again".to_string())).unwrap();
        state.dispatch(Action::LaunchStar(3)).unwrap();

        let star = state.star(3).unwrap();
        assert_eq!(star.view_count, 0);
        assert_eq!(star.images, vec![MediaRef::from("b.png")]);
        assert_eq!(star.text.as_deref(), Some("again"));
    }

    #[test]
    fn viewing_empty_star_is_rejected() {
        let mut state = state();
        assert!(matches!(
            state.dispatch(Action::OpenStar(0)),
            Err(StateError::InvalidState(_))
        ));
        assert_eq!(state.star(0).unwrap().view_count, 0);
    }

    #[test]
    fn draft_actions_need_an_open_draft() {
        let mut state = state();

        assert!(matches!(
            state.dispatch(Action::UploadImages(vec!["a.png".into()])),
            Err(StateError::InvalidState(_))
        ));
        assert!(matches!(
            state.dispatch(Action::LaunchStar(0)),
            Err(StateError::InvalidState(_))
        ));
        assert!(matches!(
            state.dispatch(Action::BeginEdit(99)),
            Err(StateError::NotFound { .. })
        ));
    }

    #[test]
    fn launch_into_other_star_keeps_draft() {
        let mut state = state();
        state.dispatch(Action::BeginEdit(1)).unwrap();

        assert!(matches!(
            state.dispatch(Action::LaunchStar(2)),
            Err(StateError::InvalidState(_))
        ));
        assert_eq!(state.editing().unwrap().star, 1);
        assert!(!state.star(2).unwrap().is_active);
    }

    #[test]
    fn cancelling_draft_has_no_side_effects() {
        let mut state = state();
        state.dispatch(Action::BeginEdit(5)).unwrap();
        state.dispatch(Action::SetDraftText("unsent".to_string())).unwrap();

        state.dispatch(Action::CancelDraft).unwrap();

        assert!(state.editing().is_none());
        let star = state.star(5).unwrap();
        assert!(!star.is_active);
        assert!(star.text.is_none());
        assert_eq!(state.empty_star_count(), 20);
    }

    #[test]
    fn too_long_text_leaves_draft_unchanged() {
        let mut state = state();
        state.dispatch(Action::BeginEdit(0)).unwrap();
        state.dispatch(Action::SetDraftText("short".to_string())).unwrap();

        assert_eq!(
            state.dispatch(Action::SetDraftText("x".repeat(2501))),
            Err(StateError::TooLong { len: 2501, max: 2500 })
        );
        assert_eq!(state.editing().unwrap().draft.text(), "short");
    }

    #[test]
    fn excess_images_are_dropped_silently() {
        let mut state = state();
        state.dispatch(Action::BeginEdit(0)).unwrap();
        let images: Vec<MediaRef> = (0..6).map(|n| MediaRef::new(format!("{n}.png"))).collect();

        assert_eq!(state.dispatch(Action::UploadImages(images)), Ok(None));
        assert_eq!(state.editing().unwrap().draft.images().len(), 4);
    }
}
