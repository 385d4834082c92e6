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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (media import, audio player), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function hands state changes to
//!    [`AppState::dispatch`](crate::state::AppState::dispatch), carries out
//!    the resulting effects on the player, and manages overlays and focus.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{info, warn};

use crate::{
    App, Focus, Overlay,
    components::DraftView,
    errors::StateError,
    model::StarId,
    player::PlayerState,
    render::draw,
    state::{Action, AppState, Effect},
};

const VOLUME_DELTA: i32 = 5;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Dispatch(Action),

    StarActivated(StarId),
    SongActivated(usize),
    SongDeleteRequested(usize),
    LaunchDraft,
    CloseOverlay,

    PlayerStateChanged(PlayerState),
    TitleChanged(String),
    DurationChanged(u64),
    TimeChanged(f64),
    VolumeChanged(u32),
    TrackFinished,

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error if drawing fails, if the audio player can no longer be
/// reached, or if a worker reports a fatal error.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,

            AppEvent::FatalError(message) => return Err(anyhow!(message)),

            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::Dispatch(action) => apply_action(app, action)?,

            AppEvent::StarActivated(id) => {
                let is_active = app.state.star(id).is_some_and(|s| s.is_active);
                let action = if is_active { Action::OpenStar(id) } else { Action::BeginEdit(id) };
                apply_action(app, action)?;
            }

            AppEvent::SongActivated(index) => apply_action(app, Action::SelectSong(index))?,

            AppEvent::SongDeleteRequested(index) => {
                if let Some(song) = app.state.playlist().songs().get(index) {
                    let id = song.id.clone();
                    apply_action(app, Action::DeleteSong(id))?;
                }
            }

            AppEvent::LaunchDraft => match app.state.editing().map(|e| e.star) {
                Some(id) => apply_action(app, Action::LaunchStar(id))?,
                None => app.notice = Some("No star is being edited".to_string()),
            },

            AppEvent::CloseOverlay => {
                if matches!(app.overlay, Overlay::Draft) {
                    apply_action(app, Action::CancelDraft)?;
                }
                app.overlay = Overlay::None;
            }

            // Player State
            AppEvent::PlayerStateChanged(state) => {
                app.player_state = state;
                apply_action(app, Action::PlaybackChanged(state != PlayerState::Stopped))?;
            }
            AppEvent::TitleChanged(title) => app.now_playing.engine_title = Some(title),
            AppEvent::DurationChanged(dur) => app.now_playing.duration = Some(dur),
            AppEvent::VolumeChanged(vol) => app.volume = Some(vol),
            AppEvent::TrackFinished => {
                app.now_playing.finish();
                apply_action(app, Action::SongEnded)?;
            }
            AppEvent::TimeChanged(seconds) => app.now_playing.set_time(seconds),

            AppEvent::Error(message) => {
                warn!(message = %message, "worker error");
                app.notice = Some(message);
            }

            AppEvent::Tick => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies an action to the constellation state and reflects the outcome in
/// the user interface.
///
/// Rejected actions become a notice; they never end the application.
///
/// # Errors
///
/// Returns an error only if a resulting effect cannot be handed to the audio
/// player.
pub(crate) fn apply_action(app: &mut App, action: Action) -> Result<()> {
    let applied = action.clone();

    match dispatch_to_state(&mut app.state, &mut app.draft_view, action) {
        Ok(effect) => {
            after_action(app, &applied);
            if let Some(Effect::Play(song)) = effect {
                info!(song = %song.name, "playing");
                app.audio_player.play_file(song.url.as_str())?;
                app.now_playing.start(song);
            }
        }
        Err(e) => {
            warn!(error = %e, action = action_name(&applied), "action rejected");
            app.notice = Some(e.to_string());
        }
    }

    Ok(())
}

/// Applies an action to the state, keeping the launch form in step with it.
///
/// Accepted text edits leave the form alone: it may already hold keys typed
/// after the edit was queued. A rejected edit puts the form back to the text
/// the draft actually holds.
fn dispatch_to_state(
    state: &mut AppState,
    draft_view: &mut DraftView,
    action: Action,
) -> Result<Option<Effect>, StateError> {
    let is_text_edit = matches!(action, Action::SetDraftText(_));

    let result = state.dispatch(action);
    if result.is_err() && is_text_edit {
        if let Some(editing) = state.editing() {
            draft_view.reset_text(editing.draft.text());
        }
    }

    result
}

/// UI follow-up for an action that was accepted.
fn after_action(app: &mut App, action: &Action) {
    match action {
        Action::BeginEdit(id) => {
            if let Some(editing) = app.state.editing() {
                app.draft_view.open(*id, editing.draft.text());
                app.draft_view.sync_images(editing.draft.images().len());
            }
            app.overlay = Overlay::Draft;
            app.notice = None;
        }
        Action::LaunchStar(id) => {
            app.overlay = Overlay::None;
            app.notice = Some(format!("Star {id} launched"));
        }
        Action::CancelDraft => app.overlay = Overlay::None,
        Action::OpenStar(id) => app.overlay = Overlay::Detail(*id),
        Action::UploadImages(_) | Action::RemoveDraftImage(_) => {
            if let Some(editing) = app.state.editing() {
                app.draft_view.sync_images(editing.draft.images().len());
            }
        }
        Action::UploadAudio(_) | Action::SelectSong(_) | Action::DeleteSong(_) => {
            app.playlist_view.sync(app.state.playlist().len());
            app.notice = None;
        }
        Action::SetDraftText(_) | Action::SongEnded | Action::PlaybackChanged(_) => {}
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::UploadAudio(_) => "upload-audio",
        Action::BeginEdit(_) => "begin-edit",
        Action::UploadImages(_) => "upload-images",
        Action::SetDraftText(_) => "set-draft-text",
        Action::RemoveDraftImage(_) => "remove-draft-image",
        Action::LaunchStar(_) => "launch-star",
        Action::CancelDraft => "cancel-draft",
        Action::OpenStar(_) => "open-star",
        Action::SelectSong(_) => "select-song",
        Action::DeleteSong(_) => "delete-song",
        Action::SongEnded => "song-ended",
        Action::PlaybackChanged(_) => "playback-changed",
    }
}

/// Maps keyboard input to the component that currently owns it.
///
/// The command line gets the first look at every key, unless the launch form
/// is taking text. After that an open overlay takes the key, otherwise the
/// focused panel does, with a handful of global bindings as the fallback.
///
/// # Errors
///
/// Returns an error if an event cannot be sent or a player command fails.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    let taking_text = matches!(app.overlay, Overlay::Draft) && app.draft_view.is_taking_text();
    if (app.commander.active() || !taking_text)
        && app.commander.handle_event(event.clone(), &app.event_tx, &app.command_tx)
    {
        return Ok(());
    }

    match app.overlay {
        Overlay::Draft => return app.draft_view.process_event(event, &app.event_tx),
        Overlay::Detail(id) => return process_detail_key_event(app, id, key),
        Overlay::None => {}
    }

    if process_global_key_event(app, key)? {
        return Ok(());
    }

    match app.focus {
        Focus::Sky => app.sky_view.process_event(event, &app.event_tx),
        Focus::Playlist => app.playlist_view.process_event(event, &app.event_tx),
    }
}

fn process_detail_key_event(app: &mut App, id: StarId, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.event_tx.send(AppEvent::CloseOverlay)?,
        KeyCode::Char('e') => app.event_tx.send(AppEvent::Dispatch(Action::BeginEdit(id)))?,
        _ => {}
    }

    Ok(())
}

/// Handles keys that mean the same thing wherever focus is.
///
/// Returns whether the key was consumed.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Sky => Focus::Playlist,
                Focus::Playlist => Focus::Sky,
            };
        }

        KeyCode::Char('-') => app.audio_player.adjust_volume(-VOLUME_DELTA)?,
        KeyCode::Char('=') | KeyCode::Char('+') => app.audio_player.adjust_volume(VOLUME_DELTA)?,
        KeyCode::Char('m') => app.audio_player.toggle_mute()?,

        _ => return Ok(false),
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::model::{draft::MAX_TEXT_CHARS, star::FieldBounds};

    fn type_char(view: &mut DraftView, c: char, event_tx: &Sender<AppEvent>) {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        view.process_event(Event::Key(key), event_tx).unwrap();
    }

    fn handle_next(state: &mut AppState, view: &mut DraftView, event_rx: &Receiver<AppEvent>) -> bool {
        match event_rx.try_recv() {
            Ok(AppEvent::Dispatch(action)) => {
                let _ = dispatch_to_state(state, view, action);
                true
            }
            Ok(other) => panic!("unexpected event: {other:?}"),
            Err(_) => false,
        }
    }

    fn editing_state() -> AppState {
        let mut state = AppState::new(3, &FieldBounds::default());
        state.dispatch(Action::BeginEdit(0)).unwrap();
        state
    }

    #[test]
    fn typing_ahead_of_the_event_loop_keeps_every_key() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut state = editing_state();
        let mut view = DraftView::new();
        view.open(0, "");

        type_char(&mut view, 'a', &event_tx);
        type_char(&mut view, 'b', &event_tx);
        assert!(handle_next(&mut state, &mut view, &event_rx));
        type_char(&mut view, 'c', &event_tx);
        while handle_next(&mut state, &mut view, &event_rx) {}

        assert_eq!(view.text(), "abc");
        assert_eq!(state.editing().unwrap().draft.text(), "abc");
    }

    #[test]
    fn rejected_text_puts_the_form_back() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut state = editing_state();
        let full = "x".repeat(MAX_TEXT_CHARS);
        state.dispatch(Action::SetDraftText(full.clone())).unwrap();
        let mut view = DraftView::new();
        view.open(0, &full);

        type_char(&mut view, 'y', &event_tx);
        while handle_next(&mut state, &mut view, &event_rx) {}

        assert_eq!(view.text(), full);
        assert_eq!(state.editing().unwrap().draft.text(), full);
    }
}
