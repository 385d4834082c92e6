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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload potentially
//! blocking filesystem work (walking directories, probing audio tags) from the
//! main UI thread. It provides a dedicated worker loop that translates
//! [`AppCommand`] requests into state [`Action`]s and broadcasts them back to
//! the application via [`AppEvent`]s.

use anyhow::Result;
use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{debug, info};

use crate::{actions::events::AppEvent, config::AppConfig, media, state::Action};

#[derive(Debug)]
pub(crate) enum AppCommand {
    ImportAudio(PathBuf),
    ImportImages(Vec<PathBuf>),
    ExitApplication,
}

/// Spawns a background thread to process application commands.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        while let Ok(request) = command_rx.recv() {
            debug!(?request, "command received");
            if let Err(e) = handle_command(&config, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
            }
        }
    });
}

/// Orchestrates the execution of a single command.
///
/// This function implements the logic for each command and sends the result
/// back through the application event channel.
fn handle_command(config: &AppConfig, command: AppCommand, event_tx: &Sender<AppEvent>) -> Result<()> {
    match command {
        AppCommand::ImportAudio(path) => {
            let files = media::collect_audio(config, &path)?;
            info!(path = %path.display(), count = files.len(), "importing audio");

            // Each file is uploaded on its own so the playlist decides, one
            // at a time, whether there is room for it.
            for file in files {
                let source = media::song_source(&file)?;
                event_tx.send(AppEvent::Dispatch(Action::UploadAudio(source)))?;
            }
        }
        AppCommand::ImportImages(paths) => {
            let images = media::collect_images(config, &paths)?;
            info!(count = images.len(), "importing images");
            event_tx.send(AppEvent::Dispatch(Action::UploadImages(images)))?;
        }
        AppCommand::ExitApplication => {
            event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}
