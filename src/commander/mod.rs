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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching a corresponding
//! application command or event when typing is finished and a command is
//! submitted.
//!
//! Songs and images in commands are numbered from 1, as they are on screen.

use std::{path::PathBuf, sync::mpsc::Sender};

use anyhow::{Context, Result, bail};
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    actions::{commands::AppCommand, events::AppEvent},
    state::Action,
};

/// A parsed command line, ready to be sent.
#[derive(Debug)]
enum Request {
    Command(AppCommand),
    Event(AppEvent),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line.
    ///
    /// Returns whether the event was consumed.
    pub(crate) fn handle_event(
        &mut self,
        event: Event,
        event_tx: &Sender<AppEvent>,
        command_tx: &Sender<AppCommand>,
    ) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    let sent = parse_command(&buffer).and_then(|request| match request {
                        Request::Command(command) => command_tx.send(command).context("Command worker has stopped"),
                        Request::Event(event) => event_tx.send(event).context("Event loop has stopped"),
                    });
                    if let Err(e) = sent {
                        let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
                    }
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(&event);
            }
        }

        true
    }
}

fn parse_command(buffer: &str) -> Result<Request> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let request = match parts.as_slice() {
        ["q"] => Request::Command(AppCommand::ExitApplication),

        ["song", rest @ ..] if !rest.is_empty() => {
            // A single quoted path, otherwise the rest of the line as typed.
            let path = match split_args(rest_of(buffer)) {
                Ok(mut args) if args.len() == 1 => args.remove(0),
                _ => rest_of(buffer).to_string(),
            };
            Request::Command(AppCommand::ImportAudio(PathBuf::from(path)))
        }
        ["img", rest @ ..] if !rest.is_empty() => {
            let paths = split_args(rest_of(buffer))?;
            Request::Command(AppCommand::ImportImages(paths.into_iter().map(PathBuf::from).collect()))
        }
        ["rmimg", slot] => Request::Event(AppEvent::Dispatch(Action::RemoveDraftImage(position(slot)?))),
        ["text", ..] => Request::Event(AppEvent::Dispatch(Action::SetDraftText(rest_of(buffer).to_string()))),
        ["launch"] => Request::Event(AppEvent::LaunchDraft),
        ["cancel"] => Request::Event(AppEvent::CloseOverlay),

        ["open", id] => Request::Event(AppEvent::Dispatch(Action::OpenStar(star_id(id)?))),
        ["edit", id] => Request::Event(AppEvent::Dispatch(Action::BeginEdit(star_id(id)?))),

        ["play", n] => Request::Event(AppEvent::SongActivated(position(n)?)),
        ["del", n] => Request::Event(AppEvent::SongDeleteRequested(position(n)?)),

        [cmd, ..] => bail!("Unknown command: {cmd}"),
        [] => bail!("Empty command"),
    };

    Ok(request)
}

/// Everything after the command word, with its original spacing.
fn rest_of(buffer: &str) -> &str {
    buffer
        .split_once(char::is_whitespace)
        .map_or("", |(_, rest)| rest.trim_start())
}

/// Splits arguments on whitespace. Quotes keep an argument with spaces
/// together and a backslash escapes the next character outside single quotes.
fn split_args(input: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quote: Option<char> = None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (None | Some('"'), '\\') => {
                current.push(chars.next().unwrap_or('\\'));
                in_arg = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_arg = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_arg = true;
            }
        }
    }

    if quote.is_some() {
        bail!("Unclosed quote: {input}");
    }
    if in_arg {
        args.push(current);
    }

    Ok(args)
}

fn star_id(value: &str) -> Result<usize> {
    value.parse().with_context(|| format!("Not a star id: {value}"))
}

/// Converts an on-screen number (from 1) to an index.
fn position(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => bail!("Not a position: {value}"),
    }
}
