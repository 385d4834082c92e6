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

//! Event routing for the star field view.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::SkyView,
};

impl AppEventProcessor for SkyView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };

        match key.code {
            KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Down | KeyCode::Right => self.next(),
            KeyCode::Char('k') | KeyCode::Char('h') | KeyCode::Up | KeyCode::Left => self.previous(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.selected() {
                    event_tx.send(AppEvent::StarActivated(id))?;
                }
            }
            _ => {}
        }

        Ok(())
    }
}
