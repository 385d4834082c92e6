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

//! Event routing for the launch form.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::{DraftView, draft::DraftFocus},
    state::Action,
};

impl AppEventProcessor for DraftView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => {
                event_tx.send(AppEvent::CloseOverlay)?;
                return Ok(());
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                event_tx.send(AppEvent::LaunchDraft)?;
                return Ok(());
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return Ok(());
            }
            _ => {}
        }

        match self.focus {
            DraftFocus::Message => {
                let before = self.input.value().to_string();
                self.input.handle_event(&event);
                if self.input.value() != before {
                    let text = self.input.value().to_string();
                    event_tx.send(AppEvent::Dispatch(Action::SetDraftText(text)))?;
                }
            }
            DraftFocus::Images => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    if self.image_cursor + 1 < self.image_count {
                        self.image_cursor += 1;
                    }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.image_cursor = self.image_cursor.saturating_sub(1);
                }
                KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                    if self.image_count > 0 {
                        let index = self.image_cursor;
                        event_tx.send(AppEvent::Dispatch(Action::RemoveDraftImage(index)))?;
                    }
                }
                _ => {}
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::KeyEvent;

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_dispatches_the_whole_message() {
        let (tx, rx) = mpsc::channel();
        let mut view = DraftView::new();
        view.open(1, "h");

        view.process_event(press(KeyCode::Char('i')), &tx).unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::Dispatch(Action::SetDraftText(text)) => assert_eq!(text, "hi"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn control_s_launches() {
        let (tx, rx) = mpsc::channel();
        let mut view = DraftView::new();
        view.open(1, "");

        let event = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        view.process_event(event, &tx).unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::LaunchDraft));
        assert_eq!(view.input.value(), "");
    }

    #[test]
    fn image_removal_targets_the_cursor() {
        let (tx, rx) = mpsc::channel();
        let mut view = DraftView::new();
        view.open(1, "");
        view.sync_images(3);

        view.process_event(press(KeyCode::Tab), &tx).unwrap();
        view.process_event(press(KeyCode::Char('j')), &tx).unwrap();
        view.process_event(press(KeyCode::Char('d')), &tx).unwrap();

        assert!(matches!(
            rx.try_recv().unwrap(),
            AppEvent::Dispatch(Action::RemoveDraftImage(1))
        ));
    }

    #[test]
    fn removing_from_an_empty_draft_sends_nothing() {
        let (tx, rx) = mpsc::channel();
        let mut view = DraftView::new();
        view.open(1, "");

        view.process_event(press(KeyCode::Tab), &tx).unwrap();
        view.process_event(press(KeyCode::Char('d')), &tx).unwrap();

        assert!(rx.try_recv().is_err());
    }
}
