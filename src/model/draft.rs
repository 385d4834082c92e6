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

//! Staged star edits.
//!
//! An [`EditDraft`] collects images and a message for a star before it is
//! launched. Nothing in a draft touches the star field until it is committed,
//! so abandoning one has no side effects.

use crate::{errors::StateError, model::MediaRef};

pub(crate) const MAX_IMAGES: usize = 4;
pub(crate) const MAX_TEXT_CHARS: usize = 2500;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct EditDraft {
    images: Vec<MediaRef>,
    text: String,
}

impl EditDraft {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts a draft from existing star content.
    pub(crate) fn prefilled(images: &[MediaRef], text: Option<&str>) -> Self {
        let mut draft = Self::new();
        draft.stage_images(images.iter().cloned());
        draft.text = text.unwrap_or_default().to_string();
        draft
    }

    pub(crate) fn images(&self) -> &[MediaRef] {
        &self.images
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn free_slots(&self) -> usize {
        MAX_IMAGES - self.images.len()
    }

    /// Appends as many of `images` as there are free slots.
    ///
    /// Anything past the cap is dropped rather than rejected. Returns the
    /// number of images that did not fit.
    pub(crate) fn stage_images(&mut self, images: impl IntoIterator<Item = MediaRef>) -> usize {
        let mut dropped = 0;
        for image in images {
            if self.free_slots() > 0 {
                self.images.push(image);
            } else {
                dropped += 1;
            }
        }
        dropped
    }

    pub(crate) fn remove_staged_image(&mut self, index: usize) -> Result<MediaRef, StateError> {
        if index >= self.images.len() {
            return Err(StateError::IndexOutOfRange {
                kind: "image",
                index,
                len: self.images.len(),
            });
        }

        Ok(self.images.remove(index))
    }

    pub(crate) fn set_staged_text(&mut self, text: impl Into<String>) -> Result<(), StateError> {
        let text = text.into();
        let len = text.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(StateError::TooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }

        self.text = text;
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (Vec<MediaRef>, String) {
        (self.images, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> Vec<MediaRef> {
        names.iter().map(|n| MediaRef::from(*n)).collect()
    }

    #[test]
    fn staging_clamps_to_four_images() {
        let mut draft = EditDraft::new();
        assert_eq!(draft.stage_images(images(&["a", "b", "c"])), 0);

        let dropped = draft.stage_images(images(&["d", "e"]));

        assert_eq!(dropped, 1);
        assert_eq!(draft.images(), images(&["a", "b", "c", "d"]).as_slice());
        assert_eq!(draft.free_slots(), 0);
    }

    #[test]
    fn staging_into_full_draft_drops_everything() {
        let mut draft = EditDraft::new();
        draft.stage_images(images(&["a", "b", "c", "d"]));

        assert_eq!(draft.stage_images(images(&["x", "y"])), 2);
        assert_eq!(draft.images().len(), 4);
    }

    #[test]
    fn removing_keeps_order() {
        let mut draft = EditDraft::new();
        draft.stage_images(images(&["a", "b", "c"]));

        let removed = draft.remove_staged_image(1).unwrap();

        assert_eq!(removed.as_str(), "b");
        assert_eq!(draft.images(), images(&["a", "c"]).as_slice());
    }

    #[test]
    fn removing_bad_index_is_rejected() {
        let mut draft = EditDraft::new();
        draft.stage_images(images(&["a"]));

        let err = draft.remove_staged_image(1).unwrap_err();

        assert_eq!(
            err,
            StateError::IndexOutOfRange {
                kind: "image",
                index: 1,
                len: 1
            }
        );
        assert_eq!(draft.images().len(), 1);
    }

    #[test]
    fn text_limit_is_2500_characters() {
        let mut draft = EditDraft::new();

        let exact = "x".repeat(MAX_TEXT_CHARS);
        draft.set_staged_text(exact.clone()).unwrap();
        assert_eq!(draft.text(), exact);

        let err = draft.set_staged_text("x".repeat(MAX_TEXT_CHARS + 1)).unwrap_err();
        assert_eq!(err, StateError::TooLong { len: 2501, max: 2500 });
        assert_eq!(draft.text(), exact);
    }

    #[test]
    fn text_limit_counts_characters_not_bytes() {
        let mut draft = EditDraft::new();
        let stars = "★".repeat(MAX_TEXT_CHARS);
        assert!(draft.set_staged_text(stars).is_ok());
    }

    #[test]
    fn prefilled_copies_star_content() {
        let draft = EditDraft::prefilled(&images(&["a", "b"]), Some("hi"));
        assert_eq!(draft.images(), images(&["a", "b"]).as_slice());
        assert_eq!(draft.text(), "hi");

        let empty = EditDraft::prefilled(&[], None);
        assert_eq!(empty, EditDraft::new());
    }
}
