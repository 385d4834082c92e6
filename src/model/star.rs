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

//! The star field.
//!
//! A fixed number of stars is scattered around the pearl when the application
//! starts. Each one begins empty and becomes active when a draft is launched
//! into it. Stars are never created or destroyed afterwards.
//!
//! # Lifecycle
//!
//! * `Empty --launch--> Active`
//! * `Active --view--> Active` (view count + 1)
//! * `Active --edit--> Active` (only once viewed [`EDIT_VIEW_THRESHOLD`]
//!   times, content replaced, view count reset)

use std::f64::consts::TAU;

use crate::{
    errors::StateError,
    model::{Position, Star, StarId, draft::EditDraft},
};

pub(crate) const EDIT_VIEW_THRESHOLD: u32 = 10;

/// Where stars may be placed: an annulus around the origin on the horizontal
/// plane, within a band of heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FieldBounds {
    pub(crate) inner_radius: f64,
    pub(crate) outer_radius: f64,
    pub(crate) min_height: f64,
    pub(crate) max_height: f64,
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self {
            inner_radius: 8.0,
            outer_radius: 20.0,
            min_height: -1.5,
            max_height: 4.5,
        }
    }
}

impl FieldBounds {
    fn random_position(&self) -> Position {
        let theta = rand::random::<f64>() * TAU;
        let radius = self.inner_radius + rand::random::<f64>() * (self.outer_radius - self.inner_radius);
        let y = self.min_height + rand::random::<f64>() * (self.max_height - self.min_height);

        Position {
            x: radius * theta.cos(),
            y,
            z: radius * theta.sin(),
        }
    }
}

impl Star {
    fn empty(id: StarId, position: Position) -> Self {
        Self {
            id,
            position,
            is_active: false,
            images: Vec::new(),
            text: None,
            view_count: 0,
        }
    }

    /// Whether the star has been viewed often enough to be re-launched.
    pub(crate) fn can_edit(&self) -> bool {
        self.view_count >= EDIT_VIEW_THRESHOLD
    }
}

#[derive(Debug, Clone)]
pub(crate) struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Scatters `count` empty stars with ids `0..count` inside `bounds`.
    pub(crate) fn initialize(count: usize, bounds: &FieldBounds) -> Self {
        let stars = (0..count)
            .map(|id| Star::empty(id, bounds.random_position()))
            .collect();

        Self { stars }
    }

    pub(crate) fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub(crate) fn star(&self, id: StarId) -> Result<&Star, StateError> {
        self.stars
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| StateError::star_not_found(id))
    }

    fn star_mut(&mut self, id: StarId) -> Result<&mut Star, StateError> {
        self.stars
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StateError::star_not_found(id))
    }

    pub(crate) fn empty_count(&self) -> usize {
        self.stars.iter().filter(|s| !s.is_active).count()
    }

    /// Returns a draft holding the star's current content.
    pub(crate) fn begin_edit(&self, id: StarId) -> Result<EditDraft, StateError> {
        let star = self.star(id)?;
        Ok(EditDraft::prefilled(&star.images, star.text.as_deref()))
    }

    /// Launches `draft` into the star, activating it and resetting its view
    /// count. This is the only way a star becomes active.
    pub(crate) fn commit_launch(&mut self, id: StarId, draft: EditDraft) -> Result<&Star, StateError> {
        let star = self.star_mut(id)?;
        let (images, text) = draft.into_parts();

        star.is_active = true;
        star.images = images;
        star.text = Some(text).filter(|t| !t.is_empty());
        star.view_count = 0;

        Ok(star)
    }

    pub(crate) fn record_view(&mut self, id: StarId) -> Result<u32, StateError> {
        let star = self.star_mut(id)?;
        if !star.is_active {
            return Err(StateError::InvalidState(format!(
                "star {id} is empty, launch it before viewing"
            )));
        }

        star.view_count = star.view_count.saturating_add(1);
        Ok(star.view_count)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::MediaRef;

    fn draft(images: &[&str], text: &str) -> EditDraft {
        let mut draft = EditDraft::new();
        draft.stage_images(images.iter().map(|i| MediaRef::from(*i)));
        draft.set_staged_text(text).unwrap();
        draft
    }

    #[test]
    fn initialize_places_empty_stars_inside_bounds() {
        let bounds = FieldBounds::default();
        let field = StarField::initialize(200, &bounds);

        assert_eq!(field.stars().len(), 200);
        let ids: HashSet<StarId> = field.stars().iter().map(|s| s.id).collect();
        assert_eq!(ids, (0..200).collect());

        for star in field.stars() {
            let r = star.position.horizontal_radius();
            assert!(r >= bounds.inner_radius - 1e-9 && r <= bounds.outer_radius + 1e-9);
            assert!(star.position.y >= bounds.min_height && star.position.y <= bounds.max_height);
            assert!(!star.is_active);
            assert!(star.images.is_empty());
            assert!(star.text.is_none());
            assert_eq!(star.view_count, 0);
        }
        assert_eq!(field.empty_count(), 200);
    }

    #[test]
    fn begin_edit_unknown_star_is_not_found() {
        let field = StarField::initialize(3, &FieldBounds::default());
        assert_eq!(field.begin_edit(3).unwrap_err(), StateError::star_not_found(3));
    }

    #[test]
    fn begin_edit_does_not_mutate() {
        let mut field = StarField::initialize(3, &FieldBounds::default());
        field.commit_launch(1, draft(&["a"], "note")).unwrap();

        let mut staged = field.begin_edit(1).unwrap();
        staged.set_staged_text("changed").unwrap();

        assert_eq!(field.star(1).unwrap().text.as_deref(), Some("note"));
        assert_eq!(staged.images(), &[MediaRef::from("a")]);
    }

    #[test]
    fn commit_launch_activates_and_resets_views() {
        let mut field = StarField::initialize(5, &FieldBounds::default());
        let position = field.star(2).unwrap().position;

        field.commit_launch(2, draft(&["a", "b"], "hi")).unwrap();
        for _ in 0..4 {
            field.record_view(2).unwrap();
        }
        let star = field.commit_launch(2, draft(&["c"], "")).unwrap();

        assert!(star.is_active);
        assert_eq!(star.view_count, 0);
        assert_eq!(star.images, vec![MediaRef::from("c")]);
        assert_eq!(star.text, None);
        assert_eq!(star.position, position);
        assert_eq!(field.empty_count(), 4);
    }

    #[test]
    fn commit_launch_unknown_star_is_not_found() {
        let mut field = StarField::initialize(2, &FieldBounds::default());
        assert!(matches!(
            field.commit_launch(9, EditDraft::new()),
            Err(StateError::NotFound { .. })
        ));
    }

    #[test]
    fn viewing_empty_star_is_invalid() {
        let mut field = StarField::initialize(2, &FieldBounds::default());

        assert!(matches!(field.record_view(0), Err(StateError::InvalidState(_))));
        assert_eq!(field.star(0).unwrap().view_count, 0);
        assert!(matches!(field.record_view(7), Err(StateError::NotFound { .. })));
    }

    #[test]
    fn edit_unlocks_after_ten_views() {
        let mut field = StarField::initialize(1, &FieldBounds::default());
        field.commit_launch(0, draft(&[], "memo")).unwrap();

        for expected in 1..=9 {
            assert_eq!(field.record_view(0).unwrap(), expected);
            assert!(!field.star(0).unwrap().can_edit());
        }

        field.record_view(0).unwrap();
        assert!(field.star(0).unwrap().can_edit());
    }
}
