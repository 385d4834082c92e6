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

//! The star field view.
//!
//! Stars are visited in the order they sit around the pearl, so moving the
//! cursor sweeps around the sky rather than jumping about by id.

mod event;
mod render;

use crate::{
    config::FieldConfig,
    model::{Star, StarId},
};

pub(crate) struct SkyView {
    order: Vec<StarId>,
    cursor: usize,
    extent: f64,
    pearl_radius: f64,
    pub(crate) is_focused: bool,
}

impl SkyView {
    pub(crate) fn new(stars: &[Star], field: &FieldConfig) -> Self {
        let mut by_angle: Vec<(f64, StarId)> = stars
            .iter()
            .map(|s| (s.position.z.atan2(s.position.x), s.id))
            .collect();
        by_angle.sort_by(|a, b| a.0.total_cmp(&b.0));

        Self {
            order: by_angle.into_iter().map(|(_, id)| id).collect(),
            cursor: 0,
            extent: field.outer_radius.max(1.0) * 1.1,
            pearl_radius: field.pearl_radius,
            is_focused: true,
        }
    }

    pub(crate) fn selected(&self) -> Option<StarId> {
        self.order.get(self.cursor).copied()
    }

    fn next(&mut self) {
        if !self.order.is_empty() {
            self.cursor = (self.cursor + 1) % self.order.len();
        }
    }

    fn previous(&mut self) {
        if !self.order.is_empty() {
            self.cursor = (self.cursor + self.order.len() - 1) % self.order.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    fn star_at(id: StarId, x: f64, z: f64) -> Star {
        Star {
            id,
            position: Position { x, y: 0.0, z },
            is_active: false,
            images: vec![],
            text: None,
            view_count: 0,
        }
    }

    #[test]
    fn cursor_sweeps_around_the_pearl() {
        let stars = vec![
            star_at(0, 0.0, 10.0),
            star_at(1, -10.0, -1.0),
            star_at(2, 10.0, 0.0),
        ];
        let mut view = SkyView::new(&stars, &FieldConfig::default());

        assert_eq!(view.selected(), Some(1));
        view.next();
        assert_eq!(view.selected(), Some(2));
        view.next();
        assert_eq!(view.selected(), Some(0));
        view.next();
        assert_eq!(view.selected(), Some(1));
        view.previous();
        assert_eq!(view.selected(), Some(0));
    }

    #[test]
    fn empty_sky_has_no_selection() {
        let mut view = SkyView::new(&[], &FieldConfig::default());
        view.next();
        assert_eq!(view.selected(), None);
    }
}
