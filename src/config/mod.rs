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

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

use crate::model::star::FieldBounds;

const CONFIG_NAME: &str = "constellation";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub star_count: usize,
    pub field: FieldConfig,
    pub audio_extensions: Vec<String>,
    pub image_extensions: Vec<String>,
    pub log_file: String,
    pub log_level: String,
}

/// Placement of the stars around the pearl, in scene units.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct FieldConfig {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub pearl_radius: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            star_count: 20,
            field: FieldConfig::default(),
            audio_extensions: ["mp3", "flac", "ogg", "opus", "wav", "m4a"]
                .map(String::from)
                .to_vec(),
            image_extensions: ["png", "jpg", "jpeg", "gif", "webp", "bmp"]
                .map(String::from)
                .to_vec(),
            log_file: "constellation.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        let bounds = FieldBounds::default();
        Self {
            inner_radius: bounds.inner_radius,
            outer_radius: bounds.outer_radius,
            min_height: bounds.min_height,
            max_height: bounds.max_height,
            pearl_radius: 2.5,
        }
    }
}

impl FieldConfig {
    pub fn bounds(&self) -> FieldBounds {
        FieldBounds {
            inner_radius: self.inner_radius,
            outer_radius: self.outer_radius,
            min_height: self.min_height,
            max_height: self.max_height,
        }
    }
}

impl AppConfig {
    /// Fixes up values that would make the star field impossible to lay out.
    fn normalised(mut self) -> Self {
        let field = &mut self.field;

        field.inner_radius = field.inner_radius.max(0.0);
        field.outer_radius = field.outer_radius.max(0.0);
        if field.inner_radius > field.outer_radius {
            std::mem::swap(&mut field.inner_radius, &mut field.outer_radius);
        }
        if field.min_height > field.max_height {
            std::mem::swap(&mut field.min_height, &mut field.max_height);
        }
        field.pearl_radius = field.pearl_radius.clamp(0.0, field.inner_radius);

        if self.star_count == 0 {
            self.star_count = AppConfig::default().star_count;
        }

        self
    }

    pub fn is_audio_file(&self, path: &std::path::Path) -> bool {
        has_extension(path, &self.audio_extensions)
    }

    pub fn is_image_file(&self, path: &std::path::Path) -> bool {
        has_extension(path, &self.image_extensions)
    }
}

fn has_extension(path: &std::path::Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

pub fn load_config() -> AppConfig {
    confy::load::<AppConfig>(CONFIG_NAME, None)
        .unwrap_or_default()
        .normalised()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn normalising_swaps_inverted_bounds() {
        let mut config = AppConfig::default();
        config.field.inner_radius = 30.0;
        config.field.outer_radius = 10.0;
        config.field.min_height = 5.0;
        config.field.max_height = -5.0;
        config.star_count = 0;

        let config = config.normalised();

        assert_eq!(config.field.inner_radius, 10.0);
        assert_eq!(config.field.outer_radius, 30.0);
        assert_eq!(config.field.min_height, -5.0);
        assert_eq!(config.field.max_height, 5.0);
        assert_eq!(config.star_count, 20);
    }

    #[test]
    fn media_types_match_case_insensitively() {
        let config = AppConfig::default();

        assert!(config.is_audio_file(Path::new("/music/Song.MP3")));
        assert!(config.is_image_file(Path::new("beach.jpeg")));
        assert!(!config.is_image_file(Path::new("notes.txt")));
        assert!(!config.is_audio_file(Path::new("no_extension")));
    }
}
