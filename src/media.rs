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

//! Local media discovery.
//!
//! This module turns paths given by the user into media the constellation can
//! hold: audio files become song sources named after their tags, and image
//! files become opaque references staged into a star draft.
//!
//! It utilizes `WalkDir` to expand directories and `Lofty` for metadata
//! extraction.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use lofty::prelude::*;
use lofty::probe::Probe;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{
    config::AppConfig,
    model::{MediaRef, SongSource},
};

/// Expands a path into the media files it names.
///
/// A file is returned as-is if it matches `accept`, a directory is walked
/// recursively and its matching files are returned in path order.
fn expand(path: &Path, accept: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        bail!("No such file or directory: {}", path.display());
    }

    if path.is_file() {
        return Ok(if accept(path) { vec![path.to_path_buf()] } else { vec![] });
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && accept(e.path()))
        .map(|e| e.into_path())
        .collect();
    files.sort();

    Ok(files)
}

/// Finds the audio files named by `path`.
pub(crate) fn collect_audio(config: &AppConfig, path: &Path) -> Result<Vec<PathBuf>> {
    let files = expand(path, |p| config.is_audio_file(p))?;
    if files.is_empty() {
        bail!("No audio files found in {}", path.display());
    }

    Ok(files)
}

/// Finds the images named by `paths`, in the order given.
pub(crate) fn collect_images(config: &AppConfig, paths: &[PathBuf]) -> Result<Vec<MediaRef>> {
    let mut images = Vec::new();
    for path in paths {
        for file in expand(path, |p| config.is_image_file(p))? {
            images.push(media_ref(&file)?);
        }
    }

    if images.is_empty() {
        bail!("No images found");
    }

    Ok(images)
}

/// Builds a song source for an audio file.
///
/// The display name is the title tag when the file has one, otherwise the
/// file name.
pub(crate) fn song_source(path: &Path) -> Result<SongSource> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .context("Audio path has no file name")?;

    let name = match Probe::open(path).and_then(|p| p.read()) {
        Ok(tagged_file) => tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
            .and_then(|tag| tag.title().map(|t| t.trim().to_string()))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| file_name.clone()),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unable to read tags");
            file_name.clone()
        }
    };

    debug!(path = %path.display(), name = %name, "audio file probed");

    let url = media_ref(path)?;
    Ok(SongSource { name, url })
}

fn media_ref(path: &Path) -> Result<MediaRef> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let reference = absolute.to_str().context("Path contains invalid UTF-8")?;
    Ok(MediaRef::new(reference))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn scratch_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        dir
    }

    #[test]
    fn directories_expand_to_matching_images_in_order() {
        let dir = scratch_dir();
        let root = dir.path();
        fs::write(root.join("b.png"), b"").unwrap();
        fs::write(root.join("a.jpg"), b"").unwrap();
        fs::write(root.join("notes.txt"), b"").unwrap();
        fs::write(root.join("nested").join("c.webp"), b"").unwrap();

        let images = collect_images(&AppConfig::default(), &[root.to_path_buf()]).unwrap();
        let names: Vec<String> = images
            .iter()
            .map(|i| Path::new(i.as_str()).file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.jpg", "b.png", "c.webp"]);
    }

    #[test]
    fn image_paths_with_spaces_are_found() {
        let dir = scratch_dir();
        let path = dir.path().join("summer at the lake.png");
        fs::write(&path, b"").unwrap();

        let images = collect_images(&AppConfig::default(), &[path]).unwrap();

        assert_eq!(images.len(), 1);
        assert!(images[0].as_str().ends_with("summer at the lake.png"));
    }

    #[test]
    fn missing_path_is_an_error() {
        let config = AppConfig::default();
        assert!(collect_audio(&config, Path::new("/definitely/not/here.mp3")).is_err());
    }

    #[test]
    fn untagged_audio_is_named_after_file() {
        let dir = scratch_dir();
        let path = dir.path().join("Ocean Waves.mp3");
        fs::write(&path, b"not really audio").unwrap();

        let files = collect_audio(&AppConfig::default(), dir.path()).unwrap();
        assert_eq!(files, vec![path.clone()]);

        let source = song_source(&path).unwrap();
        assert_eq!(source.name, "Ocean Waves.mp3");
        assert!(source.url.as_str().ends_with("Ocean Waves.mp3"));
    }
}
