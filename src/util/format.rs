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

use std::path::Path;

/// Formats a duration in seconds into a human-readable `MM:SS` string.
///
/// This is used primarily for displaying song positions and total durations
/// in the player interface.
///
/// # Arguments
///
/// * `total_seconds` - The duration to format, represented as a 64-bit integer.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Shortens `text` to at most `max` characters, marking the cut with an
/// ellipsis.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('\u{2026}');
    short
}

/// The file name of a media reference, or the whole reference if it has none.
pub(crate) fn media_label(reference: &str) -> String {
    Path::new(reference)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| reference.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("Moonlight", 15), "Moonlight");
        assert_eq!(truncate("Clair de lune, Suite bergamasque", 15), "Clair de lune,\u{2026}");
        assert_eq!(truncate("★★★★", 3), "★★\u{2026}");
    }

    #[test]
    fn media_label_is_file_name() {
        assert_eq!(media_label("/photos/2024/beach.jpg"), "beach.jpg");
        assert_eq!(media_label("beach.jpg"), "beach.jpg");
    }
}
