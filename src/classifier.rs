// SPDX-License-Identifier: MPL-2.0
//! Media classification engine.
//!
//! Maps opaque media references (bare filenames or URLs) to
//! [`MediaDescriptor`]s using nothing but the reference string: a known
//! video extension or a `"video"` substring marks motion media, naming
//! conventions (`_v` suffix, `_reel`, `_9x16`, ...) mark vertical content,
//! and bare names are resolved against a per-kind root directory.
//!
//! The match tables are configuration data, not hard-coded logic: a
//! [`RuleSet`] is an ordinary serde document (see [`crate::config`]) so a
//! site with different naming conventions supplies its own markers.
//!
//! # Examples
//!
//! ```
//! use reel_layout::classifier::RuleSet;
//! use reel_layout::domain::media::{MediaKind, Orientation};
//!
//! let rules = RuleSet::default();
//! let d = rules.describe("BackstageVideo_v");
//! assert_eq!(d.kind, MediaKind::Video);
//! assert_eq!(d.orientation, Orientation::Vertical);
//! assert_eq!(d.resolved_path, "/videos/BackstageVideo_v.mp4");
//! ```

use crate::config::defaults;
use crate::domain::media::{MediaDescriptor, MediaKind, Orientation};
use serde::{Deserialize, Serialize};

/// Case-insensitive name marker that promotes an image-looking reference
/// to a video (`"MyVideoClip.png"` is a video).
const VIDEO_NAME_MARKER: &str = "video";

/// Prefixes that mark a reference as already resolved.
const PASSTHROUGH_PREFIXES: &[&str] = &["/", "http"];

/// Classification rules for one content set.
///
/// All fields have site-convention defaults; the whole struct round-trips
/// through `rules.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Root directory for resolved video paths.
    pub videos_root: String,
    /// Root directory for resolved image paths.
    pub images_root: String,
    /// Extension appended to bare video names.
    pub video_default_ext: String,
    /// Extension appended to bare image names. Call sites with a different
    /// convention (mockup screenshots are PNG) override per call.
    pub image_default_ext: String,
    /// Extensions that always mean video.
    pub video_extensions: Vec<String>,
    /// Known image extensions, used when stripping a trailing extension
    /// for the orientation check.
    pub image_extensions: Vec<String>,
    /// Base-name suffixes that mark vertical media.
    pub vertical_suffixes: Vec<String>,
    /// Substrings anywhere in the name that mark vertical media.
    pub vertical_markers: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            videos_root: defaults::DEFAULT_VIDEOS_ROOT.to_string(),
            images_root: defaults::DEFAULT_IMAGES_ROOT.to_string(),
            video_default_ext: defaults::DEFAULT_VIDEO_EXT.to_string(),
            image_default_ext: defaults::DEFAULT_IMAGE_EXT.to_string(),
            video_extensions: to_owned(defaults::VIDEO_EXTENSIONS),
            image_extensions: to_owned(defaults::IMAGE_EXTENSIONS),
            vertical_suffixes: to_owned(defaults::VERTICAL_SUFFIXES),
            vertical_markers: to_owned(defaults::VERTICAL_MARKERS),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl RuleSet {
    /// Decides whether a reference names a video or an image.
    ///
    /// Ordered rules, first match wins: a known video extension, then a
    /// case-insensitive `"video"` substring anywhere in the name. Unknown
    /// extensions default to image.
    #[must_use]
    pub fn classify_kind(&self, reference: &str) -> MediaKind {
        let lower = reference.to_lowercase();
        if self
            .video_extensions
            .iter()
            .any(|ext| ends_with_extension(&lower, ext))
        {
            return MediaKind::Video;
        }
        if lower.contains(VIDEO_NAME_MARKER) {
            return MediaKind::Video;
        }
        MediaKind::Image
    }

    /// Decides vertical vs horizontal from naming convention.
    ///
    /// The trailing media extension (if any) is stripped before the suffix
    /// check so `reel_v.mp4` matches `_v`. Any rule matching means
    /// vertical; the rules never conflict.
    #[must_use]
    pub fn classify_orientation(&self, reference: &str) -> Orientation {
        let lower = reference.to_lowercase();
        let base = self.strip_media_extension(&lower);

        let suffix_match = self.vertical_suffixes.iter().any(|s| base.ends_with(s.as_str()));
        let marker_match = self.vertical_markers.iter().any(|m| lower.contains(m.as_str()));

        if suffix_match || marker_match {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Resolves a reference to an absolute path for the given kind, using
    /// the rule set's default image extension.
    #[must_use]
    pub fn resolve_path(&self, reference: &str, kind: MediaKind) -> String {
        self.resolve_path_with_image_ext(reference, kind, &self.image_default_ext)
    }

    /// Resolves a reference with an explicit image default extension.
    ///
    /// Absolute (`/...`) and external (`http...`) references pass through
    /// unchanged. Bare names are prefixed with the kind's root; names with
    /// no extension additionally get the kind's default extension.
    #[must_use]
    pub fn resolve_path_with_image_ext(
        &self,
        reference: &str,
        kind: MediaKind,
        image_ext: &str,
    ) -> String {
        // Caller misuse; downstream surfaces omit items with no path.
        if reference.is_empty() {
            return String::new();
        }
        if is_passthrough(reference) {
            return reference.to_string();
        }

        let root = match kind {
            MediaKind::Video => &self.videos_root,
            MediaKind::Image => &self.images_root,
        };

        if reference.contains('.') {
            return format!("{root}/{reference}");
        }

        let ext = match kind {
            MediaKind::Video => &self.video_default_ext,
            MediaKind::Image => image_ext,
        };
        format!("{root}/{reference}.{ext}")
    }

    /// Computes the full descriptor for a reference.
    ///
    /// Kind is decided first since the resolved root and default extension
    /// depend on it.
    #[must_use]
    pub fn describe(&self, reference: &str) -> MediaDescriptor {
        self.describe_with_image_ext(reference, &self.image_default_ext)
    }

    /// Computes the full descriptor with an explicit image default
    /// extension for bare names.
    #[must_use]
    pub fn describe_with_image_ext(&self, reference: &str, image_ext: &str) -> MediaDescriptor {
        let kind = self.classify_kind(reference);
        let orientation = self.classify_orientation(reference);
        let resolved_path = self.resolve_path_with_image_ext(reference, kind, image_ext);
        MediaDescriptor::new(kind, orientation, resolved_path)
    }

    /// Strips one trailing known media extension from an already lowercased
    /// reference, returning the base name.
    fn strip_media_extension<'a>(&self, lower: &'a str) -> &'a str {
        for ext in self.video_extensions.iter().chain(self.image_extensions.iter()) {
            if let Some(base) = lower.strip_suffix(ext.as_str()) {
                if let Some(base) = base.strip_suffix('.') {
                    return base;
                }
            }
        }
        lower
    }
}

fn ends_with_extension(lower: &str, ext: &str) -> bool {
    lower
        .strip_suffix(ext)
        .and_then(|rest| rest.strip_suffix('.'))
        .is_some()
}

fn is_passthrough(reference: &str) -> bool {
    PASSTHROUGH_PREFIXES.iter().any(|p| reference.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_extension_wins_over_name() {
        let rules = RuleSet::default();
        assert_eq!(rules.classify_kind("holiday_clip.MP4"), MediaKind::Video);
        assert_eq!(rules.classify_kind("clip.webm"), MediaKind::Video);
        assert_eq!(rules.classify_kind("clip.mov"), MediaKind::Video);
        assert_eq!(rules.classify_kind("clip.avi"), MediaKind::Video);
    }

    #[test]
    fn video_substring_beats_image_extension() {
        let rules = RuleSet::default();
        assert_eq!(rules.classify_kind("MyVideoClip.png"), MediaKind::Video);
        assert_eq!(rules.classify_kind("MyClip.png"), MediaKind::Image);
    }

    #[test]
    fn unknown_extension_defaults_to_image() {
        let rules = RuleSet::default();
        assert_eq!(rules.classify_kind("scan.tiff"), MediaKind::Image);
        assert_eq!(rules.classify_kind("archive.zip"), MediaKind::Image);
    }

    #[test]
    fn suffix_marks_vertical_after_extension_strip() {
        let rules = RuleSet::default();
        assert_eq!(rules.classify_orientation("reel_v.mp4"), Orientation::Vertical);
        assert_eq!(rules.classify_orientation("reel-v.MP4"), Orientation::Vertical);
        assert_eq!(rules.classify_orientation("reel.mp4"), Orientation::Horizontal);
        // Without the strip, "_v.mp4" would not end with "_v".
        assert_eq!(rules.classify_orientation("shot_v.jpg"), Orientation::Vertical);
    }

    #[test]
    fn markers_match_anywhere_in_the_name() {
        let rules = RuleSet::default();
        assert_eq!(rules.classify_orientation("story_reel.mp4"), Orientation::Vertical);
        assert_eq!(rules.classify_orientation("promo_9x16.mp4"), Orientation::Vertical);
        assert_eq!(rules.classify_orientation("vertical_teaser"), Orientation::Vertical);
        assert_eq!(rules.classify_orientation("campaign_tiktok.mp4"), Orientation::Vertical);
        assert_eq!(rules.classify_orientation("wide_promo.mp4"), Orientation::Horizontal);
    }

    #[test]
    fn absolute_and_external_references_pass_through() {
        let rules = RuleSet::default();
        assert_eq!(
            rules.resolve_path("/already/absolute.jpg", MediaKind::Image),
            "/already/absolute.jpg"
        );
        assert_eq!(
            rules.resolve_path("https://cdn.example.com/clip.mp4", MediaKind::Video),
            "https://cdn.example.com/clip.mp4"
        );
    }

    #[test]
    fn bare_names_gain_root_and_extension() {
        let rules = RuleSet::default();
        assert_eq!(rules.resolve_path("name", MediaKind::Video), "/videos/name.mp4");
        assert_eq!(rules.resolve_path("name", MediaKind::Image), "/projects/name.jpg");
        assert_eq!(
            rules.resolve_path_with_image_ext("mockup", MediaKind::Image, "png"),
            "/projects/mockup.png"
        );
    }

    #[test]
    fn named_extensions_keep_their_extension() {
        let rules = RuleSet::default();
        assert_eq!(rules.resolve_path("clip.mp4", MediaKind::Video), "/videos/clip.mp4");
        assert_eq!(rules.resolve_path("shot.png", MediaKind::Image), "/projects/shot.png");
    }

    #[test]
    fn describe_is_deterministic() {
        let rules = RuleSet::default();
        let first = rules.describe("BackstageVideo_v");
        let second = rules.describe("BackstageVideo_v");
        assert_eq!(first, second);
        assert_eq!(first.kind, MediaKind::Video);
        assert_eq!(first.orientation, Orientation::Vertical);
        assert_eq!(first.resolved_path, "/videos/BackstageVideo_v.mp4");
    }

    #[test]
    fn empty_reference_degrades_to_image() {
        let rules = RuleSet::default();
        let d = rules.describe("");
        assert_eq!(d.kind, MediaKind::Image);
        assert_eq!(d.orientation, Orientation::Horizontal);
        // Downstream rendering drops items with no path.
        assert_eq!(d.resolved_path, "");
    }

    #[test]
    fn custom_markers_replace_the_defaults() {
        let rules = RuleSet {
            vertical_markers: vec!["_short".to_string()],
            ..RuleSet::default()
        };
        assert_eq!(rules.classify_orientation("promo_short.mp4"), Orientation::Vertical);
        assert_eq!(rules.classify_orientation("promo_reel.mp4"), Orientation::Horizontal);
    }
}
