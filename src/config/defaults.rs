// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the classification rule set.
//!
//! This module is the single source of truth for the site's naming
//! conventions. Everything here can be overridden through `rules.toml`.

// ==========================================================================
// Path Resolution Defaults
// ==========================================================================

/// Root directory for resolved video paths.
pub const DEFAULT_VIDEOS_ROOT: &str = "/videos";

/// Root directory for resolved image paths.
pub const DEFAULT_IMAGES_ROOT: &str = "/projects";

/// Extension appended to bare (extensionless) video names.
pub const DEFAULT_VIDEO_EXT: &str = "mp4";

/// Extension appended to bare image names in narrative sections.
pub const DEFAULT_IMAGE_EXT: &str = "jpg";

/// Extension appended to bare image names in the mockup gallery, where
/// bare references are vertical screenshots.
pub const MOCKUP_IMAGE_EXT: &str = "png";

// ==========================================================================
// Classification Tables
// ==========================================================================

/// Extensions that always classify a reference as video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "avi"];

/// Known image extensions, stripped before the orientation suffix check.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Base-name suffixes that mark vertical (9:16) media.
pub const VERTICAL_SUFFIXES: &[&str] = &["_v", "-v"];

/// Name substrings that mark vertical media anywhere they appear.
pub const VERTICAL_MARKERS: &[&str] = &[
    "_vertical",
    "_9x16",
    "vertical_",
    "_reel",
    "_story",
    "_tiktok",
];
