// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data derived from an opaque media reference
//! string. Classification never inspects file contents or touches the
//! filesystem; two calls with the same reference always yield the same
//! descriptor.

use serde::{Deserialize, Serialize};

/// Represents different types of media referenced by a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Motion media (MP4, WebM, MOV, etc.), served from the videos root.
    Video,
    /// Static image (JPEG, PNG, etc.), served from the images root.
    Image,
}

/// Aspect classification inferred from naming convention.
///
/// Vertical means tall/9:16 social-format media (reels, stories, TikTok);
/// everything else is treated as wide/16:9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    #[default]
    Horizontal,
}

impl Orientation {
    /// Returns `true` for the tall/9:16 classification.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

/// A fully classified media reference, ready for a display surface.
///
/// Produced by [`RuleSet::describe`](crate::classifier::RuleSet::describe);
/// never stored, recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Video or image, decided from the reference name alone.
    pub kind: MediaKind,
    /// Vertical (9:16) or horizontal (16:9), decided from naming convention.
    pub orientation: Orientation,
    /// Absolute reference string for the display surface.
    pub resolved_path: String,
}

impl MediaDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(kind: MediaKind, orientation: Orientation, resolved_path: String) -> Self {
        Self {
            kind,
            orientation,
            resolved_path,
        }
    }

    /// Returns `true` if this descriptor points at motion media.
    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self.kind, MediaKind::Video)
    }
}
