// SPDX-License-Identifier: MPL-2.0
//! Layout cases and geometry data for a content section.
//!
//! The original site expressed these as nested conditional rendering
//! blocks; here each mutually exclusive outcome is one variant of a closed
//! enum so a rendering surface matches once and cannot fall through.
//! Geometry is data (column modes, grid counts), never styling.

use serde::{Deserialize, Serialize};

// =============================================================================
// Geometry
// =============================================================================

/// How the media column of a split layout behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaColumn {
    /// Fixed-width column for vertical (9:16) media.
    Fixed,
    /// Flexible half-width column for horizontal (16:9) media.
    Flexible,
}

/// Which side of a text/media split the media lands on.
///
/// Purely presentational; stats-less sections alternate by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionOrder {
    /// Text first, media second.
    #[default]
    MediaTrailing,
    /// Media first, text second.
    MediaLeading,
}

impl SectionOrder {
    /// Ordering convention for the section at `position` (zero-based):
    /// the first section trails, then alternate.
    #[must_use]
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            SectionOrder::MediaTrailing
        } else {
            SectionOrder::MediaLeading
        }
    }
}

/// Column count for a dedicated stats banner row.
///
/// One metric gets a single centered column, two get a pair, three or four
/// spread up to four columns but never more than the populated count.
#[must_use]
pub fn banner_columns(metric_count: usize) -> usize {
    match metric_count {
        0 => 0,
        1 => 1,
        2 => 2,
        n => n.min(4),
    }
}

/// Column count for a stats grid sitting beside text: one metric stays in
/// a single column, anything more wraps into two.
#[must_use]
pub fn split_columns(metric_count: usize) -> usize {
    match metric_count {
        0 => 0,
        1 => 1,
        _ => 2,
    }
}

// =============================================================================
// Layout cases
// =============================================================================

/// One of the five mutually exclusive rendering strategies for a section.
///
/// Resolved fresh on every render by
/// [`resolve_section`](crate::layout::resolve_section); an empty section
/// resolves to no case at all and is omitted from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "case", rename_all = "snake_case")]
pub enum LayoutCase {
    /// Vertical media with stats: metrics banner first, then text beside a
    /// fixed-width media column.
    StatsBanner {
        /// Grid columns for the banner row.
        columns: usize,
    },
    /// Horizontal media with stats: text and stats side by side, media
    /// full-width below.
    StatsSplit {
        /// Grid columns for the stats half.
        columns: usize,
    },
    /// Stats without media: text and stats side by side.
    TextWithStats {
        /// Grid columns for the stats half.
        columns: usize,
    },
    /// Media without stats: text and media side by side.
    TextWithMedia {
        media_column: MediaColumn,
        order: SectionOrder,
    },
    /// Text alone, single constrained column.
    TextOnly,
}
