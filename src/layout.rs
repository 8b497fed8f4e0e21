// SPDX-License-Identifier: MPL-2.0
//! Section layout resolution.
//!
//! Selects exactly one [`LayoutCase`] (or none) for a content section from
//! which optional attributes are populated: text, media, the first media
//! item's orientation, and the populated metric count. The table is
//! evaluated top to bottom, first match wins, and covers every input
//! combination exactly once.

use crate::domain::layout::{
    banner_columns, split_columns, LayoutCase, MediaColumn, SectionOrder,
};
use crate::domain::media::MediaDescriptor;

/// Resolves the layout case for one section.
///
/// `metric_count` is the number of *populated* metrics (see
/// [`MetricPair::display`](crate::domain::stats::MetricPair::display));
/// absent or malformed optional inputs simply deactivate their branch.
/// Returns `None` when nothing is populated and the section is omitted
/// from the page.
#[must_use]
pub fn resolve_section(
    has_text: bool,
    media: &[MediaDescriptor],
    metric_count: usize,
    order: SectionOrder,
) -> Option<LayoutCase> {
    let first_vertical = media.first().map(|d| d.orientation.is_vertical());
    let has_stats = metric_count > 0;

    match (first_vertical, has_stats, has_text) {
        // Vertical media with stats: banner row, then text beside a
        // fixed-width media column.
        (Some(true), true, _) => Some(LayoutCase::StatsBanner {
            columns: banner_columns(metric_count),
        }),
        // Horizontal media with stats: text/stats split, media full-width
        // below.
        (Some(false), true, _) => Some(LayoutCase::StatsSplit {
            columns: split_columns(metric_count),
        }),
        // Stats without media.
        (None, true, _) => Some(LayoutCase::TextWithStats {
            columns: split_columns(metric_count),
        }),
        // Media without stats.
        (Some(vertical), false, _) => Some(LayoutCase::TextWithMedia {
            media_column: if vertical {
                MediaColumn::Fixed
            } else {
                MediaColumn::Flexible
            },
            order,
        }),
        // Text alone.
        (None, false, true) => Some(LayoutCase::TextOnly),
        // Nothing populated: no render.
        (None, false, false) => None,
    }
}
