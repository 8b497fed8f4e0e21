// SPDX-License-Identifier: MPL-2.0
//! Upstream project records.
//!
//! A [`Project`] is one portfolio entry exactly as the content store hands
//! it over (camelCase field names, every narrative field optional). The
//! crate treats records as read-only input; classification and layout are
//! derived fresh on every render and never written back.

use crate::domain::stats::MetricPair;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One portfolio project as stored by the content store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub slug: String,
    pub client: Option<String>,
    pub tagline: Option<String>,
    pub year: Option<i32>,
    pub tags: Vec<String>,
    pub featured: bool,

    /// Hero image fallback when no hero video exists.
    pub thumbnail: Option<String>,
    /// External embed URL for the hero video.
    pub video_url: Option<String>,
    /// Locally hosted hero video, horizontal, plays behind the title.
    pub local_video: Option<String>,

    pub objective: Option<String>,
    pub objective_media: Vec<String>,
    pub description: Option<String>,
    pub description_media: Vec<String>,
    pub results: Option<String>,
    pub result_media: Vec<String>,

    pub views_before: Option<u64>,
    pub views_after: Option<u64>,
    pub subs_before: Option<u64>,
    pub subs_after: Option<u64>,

    /// Vertical media shown in smartphone mockups; bare names here are
    /// screenshots, not photos.
    pub mockup_videos: Vec<String>,
    /// Additional gallery media, mixed orientation.
    pub gallery_images: Vec<String>,
}

impl Project {
    /// The project's metric pairs in display order.
    ///
    /// Unpopulated pairs are returned too; callers filter through
    /// [`MetricPair::display`].
    #[must_use]
    pub fn metrics(&self) -> Vec<MetricPair> {
        vec![
            MetricPair::new("Visualizzazioni", self.views_before, self.views_after),
            MetricPair::new("Followers", self.subs_before, self.subs_after),
        ]
    }
}

/// Loads a single project record from a JSON file.
pub fn load_project(path: &Path) -> Result<Project> {
    let content = fs::read_to_string(path)?;
    let project: Project = serde_json::from_str(&content)?;
    debug!(slug = %project.slug, "loaded project record");
    Ok(project)
}

/// Loads a list of project records from a JSON file, as returned by the
/// content store's listing endpoint.
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let content = fs::read_to_string(path)?;
    let projects: Vec<Project> = serde_json::from_str(&content)?;
    debug!(count = projects.len(), "loaded project records");
    Ok(projects)
}
