// SPDX-License-Identifier: MPL-2.0
//! Whole-page planning for a project record.
//!
//! [`plan_project`] performs every decision the project page needs before
//! rendering: hero media selection, layout resolution for the three
//! narrative sections, the mockup gallery, and the tiled gallery. The
//! output is plain data for whatever rendering surface sits downstream.

use crate::classifier::RuleSet;
use crate::config::defaults;
use crate::domain::layout::{LayoutCase, SectionOrder};
use crate::domain::media::{MediaDescriptor, MediaKind};
use crate::domain::stats::MetricDisplay;
use crate::layout::resolve_section;
use crate::project::Project;
use serde::{Deserialize, Serialize};

/// Standing labels for the three narrative sections.
const OBJECTIVE_LABEL: &str = "Obiettivo";
const DESCRIPTION_LABEL: &str = "Il Progetto";
const RESULTS_LABEL: &str = "Risultati";

/// Media behind the page title: hero video when one exists, else the
/// thumbnail image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum HeroMedia {
    Video(String),
    Image(String),
}

/// One resolved narrative section. Sections that resolve to no layout are
/// omitted from the plan entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPlan {
    pub label: String,
    pub text: Option<String>,
    pub media: Vec<MediaDescriptor>,
    pub metrics: Vec<MetricDisplay>,
    pub layout: LayoutCase,
}

/// One gallery tile; vertical media spans two rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryTile {
    pub media: MediaDescriptor,
    pub tall: bool,
}

/// The fully resolved page for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPlan {
    pub slug: String,
    pub title: String,
    pub hero: Option<HeroMedia>,
    pub sections: Vec<SectionPlan>,
    /// Vertical lightbox tiles from the mockup list; bare names resolve
    /// with the PNG screenshot default.
    pub mockup_gallery: Vec<MediaDescriptor>,
    pub gallery: Vec<GalleryTile>,
}

/// Resolves everything the project page renders.
#[must_use]
pub fn plan_project(project: &Project, rules: &RuleSet) -> ProjectPlan {
    let metrics: Vec<MetricDisplay> = project
        .metrics()
        .iter()
        .filter_map(|pair| pair.display())
        .collect();

    let narrative = [
        (OBJECTIVE_LABEL, &project.objective, &project.objective_media, Vec::new()),
        (DESCRIPTION_LABEL, &project.description, &project.description_media, Vec::new()),
        (RESULTS_LABEL, &project.results, &project.result_media, metrics),
    ];

    let mut sections = Vec::new();
    for (position, (label, text, references, metrics)) in narrative.into_iter().enumerate() {
        let media = describe_all(references, rules);
        let has_text = text.as_deref().is_some_and(|t| !t.trim().is_empty());
        let order = SectionOrder::for_position(position);

        if let Some(layout) = resolve_section(has_text, &media, metrics.len(), order) {
            sections.push(SectionPlan {
                label: label.to_string(),
                text: text.clone().filter(|t| !t.trim().is_empty()),
                media,
                metrics,
                layout,
            });
        }
    }

    ProjectPlan {
        slug: project.slug.clone(),
        title: project.title.clone(),
        hero: hero_media(project, rules),
        sections,
        mockup_gallery: mockup_gallery(project, rules),
        gallery: gallery_tiles(project, rules),
    }
}

/// Hero selection: local video wins, thumbnail image is the fallback.
///
/// Both fields carry a known kind by contract, so the kind is forced
/// rather than classified from the name: a hero reference like
/// `"SpotHero"` still resolves under the videos root.
fn hero_media(project: &Project, rules: &RuleSet) -> Option<HeroMedia> {
    if let Some(video) = nonempty(project.local_video.as_deref()) {
        return Some(HeroMedia::Video(
            rules.resolve_path(video, MediaKind::Video),
        ));
    }
    let thumbnail = nonempty(project.thumbnail.as_deref())?;
    Some(HeroMedia::Image(
        rules.resolve_path(thumbnail, MediaKind::Image),
    ))
}

fn mockup_gallery(project: &Project, rules: &RuleSet) -> Vec<MediaDescriptor> {
    project
        .mockup_videos
        .iter()
        .filter(|r| !r.trim().is_empty())
        .map(|r| rules.describe_with_image_ext(r, defaults::MOCKUP_IMAGE_EXT))
        .collect()
}

fn gallery_tiles(project: &Project, rules: &RuleSet) -> Vec<GalleryTile> {
    describe_all(&project.gallery_images, rules)
        .into_iter()
        .map(|media| GalleryTile {
            tall: media.orientation.is_vertical(),
            media,
        })
        .collect()
}

fn describe_all(references: &[String], rules: &RuleSet) -> Vec<MediaDescriptor> {
    references
        .iter()
        .filter(|r| !r.trim().is_empty())
        .map(|r| rules.describe(r))
        .collect()
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::MediaColumn;
    use crate::domain::media::{MediaKind, Orientation};

    fn rules() -> RuleSet {
        RuleSet::default()
    }

    #[test]
    fn empty_project_plans_no_sections() {
        let plan = plan_project(&Project::default(), &rules());
        assert!(plan.sections.is_empty());
        assert!(plan.hero.is_none());
        assert!(plan.mockup_gallery.is_empty());
        assert!(plan.gallery.is_empty());
    }

    #[test]
    fn objective_with_vertical_clip_gets_fixed_column() {
        let project = Project {
            title: "Spot".into(),
            slug: "spot".into(),
            objective: Some("Obiettivo della campagna".into()),
            objective_media: vec!["clip_v.mp4".into()],
            ..Project::default()
        };
        let plan = plan_project(&project, &rules());
        assert_eq!(plan.sections.len(), 1);
        let section = &plan.sections[0];
        assert_eq!(section.label, OBJECTIVE_LABEL);
        assert_eq!(section.media[0].kind, MediaKind::Video);
        assert_eq!(section.media[0].orientation, Orientation::Vertical);
        assert_eq!(
            section.layout,
            LayoutCase::TextWithMedia {
                media_column: MediaColumn::Fixed,
                order: SectionOrder::MediaTrailing,
            }
        );
    }

    #[test]
    fn second_section_leads_with_media() {
        let project = Project {
            description: Some("Il progetto".into()),
            description_media: vec!["backstage.jpg".into()],
            ..Project::default()
        };
        let plan = plan_project(&project, &rules());
        assert_eq!(
            plan.sections[0].layout,
            LayoutCase::TextWithMedia {
                media_column: MediaColumn::Flexible,
                order: SectionOrder::MediaLeading,
            }
        );
    }

    #[test]
    fn results_with_horizontal_media_and_degraded_metric() {
        let project = Project {
            results: Some("Risultati della campagna".into()),
            result_media: vec!["shot.jpg".into()],
            views_before: Some(0),
            views_after: Some(500_000),
            ..Project::default()
        };
        let plan = plan_project(&project, &rules());
        let section = &plan.sections[0];
        assert_eq!(section.label, RESULTS_LABEL);
        // before == 0 suppresses the comparison but keeps the counter.
        assert_eq!(
            section.metrics,
            vec![MetricDisplay::Counter {
                label: "Visualizzazioni".into(),
                value: 500_000,
            }]
        );
        assert_eq!(section.layout, LayoutCase::StatsSplit { columns: 1 });
    }

    #[test]
    fn results_with_vertical_media_and_two_metrics_banner() {
        let project = Project {
            results: Some("Risultati".into()),
            result_media: vec!["reel_v".into()],
            views_before: Some(1_000),
            views_after: Some(500_000),
            subs_after: Some(4_800),
            ..Project::default()
        };
        let plan = plan_project(&project, &rules());
        let section = &plan.sections[0];
        assert_eq!(section.metrics.len(), 2);
        assert_eq!(section.layout, LayoutCase::StatsBanner { columns: 2 });
        // Bare reference without "video" in the name resolves as image.
        assert_eq!(section.media[0].resolved_path, "/projects/reel_v.jpg");
    }

    #[test]
    fn hero_prefers_local_video_over_thumbnail() {
        let project = Project {
            local_video: Some("SpotHero".into()),
            thumbnail: Some("cover.jpg".into()),
            ..Project::default()
        };
        let plan = plan_project(&project, &rules());
        // The name never says "video"; the field's contract forces the kind.
        assert_eq!(plan.hero, Some(HeroMedia::Video("/videos/SpotHero.mp4".into())));

        let with_extension = Project {
            local_video: Some("spot-hero.mp4".into()),
            ..Project::default()
        };
        let plan = plan_project(&with_extension, &rules());
        assert_eq!(plan.hero, Some(HeroMedia::Video("/videos/spot-hero.mp4".into())));

        let without_video = Project {
            thumbnail: Some("cover.jpg".into()),
            ..Project::default()
        };
        let plan = plan_project(&without_video, &rules());
        assert_eq!(plan.hero, Some(HeroMedia::Image("/projects/cover.jpg".into())));
    }

    #[test]
    fn mockup_gallery_uses_png_default_for_bare_names() {
        let project = Project {
            mockup_videos: vec!["MNL1-v".into(), "MNLVideo2-v".into()],
            ..Project::default()
        };
        let plan = plan_project(&project, &rules());
        assert_eq!(plan.mockup_gallery[0].resolved_path, "/projects/MNL1-v.png");
        assert_eq!(plan.mockup_gallery[0].kind, MediaKind::Image);
        // "Video" in the name still wins over the screenshot default.
        assert_eq!(plan.mockup_gallery[1].resolved_path, "/videos/MNLVideo2-v.mp4");
        assert_eq!(plan.mockup_gallery[1].kind, MediaKind::Video);
    }

    #[test]
    fn gallery_marks_vertical_tiles_tall() {
        let project = Project {
            gallery_images: vec!["wide.jpg".into(), "tall_v.jpg".into(), "".into()],
            ..Project::default()
        };
        let plan = plan_project(&project, &rules());
        assert_eq!(plan.gallery.len(), 2);
        assert!(!plan.gallery[0].tall);
        assert!(plan.gallery[1].tall);
    }
}
