// SPDX-License-Identifier: MPL-2.0
//! `reel_layout` classifies portfolio media references and resolves
//! section layouts for a video-production studio site.
//!
//! The engine is pure: given an opaque media reference (filename or URL)
//! it derives kind, orientation, and a resolved path from the name alone,
//! and given a section's populated content it selects exactly one of five
//! mutually exclusive layout cases. Nothing here performs I/O except the
//! explicit rule-file and content-record loaders.
//!
//! # Example
//!
//! ```
//! use reel_layout::classifier::RuleSet;
//! use reel_layout::domain::layout::{LayoutCase, SectionOrder};
//! use reel_layout::layout::resolve_section;
//!
//! let rules = RuleSet::default();
//! let media = vec![rules.describe("clip_v.mp4")];
//! let case = resolve_section(true, &media, 0, SectionOrder::default());
//! assert!(matches!(case, Some(LayoutCase::TextWithMedia { .. })));
//! ```

pub mod cache;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod layout;
pub mod page;
pub mod project;

pub use cache::DescriptorCache;
pub use classifier::RuleSet;
pub use domain::layout::LayoutCase;
pub use domain::media::{MediaDescriptor, MediaKind, Orientation};
pub use error::{Error, Result};
pub use page::{plan_project, ProjectPlan};
pub use project::Project;
