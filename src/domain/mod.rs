// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no I/O.
//!
//! Everything here is derived data: computed from content records on each
//! render, never persisted, never mutated in place.
//!
//! # Modules
//!
//! - [`media`]: classification results ([`MediaKind`](media::MediaKind),
//!   [`Orientation`](media::Orientation),
//!   [`MediaDescriptor`](media::MediaDescriptor))
//! - [`stats`]: before/after metrics ([`MetricPair`](stats::MetricPair),
//!   [`MetricDisplay`](stats::MetricDisplay))
//! - [`layout`]: section layout cases ([`LayoutCase`](layout::LayoutCase),
//!   [`MediaColumn`](layout::MediaColumn))

pub mod layout;
pub mod media;
pub mod stats;
