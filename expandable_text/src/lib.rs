// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-limited text with an inline toggle placed at the truncation point.
//!
//! An [`ExpandableText`] shows a block of [`StyledText`] truncated to a number of lines. When the
//! text does not fit, a toggle element (for example "Show more") is laid out inline, as a fixed
//! size placeholder, exactly where the visible text ends. Flipping the expanded flag switches to a
//! larger line limit.
//!
//! Glyph shaping, line breaking and bidi resolution are done by a host text engine reached
//! through the [`LayoutHost`], [`TextLayout`] and [`MeasureHost`] traits. The core of this crate is
//! [`resolve`], which decides where the visible text must be cut so that the toggle fits on the
//! last permitted line without covering a glyph and without leaving a trailing space.
//!
//! The controller and the host talk in render passes:
//!
//! ```text
//! ExpandableText::render_request ──▶ LayoutHost::layout ──▶ ExpandableText::accept_layout
//!          ▲                                                        │
//!          └──────────────── repeat while the state changes ◀───────┘
//! ```
//!
//! [`ExpandableText::layout_with`] runs that loop to convergence.
//!
//! ## Features
//!
//! - `std` (enabled by default): Currently only used by the `parley` feature.
//! - `parley`: A [`LayoutHost`] implementation backed by the [Parley](https://docs.rs/parley)
//!   text layout crate, in the `parley_host` module.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod config;
mod controller;
mod error;
mod geometry;
mod layout;
mod measure;
mod resolve;
mod text;

#[cfg(feature = "parley")]
pub mod parley_host;

#[cfg(test)]
mod tests;

pub use crate::config::{ExpandableTextConfig, InlineContent, LineLimit};
pub use crate::controller::{
    ExpandableText, InlinePlaceholder, LayoutOutcome, MAX_LAYOUT_PASSES, Phase, RenderKey,
    RenderRequest, TOGGLE_PLACEHOLDER_ID,
};
pub use crate::error::{Error, ErrorKind};
pub use crate::geometry::{BoundingBox, Point, Size, ToggleSize};
pub use crate::layout::{Direction, LayoutError, LayoutHost, TextLayout};
pub use crate::measure::{MeasureHost, Toggle, ToggleMeasurer};
pub use crate::resolve::{ResolveInput, TruncationState, resolve};
pub use crate::text::{
    Brush, FontStyle, ParagraphStyle, StyleSpan, StyledText, TextAlign, TextDecoration,
    TextOverflow, TextStyle,
};
