// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities required from the host text engine.

use crate::{BoundingBox, Brush, Point, RenderRequest, Size};

/// Resolved direction of a paragraph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

/// A query the host could not answer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    /// The byte offset is not inside any paragraph of the layout.
    OffsetOutOfRange {
        /// The offset that was queried.
        offset: usize,
        /// The length of the laid out text.
        len: usize,
    },
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OffsetOutOfRange { offset, len } => {
                write!(f, "offset {offset} out of range for text of len {len}")
            }
        }
    }
}

impl core::error::Error for LayoutError {}

/// A read-only snapshot of one laid out text block.
///
/// Offsets are byte offsets into the text that was laid out. Lines are numbered from zero and
/// only lines below [`line_count`](Self::line_count) may be queried. A host that applies a line
/// limit reports at most that many lines.
///
/// The trait is object safe so layouts can be handed to observers as `&dyn TextLayout`.
pub trait TextLayout {
    /// Number of lines produced, after the line limit is applied.
    fn line_count(&self) -> usize;

    /// Whether the line limit dropped any line, including a line that holds nothing but an inline
    /// placeholder.
    ///
    /// A placeholder takes no text bytes, so a toggle that wrapped past the limit is only visible
    /// through this.
    fn is_clipped(&self) -> bool;

    /// Size of the layout box. The width is the width lines were broken at.
    fn size(&self) -> Size;

    /// Offset of the first byte on `line`.
    fn line_start(&self, line: usize) -> usize;

    /// Offset one past the last byte on `line`, including trailing whitespace and line breaks.
    fn line_end(&self, line: usize) -> usize;

    /// Top edge of `line`.
    fn line_top(&self, line: usize) -> f32;

    /// Direction of the paragraph containing `offset`.
    fn paragraph_direction(&self, offset: usize) -> Result<Direction, LayoutError>;

    /// The caret offset closest to `point`.
    fn offset_for_position(&self, point: Point) -> usize;

    /// Bounding box of the glyph cluster that starts at `offset`, if there is one.
    fn glyph_bounds(&self, offset: usize) -> Option<BoundingBox>;
}

/// A text engine that can lay out a [`RenderRequest`].
pub trait LayoutHost<B: Brush> {
    /// The layout produced for one render pass.
    type Layout: TextLayout;

    /// Lays out the requested text under its line limit, reserving space for the inline
    /// placeholders it carries.
    fn layout(&mut self, request: &RenderRequest<'_, B>) -> Self::Layout;
}
