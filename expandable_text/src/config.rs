// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::num::NonZeroUsize;

use hashbrown::HashMap;

use crate::{Brush, ParagraphStyle, TextStyle};

/// Maximum number of lines to display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineLimit {
    /// At most this many lines.
    Lines(NonZeroUsize),
    /// No limit.
    #[default]
    Unbounded,
}

impl LineLimit {
    /// A limit of `lines` lines. Zero is raised to one.
    pub const fn lines(lines: usize) -> Self {
        match NonZeroUsize::new(lines) {
            Some(lines) => Self::Lines(lines),
            None => Self::Lines(NonZeroUsize::MIN),
        }
    }

    /// The number of lines, or `None` when unbounded.
    pub const fn get(self) -> Option<usize> {
        match self {
            Self::Lines(lines) => Some(lines.get()),
            Self::Unbounded => None,
        }
    }

    /// Whether a layout with `line_count` lines stays within the limit.
    pub fn allows(self, line_count: usize) -> bool {
        self.get().is_none_or(|limit| line_count <= limit)
    }
}

impl From<usize> for LineLimit {
    fn from(lines: usize) -> Self {
        Self::lines(lines)
    }
}

/// An extra inline box forwarded verbatim to the host, next to the toggle placeholder.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InlineContent {
    /// Byte offset in the text where the box is placed.
    pub index: usize,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// Configuration of an [`ExpandableText`](crate::ExpandableText).
#[derive(Clone, Debug, PartialEq)]
pub struct ExpandableTextConfig<B: Brush> {
    /// Line limit while collapsed.
    pub collapsed_max_lines: LineLimit,
    /// Line limit while expanded.
    pub expanded_max_lines: LineLimit,
    /// Default run style, forwarded to the host.
    pub style: TextStyle<B>,
    /// Paragraph style, forwarded to the host.
    pub paragraph: ParagraphStyle,
    /// Extra inline boxes keyed by a caller chosen id, forwarded to the host.
    pub inline_content: HashMap<String, InlineContent>,
    /// Ratio of device pixels to scale independent units.
    pub display_scale: f32,
}

impl<B: Brush> ExpandableTextConfig<B> {
    /// Creates a configuration that collapses to `collapsed_max_lines` and expands without a
    /// limit.
    pub fn new(collapsed_max_lines: impl Into<LineLimit>) -> Self {
        Self {
            collapsed_max_lines: collapsed_max_lines.into(),
            expanded_max_lines: LineLimit::Unbounded,
            style: TextStyle::default(),
            paragraph: ParagraphStyle::default(),
            inline_content: HashMap::new(),
            display_scale: 1.0,
        }
    }

    /// Sets the line limit used while expanded.
    #[must_use]
    pub fn with_expanded_max_lines(mut self, lines: impl Into<LineLimit>) -> Self {
        self.expanded_max_lines = lines.into();
        self
    }

    /// Sets the default run style.
    #[must_use]
    pub fn with_style(mut self, style: TextStyle<B>) -> Self {
        self.style = style;
        self
    }

    /// Sets the paragraph style.
    #[must_use]
    pub fn with_paragraph(mut self, paragraph: ParagraphStyle) -> Self {
        self.paragraph = paragraph;
        self
    }

    /// Adds an extra inline box.
    #[must_use]
    pub fn with_inline_content(mut self, id: impl Into<String>, content: InlineContent) -> Self {
        self.inline_content.insert(id.into(), content);
        self
    }

    /// Sets the display scale.
    #[must_use]
    pub fn with_display_scale(mut self, scale: f32) -> Self {
        self.display_scale = scale;
        self
    }

    /// The line limit that applies for the given expanded flag.
    pub fn line_limit(&self, expanded: bool) -> LineLimit {
        if expanded {
            self.expanded_max_lines
        } else {
            self.collapsed_max_lines
        }
    }
}
