// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled text and the style attributes forwarded to the host.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::Error;

/// A type that can be used to paint text.
///
/// Mirrors Parley's `Brush`: anything cloneable, comparable and defaultable works, so hosts can
/// pick their own color representation.
pub trait Brush: Clone + PartialEq + Default + Debug {}

impl<T: Clone + PartialEq + Default + Debug> Brush for T {}

/// Slant of a font face.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
}

/// Lines drawn through or under glyphs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TextDecoration {
    /// Draw a line under the glyphs.
    pub underline: bool,
    /// Draw a line through the glyphs.
    pub strikethrough: bool,
}

/// Horizontal alignment of lines within the layout width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Left for left-to-right text, right for right-to-left text.
    #[default]
    Start,
    /// Right for left-to-right text, left for right-to-left text.
    End,
    /// Centered.
    Center,
    /// Stretched to the full width, except for the last line.
    Justify,
}

/// What the host does with text that does not fit the line limit when no toggle is configured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextOverflow {
    /// Lines past the limit are cut off.
    #[default]
    Clip,
    /// The last visible line ends with an ellipsis.
    Ellipsis,
    /// Lines past the limit are drawn outside the bounds.
    Visible,
}

/// Run level style attributes.
///
/// Every field is optional: `None` leaves the host's default in place. None of these are
/// interpreted by the truncation logic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle<B: Brush> {
    /// Brush used to paint glyphs.
    pub brush: Option<B>,
    /// Font size in layout units.
    pub font_size: Option<f32>,
    /// Font slant.
    pub font_style: Option<FontStyle>,
    /// Font weight, `400.0` is regular.
    pub font_weight: Option<f32>,
    /// Font family name or CSS-like family list.
    pub font_family: Option<Arc<str>>,
    /// Extra spacing between letters in layout units.
    pub letter_spacing: Option<f32>,
    /// Decoration lines.
    pub decoration: TextDecoration,
}

impl<B: Brush> TextStyle<B> {
    /// Sets the brush.
    #[must_use]
    pub fn with_brush(mut self, brush: B) -> Self {
        self.brush = Some(brush);
        self
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_font_weight(mut self, weight: f32) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.font_family = Some(family.into());
        self
    }
}

/// Paragraph level style attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    /// Line alignment.
    pub align: TextAlign,
    /// Line height as a multiple of the font size.
    pub line_height: Option<f32>,
    /// Overflow policy used by the host when the text is not truncated with a toggle.
    pub overflow: TextOverflow,
    /// Whether lines wrap at the layout width.
    pub soft_wrap: bool,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            align: TextAlign::Start,
            line_height: None,
            overflow: TextOverflow::Clip,
            soft_wrap: true,
        }
    }
}

/// A style override applied to a byte range of a [`StyledText`].
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSpan<B: Brush> {
    /// The byte range the style applies to.
    pub range: Range<usize>,
    /// The style attributes that override the defaults within `range`.
    pub style: TextStyle<B>,
}

/// Immutable UTF-8 text with style spans.
///
/// Cloning is cheap, the string is shared. Two values are equal when both the text and the spans
/// are equal; that equality is what the controller uses as text identity.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledText<B: Brush = ()> {
    text: Arc<str>,
    spans: Vec<StyleSpan<B>>,
}

impl<B: Brush> StyledText<B> {
    /// Creates unstyled text.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Applies `style` to `range`, returning the updated text.
    pub fn with_style(mut self, range: Range<usize>, style: TextStyle<B>) -> Result<Self, Error> {
        self.push_style(range, style)?;
        Ok(self)
    }

    /// Applies `style` to `range`.
    ///
    /// Later spans take precedence over earlier ones where they overlap.
    pub fn push_style(&mut self, range: Range<usize>, style: TextStyle<B>) -> Result<(), Error> {
        Error::check_range(&self.text, range.start, range.end)?;
        self.spans.push(StyleSpan { range, style });
        Ok(())
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The style spans, in the order they were applied.
    pub fn spans(&self) -> &[StyleSpan<B>] {
        &self.spans
    }

    /// Returns the first `len` bytes of the text with spans clipped to them.
    ///
    /// `len` is rounded down to a character boundary. Returns a cheap clone when `len` covers the
    /// whole text.
    #[must_use]
    pub fn truncated(&self, len: usize) -> Self {
        if len >= self.text.len() {
            return self.clone();
        }
        let mut len = len;
        while !self.text.is_char_boundary(len) {
            len -= 1;
        }
        let spans = self
            .spans
            .iter()
            .filter(|span| span.range.start < len)
            .map(|span| StyleSpan {
                range: span.range.start..span.range.end.min(len),
                style: span.style.clone(),
            })
            .filter(|span| !span.range.is_empty())
            .collect();
        Self {
            text: Arc::from(&self.text[..len]),
            spans,
        }
    }
}

impl<B: Brush> From<&str> for StyledText<B> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<B: Brush> From<alloc::string::String> for StyledText<B> {
    fn from(text: alloc::string::String) -> Self {
        Self::new(text)
    }
}
