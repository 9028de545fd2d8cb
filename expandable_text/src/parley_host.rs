// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`LayoutHost`] backed by [Parley](https://docs.rs/parley).
//!
//! ```no_run
//! use expandable_text::parley_host::{ParleyHost, ToggleElement};
//! use expandable_text::{ExpandableText, ExpandableTextConfig, Toggle};
//!
//! let mut host = ParleyHost::<()>::new(Some(320.0));
//! let toggle = Toggle::new(0, |expanded| {
//!     [ToggleElement::label(if expanded { "Show less" } else { "Show more" })]
//! });
//! let mut text = ExpandableText::new("A long paragraph…", ExpandableTextConfig::new(3))
//!     .with_toggle(toggle);
//! text.measure_toggle(&mut host);
//! let layout = text.layout_with(&mut host);
//! ```

use alloc::borrow::Cow;
use alloc::string::String;

use parley::{
    Alignment, AlignmentOptions, Cluster, Cursor, FontContext, FontStack, FontWeight, InlineBox,
    Layout, LayoutContext, LineHeight, PositionedLayoutItem, RangedBuilder, StyleProperty,
};

use crate::{
    BoundingBox, Brush, Direction, FontStyle, LayoutError, LayoutHost, MeasureHost, Point,
    RenderRequest, Size, TOGGLE_PLACEHOLDER_ID, TextAlign, TextLayout, TextStyle,
};

/// Lays out text with Parley.
///
/// Parley has no overflow policy: lines past the limit are laid out and then left out of the
/// [`TextLayout`] view, so [`ParagraphStyle::overflow`](crate::ParagraphStyle::overflow) always
/// behaves as [`TextOverflow::Clip`](crate::TextOverflow::Clip).
pub struct ParleyHost<B: Brush> {
    font_cx: FontContext,
    layout_cx: LayoutContext<B>,
    width: Option<f32>,
    scale: f32,
}

impl<B: Brush> ParleyHost<B> {
    /// Creates a host breaking lines at `width`, or never when `None`.
    pub fn new(width: Option<f32>) -> Self {
        Self {
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
            width,
            scale: 1.0,
        }
    }

    /// Sets the display scale passed to Parley.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// The width lines are broken at.
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Changes the width lines are broken at.
    pub fn set_width(&mut self, width: Option<f32>) {
        self.width = width;
    }

    /// The font context, for registering fonts.
    pub fn font_cx_mut(&mut self) -> &mut FontContext {
        &mut self.font_cx
    }

    fn builder<'a>(&'a mut self, text: &'a str) -> RangedBuilder<'a, B> {
        self.layout_cx
            .ranged_builder(&mut self.font_cx, text, self.scale, true)
    }
}

impl<B: Brush> core::fmt::Debug for ParleyHost<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyHost")
            .field("width", &self.width)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

fn style_properties<B: Brush>(style: &TextStyle<B>) -> impl Iterator<Item = StyleProperty<'_, B>> {
    let TextStyle {
        brush,
        font_size,
        font_style,
        font_weight,
        font_family,
        letter_spacing,
        decoration,
    } = style;
    [
        brush.clone().map(StyleProperty::Brush),
        font_size.map(StyleProperty::FontSize),
        font_style.map(|style| {
            StyleProperty::FontStyle(match style {
                FontStyle::Normal => parley::FontStyle::Normal,
                FontStyle::Italic => parley::FontStyle::Italic,
            })
        }),
        font_weight.map(|weight| StyleProperty::FontWeight(FontWeight::new(weight))),
        font_family
            .as_deref()
            .map(|family| StyleProperty::FontStack(FontStack::Source(Cow::Borrowed(family)))),
        letter_spacing.map(StyleProperty::LetterSpacing),
        decoration.underline.then_some(StyleProperty::Underline(true)),
        decoration
            .strikethrough
            .then_some(StyleProperty::Strikethrough(true)),
    ]
    .into_iter()
    .flatten()
}

fn alignment(align: TextAlign) -> Alignment {
    match align {
        TextAlign::Start => Alignment::Start,
        TextAlign::End => Alignment::End,
        TextAlign::Center => Alignment::Center,
        TextAlign::Justify => Alignment::Justify,
    }
}

impl<B: Brush> LayoutHost<B> for ParleyHost<B> {
    type Layout = ParleyLayout<B>;

    fn layout(&mut self, request: &RenderRequest<'_, B>) -> ParleyLayout<B> {
        let text = request.text.as_str();
        let width = self.width;
        let mut builder = self.builder(text);
        for property in style_properties(request.style) {
            builder.push_default(property);
        }
        if let Some(line_height) = request.paragraph.line_height {
            builder.push_default(StyleProperty::LineHeight(LineHeight::FontSizeRelative(
                line_height,
            )));
        }
        for span in request.text.spans() {
            for property in style_properties(&span.style) {
                builder.push(property, span.range.clone());
            }
        }
        for (id, content) in (0_u64..).zip(request.inline_content.values()) {
            if content.index > text.len() {
                log::debug!("inline box at {} is past the rendered text", content.index);
                continue;
            }
            builder.push_inline_box(InlineBox {
                id,
                index: content.index,
                width: content.width,
                height: content.height,
            });
        }
        if let Some(placeholder) = request.placeholder {
            builder.push_inline_box(InlineBox {
                id: placeholder.id,
                index: placeholder.index,
                width: placeholder.size.width,
                height: placeholder.size.height,
            });
        }
        let mut layout = builder.build(text);
        layout.break_all_lines(if request.paragraph.soft_wrap {
            width
        } else {
            None
        });
        layout.align(
            width,
            alignment(request.paragraph.align),
            AlignmentOptions::default(),
        );

        let line_count = request
            .line_limit
            .get()
            .map_or(layout.len(), |limit| layout.len().min(limit));
        ParleyLayout {
            width: width.unwrap_or_else(|| layout.width()),
            text_len: text.len(),
            line_count,
            clipped: !request.line_limit.allows(layout.len()),
            layout,
        }
    }
}

/// A Parley layout seen through the line limit it was produced for.
pub struct ParleyLayout<B: Brush> {
    layout: Layout<B>,
    width: f32,
    text_len: usize,
    line_count: usize,
    clipped: bool,
}

impl<B: Brush> ParleyLayout<B> {
    /// The underlying Parley layout, with all its lines.
    pub fn layout(&self) -> &Layout<B> {
        &self.layout
    }

    /// Top left corner of the toggle placeholder, if it is on a visible line.
    pub fn toggle_origin(&self) -> Option<Point> {
        for line in self.layout.lines().take(self.line_count) {
            for item in line.items() {
                if let PositionedLayoutItem::InlineBox(b) = item {
                    if b.id == TOGGLE_PLACEHOLDER_ID {
                        return Some(Point::new(b.x, b.y));
                    }
                }
            }
        }
        None
    }
}

impl<B: Brush> core::fmt::Debug for ParleyLayout<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyLayout")
            .field("width", &self.width)
            .field("text_len", &self.text_len)
            .field("line_count", &self.line_count)
            .field("clipped", &self.clipped)
            .finish_non_exhaustive()
    }
}

impl<B: Brush> TextLayout for ParleyLayout<B> {
    fn line_count(&self) -> usize {
        self.line_count
    }

    fn is_clipped(&self) -> bool {
        self.clipped
    }

    fn size(&self) -> Size {
        let height = self
            .line_count
            .checked_sub(1)
            .and_then(|last| self.layout.get(last))
            .map_or(0.0, |line| line.metrics().max_coord);
        Size::new(self.width, height)
    }

    fn line_start(&self, line: usize) -> usize {
        self.layout
            .get(line)
            .map_or(self.text_len, |line| line.text_range().start)
    }

    fn line_end(&self, line: usize) -> usize {
        self.layout
            .get(line)
            .map_or(self.text_len, |line| line.text_range().end)
    }

    fn line_top(&self, line: usize) -> f32 {
        self.layout
            .get(line)
            .map_or(0.0, |line| line.metrics().min_coord)
    }

    fn paragraph_direction(&self, offset: usize) -> Result<Direction, LayoutError> {
        if offset > self.text_len {
            return Err(LayoutError::OffsetOutOfRange {
                offset,
                len: self.text_len,
            });
        }
        Ok(if self.layout.is_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        })
    }

    fn offset_for_position(&self, point: Point) -> usize {
        Cursor::from_point(&self.layout, point.x, point.y).index()
    }

    fn glyph_bounds(&self, offset: usize) -> Option<BoundingBox> {
        let cluster = Cluster::from_byte_index(&self.layout, offset)?;
        if cluster.text_range().start != offset || cluster.path().line_index() >= self.line_count {
            return None;
        }
        let x0 = cluster.visual_offset()?;
        let line = cluster.line();
        let metrics = line.metrics();
        Some(BoundingBox::new(
            x0,
            metrics.min_coord,
            x0 + cluster.advance(),
            metrics.max_coord,
        ))
    }
}

/// Toggle content measured by [`ParleyHost`].
#[derive(Clone, Debug, PartialEq)]
pub enum ToggleElement {
    /// A text label laid out on a single line with the default style.
    Label(String),
    /// A fixed size element such as an icon.
    Icon {
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
    },
}

impl ToggleElement {
    /// A text label.
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }
}

impl<B: Brush> MeasureHost<ToggleElement> for ParleyHost<B> {
    fn measure_unconstrained(&mut self, element: &ToggleElement) -> Size {
        match element {
            ToggleElement::Label(label) => {
                let mut layout = self.builder(label).build(label);
                layout.break_all_lines(None);
                Size::new(layout.width(), layout.height())
            }
            ToggleElement::Icon { width, height } => Size::new(*width, *height),
        }
    }
}
