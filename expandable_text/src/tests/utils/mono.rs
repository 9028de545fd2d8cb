// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic text engine for tests.
//!
//! Every grapheme cluster advances by [`GLYPH_ADVANCE`] and every line is [`LINE_HEIGHT`] tall.
//! Lines break greedily after whitespace, trailing whitespace hangs past the width, and `\n` forces
//! a break. Inline boxes stick to the word before them. Right-to-left paragraphs mirror each line.
//!
//! [`MonoHost::with_cut_reshaping`] imitates engines whose shaping depends on where a word is cut.

use unicode_segmentation::UnicodeSegmentation;

use crate::{
    BoundingBox, Brush, Direction, LayoutError, LayoutHost, MeasureHost, Point, RenderRequest,
    Size, TOGGLE_PLACEHOLDER_ID, TextLayout,
};

pub(crate) const GLYPH_ADVANCE: f32 = 10.0;
pub(crate) const LINE_HEIGHT: f32 = 20.0;

/// Toggle content understood by [`MonoHost`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum MonoElement {
    Label(&'static str),
    Icon(f32, f32),
}

#[derive(Clone, Debug)]
pub(crate) struct MonoHost {
    width: f32,
    direction: Option<Direction>,
    fail_direction: bool,
    cut_reshaping: Option<f32>,
    /// Number of layouts produced.
    pub(crate) passes: usize,
    /// Number of toggle elements measured.
    pub(crate) measured: usize,
}

impl MonoHost {
    pub(crate) fn new(width: f32) -> Self {
        Self {
            width,
            direction: None,
            fail_direction: false,
            cut_reshaping: None,
            passes: 0,
            measured: 0,
        }
    }

    /// Forces the paragraph direction instead of detecting it from the text.
    pub(crate) fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Makes every paragraph direction query fail.
    pub(crate) fn with_failing_direction(mut self) -> Self {
        self.fail_direction = true;
        self
    }

    /// Widens the glyph right before the toggle placeholder by `extra` and lets the placeholder
    /// wrap onto a line of its own, the way a word cut in the middle is shaped differently.
    pub(crate) fn with_cut_reshaping(mut self, extra: f32) -> Self {
        self.cut_reshaping = Some(extra);
        self
    }

    pub(crate) fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Lays out plain text with an optional toggle box at `placeholder`.
    pub(crate) fn layout_text(
        &mut self,
        text: &str,
        max_lines: Option<usize>,
        placeholder: Option<(usize, Size)>,
    ) -> MonoLayout {
        let boxes = placeholder
            .map(|(index, size)| MonoBox {
                id: TOGGLE_PLACEHOLDER_ID,
                index,
                width: size.width,
            })
            .into_iter()
            .collect();
        self.build(text, boxes, max_lines, true)
    }

    fn build(
        &mut self,
        text: &str,
        mut boxes: Vec<MonoBox>,
        max_lines: Option<usize>,
        soft_wrap: bool,
    ) -> MonoLayout {
        self.passes += 1;
        boxes.retain(|b| b.index <= text.len());
        boxes.sort_by_key(|b| b.index);

        let mut items = Vec::new();
        let mut pending = boxes.into_iter().peekable();
        for (start, grapheme) in text.grapheme_indices(true) {
            while let Some(b) = pending.next_if(|b| b.index <= start) {
                items.push(Item::Box(b));
            }
            let newline = grapheme.contains('\n');
            items.push(Item::Glyph {
                start,
                end: start + grapheme.len(),
                advance: if newline { 0.0 } else { GLYPH_ADVANCE },
                whitespace: grapheme.chars().all(char::is_whitespace),
                newline,
            });
        }
        items.extend(pending.map(Item::Box));
        if let Some(extra) = self.cut_reshaping {
            let toggle = items
                .iter()
                .position(|item| matches!(item, Item::Box(b) if b.id == TOGGLE_PLACEHOLDER_ID));
            if let Some(Item::Glyph {
                advance,
                whitespace: false,
                ..
            }) = toggle.and_then(|i| i.checked_sub(1)).and_then(|i| items.get_mut(i))
            {
                *advance += extra;
            }
        }

        let max_width = if soft_wrap { self.width } else { f32::INFINITY };
        let mut lines = Vec::new();
        let mut line = Vec::new();
        let mut x = 0.0;
        for segment in segments(&items, self.cut_reshaping.is_some()) {
            let content: f32 = segment
                .iter()
                .filter(|item| !item.is_whitespace())
                .map(Item::advance)
                .sum();
            if !line.is_empty() && x + content > max_width {
                lines.push(core::mem::take(&mut line));
                x = 0.0;
            }
            for item in segment {
                line.push(*item);
                x += item.advance();
            }
            if segment.last().is_some_and(Item::is_newline) {
                lines.push(core::mem::take(&mut line));
                x = 0.0;
            }
        }
        // A trailing hard break, or empty text, still produces a line.
        if !line.is_empty() || lines.is_empty() || items.last().is_some_and(Item::is_newline) {
            lines.push(line);
        }

        let direction = self.direction.unwrap_or_else(|| detect_direction(text));
        let mut top = 0.0;
        let mut offset = 0;
        let mut placed = Vec::new();
        for items in lines {
            let start = items.first().map_or(offset, Item::start);
            let end = items.last().map_or(start, Item::end);
            let mut x = 0.0;
            let mut clusters = Vec::new();
            for item in items {
                let advance = item.advance();
                let x0 = match direction {
                    Direction::Ltr => x,
                    Direction::Rtl => self.width - x - advance,
                };
                clusters.push(Placed {
                    item,
                    bounds: BoundingBox::new(x0, top, x0 + advance, top + LINE_HEIGHT),
                });
                x += advance;
            }
            placed.push(MonoLine {
                start,
                end,
                top,
                clusters,
            });
            top += LINE_HEIGHT;
            offset = end;
        }
        let clipped = max_lines.is_some_and(|max| placed.len() > max);
        if let Some(max) = max_lines {
            placed.truncate(max);
        }

        MonoLayout {
            text: text.into(),
            width: self.width,
            direction,
            fail_direction: self.fail_direction,
            clipped,
            lines: placed,
        }
    }
}

impl<B: Brush> LayoutHost<B> for MonoHost {
    type Layout = MonoLayout;

    fn layout(&mut self, request: &RenderRequest<'_, B>) -> MonoLayout {
        let mut boxes: Vec<MonoBox> = request
            .inline_content
            .values()
            .zip(0_u64..)
            .map(|(content, id)| MonoBox {
                id,
                index: content.index,
                width: content.width,
            })
            .collect();
        if let Some(placeholder) = request.placeholder {
            boxes.push(MonoBox {
                id: placeholder.id,
                index: placeholder.index,
                width: placeholder.size.width,
            });
        }
        self.build(
            request.text.as_str(),
            boxes,
            request.line_limit.get(),
            request.paragraph.soft_wrap,
        )
    }
}

impl MeasureHost<MonoElement> for MonoHost {
    fn measure_unconstrained(&mut self, element: &MonoElement) -> Size {
        self.measured += 1;
        match element {
            MonoElement::Label(label) => {
                let width = label.graphemes(true).map(|_| GLYPH_ADVANCE).sum();
                Size::new(width, LINE_HEIGHT)
            }
            MonoElement::Icon(width, height) => Size::new(*width, *height),
        }
    }
}

fn detect_direction(text: &str) -> Direction {
    match text.chars().find(|c| c.is_alphabetic()) {
        Some('\u{0590}'..='\u{08FF}') => Direction::Rtl,
        _ => Direction::Ltr,
    }
}

/// Splits items at break opportunities: after whitespace and after every `\n`, and before every
/// box when boxes are `detached` from the word before them.
fn segments(items: &[Item], detached: bool) -> Vec<&[Item]> {
    let mut segments = Vec::new();
    let mut start = 0;
    for i in 1..items.len() {
        let prev = items[i - 1];
        if prev.is_newline()
            || (prev.is_whitespace() && !items[i].is_whitespace())
            || (detached && matches!(items[i], Item::Box(_)))
        {
            segments.push(&items[start..i]);
            start = i;
        }
    }
    if start < items.len() {
        segments.push(&items[start..]);
    }
    segments
}

#[derive(Copy, Clone, Debug)]
struct MonoBox {
    id: u64,
    index: usize,
    width: f32,
}

#[derive(Copy, Clone, Debug)]
enum Item {
    Glyph {
        start: usize,
        end: usize,
        advance: f32,
        whitespace: bool,
        newline: bool,
    },
    Box(MonoBox),
}

impl Item {
    fn start(&self) -> usize {
        match self {
            Self::Glyph { start, .. } => *start,
            Self::Box(b) => b.index,
        }
    }

    fn end(&self) -> usize {
        match self {
            Self::Glyph { end, .. } => *end,
            Self::Box(b) => b.index,
        }
    }

    fn advance(&self) -> f32 {
        match self {
            Self::Glyph { advance, .. } => *advance,
            Self::Box(b) => b.width,
        }
    }

    fn is_whitespace(&self) -> bool {
        matches!(
            self,
            Self::Glyph {
                whitespace: true,
                ..
            }
        )
    }

    fn is_newline(&self) -> bool {
        matches!(self, Self::Glyph { newline: true, .. })
    }
}

#[derive(Copy, Clone, Debug)]
struct Placed {
    item: Item,
    bounds: BoundingBox,
}

#[derive(Clone, Debug)]
struct MonoLine {
    start: usize,
    end: usize,
    top: f32,
    clusters: Vec<Placed>,
}

impl MonoLine {
    /// End of the last cluster that is not a hard break.
    fn content_end(&self) -> usize {
        self.clusters
            .iter()
            .rev()
            .find(|c| !c.item.is_newline())
            .map_or(self.start, |c| c.item.end())
    }
}

/// Output of [`MonoHost`].
#[derive(Clone, Debug)]
pub(crate) struct MonoLayout {
    text: String,
    width: f32,
    direction: Direction,
    fail_direction: bool,
    clipped: bool,
    lines: Vec<MonoLine>,
}

impl MonoLayout {
    /// The text of every kept line.
    pub(crate) fn line_texts(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(|line| &self.text[line.start..line.end])
            .collect()
    }

    /// Bounds of the toggle placeholder, if it is on a kept line.
    pub(crate) fn placeholder_bounds(&self) -> Option<BoundingBox> {
        self.lines
            .iter()
            .flat_map(|line| &line.clusters)
            .find(|c| matches!(c.item, Item::Box(b) if b.id == TOGGLE_PLACEHOLDER_ID))
            .map(|c| c.bounds)
    }

    /// Bounds of every glyph that is not whitespace.
    pub(crate) fn ink_bounds(&self) -> Vec<BoundingBox> {
        self.lines
            .iter()
            .flat_map(|line| &line.clusters)
            .filter(|c| matches!(c.item, Item::Glyph { whitespace: false, .. }))
            .map(|c| c.bounds)
            .collect()
    }
}

impl TextLayout for MonoLayout {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn is_clipped(&self) -> bool {
        self.clipped
    }

    fn size(&self) -> Size {
        let height = self.lines.last().map_or(0.0, |line| line.top + LINE_HEIGHT);
        Size::new(self.width, height)
    }

    fn line_start(&self, line: usize) -> usize {
        self.lines[line].start
    }

    fn line_end(&self, line: usize) -> usize {
        self.lines[line].end
    }

    fn line_top(&self, line: usize) -> f32 {
        self.lines[line].top
    }

    fn paragraph_direction(&self, offset: usize) -> Result<Direction, LayoutError> {
        if self.fail_direction || offset > self.text.len() {
            return Err(LayoutError::OffsetOutOfRange {
                offset,
                len: self.text.len(),
            });
        }
        Ok(self.direction)
    }

    fn offset_for_position(&self, point: Point) -> usize {
        let Some(line) = self
            .lines
            .iter()
            .find(|line| point.y < line.top + LINE_HEIGHT)
            .or(self.lines.last())
        else {
            return 0;
        };
        for cluster in &line.clusters {
            let bounds = cluster.bounds;
            if point.x < bounds.x0 || point.x >= bounds.x1 {
                continue;
            }
            let mid = (bounds.x0 + bounds.x1) / 2.0;
            let leading_half = match self.direction {
                Direction::Ltr => point.x < mid,
                Direction::Rtl => point.x >= mid,
            };
            return if leading_half {
                cluster.item.start()
            } else {
                cluster.item.end()
            };
        }
        let before_line = match self.direction {
            Direction::Ltr => point.x < 0.0,
            Direction::Rtl => point.x >= self.width,
        };
        if before_line {
            line.start
        } else {
            line.content_end()
        }
    }

    fn glyph_bounds(&self, offset: usize) -> Option<BoundingBox> {
        self.lines
            .iter()
            .flat_map(|line| &line.clusters)
            .find(|c| matches!(c.item, Item::Glyph { start, .. } if start == offset))
            .map(|c| c.bounds)
    }
}
