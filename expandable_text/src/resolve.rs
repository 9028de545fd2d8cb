// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of the truncation point.
//!
//! Given the layout of what is currently rendered, [`resolve`] decides how much of the text stays
//! visible and whether the toggle is shown. The toggle is anchored to the trailing edge of the
//! last permitted line (the leading edge for right-to-left paragraphs), and the cut is walked
//! back until the glyph before it neither sits under the toggle nor is whitespace.

use unicode_segmentation::GraphemeCursor;

use crate::{Direction, LineLimit, Point, TextLayout, ToggleSize};

/// How much of the text is visible and whether the toggle is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TruncationState {
    /// Number of bytes of the text that are rendered.
    pub visible_len: usize,
    /// Whether the toggle placeholder follows the visible text.
    pub show_toggle: bool,
}

impl TruncationState {
    /// The whole text, without a toggle.
    pub const fn full(text_len: usize) -> Self {
        Self {
            visible_len: text_len,
            show_toggle: false,
        }
    }

    /// Length of the text that is rendered for this state.
    pub fn rendered_len(&self, text_len: usize) -> usize {
        if self.show_toggle {
            self.visible_len.min(text_len)
        } else {
            text_len
        }
    }
}

/// Everything [`resolve`] looks at.
#[derive(Debug)]
pub struct ResolveInput<'a, L: ?Sized> {
    /// The full text, not the truncated projection.
    pub text: &'a str,
    /// Layout of the text rendered for `current`: the full text, or the first
    /// `current.visible_len` bytes followed by the toggle placeholder.
    pub layout: &'a L,
    /// Size of the toggle.
    pub toggle_size: ToggleSize,
    /// The active line limit.
    pub line_limit: LineLimit,
    /// The state `layout` was produced for.
    pub current: TruncationState,
}

/// Computes the truncation state for one layout pass.
///
/// Returns `input.current` unchanged while the toggle is not measured. Running it again on its own
/// output with the same layout and toggle size returns the same state.
pub fn resolve<L: TextLayout + ?Sized>(input: &ResolveInput<'_, L>) -> TruncationState {
    let ResolveInput {
        text,
        layout,
        toggle_size,
        line_limit,
        current,
    } = *input;
    if !toggle_size.is_measured() {
        log::trace!("toggle not measured yet, keeping {current:?}");
        return current;
    }
    let text_len = text.len();
    let Some(limit) = line_limit.get() else {
        return TruncationState::full(text_len);
    };
    let rendered_len = current.rendered_len(text_len);
    let line_count = layout.line_count();
    if line_count < limit {
        return TruncationState::full(text_len);
    }
    let last_line = limit - 1;
    if line_count == limit && !layout.is_clipped() && layout.line_end(last_line) == rendered_len {
        // Everything that was rendered is on screen. For the truncated text this is the fixed
        // point of the render loop.
        return if current.show_toggle {
            current
        } else {
            TruncationState::full(text_len)
        };
    }
    // A projection that overflows did not leave room for the toggle, so the cut moves back by at
    // least one grapheme.
    let cut_end = if current.show_toggle {
        previous_grapheme_boundary(text, rendered_len).unwrap_or(0)
    } else {
        rendered_len
    };
    let visible_len = cut_offset(text, layout, toggle_size, last_line, cut_end);
    log::trace!("text overflows {limit} lines, cutting at {visible_len} of {text_len}");
    TruncationState {
        visible_len,
        show_toggle: true,
    }
}

/// Finds the offset on `line`, at most `max_end`, after which the toggle is placed.
fn cut_offset<L: TextLayout + ?Sized>(
    text: &str,
    layout: &L,
    toggle_size: ToggleSize,
    line: usize,
    max_end: usize,
) -> usize {
    let line_start = layout.line_start(line).min(text.len());
    let line_end = layout
        .line_end(line)
        .min(max_end)
        .clamp(line_start, text.len());
    let direction = layout
        .paragraph_direction(layout.line_end(line))
        .unwrap_or_else(|err| {
            log::trace!("{err}, assuming left-to-right");
            Direction::Ltr
        });
    let anchor = Point::new(
        match direction {
            Direction::Ltr => layout.size().width - toggle_size.width,
            Direction::Rtl => toggle_size.width,
        },
        layout.line_top(line) + toggle_size.height / 2.0,
    );
    let candidate = layout
        .offset_for_position(anchor)
        .clamp(line_start, line_end);
    let mut offset = floor_grapheme_boundary(text, candidate).max(line_start);
    while offset > line_start {
        let Some(prev) = previous_grapheme_boundary(text, offset) else {
            break;
        };
        let prev = prev.max(line_start);
        let is_whitespace = text[prev..offset].chars().all(char::is_whitespace);
        let under_toggle = layout.glyph_bounds(prev).is_some_and(|bounds| match direction {
            Direction::Ltr => bounds.x1 > anchor.x,
            Direction::Rtl => bounds.x0 < anchor.x,
        });
        if !is_whitespace && !under_toggle {
            break;
        }
        offset = prev;
    }
    offset
}

/// Rounds `offset` down to the closest grapheme cluster boundary.
fn floor_grapheme_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let mut cursor = GraphemeCursor::new(offset, text.len(), true);
    match cursor.is_boundary(text, 0) {
        Ok(true) => offset,
        _ => cursor.prev_boundary(text, 0).ok().flatten().unwrap_or(0),
    }
}

/// The grapheme cluster boundary before `offset`, which must itself be a boundary.
fn previous_grapheme_boundary(text: &str, offset: usize) -> Option<usize> {
    GraphemeCursor::new(offset, text.len(), true)
        .prev_boundary(text, 0)
        .ok()
        .flatten()
}
