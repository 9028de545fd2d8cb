// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-instance state machine.

use alloc::boxed::Box;
use alloc::string::String;

use hashbrown::HashMap;

use crate::{
    Brush, ExpandableTextConfig, InlineContent, LayoutHost, LineLimit, MeasureHost,
    ParagraphStyle, ResolveInput, StyledText, TextLayout, TextStyle, Toggle, ToggleMeasurer,
    ToggleSize, TruncationState, resolve,
};

/// Identifier of the toggle placeholder among the inline boxes of a [`RenderRequest`].
pub const TOGGLE_PLACEHOLDER_ID: u64 = u64::MAX;

/// Upper bound on the render passes run by [`ExpandableText::layout_with`].
///
/// A converging configuration needs two passes: one on the full text and one on the truncated
/// text.
pub const MAX_LAYOUT_PASSES: usize = 8;

/// Where the controller is in its measure and resolve cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// The toggle size is not known yet.
    #[default]
    Idle,
    /// Waiting for a layout of the current configuration.
    Measuring,
    /// The toggle is shown after a prefix of the text.
    Truncated,
    /// The whole text is shown without a toggle.
    Full,
}

/// Identifies the configuration a layout was produced for.
///
/// A layout is only accepted if its key equals the controller's current key.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderKey {
    generation: u64,
    state: TruncationState,
    line_limit: LineLimit,
    toggle_size: ToggleSize,
}

/// The fixed size gap reserved for the toggle in the rendered text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InlinePlaceholder {
    /// Always [`TOGGLE_PLACEHOLDER_ID`].
    pub id: u64,
    /// Byte offset in the rendered text. The placeholder takes no bytes of its own.
    pub index: usize,
    /// Size of the gap.
    pub size: ToggleSize,
}

/// The instructions for one render pass.
#[derive(Debug)]
pub struct RenderRequest<'a, B: Brush> {
    /// The text to lay out: the full text or its truncated prefix.
    pub text: StyledText<B>,
    /// The line limit to apply.
    pub line_limit: LineLimit,
    /// The toggle placeholder, placed at the end of `text`, when the toggle is shown.
    pub placeholder: Option<InlinePlaceholder>,
    /// Default run style.
    pub style: &'a TextStyle<B>,
    /// Paragraph style.
    pub paragraph: &'a ParagraphStyle,
    /// Extra inline boxes. Boxes past the end of `text` are not rendered.
    pub inline_content: &'a HashMap<String, InlineContent>,
    /// The key to hand back with the resulting layout.
    pub key: RenderKey,
}

/// What [`ExpandableText::accept_layout`] did with a layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutOutcome {
    /// The layout was for a superseded configuration and was ignored.
    Stale,
    /// The toggle has no size yet; nothing was resolved.
    Deferred,
    /// The state was already correct. No further pass is needed.
    Unchanged,
    /// The state changed. The text must be laid out again.
    Applied,
}

type LayoutObserver = Box<dyn FnMut(&dyn TextLayout)>;

/// Line-limited text with an inline toggle at the truncation point.
///
/// Owns the truncation state of one widget instance. The state is reset to the full text when
/// the text changes and recomputed, starting from the current state, when the line limit, the
/// expanded flag or the toggle size change.
///
/// `B` is the brush type of the styles, `E` the element type of the toggle content.
pub struct ExpandableText<B: Brush, E> {
    config: ExpandableTextConfig<B>,
    text: StyledText<B>,
    generation: u64,
    expanded: bool,
    toggle: Option<Toggle<E>>,
    measurer: ToggleMeasurer,
    toggle_size: ToggleSize,
    state: TruncationState,
    phase: Phase,
    observer: Option<LayoutObserver>,
}

impl<B: Brush, E> ExpandableText<B, E> {
    /// Creates a collapsed instance without a toggle.
    pub fn new(text: impl Into<StyledText<B>>, config: ExpandableTextConfig<B>) -> Self {
        let text = text.into();
        let measurer = ToggleMeasurer::new(config.display_scale);
        Self {
            state: TruncationState::full(text.len()),
            config,
            text,
            generation: 0,
            expanded: false,
            toggle: None,
            measurer,
            toggle_size: ToggleSize::ZERO,
            phase: Phase::Idle,
            observer: None,
        }
    }

    /// Sets the toggle, returning the updated instance.
    #[must_use]
    pub fn with_toggle(mut self, toggle: Toggle<E>) -> Self {
        self.set_toggle(Some(toggle));
        self
    }

    /// Sets the observer called with every layout passed to
    /// [`accept_layout`](Self::accept_layout), stale ones included.
    pub fn set_layout_observer(&mut self, observer: impl FnMut(&dyn TextLayout) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// The configuration.
    pub fn config(&self) -> &ExpandableTextConfig<B> {
        &self.config
    }

    /// The full text.
    pub fn text(&self) -> &StyledText<B> {
        &self.text
    }

    /// Replaces the text.
    ///
    /// Equal text is not a change. Different text resets the state to the full text.
    pub fn set_text(&mut self, text: impl Into<StyledText<B>>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.text = text;
        self.generation = self.generation.wrapping_add(1);
        self.state = TruncationState::full(self.text.len());
        log::debug!("text replaced, generation {}", self.generation);
        self.remeasure();
    }

    /// Whether the text is expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Sets the expanded flag.
    pub fn set_expanded(&mut self, expanded: bool) {
        if self.expanded != expanded {
            self.expanded = expanded;
            log::debug!("expanded: {expanded}");
            self.remeasure();
        }
    }

    /// Flips the expanded flag, as a click on the text or the toggle does.
    pub fn toggle_expanded(&mut self) {
        self.set_expanded(!self.expanded);
    }

    /// Sets the line limit used while collapsed.
    pub fn set_collapsed_max_lines(&mut self, lines: impl Into<LineLimit>) {
        let lines = lines.into();
        if self.config.collapsed_max_lines != lines {
            self.config.collapsed_max_lines = lines;
            self.remeasure();
        }
    }

    /// Sets the line limit used while expanded.
    pub fn set_expanded_max_lines(&mut self, lines: impl Into<LineLimit>) {
        let lines = lines.into();
        if self.config.expanded_max_lines != lines {
            self.config.expanded_max_lines = lines;
            self.remeasure();
        }
    }

    /// Changes the display scale. The toggle is measured again on the next
    /// [`measure_toggle`](Self::measure_toggle).
    pub fn set_display_scale(&mut self, scale: f32) {
        self.config.display_scale = scale;
        self.measurer.set_scale(scale);
    }

    /// The line limit for the current expanded flag.
    pub fn line_limit(&self) -> LineLimit {
        self.config.line_limit(self.expanded)
    }

    /// The toggle, if any.
    pub fn toggle(&self) -> Option<&Toggle<E>> {
        self.toggle.as_ref()
    }

    /// Replaces the toggle.
    ///
    /// The size of the new toggle is unknown until it is measured. Removing the toggle shows the
    /// full text.
    pub fn set_toggle(&mut self, toggle: Option<Toggle<E>>) {
        self.toggle = toggle;
        self.measurer.invalidate();
        self.toggle_size = ToggleSize::ZERO;
        if self.toggle.is_none() {
            self.state = TruncationState::full(self.text.len());
        }
        self.phase = Phase::Idle;
    }

    /// The last toggle size received.
    pub fn toggle_size(&self) -> ToggleSize {
        self.toggle_size
    }

    /// Records a new toggle size. Ignored without a toggle.
    pub fn set_toggle_size(&mut self, size: ToggleSize) {
        if self.toggle.is_none() || size == self.toggle_size {
            return;
        }
        self.toggle_size = size;
        log::debug!("toggle size: {size:?}");
        self.remeasure();
    }

    /// Measures the toggle for the current expanded flag and records its size.
    pub fn measure_toggle<H>(&mut self, host: &mut H) -> ToggleSize
    where
        H: MeasureHost<E> + ?Sized,
    {
        let size = self
            .measurer
            .measure(self.toggle.as_ref(), self.expanded, host);
        self.set_toggle_size(size);
        size
    }

    /// The current truncation state.
    pub fn state(&self) -> TruncationState {
        self.state
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Identifies the configuration that the next layout must be produced for.
    pub fn render_key(&self) -> RenderKey {
        RenderKey {
            generation: self.generation,
            state: self.state,
            line_limit: self.line_limit(),
            toggle_size: self.toggle_size,
        }
    }

    /// The text to render with the toggle placeholder, if the toggle is shown.
    pub fn render_request(&self) -> RenderRequest<'_, B> {
        let (text, placeholder) = if self.state.show_toggle && self.toggle.is_some() {
            let text = self.text.truncated(self.state.visible_len);
            let placeholder = InlinePlaceholder {
                id: TOGGLE_PLACEHOLDER_ID,
                index: text.len(),
                size: self.toggle_size,
            };
            (text, Some(placeholder))
        } else {
            (self.text.clone(), None)
        };
        RenderRequest {
            text,
            line_limit: self.line_limit(),
            placeholder,
            style: &self.config.style,
            paragraph: &self.config.paragraph,
            inline_content: &self.config.inline_content,
            key: self.render_key(),
        }
    }

    /// Feeds the layout produced for `key` back into the controller.
    ///
    /// The observer sees every layout. Layouts for an outdated key are ignored. The state is only
    /// written when it changes, so [`LayoutOutcome::Unchanged`] means the render loop can stop.
    pub fn accept_layout<L: TextLayout>(&mut self, key: RenderKey, layout: &L) -> LayoutOutcome {
        if let Some(observer) = self.observer.as_mut() {
            observer(layout);
        }
        if key != self.render_key() {
            log::trace!("discarding stale layout for {key:?}");
            return LayoutOutcome::Stale;
        }
        if self.toggle.is_none() {
            self.phase = Phase::Full;
            return LayoutOutcome::Unchanged;
        }
        if !self.toggle_size.is_measured() {
            return LayoutOutcome::Deferred;
        }
        let next = resolve(&ResolveInput {
            text: self.text.as_str(),
            layout,
            toggle_size: self.toggle_size,
            line_limit: self.line_limit(),
            current: self.state,
        });
        self.phase = if next.show_toggle {
            Phase::Truncated
        } else {
            Phase::Full
        };
        if next == self.state {
            return LayoutOutcome::Unchanged;
        }
        log::debug!("truncation state {:?} -> {next:?}", self.state);
        self.state = next;
        LayoutOutcome::Applied
    }

    /// Runs render passes on `host` until the state settles, returning the final layout.
    ///
    /// Stops after [`MAX_LAYOUT_PASSES`] passes if the state keeps changing.
    pub fn layout_with<H: LayoutHost<B>>(&mut self, host: &mut H) -> H::Layout {
        let mut passes = 0;
        loop {
            let request = self.render_request();
            let key = request.key;
            let layout = host.layout(&request);
            drop(request);
            passes += 1;
            match self.accept_layout(key, &layout) {
                LayoutOutcome::Applied if passes < MAX_LAYOUT_PASSES => {}
                LayoutOutcome::Applied => {
                    log::warn!("truncation did not settle after {passes} layout passes");
                    return layout;
                }
                _ => return layout,
            }
        }
    }

    fn remeasure(&mut self) {
        self.phase = if self.toggle.is_some() && self.toggle_size.is_measured() {
            Phase::Measuring
        } else {
            Phase::Idle
        };
    }
}

impl<B: Brush, E> core::fmt::Debug for ExpandableText<B, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExpandableText")
            .field("text", &self.text)
            .field("generation", &self.generation)
            .field("expanded", &self.expanded)
            .field("toggle", &self.toggle)
            .field("toggle_size", &self.toggle_size)
            .field("state", &self.state)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
