// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement of the toggle element.

use alloc::sync::Arc;

use smallvec::SmallVec;

use crate::{Size, ToggleSize};

/// The elements a toggle renders for one expanded state.
///
/// Most toggles are a single label or icon, some are an icon next to a label.
pub(crate) type ToggleElements<E> = SmallVec<[E; 2]>;

/// A host that can measure toggle elements of type `E`.
pub trait MeasureHost<E> {
    /// Measures `element` without any size constraint, in pixels.
    ///
    /// Must not affect any visible layout.
    fn measure_unconstrained(&mut self, element: &E) -> Size;
}

/// The toggle displayed at the truncation point.
///
/// The content callback is invoked with the current expanded flag and returns the top-level
/// elements to render. `key` is the identity of the content: the size is measured again only when
/// the key or the expanded flag changes, so a toggle whose content changes must get a new key.
pub struct Toggle<E> {
    key: u64,
    content: Arc<dyn Fn(bool) -> ToggleElements<E>>,
}

impl<E> Toggle<E> {
    /// Creates a toggle from an identity key and a content callback.
    pub fn new<I>(key: u64, content: impl Fn(bool) -> I + 'static) -> Self
    where
        E: 'static,
        I: IntoIterator<Item = E> + 'static,
    {
        Self {
            key,
            content: Arc::new(move |expanded| content(expanded).into_iter().collect()),
        }
    }

    /// The identity of the toggle content.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// The elements to render for the given expanded flag.
    pub fn elements(&self, expanded: bool) -> impl Iterator<Item = E> {
        (self.content)(expanded).into_iter()
    }
}

impl<E> Clone for Toggle<E> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            content: Arc::clone(&self.content),
        }
    }
}

impl<E> core::fmt::Debug for Toggle<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Toggle")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct MeasureKey {
    toggle: u64,
    expanded: bool,
}

/// Measures toggles and caches the result per toggle identity.
#[derive(Clone, Debug)]
pub struct ToggleMeasurer {
    scale: f32,
    cached: Option<(MeasureKey, ToggleSize)>,
}

impl ToggleMeasurer {
    /// Creates a measurer for the given display scale.
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            cached: None,
        }
    }

    /// The display scale used to derive scale independent sizes.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Changes the display scale, dropping the cached size.
    pub fn set_scale(&mut self, scale: f32) {
        if self.scale != scale {
            self.scale = scale;
            self.cached = None;
        }
    }

    /// Drops the cached size so the next call to [`measure`](Self::measure) asks the host.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Returns the size of `toggle` rendered for `expanded`.
    ///
    /// The size is the union bound of all top-level elements: the widest width and the tallest
    /// height. Without a toggle the result is [`ToggleSize::ZERO`].
    pub fn measure<E, H>(
        &mut self,
        toggle: Option<&Toggle<E>>,
        expanded: bool,
        host: &mut H,
    ) -> ToggleSize
    where
        H: MeasureHost<E> + ?Sized,
    {
        let Some(toggle) = toggle else {
            self.cached = None;
            return ToggleSize::ZERO;
        };
        let key = MeasureKey {
            toggle: toggle.key(),
            expanded,
        };
        if let Some((cached_key, size)) = self.cached {
            if cached_key == key {
                return size;
            }
        }
        let bound = toggle.elements(expanded).fold(Size::ZERO, |bound, element| {
            let size = host.measure_unconstrained(&element);
            Size::new(bound.width.max(size.width), bound.height.max(size.height))
        });
        let size = ToggleSize::from_pixels(bound, self.scale);
        log::trace!("measured toggle {}: {size:?}", toggle.key());
        self.cached = Some((key, size));
        size
    }
}
