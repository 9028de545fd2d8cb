// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A point in layout coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position, growing downwards.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width and height in layout coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis aligned box, `x0 <= x1` and `y0 <= y1`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    /// Left edge.
    pub x0: f32,
    /// Top edge.
    pub y0: f32,
    /// Right edge.
    pub x1: f32,
    /// Bottom edge.
    pub y1: f32,
}

impl BoundingBox {
    /// Creates a box from its edges.
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Whether the two boxes share any interior area.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }
}

/// Measured size of the toggle element.
///
/// `width` and `height` are device pixels, the unit the host lays text out in. `width_units`
/// and `height_units` are the same extent divided by the display scale, for hosts whose inline
/// placeholders are sized in text-relative units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ToggleSize {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Width in scale independent units.
    pub width_units: f32,
    /// Height in scale independent units.
    pub height_units: f32,
}

impl ToggleSize {
    /// No toggle, or not measured yet.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
        width_units: 0.0,
        height_units: 0.0,
    };

    /// Creates a toggle size from a pixel size and the display scale.
    pub fn from_pixels(size: Size, scale: f32) -> Self {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        Self {
            width: size.width,
            height: size.height,
            width_units: size.width / scale,
            height_units: size.height / scale,
        }
    }

    /// The pixel size.
    pub fn pixels(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether a usable measurement is available.
    ///
    /// A zero width means the toggle has not been measured yet.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0
    }
}
