// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Something that can report an element's bounding rectangle.
///
/// `None` means the element is not mounted (its reference is unset) and
/// placement should be skipped. Rectangles are in viewport pixels.
///
/// Implemented for:
/// - closures `Fn() -> Option<Rect>`, for lazy measurement;
/// - `Option<Rect>`, for a cached measurement;
/// - `Rect`, for geometry that is always known.
pub trait RectSource {
    /// Returns the current bounding rectangle, if the element exists.
    fn rect(&self) -> Option<Rect>;
}

impl<F> RectSource for F
where
    F: Fn() -> Option<Rect>,
{
    fn rect(&self) -> Option<Rect> {
        self()
    }
}

impl RectSource for Option<Rect> {
    fn rect(&self) -> Option<Rect> {
        *self
    }
}

impl RectSource for Rect {
    fn rect(&self) -> Option<Rect> {
        Some(*self)
    }
}
