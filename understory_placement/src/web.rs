// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser geometry: DOM element rectangles and the window viewport.
//!
//! Elements implement [`RectSource`] through their bounding client rect, and
//! the `*_in_window` methods on [`Floating`] take the viewport from
//! `window.innerWidth`/`window.innerHeight` instead of a caller-supplied size.
//!
//! ```no_run
//! use understory_placement::Floating;
//!
//! fn reposition(floating: &mut Floating, trigger: &web_sys::Element, panel: &web_sys::Element) {
//!     if let Some(result) = floating.update_in_window(trigger, panel) {
//!         let _ = result.to_style();
//!     }
//! }
//! ```

use kurbo::{Rect, Size};
use web_sys::Element;

use crate::compute::PlacementResult;
use crate::floating::Floating;
use crate::geometry::RectSource;

/// Bounding client rect of `element`, or `None` when there is no element.
#[must_use]
pub fn element_rect(element: Option<&Element>) -> Option<Rect> {
    let r = element?.get_bounding_client_rect();
    Some(Rect::new(r.left(), r.top(), r.right(), r.bottom()))
}

/// Current window viewport, from `innerWidth` and `innerHeight`.
///
/// Returns `None` outside a window context (for example in a worker).
#[must_use]
pub fn viewport_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width, height))
}

impl RectSource for Element {
    fn rect(&self) -> Option<Rect> {
        element_rect(Some(self))
    }
}

impl Floating {
    /// Like [`Floating::update`], using the window viewport.
    ///
    /// Skips the update when there is no window.
    pub fn update_in_window<T, P>(&mut self, trigger: &T, panel: &P) -> Option<PlacementResult>
    where
        T: RectSource + ?Sized,
        P: RectSource + ?Sized,
    {
        let Some(viewport) = viewport_size() else {
            tracing::trace!("skipping placement update without a window");
            return None;
        };
        self.update(trigger, panel, viewport)
    }

    /// Like [`Floating::on_open_changed`], using the window viewport.
    pub fn on_open_changed_in_window<T, P>(
        &mut self,
        open: bool,
        trigger: &T,
        panel: &P,
    ) -> Option<PlacementResult>
    where
        T: RectSource + ?Sized,
        P: RectSource + ?Sized,
    {
        if self.record_open(open) {
            self.update_in_window(trigger, panel)
        } else {
            None
        }
    }
}
