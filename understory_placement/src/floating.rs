// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful helper that keeps one floating panel positioned.
//!
//! ## Usage
//!
//! 1) Create a [`Floating`] with the panel's [`PlacementOptions`].
//! 2) When the overlay's open state changes, call [`Floating::on_open_changed`]
//!    with geometry sources for the trigger and the panel.
//! 3) On viewport resize, call [`Floating::on_resize`].
//! 4) Apply [`Floating::style`] to the panel and expose
//!    [`Floating::placement`] (for example as a `data-placement` attribute).
//!
//! Geometry sources are anything implementing [`RectSource`]: a closure
//! returning `Option<Rect>`, a cached `Option<Rect>`, or a plain `Rect`.
//! `None` means the element is not mounted yet and the update is skipped.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::{Floating, Placement, PlacementOptions};
//!
//! let mut floating = Floating::new(PlacementOptions::default());
//! let viewport = Size::new(800.0, 600.0);
//! let trigger = Rect::new(100.0, 500.0, 200.0, 540.0);
//!
//! // The panel has not been rendered yet: nothing happens.
//! let unmounted: Option<Rect> = None;
//! assert!(floating.on_open_changed(true, &trigger, &unmounted, viewport).is_none());
//!
//! // Once it is measured, the resize/recompute path positions it.
//! let panel = || Some(Rect::new(0.0, 0.0, 150.0, 300.0));
//! floating.on_resize(&trigger, &panel, viewport);
//! assert_eq!(floating.placement(), Placement::Top);
//! assert_eq!(floating.style().unwrap().top, "183px");
//! ```

use kurbo::Size;

use crate::compute::{Placement, PlacementRequest, PlacementResult, compute_placement};
use crate::geometry::RectSource;
use crate::options::PlacementOptions;
use crate::style::PanelStyle;

/// Keeps the last computed position of a single floating panel.
#[derive(Clone, Debug, Default)]
pub struct Floating {
    options: PlacementOptions,
    open: bool,
    result: Option<PlacementResult>,
    style: Option<PanelStyle>,
}

impl Floating {
    /// Creates a closed panel controller with the given options.
    #[must_use]
    pub fn new(options: PlacementOptions) -> Self {
        Self {
            options,
            open: false,
            result: None,
            style: None,
        }
    }

    /// Returns the placement options.
    #[must_use]
    pub fn options(&self) -> PlacementOptions {
        self.options
    }

    /// Replaces the placement options. Takes effect on the next update.
    pub fn set_options(&mut self, options: PlacementOptions) {
        self.options = options;
    }

    /// Whether the last reported open state was `true`.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Queries both geometry sources and recomputes the panel position.
    ///
    /// If either source yields `None`, the cached state is left untouched and
    /// `None` is returned.
    pub fn update<T, P>(&mut self, trigger: &T, panel: &P, viewport: Size) -> Option<PlacementResult>
    where
        T: RectSource + ?Sized,
        P: RectSource + ?Sized,
    {
        let trigger = trigger.rect();
        let panel = panel.rect();
        let (Some(trigger), Some(panel)) = (trigger, panel) else {
            tracing::trace!(
                has_trigger = trigger.is_some(),
                has_panel = panel.is_some(),
                "skipping placement update for unmounted element"
            );
            return None;
        };

        let request = PlacementRequest::new(trigger, panel, viewport).with_options(self.options);
        let result = compute_placement(&request);
        self.style = Some(result.to_style());
        self.result = Some(result);
        Some(result)
    }

    /// Records a new open state and recomputes on a closed-to-open transition.
    ///
    /// Closing, or reporting the same state again, only records the state and
    /// returns `None`; the last position is kept.
    pub fn on_open_changed<T, P>(
        &mut self,
        open: bool,
        trigger: &T,
        panel: &P,
        viewport: Size,
    ) -> Option<PlacementResult>
    where
        T: RectSource + ?Sized,
        P: RectSource + ?Sized,
    {
        if self.record_open(open) {
            self.update(trigger, panel, viewport)
        } else {
            None
        }
    }

    /// Stores `open` and returns whether this was a closed-to-open transition.
    pub(crate) fn record_open(&mut self, open: bool) -> bool {
        let was_open = core::mem::replace(&mut self.open, open);
        open && !was_open
    }

    /// Recomputes after a viewport resize.
    pub fn on_resize<T, P>(&mut self, trigger: &T, panel: &P, viewport: Size) -> Option<PlacementResult>
    where
        T: RectSource + ?Sized,
        P: RectSource + ?Sized,
    {
        self.update(trigger, panel, viewport)
    }

    /// Last computed result, if any.
    #[must_use]
    pub fn result(&self) -> Option<PlacementResult> {
        self.result
    }

    /// Last computed placement; [`Placement::Bottom`] before the first update.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.result.map(|r| r.placement).unwrap_or_default()
    }

    /// Inline style for the last computed result, if any.
    #[must_use]
    pub fn style(&self) -> Option<&PanelStyle> {
        self.style.as_ref()
    }
}
