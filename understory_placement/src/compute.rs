// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::options::PlacementOptions;
use crate::style::PanelStyle;

/// Which side of the trigger the panel ended up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Panel renders below the trigger.
    #[default]
    Bottom,
    /// Panel renders above the trigger.
    Top,
}

impl Placement {
    /// Lowercase name, suitable for a `data-placement` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Top => "top",
        }
    }
}

/// Geometry and options for one placement computation.
///
/// Rectangles are in viewport pixels: `x0`/`y0` are the left/top edges and
/// `x1`/`y1` the right/bottom edges, as returned by a bounding-rect query.
/// Only the panel's size is consulted; its position is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Bounding rectangle of the element the panel is anchored to.
    pub trigger: Rect,
    /// Bounding rectangle of the floating panel.
    pub panel: Rect,
    /// Alignment, gaps and padding.
    pub options: PlacementOptions,
    /// Size of the viewport the panel must fit in.
    pub viewport: Size,
}

impl PlacementRequest {
    /// Creates a request with default [`PlacementOptions`].
    #[must_use]
    pub fn new(trigger: Rect, panel: Rect, viewport: Size) -> Self {
        Self {
            trigger,
            panel,
            options: PlacementOptions::default(),
            viewport,
        }
    }

    /// Returns this request with the given options.
    #[must_use]
    pub fn with_options(mut self, options: PlacementOptions) -> Self {
        self.options = options;
        self
    }
}

/// Computed panel position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementResult {
    /// Panel top edge, in viewport pixels.
    pub top: f64,
    /// Panel left edge, in viewport pixels.
    pub left: f64,
    /// Minimum panel width; always the trigger's width.
    pub min_width: f64,
    /// Side of the trigger the panel was placed on.
    pub placement: Placement,
}

impl PlacementResult {
    /// Top-left corner of the panel.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Formats this result as CSS pixel strings for inline styles.
    #[must_use]
    pub fn to_style(&self) -> PanelStyle {
        PanelStyle::from_result(self)
    }
}

/// Computes where a floating panel should render relative to its trigger.
///
/// The panel is first placed below the trigger and horizontally aligned per
/// [`PlacementOptions::align`]. If it would overflow the bottom of the
/// viewport and the trigger has more room above it than the panel is tall, it
/// flips above the trigger. Flipping is attempted once; a panel that overflows
/// in both directions keeps the flipped position.
///
/// Horizontally, a panel that overflows the right edge is pulled back to
/// `viewport_padding` from that edge, and then any panel left of
/// `viewport_padding` is pushed right to it. The left edge wins on viewports
/// narrower than the panel plus padding.
///
/// Inputs are not validated. A zero-height panel (not yet measured) never
/// flips; callers recompute once the panel has been laid out.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_placement::{Placement, PlacementRequest, compute_placement};
///
/// let trigger = Rect::new(100.0, 500.0, 200.0, 540.0);
/// let panel = Rect::new(0.0, 0.0, 150.0, 300.0);
/// let request = PlacementRequest::new(trigger, panel, Size::new(800.0, 600.0));
///
/// let result = compute_placement(&request);
/// assert_eq!(result.placement, Placement::Top);
/// assert_eq!(result.top, 183.0);
/// assert_eq!(result.left, 100.0);
/// ```
#[must_use]
pub fn compute_placement(request: &PlacementRequest) -> PlacementResult {
    let PlacementRequest {
        trigger,
        panel,
        options,
        viewport,
    } = *request;
    let panel_width = panel.width();
    let panel_height = panel.height();

    let mut top = trigger.y1 + options.gap.below;
    let mut placement = Placement::Bottom;
    let mut left = options.align.baseline_left(trigger, panel_width);

    let overflows_bottom = top + panel_height > viewport.height;
    let space_above = trigger.y0 > panel_height;
    if overflows_bottom && space_above {
        top = trigger.y0 - panel_height - options.gap.above;
        placement = Placement::Top;
        tracing::trace!(top, "panel flipped above trigger");
    }

    if left + panel_width > viewport.width {
        left = viewport.width - panel_width - options.viewport_padding;
        tracing::trace!(left, "panel clamped to right viewport edge");
    }
    if left < options.viewport_padding {
        left = options.viewport_padding;
        tracing::trace!(left, "panel clamped to left viewport edge");
    }

    PlacementResult {
        top,
        left,
        min_width: trigger.width(),
        placement,
    }
}
