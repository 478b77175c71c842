// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Gap between the trigger and the panel when the panel opens below it.
pub const DEFAULT_GAP_BELOW: f64 = 4.0;

/// Gap between the trigger and the panel when the panel flips above it.
pub const DEFAULT_GAP_ABOVE: f64 = 17.0;

/// Minimum distance kept between the panel and the left/right viewport edges.
pub const DEFAULT_VIEWPORT_PADDING: f64 = 8.0;

/// Horizontal alignment of the panel relative to its trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Panel's left edge lines up with the trigger's left edge.
    #[default]
    Start,
    /// Panel is centered horizontally on the trigger.
    Center,
    /// Panel's right edge lines up with the trigger's right edge.
    End,
}

impl Align {
    /// Returns the panel's left coordinate for this alignment, before any
    /// viewport clamping.
    #[must_use]
    pub fn baseline_left(self, trigger: Rect, panel_width: f64) -> f64 {
        match self {
            Self::Start => trigger.x0,
            Self::Center => trigger.x0 + trigger.width() / 2.0 - panel_width / 2.0,
            Self::End => trigger.x1 - panel_width,
        }
    }
}

/// Vertical gaps between trigger and panel, one per side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gap {
    /// Gap used when the panel sits below the trigger.
    pub below: f64,
    /// Gap used when the panel flips above the trigger.
    pub above: f64,
}

impl Default for Gap {
    fn default() -> Self {
        Self {
            below: DEFAULT_GAP_BELOW,
            above: DEFAULT_GAP_ABOVE,
        }
    }
}

/// Tunable placement options.
///
/// | option             | default                        |
/// |--------------------|--------------------------------|
/// | `align`            | [`Align::Start`]               |
/// | `gap.below`        | [`DEFAULT_GAP_BELOW`] (`4`)    |
/// | `gap.above`        | [`DEFAULT_GAP_ABOVE`] (`17`)   |
/// | `viewport_padding` | [`DEFAULT_VIEWPORT_PADDING`] (`8`) |
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementOptions {
    /// Horizontal alignment relative to the trigger.
    pub align: Align,
    /// Gaps between trigger and panel.
    pub gap: Gap,
    /// Minimum distance from the left/right viewport edges.
    pub viewport_padding: f64,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            align: Align::default(),
            gap: Gap::default(),
            viewport_padding: DEFAULT_VIEWPORT_PADDING,
        }
    }
}

impl PlacementOptions {
    /// Returns these options with a different alignment.
    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Returns these options with both gaps replaced.
    #[must_use]
    pub fn with_gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }

    /// Returns these options with a different gap below the trigger.
    #[must_use]
    pub fn with_gap_below(mut self, below: f64) -> Self {
        self.gap.below = below;
        self
    }

    /// Returns these options with a different gap above the trigger.
    #[must_use]
    pub fn with_gap_above(mut self, above: f64) -> Self {
        self.gap.above = above;
        self
    }

    /// Returns these options with a different viewport padding.
    #[must_use]
    pub fn with_viewport_padding(mut self, padding: f64) -> Self {
        self.viewport_padding = padding;
        self
    }
}
