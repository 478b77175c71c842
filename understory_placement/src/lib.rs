// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: viewport-aware positioning for floating panels.
//!
//! This crate computes where a dropdown, select list, menu or popover should
//! render relative to the element that opened it (the _trigger_). It is a
//! small, headless calculation:
//! - Place the panel below the trigger, aligned to its start, center or end.
//! - Flip it above the trigger when it would overflow the bottom of the
//!   viewport and there is room above.
//! - Clamp it horizontally so it keeps a padding from the viewport edges.
//!
//! The calculation does **not** measure elements, write styles, or decide
//! when an overlay opens. Callers are expected to:
//! - Measure the trigger and panel (for example with a bounding-rect query)
//!   and pass them as [`kurbo::Rect`]s in viewport pixels.
//! - Apply the resulting [`PanelStyle`] to the panel.
//! - Recompute on open and on viewport resize, typically through
//!   [`Floating`], which pulls geometry from any [`RectSource`].
//!
//! On `wasm32` the `web` module measures DOM elements and reads the window
//! size, so browser callers do not have to supply the viewport themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_placement::{Align, Placement, PlacementOptions, PlacementRequest, compute_placement};
//!
//! let trigger = Rect::new(100.0, 40.0, 200.0, 80.0);
//! let panel = Rect::new(0.0, 0.0, 160.0, 240.0);
//! let viewport = Size::new(1024.0, 768.0);
//!
//! let request = PlacementRequest::new(trigger, panel, viewport)
//!     .with_options(PlacementOptions::default().with_align(Align::Center));
//! let result = compute_placement(&request);
//!
//! assert_eq!(result.placement, Placement::Bottom);
//! assert_eq!(result.top, 84.0);
//! assert_eq!(result.left, 70.0);
//! assert_eq!(result.min_width, 100.0);
//!
//! let style = result.to_style();
//! assert_eq!(style.left, "70px");
//! ```
//!
//! ## Design notes
//!
//! - The panel's width is never computed here; `min_width` simply echoes the
//!   trigger's width so the panel is at least as wide as its trigger.
//! - Flipping is attempted once. On very small viewports the flipped panel may
//!   still overflow the top edge; the result is returned as is.
//! - The left padding clamp runs last and wins over the right-edge correction.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod compute;
pub mod floating;
mod geometry;
mod options;
mod style;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use compute::{Placement, PlacementRequest, PlacementResult, compute_placement};
pub use floating::Floating;
pub use geometry::RectSource;
pub use options::{
    Align, DEFAULT_GAP_ABOVE, DEFAULT_GAP_BELOW, DEFAULT_VIEWPORT_PADDING, Gap, PlacementOptions,
};
pub use style::{CssPx, PanelStyle};
