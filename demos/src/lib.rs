// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the runnable demos.

use understory_scroll_lock::ScrollSurface;

/// Installs a stderr subscriber that shows placement and lock traces.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .try_init();
}

/// An in-memory page body, standing in for `document.body` off the web.
#[derive(Clone, Debug, Default)]
pub struct HeadlessPage {
    /// Inline `overflow`.
    pub overflow: String,
    /// Inline `padding-right`.
    pub padding_right: String,
    /// Width of the vertical scrollbar in pixels.
    pub scrollbar_width: f64,
}

impl HeadlessPage {
    /// A page with a classic (non-overlay) scrollbar of the given width.
    pub fn with_scrollbar(width: f64) -> Self {
        Self {
            scrollbar_width: width,
            ..Self::default()
        }
    }
}

impl ScrollSurface for HeadlessPage {
    fn overflow(&self) -> String {
        self.overflow.clone()
    }

    fn set_overflow(&mut self, value: &str) {
        value.clone_into(&mut self.overflow);
    }

    fn padding_right(&self) -> String {
        self.padding_right.clone()
    }

    fn set_padding_right(&mut self, value: &str) {
        value.clone_into(&mut self.padding_right);
    }

    fn scrollbar_width(&self) -> f64 {
        self.scrollbar_width
    }
}
