// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;

use crate::compute::PlacementResult;

/// A number rendered as a CSS pixel length, e.g. `183px`.
///
/// Integral values print without a fractional part and negative zero prints
/// as `0px`. Non-finite values use the script spelling (`NaNpx`,
/// `Infinitypx`), which style engines reject like any other invalid length.
/// Magnitudes of `1e21` and above, or below `1e-6`, print in positional form
/// (`1000000000000000000000px`, `0.0000001px`) where script number formatting
/// would switch to exponent form (`1e+21px`, `1e-7px`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssPx(pub f64);

impl fmt::Display for CssPx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("NaN")?;
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })?;
        } else if v == 0.0 {
            f.write_str("0")?;
        } else {
            write!(f, "{v}")?;
        }
        f.write_str("px")
    }
}

/// Inline style values for a positioned panel.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PanelStyle {
    /// Value for `top`.
    pub top: String,
    /// Value for `left`.
    pub left: String,
    /// Value for `min-width`.
    pub min_width: String,
}

impl PanelStyle {
    /// Formats a [`PlacementResult`].
    #[must_use]
    pub fn from_result(result: &PlacementResult) -> Self {
        Self {
            top: CssPx(result.top).to_string(),
            left: CssPx(result.left).to_string(),
            min_width: CssPx(result.min_width).to_string(),
        }
    }

    /// CSS property name and value pairs, in `top`, `left`, `min-width` order.
    pub fn properties(&self) -> [(&'static str, &str); 3] {
        [
            ("top", self.top.as_str()),
            ("left", self.left.as_str()),
            ("min-width", self.min_width.as_str()),
        ]
    }
}
