// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values of the panel height custom property.

use core::fmt;

/// The value written to a panel's height custom property.
///
/// Stylesheets consume the property (for example
/// `height: var(--disclose-collapsible-panel-height)`) to drive the open/close
/// motion. Only these forms are ever written.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PanelHeight {
    /// Fully open; native layout tracks content changes.
    Auto,
    /// Closed with `hidden="until-found"`; keeps in-page search working.
    None,
    /// A pixel length, always finite and non-negative.
    Px(f64),
}

impl PanelHeight {
    /// `0px`.
    pub const ZERO: Self = Self::Px(0.0);

    /// A pixel height. Negative, NaN, and infinite inputs become `0px`.
    pub fn px(value: f64) -> Self {
        Self::Px(sanitize(value))
    }

    /// Whether this is a pixel length.
    pub const fn is_px(self) -> bool {
        matches!(self, Self::Px(_))
    }
}

impl fmt::Display for PanelHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Auto => f.write_str("auto"),
            Self::None => f.write_str("none"),
            Self::Px(value) => write!(f, "{}px", sanitize(value)),
        }
    }
}

/// Clamp to a finite, non-negative number (`-0` included).
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
