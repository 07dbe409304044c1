// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorative open/closed indicators.

use disclose_core::element::Element;
use disclose_core::style::{StyleSource, merge_styles};

use crate::view::DisclosureView;

/// Props of `Collapsible.Indicator` and `Accordion.ItemIndicator`.
#[derive(Clone, Debug, Default)]
pub struct IndicatorProps {
    /// Consumer style, merged over the non-interactive base.
    pub style: Option<StyleSource>,
}

impl IndicatorProps {
    pub(crate) fn render(&self, view: DisclosureView<'_>, part: &str) -> Element {
        let base = StyleSource::record([
            ("pointer-events", Some("none")),
            ("user-select", Some("none")),
        ]);
        Element::new("span")
            .attr("aria-hidden", "true")
            .marker(part)
            .attr("data-state", view.data_state())
            .flag("data-disabled", view.disabled)
            .with_style(merge_styles([Some(&base), self.style.as_ref()]))
    }
}
