// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger props and the rendering shared by every trigger.

use alloc::string::String;

use disclose_core::element::Element;
use disclose_core::handlers::Handlers;
use disclose_core::id::IdManager;
use disclose_core::style::{StyleSource, merge_styles};

use crate::events::ClickEvent;
use crate::view::DisclosureView;

/// Props of `Collapsible.Trigger` and `Accordion.ItemTrigger`.
#[derive(Debug, Default)]
pub struct TriggerProps {
    /// Explicit id; a generated one is used otherwise.
    pub id: Option<String>,
    /// Overrides the inherited disabled state when set.
    pub disabled: Option<bool>,
    /// Consumer click handlers, run before the toggle.
    pub on_click: Handlers<ClickEvent>,
    /// Consumer style.
    pub style: Option<StyleSource>,
}

impl TriggerProps {
    pub(crate) fn is_disabled(&self, inherited: bool) -> bool {
        self.disabled.unwrap_or(inherited)
    }

    pub(crate) fn mount(&self, ids: &mut IdManager) {
        ids.set(self.id.as_deref());
    }

    /// Run consumer handlers; `true` means the internal toggle should happen.
    pub(crate) fn click(&mut self, view: DisclosureView<'_>, event: &ClickEvent) -> bool {
        let disabled = self.is_disabled(view.disabled);
        !self.on_click.run(event).is_stop() && !disabled
    }

    pub(crate) fn render(&self, view: DisclosureView<'_>, part: &str) -> Element {
        let expanded = if view.open { "true" } else { "false" };
        Element::new("button")
            .attr("type", "button")
            .attr_opt("id", view.trigger_id)
            .flag("disabled", self.is_disabled(view.disabled))
            .attr_opt("aria-controls", view.panel_id.filter(|_| view.open))
            .attr_opt("aria-expanded", view.panel_id.map(|_| expanded))
            .marker(part)
            .attr("data-state", view.data_state())
            .flag("data-disabled", view.disabled)
            .with_style(merge_styles([self.style.as_ref()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disclose_core::handlers::Outcome;

    fn view(open: bool, panel_id: Option<&str>) -> DisclosureView<'_> {
        DisclosureView {
            open,
            disabled: false,
            trigger_id: Some("t"),
            panel_id,
        }
    }

    #[test]
    fn aria_wiring_needs_a_panel_id() {
        let props = TriggerProps::default();

        let el = props.render(view(true, None), "collapsible-trigger");
        assert!(!el.has("aria-controls"));
        assert!(!el.has("aria-expanded"));

        let el = props.render(view(false, Some("p")), "collapsible-trigger");
        assert!(!el.has("aria-controls"));
        assert_eq!(el.get("aria-expanded"), Some("false"));

        let el = props.render(view(true, Some("p")), "collapsible-trigger");
        assert_eq!(el.get("aria-controls"), Some("p"));
        assert_eq!(el.get("aria-expanded"), Some("true"));
        assert_eq!(el.get("type"), Some("button"));
        assert_eq!(el.tag, "button");
    }

    #[test]
    fn own_disabled_overrides_inherited() {
        let inherited = DisclosureView {
            disabled: true,
            ..view(false, None)
        };
        let props = TriggerProps {
            disabled: Some(false),
            ..TriggerProps::default()
        };
        let el = props.render(inherited, "x");
        assert!(!el.has("disabled"));
        // `data-disabled` keeps reflecting the inherited state.
        assert_eq!(el.get("data-disabled"), Some(""));

        let el = TriggerProps::default().render(inherited, "x");
        assert_eq!(el.get("disabled"), Some(""));
    }

    #[test]
    fn click_respects_stop_and_disabled() {
        let mut props = TriggerProps::default();
        assert!(props.click(view(false, None), &ClickEvent));

        let mut stopped = TriggerProps {
            on_click: Handlers::new().with(|_| Outcome::Stop),
            ..TriggerProps::default()
        };
        assert!(!stopped.click(view(false, None), &ClickEvent));

        let mut disabled = TriggerProps {
            disabled: Some(true),
            ..TriggerProps::default()
        };
        assert!(!disabled.click(view(false, None), &ClickEvent));
    }
}
