// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use disclose_core::element::Element;
use disclose_core::id::{IdManager, IdSource};
use disclose_core::style::{StyleSource, merge_styles};

use super::AccordionRoot;
use crate::indicator::IndicatorProps;
use crate::view::DisclosureView;

/// Props of [`AccordionItem`].
#[derive(Clone, Debug, Default)]
pub struct AccordionItemProps {
    /// Identifies the item in the root's open values; generated when `None`.
    pub value: Option<String>,
    /// Disable this item.
    pub disabled: bool,
    /// Consumer style.
    pub style: Option<StyleSource>,
}

/// `Accordion.Item`: one collapsible section.
#[derive(Debug)]
pub struct AccordionItem {
    value: String,
    disabled: bool,
    style: Option<StyleSource>,
    pub(crate) trigger_id: IdManager,
    pub(crate) panel_id: IdManager,
}

impl AccordionItem {
    /// Create an item; the fallback value and the part ids come from `ids`.
    pub fn new(props: AccordionItemProps, ids: &mut IdSource) -> Self {
        let AccordionItemProps {
            value,
            disabled,
            style,
        } = props;
        let fallback = ids.generate("disclose-accordion-item-");
        Self {
            value: value.unwrap_or(fallback),
            disabled,
            style,
            trigger_id: IdManager::new("disclose-accordion-item-trigger-", ids),
            panel_id: IdManager::new("disclose-accordion-item-panel-", ids),
        }
    }

    /// The item's value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the root lists this item as open.
    pub fn is_open<N: Copy + Eq + fmt::Debug>(&self, root: &AccordionRoot<N>) -> bool {
        root.is_item_open(&self.value)
    }

    /// Open or close this item through the root.
    pub fn set_open<N: Copy + Eq + fmt::Debug>(&self, root: &mut AccordionRoot<N>, open: bool) {
        if open {
            root.open_item(&self.value);
        } else {
            root.close_item(&self.value);
        }
    }

    /// Own `disabled` or the root's.
    pub fn is_disabled<N: Copy + Eq + fmt::Debug>(&self, root: &AccordionRoot<N>) -> bool {
        self.disabled || root.is_disabled()
    }

    /// Update the item's own `disabled`.
    pub fn set_disabled<N: Copy + Eq + fmt::Debug>(
        &mut self,
        root: &mut AccordionRoot<N>,
        disabled: bool,
    ) {
        self.disabled = disabled;
        root.set_item_disabled(self.slot(), disabled);
    }

    /// Key of this item's trigger slot in the root; unique per [`IdSource`].
    pub(crate) fn slot(&self) -> &str {
        self.trigger_id.fallback()
    }

    pub(crate) fn own_disabled(&self) -> bool {
        self.disabled
    }

    /// Id of the mounted trigger.
    pub fn trigger_id(&self) -> Option<&str> {
        self.trigger_id.id()
    }

    /// Id of the mounted panel.
    pub fn panel_id(&self) -> Option<&str> {
        self.panel_id.id()
    }

    /// The view shared with the item's parts.
    pub fn view<N: Copy + Eq + fmt::Debug>(&self, root: &AccordionRoot<N>) -> DisclosureView<'_> {
        DisclosureView {
            open: self.is_open(root),
            disabled: self.is_disabled(root),
            trigger_id: self.trigger_id(),
            panel_id: self.panel_id(),
        }
    }

    /// Describe the item element.
    pub fn render<N: Copy + Eq + fmt::Debug>(&self, root: &AccordionRoot<N>) -> Element {
        let view = self.view(root);
        Element::new("div")
            .marker("accordion-item")
            .attr("data-state", view.data_state())
            .flag("data-disabled", view.disabled)
            .with_style(merge_styles([self.style.as_ref()]))
    }
}

/// `Accordion.ItemHeader`: the heading wrapping an item's trigger.
#[derive(Clone, Debug, Default)]
pub struct AccordionItemHeader {
    /// Heading tag; `h3` when `None`.
    pub tag: Option<&'static str>,
    /// Consumer style.
    pub style: Option<StyleSource>,
}

impl AccordionItemHeader {
    /// Describe the header element.
    pub fn render<N: Copy + Eq + fmt::Debug>(
        &self,
        root: &AccordionRoot<N>,
        item: &AccordionItem,
    ) -> Element {
        let view = item.view(root);
        Element::new(self.tag.unwrap_or("h3"))
            .marker("accordion-item-header")
            .attr("data-state", view.data_state())
            .flag("data-disabled", view.disabled)
            .with_style(merge_styles([self.style.as_ref()]))
    }
}

/// `Accordion.ItemIndicator`.
#[derive(Clone, Debug, Default)]
pub struct AccordionItemIndicator {
    props: IndicatorProps,
}

impl AccordionItemIndicator {
    /// Create an indicator.
    pub fn new(props: IndicatorProps) -> Self {
        Self { props }
    }

    /// Describe the indicator element.
    pub fn render<N: Copy + Eq + fmt::Debug>(
        &self,
        root: &AccordionRoot<N>,
        item: &AccordionItem,
    ) -> Element {
        self.props.render(item.view(root), "accordion-item-indicator")
    }
}
