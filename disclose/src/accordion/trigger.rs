// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::marker::PhantomData;

use disclose_core::element::Element;

use super::{AccordionItem, AccordionRoot};
use crate::events::ClickEvent;
use crate::trigger::TriggerProps;

/// `Accordion.ItemTrigger`: the button opening and closing an item.
///
/// Mounting registers the trigger's node with the root for arrow-key focus.
pub struct AccordionItemTrigger<N> {
    props: TriggerProps,
    _node: PhantomData<fn() -> N>,
}

impl<N> fmt::Debug for AccordionItemTrigger<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionItemTrigger")
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

impl<N> Default for AccordionItemTrigger<N> {
    fn default() -> Self {
        Self::new(TriggerProps::default())
    }
}

impl<N> AccordionItemTrigger<N> {
    /// Create a trigger.
    pub fn new(props: TriggerProps) -> Self {
        Self {
            props,
            _node: PhantomData,
        }
    }
}

impl<N: Copy + Eq + fmt::Debug> AccordionItemTrigger<N> {
    /// The trigger node was mounted.
    pub fn mount(&self, root: &mut AccordionRoot<N>, item: &mut AccordionItem, node: N) {
        self.props.mount(&mut item.trigger_id);
        root.register_trigger(item.slot(), node, self.props.disabled, item.own_disabled());
    }

    /// The trigger node was removed.
    pub fn unmount(&self, root: &mut AccordionRoot<N>, item: &mut AccordionItem) -> Option<N> {
        item.trigger_id.clear();
        root.unregister_trigger(item.slot())
    }

    /// Own `disabled` when set, else the item's.
    pub fn is_disabled(&self, root: &AccordionRoot<N>, item: &AccordionItem) -> bool {
        self.props.is_disabled(item.is_disabled(root))
    }

    /// Handle a click. Returns `true` when the item was toggled.
    pub fn click(
        &mut self,
        root: &mut AccordionRoot<N>,
        item: &AccordionItem,
        event: &ClickEvent,
    ) -> bool {
        let toggle = self.props.click(item.view(root), event);
        if toggle {
            let open = item.is_open(root);
            item.set_open(root, !open);
        }
        toggle
    }

    /// Describe the trigger element.
    pub fn render(&self, root: &AccordionRoot<N>, item: &AccordionItem) -> Element {
        self.props.render(item.view(root), "accordion-item-trigger")
    }
}
