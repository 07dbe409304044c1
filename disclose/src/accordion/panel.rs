// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use disclose_core::dom::Dom;
use disclose_core::element::Element;
use disclose_panel::{EndEvent, PanelState, PanelVariant, Schedule, Ticket};

use super::{AccordionItem, AccordionRoot};
use crate::events::{BeforeMatchEvent, BeforeMatchOutcome};
use crate::panel::{PanelPart, PanelProps};

/// `Accordion.ItemPanel`: the animated content region of an item.
///
/// `hidden_until_found` is on when either the panel or the root sets it.
#[derive(Debug)]
pub struct AccordionItemPanel<N> {
    part: PanelPart<N>,
}

impl<N: Copy + Eq + fmt::Debug> AccordionItemPanel<N> {
    /// Create a panel seeded from the item's current open state.
    pub fn new(props: PanelProps, root: &AccordionRoot<N>, item: &AccordionItem) -> Self {
        Self {
            part: PanelPart::new(
                PanelVariant::Accordion,
                props,
                item.is_open(root),
                root.hidden_until_found(),
            ),
        }
    }

    /// Panel state.
    pub fn state(&self) -> &PanelState {
        self.part.state()
    }

    /// The panel node was mounted.
    pub fn mount(&mut self, item: &mut AccordionItem, node: N) {
        self.part.mount(&mut item.panel_id, node);
    }

    /// The panel node was removed; pending work is dropped.
    pub fn unmount(&mut self, item: &mut AccordionItem) -> Option<N> {
        self.part.unmount(&mut item.panel_id)
    }

    /// Reconcile the panel with the item's open state.
    pub fn sync<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        root: &AccordionRoot<N>,
        item: &AccordionItem,
    ) -> Schedule {
        self.part
            .sync(dom, item.is_open(root), root.hidden_until_found())
    }

    /// See [`PanelMachine::run_deferred`](disclose_panel::PanelMachine::run_deferred).
    pub fn run_deferred<D: Dom<Node = N>>(&mut self, dom: &mut D, ticket: Ticket) -> bool {
        self.part.run_deferred(dom, ticket)
    }

    /// See [`PanelMachine::on_end_event`](disclose_panel::PanelMachine::on_end_event).
    pub fn on_end_event<D: Dom<Node = N>>(&mut self, dom: &mut D, event: EndEvent) -> bool {
        self.part.on_end_event(dom, event)
    }

    /// Handle `beforematch`: snap the item open without animating.
    ///
    /// Unless a consumer handler stopped, the host should prevent the native
    /// reveal; the panel opens instantly instead.
    pub fn before_match<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        root: &mut AccordionRoot<N>,
        item: &AccordionItem,
        event: &BeforeMatchEvent,
    ) -> BeforeMatchOutcome {
        let response = self.part.before_match(dom, event);
        if response.request_open {
            item.set_open(root, true);
        }
        BeforeMatchOutcome {
            prevent_default: response.prevent_default,
            schedule: self.sync(dom, root, item),
        }
    }

    /// Describe the panel element.
    pub fn render(&self, root: &AccordionRoot<N>, item: &AccordionItem) -> Element {
        self.part
            .render(item.view(root), "accordion-item-panel", true)
    }
}
