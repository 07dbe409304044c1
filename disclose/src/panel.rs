// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel props and the part shared by `Collapsible.Panel` and `Accordion.ItemPanel`.

use alloc::string::String;
use core::fmt;

use disclose_core::dom::Dom;
use disclose_core::element::Element;
use disclose_core::handlers::Handlers;
use disclose_core::id::IdManager;
use disclose_core::style::{StyleSource, merge_styles};
use disclose_panel::machine::CompleteCallback;
use disclose_panel::{
    BeforeMatchResponse, EndEvent, PanelMachine, PanelState, PanelVariant, Schedule, Ticket,
};

use crate::events::BeforeMatchEvent;
use crate::view::DisclosureView;

/// Props of `Collapsible.Panel` and `Accordion.ItemPanel`.
#[derive(Default)]
pub struct PanelProps {
    /// Explicit id; a generated one is used otherwise.
    pub id: Option<String>,
    /// Close with `hidden="until-found"` so in-page search can reveal content.
    pub hidden_until_found: bool,
    /// Called with `true` once opened and `false` once closed.
    pub on_open_change_complete: Option<CompleteCallback>,
    /// Consumer `beforematch` handlers, run before the internal one.
    pub on_before_match: Handlers<BeforeMatchEvent>,
    /// Consumer style, merged over the panel's base style.
    pub style: Option<StyleSource>,
}

impl fmt::Debug for PanelProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelProps")
            .field("id", &self.id)
            .field("hidden_until_found", &self.hidden_until_found)
            .field(
                "on_open_change_complete",
                &self.on_open_change_complete.is_some(),
            )
            .field("on_before_match", &self.on_before_match)
            .field("style", &self.style)
            .finish()
    }
}

#[derive(Debug)]
pub(crate) struct PanelPart<N> {
    machine: PanelMachine<N>,
    id: Option<String>,
    hidden_until_found: bool,
    on_before_match: Handlers<BeforeMatchEvent>,
    style: Option<StyleSource>,
}

impl<N: Copy + Eq + fmt::Debug> PanelPart<N> {
    pub(crate) fn new(
        variant: PanelVariant,
        props: PanelProps,
        open: bool,
        inherited_hidden_until_found: bool,
    ) -> Self {
        let PanelProps {
            id,
            hidden_until_found,
            on_open_change_complete,
            on_before_match,
            style,
        } = props;
        let mut machine = PanelMachine::new(
            variant,
            open,
            hidden_until_found || inherited_hidden_until_found,
        );
        machine.set_on_complete(on_open_change_complete);
        Self {
            machine,
            id,
            hidden_until_found,
            on_before_match,
            style,
        }
    }

    pub(crate) fn state(&self) -> &PanelState {
        self.machine.state()
    }

    pub(crate) fn node(&self) -> Option<N> {
        self.machine.node()
    }

    pub(crate) fn mount(&mut self, ids: &mut IdManager, node: N) {
        ids.set(self.id.as_deref());
        self.machine.attach(node);
    }

    pub(crate) fn unmount(&mut self, ids: &mut IdManager) -> Option<N> {
        ids.clear();
        self.machine.detach()
    }

    pub(crate) fn sync<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        open: bool,
        inherited_hidden_until_found: bool,
    ) -> Schedule {
        self.machine
            .set_hidden_until_found(self.hidden_until_found || inherited_hidden_until_found);
        self.machine.sync_open(dom, open)
    }

    pub(crate) fn run_deferred<D: Dom<Node = N>>(&mut self, dom: &mut D, ticket: Ticket) -> bool {
        self.machine.run_deferred(dom, ticket)
    }

    pub(crate) fn on_end_event<D: Dom<Node = N>>(&mut self, dom: &mut D, event: EndEvent) -> bool {
        self.machine.on_end_event(dom, event)
    }

    pub(crate) fn before_match<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        event: &BeforeMatchEvent,
    ) -> BeforeMatchResponse {
        let consumer = self.on_before_match.run(event);
        self.machine.before_match(dom, consumer)
    }

    /// `region` adds `role="region"` while a trigger id is known.
    pub(crate) fn render(&self, view: DisclosureView<'_>, part: &str, region: bool) -> Element {
        let base = self.machine.style();
        Element::new("div")
            .attr_opt("id", view.panel_id)
            .attr_opt("role", view.trigger_id.filter(|_| region).map(|_| "region"))
            .attr_opt("hidden", self.machine.hidden_attribute())
            .attr_opt("aria-labelledby", view.trigger_id)
            .marker(part)
            .attr("data-state", self.state().visual.as_str())
            .flag("data-disabled", view.disabled)
            .with_style(merge_styles([Some(&base), self.style.as_ref()]))
    }
}
