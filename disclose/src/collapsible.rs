// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsible: one trigger showing and hiding one panel.
//!
//! Parts:
//! - [`CollapsibleRoot`] owns `open` (controlled or uncontrolled), `disabled`,
//!   and the trigger/panel id managers.
//! - [`CollapsibleTrigger`] toggles the root on click.
//! - [`CollapsiblePanel`] runs the animated height machine for its node.
//! - [`CollapsibleIndicator`] is a decorative `span` reflecting the state.
//!
//! Parts receive the root explicitly. After anything that may change `open`
//! (a click, a `beforematch`, the owner updating a controlled cell), the host
//! calls [`CollapsiblePanel::sync`] and schedules what it returns.

use core::fmt;

use disclose_core::controllable::{ChangeCallback, Controllable, SharedState};
use disclose_core::dom::{Dom, scroll_into_view_if_needed};
use disclose_core::element::Element;
use disclose_core::id::{IdManager, IdSource};
use disclose_core::style::{StyleSource, merge_styles};
use disclose_panel::{EndEvent, PanelState, PanelVariant, Schedule, Ticket};

use crate::events::{BeforeMatchEvent, BeforeMatchOutcome, ClickEvent};
use crate::indicator::IndicatorProps;
use crate::panel::{PanelPart, PanelProps};
use crate::trigger::TriggerProps;
use crate::view::DisclosureView;

const TRIGGER_PREFIX: &str = "disclose-collapsible-trigger-";
const PANEL_PREFIX: &str = "disclose-collapsible-panel-";

/// Props of [`CollapsibleRoot`].
#[derive(Default)]
pub struct CollapsibleRootProps {
    /// Initial `open` when uncontrolled.
    pub default_open: bool,
    /// Caller-owned `open`; makes the root controlled.
    pub open: Option<SharedState<bool>>,
    /// Notified with every requested `open` value.
    pub on_open_change: Option<ChangeCallback<bool>>,
    /// Disable the trigger.
    pub disabled: bool,
    /// Consumer style, merged over `contain: layout style`.
    pub style: Option<StyleSource>,
}

impl fmt::Debug for CollapsibleRootProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollapsibleRootProps")
            .field("default_open", &self.default_open)
            .field("open", &self.open)
            .field("on_open_change", &self.on_open_change.is_some())
            .field("disabled", &self.disabled)
            .field("style", &self.style)
            .finish()
    }
}

/// `Collapsible.Root`.
#[derive(Debug)]
pub struct CollapsibleRoot {
    open: Controllable<bool>,
    disabled: bool,
    style: Option<StyleSource>,
    trigger_id: IdManager,
    panel_id: IdManager,
}

impl CollapsibleRoot {
    /// Create a root; ids for the trigger and panel are drawn from `ids`.
    pub fn new(props: CollapsibleRootProps, ids: &mut IdSource) -> Self {
        let CollapsibleRootProps {
            default_open,
            open,
            on_open_change,
            disabled,
            style,
        } = props;

        let mut state = match open {
            Some(cell) => Controllable::controlled(cell),
            None => Controllable::uncontrolled(default_open),
        };
        if let Some(on_change) = on_open_change {
            state = state.with_on_change(on_change);
        }

        Self {
            open: state,
            disabled,
            style,
            trigger_id: IdManager::new(TRIGGER_PREFIX, ids),
            panel_id: IdManager::new(PANEL_PREFIX, ids),
        }
    }

    /// Current `open`.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Request a new `open` value.
    pub fn set_open(&mut self, open: bool) {
        self.open.request(open);
    }

    /// Whether the root is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Update `disabled`.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Id of the mounted trigger.
    pub fn trigger_id(&self) -> Option<&str> {
        self.trigger_id.id()
    }

    /// Id of the mounted panel.
    pub fn panel_id(&self) -> Option<&str> {
        self.panel_id.id()
    }

    /// The view shared with the parts.
    pub fn view(&self) -> DisclosureView<'_> {
        DisclosureView {
            open: self.is_open(),
            disabled: self.disabled,
            trigger_id: self.trigger_id(),
            panel_id: self.panel_id(),
        }
    }

    /// Describe the root element.
    pub fn render(&self) -> Element {
        let base = StyleSource::record([("contain", Some("layout style"))]);
        let view = self.view();
        Element::new("div")
            .marker("collapsible-root")
            .attr("data-state", view.data_state())
            .flag("data-disabled", view.disabled)
            .with_style(merge_styles([Some(&base), self.style.as_ref()]))
    }
}

/// `Collapsible.Trigger`.
#[derive(Debug, Default)]
pub struct CollapsibleTrigger {
    props: TriggerProps,
}

impl CollapsibleTrigger {
    /// Create a trigger.
    pub fn new(props: TriggerProps) -> Self {
        Self { props }
    }

    /// The trigger node was mounted: publish its id.
    pub fn mount(&self, root: &mut CollapsibleRoot) {
        self.props.mount(&mut root.trigger_id);
    }

    /// The trigger node was removed.
    pub fn unmount(&self, root: &mut CollapsibleRoot) {
        root.trigger_id.clear();
    }

    /// Own `disabled` when set, else the root's.
    pub fn is_disabled(&self, root: &CollapsibleRoot) -> bool {
        self.props.is_disabled(root.disabled)
    }

    /// Handle a click. Returns `true` when `open` was flipped.
    pub fn click(&mut self, root: &mut CollapsibleRoot, event: &ClickEvent) -> bool {
        let toggle = self.props.click(root.view(), event);
        if toggle {
            let open = root.is_open();
            root.set_open(!open);
        }
        toggle
    }

    /// Describe the trigger element.
    pub fn render(&self, root: &CollapsibleRoot) -> Element {
        self.props.render(root.view(), "collapsible-trigger")
    }
}

/// `Collapsible.Panel`.
#[derive(Debug)]
pub struct CollapsiblePanel<N> {
    part: PanelPart<N>,
}

impl<N: Copy + Eq + fmt::Debug> CollapsiblePanel<N> {
    /// Create a panel seeded from the root's current `open`.
    pub fn new(props: PanelProps, root: &CollapsibleRoot) -> Self {
        Self {
            part: PanelPart::new(PanelVariant::Collapsible, props, root.is_open(), false),
        }
    }

    /// Panel state.
    pub fn state(&self) -> &PanelState {
        self.part.state()
    }

    /// The panel node was mounted.
    pub fn mount(&mut self, root: &mut CollapsibleRoot, node: N) {
        self.part.mount(&mut root.panel_id, node);
    }

    /// The panel node was removed; pending work is dropped.
    pub fn unmount(&mut self, root: &mut CollapsibleRoot) -> Option<N> {
        self.part.unmount(&mut root.panel_id)
    }

    /// Reconcile the panel with the root's `open`.
    pub fn sync<D: Dom<Node = N>>(&mut self, dom: &mut D, root: &CollapsibleRoot) -> Schedule {
        self.part.sync(dom, root.is_open(), false)
    }

    /// See [`PanelMachine::run_deferred`](disclose_panel::PanelMachine::run_deferred).
    pub fn run_deferred<D: Dom<Node = N>>(&mut self, dom: &mut D, ticket: Ticket) -> bool {
        self.part.run_deferred(dom, ticket)
    }

    /// See [`PanelMachine::on_end_event`](disclose_panel::PanelMachine::on_end_event).
    pub fn on_end_event<D: Dom<Node = N>>(&mut self, dom: &mut D, event: EndEvent) -> bool {
        self.part.on_end_event(dom, event)
    }

    /// Handle `beforematch`: open, then keep the match in view.
    ///
    /// The native reveal is left alone. Once the root reports open, the panel
    /// is scrolled into view (centered when it was off-screen).
    pub fn before_match<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        root: &mut CollapsibleRoot,
        event: &BeforeMatchEvent,
    ) -> BeforeMatchOutcome {
        let response = self.part.before_match(dom, event);
        if response.request_open {
            root.set_open(true);
        }
        let schedule = self.sync(dom, root);
        if response.scroll_into_view {
            if let Some(node) = self.part.node().filter(|&node| dom.is_connected(node)) {
                scroll_into_view_if_needed(dom, node, true);
            }
        }
        BeforeMatchOutcome {
            prevent_default: response.prevent_default,
            schedule,
        }
    }

    /// Describe the panel element.
    pub fn render(&self, root: &CollapsibleRoot) -> Element {
        self.part.render(root.view(), "collapsible-panel", false)
    }
}

/// `Collapsible.Indicator`.
#[derive(Clone, Debug, Default)]
pub struct CollapsibleIndicator {
    props: IndicatorProps,
}

impl CollapsibleIndicator {
    /// Create an indicator.
    pub fn new(props: IndicatorProps) -> Self {
        Self { props }
    }

    /// Describe the indicator element.
    pub fn render(&self, root: &CollapsibleRoot) -> Element {
        self.props.render(root.view(), "collapsible-indicator")
    }
}
