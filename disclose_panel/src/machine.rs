// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The panel state machine.
//!
//! One [`PanelMachine`] backs every animated panel, whether it belongs to a
//! collapsible or to an accordion item; [`PanelVariant`] selects the height
//! property name and the `beforematch` policy.
//!
//! ## Sequence
//!
//! Each change of the authoritative `open` value runs one pass of
//! [`PanelMachine::sync_open`]:
//!
//! - **Opening**: unhide, set `data-state="open"`, classify timing, measure the
//!   natural height. A transition starting from `none` first writes `0px` and
//!   defers the pixel height to the next macrotask; every other case writes the
//!   pixel height at once. On completion the height becomes `auto`.
//! - **Closing**: set `data-state="closed"`, classify, measure. A transition
//!   starting from `auto` first locks the pixel height and defers `0px`; other
//!   transitions write `0px` at once; animations get the pixel height as their
//!   starting point. On completion the panel hides and the height becomes
//!   `none` (hidden-until-found) or `0px`.
//!
//! ## Host contract
//!
//! The machine never sleeps and never registers listeners. `sync_open` returns
//! a [`Schedule`]; the host calls [`PanelMachine::run_deferred`] with the
//! deferred ticket on the next macrotask (`setTimeout(.., 0)`), and
//! [`PanelMachine::on_end_event`] when the awaited `transitionend` /
//! `animationend` fires on the panel. A new `sync_open` supersedes any pending
//! work, and so does [`PanelMachine::teardown`]; superseded tickets and events
//! are ignored.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use disclose_core::diagnostics::warn;
use disclose_core::dom::Dom;
use disclose_core::handlers::Outcome;
use disclose_core::style::StyleSource;

use crate::height::PanelHeight;
use crate::measure::measure_natural_height;
use crate::timing::{EndEvent, TimingMode, classify};

/// Which component a panel belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanelVariant {
    /// `Collapsible.Panel`.
    Collapsible,
    /// `Accordion.ItemPanel`.
    Accordion,
}

impl PanelVariant {
    /// The custom property carrying the panel height.
    pub const fn height_property(self) -> &'static str {
        match self {
            Self::Collapsible => "--disclose-collapsible-panel-height",
            Self::Accordion => "--disclose-accordion-item-panel-height",
        }
    }

    /// Component name used in diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Collapsible => "Collapsible.Panel",
            Self::Accordion => "Accordion.ItemPanel",
        }
    }
}

/// Value of `data-state`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisualState {
    /// `open`.
    Open,
    /// `closed`.
    Closed,
}

impl VisualState {
    /// `Open` when `open`, else `Closed`.
    pub const fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// The attribute value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Observable state of one panel.
///
/// `hidden` lags `open` while a close is in flight; `visual` follows `open`
/// immediately. Once settled, `hidden` holds exactly when `visual` is
/// [`VisualState::Closed`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelState {
    /// The last `open` value synced from the root.
    pub open: bool,
    /// Whether the panel is hidden.
    pub hidden: bool,
    /// Value of `data-state`.
    pub visual: VisualState,
    /// Value of the height custom property.
    pub height: PanelHeight,
    /// Close with `hidden="until-found"` instead of `hidden`.
    pub hidden_until_found: bool,
    /// Suppress transition and animation durations until the first change.
    pub prevent_initial_animation: bool,
    /// A `beforematch` reveal is in progress.
    pub is_before_match: bool,
}

impl PanelState {
    /// Initial state for a panel mounted with `open`.
    pub fn new(open: bool, hidden_until_found: bool) -> Self {
        let height = match (open, hidden_until_found) {
            (true, _) => PanelHeight::Auto,
            (false, true) => PanelHeight::None,
            (false, false) => PanelHeight::ZERO,
        };
        Self {
            open,
            hidden: !open,
            visual: VisualState::from_open(open),
            height,
            hidden_until_found,
            prevent_initial_animation: true,
            is_before_match: false,
        }
    }
}

/// Identifies one piece of pending work.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Work the host must schedule after [`PanelMachine::sync_open`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Call [`PanelMachine::run_deferred`] with this ticket on the next macrotask.
    pub deferred: Option<Ticket>,
    /// Call [`PanelMachine::on_end_event`] when this event fires on the panel.
    pub awaiting: Option<(EndEvent, Ticket)>,
}

impl Schedule {
    /// Nothing to schedule; the transition already settled.
    pub const fn is_idle(&self) -> bool {
        self.deferred.is_none() && self.awaiting.is_none()
    }
}

/// What the component should do with a `beforematch` event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BeforeMatchResponse {
    /// Call `preventDefault()` on the event.
    pub prevent_default: bool,
    /// Request `open = true` from the root.
    pub request_open: bool,
    /// Scroll the panel into view once it has opened.
    pub scroll_into_view: bool,
}

#[derive(Copy, Clone, Debug)]
struct Awaiting {
    event: EndEvent,
    ticket: Ticket,
    open: bool,
}

/// Completion callback: `true` once opened, `false` once closed.
pub type CompleteCallback = Box<dyn FnMut(bool)>;

/// The open/close height sequencer for one panel node.
pub struct PanelMachine<N> {
    variant: PanelVariant,
    node: Option<N>,
    state: PanelState,
    generation: u64,
    deferred: Option<(Ticket, PanelHeight)>,
    awaiting: Option<Awaiting>,
    on_complete: Option<CompleteCallback>,
}

impl<N: Copy + Eq + fmt::Debug> PanelMachine<N> {
    /// A machine seeded from the root's current `open` value.
    pub fn new(variant: PanelVariant, open: bool, hidden_until_found: bool) -> Self {
        Self {
            variant,
            node: None,
            state: PanelState::new(open, hidden_until_found),
            generation: 0,
            deferred: None,
            awaiting: None,
            on_complete: None,
        }
    }

    /// Attach the completion callback.
    #[must_use]
    pub fn with_on_complete(mut self, on_complete: impl FnMut(bool) + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    /// Replace the completion callback.
    pub fn set_on_complete(&mut self, on_complete: Option<CompleteCallback>) {
        self.on_complete = on_complete;
    }

    /// The variant.
    pub fn variant(&self) -> PanelVariant {
        self.variant
    }

    /// Current state.
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// The panel node, once attached.
    pub fn node(&self) -> Option<N> {
        self.node
    }

    /// Bind the machine to its rendered node.
    pub fn attach(&mut self, node: N) {
        self.node = Some(node);
    }

    /// Unbind from the node, dropping pending work.
    pub fn detach(&mut self) -> Option<N> {
        self.teardown();
        self.node.take()
    }

    /// Update the hidden-until-found flag (for example when the root's changes).
    pub fn set_hidden_until_found(&mut self, hidden_until_found: bool) {
        self.state.hidden_until_found = hidden_until_found;
    }

    /// Whether a deferred write or an end event is outstanding.
    pub fn is_pending(&self) -> bool {
        self.deferred.is_some() || self.awaiting.is_some()
    }

    /// Drop pending work; later tickets and events from it are ignored.
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.deferred = None;
        self.awaiting = None;
    }

    /// The `hidden` attribute value to render, if any.
    pub fn hidden_attribute(&self) -> Option<&'static str> {
        hidden_value(&self.state)
    }

    /// The base style record, to be merged under the consumer's style.
    pub fn style(&self) -> StyleSource {
        let state = &self.state;
        let mut pairs: Vec<(String, Option<String>)> = Vec::new();
        let mut push = |property: &str, value: String| {
            pairs.push((property.to_string(), Some(value)));
        };

        if state.hidden {
            if state.hidden_until_found {
                push("content-visibility", "hidden".into());
                // Chromium only highlights find-in-page matches with visible overflow.
                push("overflow", "visible".into());
            } else {
                push("display", "none".into());
            }
        }
        if state.prevent_initial_animation {
            push("transition-duration", "0s".into());
            push("animation-duration", "0s".into());
        }
        push(self.variant.height_property(), state.height.to_string());

        StyleSource::Record(pairs)
    }

    /// React to the root's `open` value.
    ///
    /// Re-syncing the value already synced is a no-op. Without a connected node
    /// there is nothing to animate: the state jumps to its settled form and the
    /// completion callback is not invoked.
    pub fn sync_open<D: Dom<Node = N>>(&mut self, dom: &mut D, open: bool) -> Schedule {
        if open == self.state.open {
            return Schedule::default();
        }
        self.teardown();
        let previous = self.state.height;
        self.state.open = open;
        self.state.visual = VisualState::from_open(open);

        let Some(node) = self.connected_node(dom) else {
            if !self.state.is_before_match {
                self.state.prevent_initial_animation = false;
            }
            self.settle_state(open);
            return Schedule::default();
        };

        trace_step!(panel = self.variant.label(), open, "panel transition started");

        if self.state.prevent_initial_animation && !self.state.is_before_match {
            self.state.prevent_initial_animation = false;
            dom.remove_style_property(node, "transition-duration");
            dom.remove_style_property(node, "animation-duration");
        }

        let ticket = Ticket(self.generation);
        let mut schedule = Schedule::default();

        if open {
            self.state.hidden = false;
            dom.remove_attribute(node, "hidden");
            if self.state.hidden_until_found {
                self.state.is_before_match = false;
            }
            // `hidden_until_found` may have flipped while closed.
            dom.remove_style_property(node, "content-visibility");
            dom.remove_style_property(node, "overflow");
            dom.remove_style_property(node, "display");
        }
        dom.set_attribute(node, "data-state", self.state.visual.as_str());

        let timing = classify(dom, node);
        let measured = PanelHeight::px(measure_natural_height(dom, node));
        let mode = timing.mode();

        match (open, mode, previous) {
            // Transitions need a numeric baseline before they can animate open.
            (true, TimingMode::Transition, PanelHeight::None) => {
                self.write_height(dom, node, PanelHeight::ZERO);
                self.deferred = Some((ticket, measured));
            }
            // Transitions cannot animate from `auto`; lock the height first.
            (false, TimingMode::Transition, PanelHeight::Auto) => {
                self.write_height(dom, node, measured);
                self.deferred = Some((ticket, PanelHeight::ZERO));
            }
            (false, TimingMode::Transition, _) => {
                self.write_height(dom, node, PanelHeight::ZERO);
            }
            _ => self.write_height(dom, node, measured),
        }
        schedule.deferred = self.deferred.map(|(ticket, _)| ticket);

        match mode {
            TimingMode::Transition | TimingMode::Animation => {
                if let Some(event) = mode.end_event() {
                    self.awaiting = Some(Awaiting {
                        event,
                        ticket,
                        open,
                    });
                    schedule.awaiting = Some((event, ticket));
                }
            }
            TimingMode::Both => {
                let message = format!(
                    "Both CSS transitions and CSS animations are detected on '{}' component.",
                    self.variant.label()
                );
                warn(&[
                    &message,
                    "Using both at the same time may cause unpredictable behavior.",
                    "Please use only one animation method.",
                ]);
                self.settle(dom, node, open);
            }
            TimingMode::None => self.settle(dom, node, open),
        }

        schedule
    }

    /// Apply the deferred height write for `ticket`.
    ///
    /// Returns `false` when the ticket was superseded or the node is gone.
    pub fn run_deferred<D: Dom<Node = N>>(&mut self, dom: &mut D, ticket: Ticket) -> bool {
        let Some((pending, height)) = self.deferred else {
            return false;
        };
        if pending != ticket {
            return false;
        }
        self.deferred = None;
        let Some(node) = self.connected_node(dom) else {
            return false;
        };
        trace_step!(panel = self.variant.label(), %height, "panel deferred height");
        self.write_height(dom, node, height);
        true
    }

    /// The awaited completion event fired on the panel.
    ///
    /// Returns `true` when it settled the current transition.
    pub fn on_end_event<D: Dom<Node = N>>(&mut self, dom: &mut D, event: EndEvent) -> bool {
        let Some(awaiting) = self.awaiting else {
            return false;
        };
        if awaiting.event != event {
            return false;
        }
        self.awaiting = None;
        if self
            .deferred
            .is_some_and(|(ticket, _)| ticket == awaiting.ticket)
        {
            self.deferred = None;
        }
        let Some(node) = self.connected_node(dom) else {
            return false;
        };
        self.settle(dom, node, awaiting.open);
        true
    }

    /// Handle a `beforematch` event after the consumer handlers ran.
    ///
    /// The accordion snaps open: it cancels the native reveal, suppresses
    /// motion for the coming open, and asks for `open = true`. The collapsible
    /// lets the native reveal proceed, asks for `open = true`, and then wants the
    /// panel scrolled into view.
    pub fn before_match<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        consumer: Outcome,
    ) -> BeforeMatchResponse {
        if consumer.is_stop() {
            return BeforeMatchResponse::default();
        }
        match self.variant {
            PanelVariant::Accordion => {
                self.state.is_before_match = true;
                self.state.prevent_initial_animation = true;
                if let Some(node) = self.connected_node(dom) {
                    dom.set_style_property(node, "transition-duration", "0s");
                    dom.set_style_property(node, "animation-duration", "0s");
                }
                BeforeMatchResponse {
                    prevent_default: true,
                    request_open: true,
                    scroll_into_view: false,
                }
            }
            PanelVariant::Collapsible => BeforeMatchResponse {
                prevent_default: false,
                request_open: true,
                scroll_into_view: true,
            },
        }
    }

    fn connected_node<D: Dom<Node = N>>(&self, dom: &D) -> Option<N> {
        self.node.filter(|&node| dom.is_connected(node))
    }

    fn write_height<D: Dom<Node = N>>(&mut self, dom: &mut D, node: N, height: PanelHeight) {
        self.state.height = height;
        dom.set_style_property(node, self.variant.height_property(), &height.to_string());
    }

    fn settle_state(&mut self, open: bool) {
        if open {
            self.state.hidden = false;
            self.state.height = PanelHeight::Auto;
        } else {
            self.state.hidden = true;
            self.state.height = if self.state.hidden_until_found {
                PanelHeight::None
            } else {
                PanelHeight::ZERO
            };
        }
    }

    fn settle<D: Dom<Node = N>>(&mut self, dom: &mut D, node: N, open: bool) {
        self.settle_state(open);
        if !open {
            if let Some(hidden) = hidden_value(&self.state) {
                dom.set_attribute(node, "hidden", hidden);
            }
            if self.state.hidden_until_found {
                dom.set_style_property(node, "content-visibility", "hidden");
                dom.set_style_property(node, "overflow", "visible");
            } else {
                dom.set_style_property(node, "display", "none");
            }
        }
        let height = self.state.height;
        dom.set_style_property(node, self.variant.height_property(), &height.to_string());

        trace_step!(panel = self.variant.label(), open, %height, "panel transition settled");
        if let Some(on_complete) = &mut self.on_complete {
            on_complete(open);
        }
    }
}

fn hidden_value(state: &PanelState) -> Option<&'static str> {
    match (state.hidden, state.hidden_until_found) {
        (false, _) => None,
        (true, true) => Some("until-found"),
        (true, false) => Some("hidden"),
    }
}

impl<N: fmt::Debug> fmt::Debug for PanelMachine<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelMachine")
            .field("variant", &self.variant)
            .field("node", &self.node)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("deferred", &self.deferred)
            .field("awaiting", &self.awaiting)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use disclose_core::dom::mock::{MockDom, MockNodeId};
    use disclose_core::style::merge_styles;

    type Log = Rc<RefCell<Vec<bool>>>;

    struct Fixture {
        dom: MockDom,
        node: MockNodeId,
        machine: PanelMachine<MockNodeId>,
        log: Log,
    }

    impl Fixture {
        fn new(variant: PanelVariant, open: bool, hidden_until_found: bool) -> Self {
            let mut dom = MockDom::new();
            let node = dom.create();
            dom.set_content_height(node, 100.0);

            let log: Log = Rc::default();
            let sink = Rc::clone(&log);
            let mut machine = PanelMachine::new(variant, open, hidden_until_found)
                .with_on_complete(move |open| sink.borrow_mut().push(open));
            machine.attach(node);

            // What the initial render puts on the node.
            for (property, value) in merge_styles([Some(&machine.style())]).iter() {
                dom.set_style_property(node, property, value);
            }
            if let Some(hidden) = machine.hidden_attribute() {
                dom.set_attribute(node, "hidden", hidden);
            }
            dom.set_attribute(node, "data-state", machine.state().visual.as_str());

            Self {
                dom,
                node,
                machine,
                log,
            }
        }

        fn with_sheet(mut self, property: &str, value: &str) -> Self {
            self.dom.set_sheet(self.node, property, value);
            self
        }

        fn sync(&mut self, open: bool) -> Schedule {
            self.machine.sync_open(&mut self.dom, open)
        }

        fn end(&mut self, event: EndEvent) -> bool {
            self.machine.on_end_event(&mut self.dom, event)
        }

        fn deferred(&mut self, ticket: Ticket) -> bool {
            self.machine.run_deferred(&mut self.dom, ticket)
        }

        fn height_var(&self) -> Option<&str> {
            self.dom
                .inline_style(self.node, self.machine.variant().height_property())
        }

        fn height_history(&self) -> Vec<Option<&str>> {
            self.dom
                .style_history(self.node, self.machine.variant().height_property())
        }

        fn completions(&self) -> Vec<bool> {
            self.log.borrow().clone()
        }
    }

    #[test]
    fn initial_state_follows_open_and_hidden_until_found() {
        let open = PanelState::new(true, true);
        assert_eq!(open.height, PanelHeight::Auto);
        assert!(!open.hidden);
        assert_eq!(open.visual, VisualState::Open);

        assert_eq!(PanelState::new(false, true).height, PanelHeight::None);
        assert_eq!(PanelState::new(false, false).height, PanelHeight::ZERO);
        assert!(PanelState::new(false, false).prevent_initial_animation);
    }

    #[test]
    fn opening_without_motion_settles_immediately() {
        let mut f = Fixture::new(PanelVariant::Collapsible, false, false);
        let schedule = f.sync(true);

        assert!(schedule.is_idle());
        assert_eq!(f.completions(), vec![true]);
        assert_eq!(f.height_var(), Some("auto"));
        assert_eq!(f.dom.attribute(f.node, "hidden"), None);
        assert_eq!(f.dom.attribute(f.node, "data-state"), Some("open"));
        assert_eq!(f.dom.inline_style(f.node, "display"), None);
        assert!(!f.machine.state().hidden);
    }

    #[test]
    fn first_change_ends_initial_animation_suppression() {
        let mut f = Fixture::new(PanelVariant::Collapsible, false, false)
            .with_sheet("transition-duration", "0.2s");
        assert_eq!(f.dom.inline_style(f.node, "transition-duration"), Some("0s"));

        let schedule = f.sync(true);

        assert!(!f.machine.state().prevent_initial_animation);
        assert_eq!(f.dom.inline_style(f.node, "transition-duration"), None);
        assert_eq!(f.dom.inline_style(f.node, "animation-duration"), None);
        // With suppression lifted the stylesheet transition applies.
        assert!(schedule.awaiting.is_some());

        f.end(EndEvent::TransitionEnd);
        f.sync(false);
        f.end(EndEvent::TransitionEnd);
        assert!(!f.machine.state().prevent_initial_animation);
    }

    #[test]
    fn transition_opens_from_numeric_height_in_one_step() {
        let mut f = Fixture::new(PanelVariant::Accordion, false, false)
            .with_sheet("transition-duration", "0.2s");
        let schedule = f.sync(true);

        assert_eq!(schedule.deferred, None);
        assert!(matches!(
            schedule.awaiting,
            Some((EndEvent::TransitionEnd, _))
        ));
        assert_eq!(f.height_var(), Some("100px"));
        assert!(f.completions().is_empty());

        assert!(!f.end(EndEvent::AnimationEnd));
        assert!(f.end(EndEvent::TransitionEnd));
        assert_eq!(f.completions(), vec![true]);
        assert_eq!(f.height_var(), Some("auto"));
        assert!(!f.machine.is_pending());
    }

    #[test]
    fn transition_opens_from_none_in_two_steps() {
        let mut f = Fixture::new(PanelVariant::Accordion, false, true)
            .with_sheet("transition-duration", "0.2s");
        assert_eq!(f.height_var(), Some("none"));
        assert_eq!(f.dom.attribute(f.node, "hidden"), Some("until-found"));

        let schedule = f.sync(true);
        assert_eq!(f.height_var(), Some("0px"));
        let ticket = schedule.deferred.unwrap();

        assert!(f.deferred(ticket));
        assert_eq!(f.height_var(), Some("100px"));
        assert!(!f.deferred(ticket));

        assert!(f.end(EndEvent::TransitionEnd));
        assert_eq!(
            f.height_history(),
            vec![Some("none"), Some("0px"), Some("100px"), Some("auto")]
        );
        assert_eq!(f.dom.inline_style(f.node, "content-visibility"), None);
        assert_eq!(f.dom.inline_style(f.node, "overflow"), None);
    }

    #[test]
    fn transition_closes_from_auto_in_two_steps() {
        let mut f = Fixture::new(PanelVariant::Collapsible, true, false)
            .with_sheet("transition-duration", "0.2s");
        let schedule = f.sync(false);

        assert_eq!(f.machine.state().visual, VisualState::Closed);
        assert!(!f.machine.state().hidden);
        assert_eq!(f.height_var(), Some("100px"));

        assert!(f.deferred(schedule.deferred.unwrap()));
        assert_eq!(f.height_var(), Some("0px"));

        assert!(f.end(EndEvent::TransitionEnd));
        assert_eq!(f.completions(), vec![false]);
        assert!(f.machine.state().hidden);
        assert_eq!(f.dom.attribute(f.node, "hidden"), Some("hidden"));
        assert_eq!(f.dom.inline_style(f.node, "display"), Some("none"));
        assert_eq!(f.height_var(), Some("0px"));
    }

    #[test]
    fn opening_clears_hiding_styles_of_either_mode() {
        let mut f = Fixture::new(PanelVariant::Accordion, true, false);
        assert!(f.sync(false).is_idle());
        assert_eq!(f.dom.inline_style(f.node, "display"), Some("none"));

        f.machine.set_hidden_until_found(true);
        assert!(f.sync(true).is_idle());
        assert_eq!(f.dom.inline_style(f.node, "display"), None);
        assert_eq!(f.dom.attribute(f.node, "hidden"), None);

        assert!(f.sync(false).is_idle());
        assert_eq!(f.dom.inline_style(f.node, "content-visibility"), Some("hidden"));

        f.machine.set_hidden_until_found(false);
        assert!(f.sync(true).is_idle());
        assert_eq!(f.dom.inline_style(f.node, "content-visibility"), None);
        assert_eq!(f.dom.inline_style(f.node, "overflow"), None);
        assert_eq!(f.height_var(), Some("auto"));
    }

    #[test]
    fn animation_uses_measured_height_both_ways() {
        let mut f = Fixture::new(PanelVariant::Collapsible, true, true)
            .with_sheet("animation-duration", "150ms");

        let schedule = f.sync(false);
        assert_eq!(schedule.deferred, None);
        assert!(matches!(schedule.awaiting, Some((EndEvent::AnimationEnd, _))));
        assert_eq!(f.height_var(), Some("100px"));

        assert!(f.end(EndEvent::AnimationEnd));
        assert_eq!(f.height_var(), Some("none"));
        assert_eq!(f.dom.attribute(f.node, "hidden"), Some("until-found"));
        assert_eq!(f.dom.inline_style(f.node, "content-visibility"), Some("hidden"));
        assert_eq!(f.dom.inline_style(f.node, "overflow"), Some("visible"));

        // Even from `none`, animations get the target height directly.
        let schedule = f.sync(true);
        assert_eq!(schedule.deferred, None);
        assert_eq!(f.height_var(), Some("100px"));
        assert!(f.end(EndEvent::AnimationEnd));
        assert_eq!(f.completions(), vec![false, true]);
    }

    #[test]
    fn both_kinds_of_motion_settle_immediately() {
        let mut f = Fixture::new(PanelVariant::Collapsible, false, false)
            .with_sheet("transition-duration", "0.2s")
            .with_sheet("animation-duration", "0.2s");

        let schedule = f.sync(true);
        assert!(schedule.is_idle());
        assert_eq!(f.completions(), vec![true]);
        assert_eq!(f.height_var(), Some("auto"));
    }

    #[test]
    fn open_then_close_before_completion_ends_closed() {
        for hidden_until_found in [false, true] {
            let mut f = Fixture::new(PanelVariant::Accordion, false, hidden_until_found)
                .with_sheet("transition-duration", "0.2s");

            let opening = f.sync(true);
            let closing = f.sync(false);

            // The superseded opening can no longer land.
            if let Some(ticket) = opening.deferred {
                assert!(!f.deferred(ticket));
            }
            assert_eq!(closing.deferred, None);
            assert_eq!(f.height_var(), Some("0px"));

            assert!(f.end(EndEvent::TransitionEnd));
            assert!(!f.end(EndEvent::TransitionEnd));

            let expected = if hidden_until_found { "none" } else { "0px" };
            assert_eq!(f.completions(), vec![false]);
            assert!(f.machine.state().hidden);
            assert_eq!(f.machine.state().visual, VisualState::Closed);
            assert_eq!(f.height_var(), Some(expected));
        }
    }

    #[test]
    fn resync_with_same_value_is_a_no_op() {
        let mut f = Fixture::new(PanelVariant::Collapsible, true, false);
        assert!(f.sync(true).is_idle());
        assert!(f.completions().is_empty());
        assert!(f.machine.state().prevent_initial_animation);
    }

    #[test]
    fn detached_node_drops_pending_work() {
        let mut f = Fixture::new(PanelVariant::Collapsible, true, false)
            .with_sheet("transition-duration", "0.2s");
        let schedule = f.sync(false);
        f.dom.detach(f.node);

        assert!(!f.deferred(schedule.deferred.unwrap()));
        assert!(!f.end(EndEvent::TransitionEnd));
        assert!(f.completions().is_empty());
    }

    #[test]
    fn teardown_ignores_late_events() {
        let mut f = Fixture::new(PanelVariant::Collapsible, false, false)
            .with_sheet("transition-duration", "0.2s");
        f.sync(true);
        assert!(f.machine.is_pending());
        f.machine.teardown();
        assert!(!f.end(EndEvent::TransitionEnd));
        assert!(f.completions().is_empty());
    }

    #[test]
    fn unattached_machine_jumps_to_settled_state() {
        let mut dom = MockDom::new();
        let mut machine: PanelMachine<MockNodeId> =
            PanelMachine::new(PanelVariant::Collapsible, false, true);
        assert!(machine.sync_open(&mut dom, true).is_idle());
        assert_eq!(machine.state().height, PanelHeight::Auto);
        assert!(machine.sync_open(&mut dom, false).is_idle());
        assert_eq!(machine.state().height, PanelHeight::None);
        assert!(machine.state().hidden);
    }

    #[test]
    fn accordion_before_match_snaps_open() {
        let mut f = Fixture::new(PanelVariant::Accordion, false, true)
            .with_sheet("transition-duration", "0.2s");
        // Mount-time suppression is already over.
        f.sync(true);
        f.end(EndEvent::TransitionEnd);
        f.sync(false);
        f.end(EndEvent::TransitionEnd);
        assert!(!f.machine.state().prevent_initial_animation);

        let response = f.machine.before_match(&mut f.dom, Outcome::Continue);
        assert_eq!(
            response,
            BeforeMatchResponse {
                prevent_default: true,
                request_open: true,
                scroll_into_view: false,
            }
        );
        assert!(f.machine.state().is_before_match);
        assert!(f.machine.state().prevent_initial_animation);
        assert_eq!(f.dom.inline_style(f.node, "transition-duration"), Some("0s"));

        let schedule = f.sync(true);
        assert!(schedule.is_idle());
        assert_eq!(f.height_var(), Some("auto"));
        assert!(!f.machine.state().is_before_match);

        // The next change animates again.
        let schedule = f.sync(false);
        assert!(!f.machine.state().prevent_initial_animation);
        assert!(schedule.awaiting.is_some());
    }

    #[test]
    fn collapsible_before_match_lets_the_browser_reveal() {
        let mut f = Fixture::new(PanelVariant::Collapsible, false, true);
        let response = f.machine.before_match(&mut f.dom, Outcome::Continue);
        assert_eq!(
            response,
            BeforeMatchResponse {
                prevent_default: false,
                request_open: true,
                scroll_into_view: true,
            }
        );
        assert!(!f.machine.state().is_before_match);
    }

    #[test]
    fn stopped_before_match_changes_nothing() {
        for variant in [PanelVariant::Accordion, PanelVariant::Collapsible] {
            let mut f = Fixture::new(variant, false, true);
            let before = *f.machine.state();
            let response = f.machine.before_match(&mut f.dom, Outcome::Stop);
            assert_eq!(response, BeforeMatchResponse::default());
            assert_eq!(*f.machine.state(), before);
        }
    }

    #[test]
    fn style_record_reflects_state() {
        let closed_plain = PanelMachine::<u32>::new(PanelVariant::Collapsible, false, false);
        let style = merge_styles([Some(&closed_plain.style())]);
        assert_eq!(style.get("display"), Some("none"));
        assert_eq!(style.get("content-visibility"), None);
        assert_eq!(style.get("transition-duration"), Some("0s"));
        assert_eq!(style.get("animation-duration"), Some("0s"));
        assert_eq!(style.get("--disclose-collapsible-panel-height"), Some("0px"));
        assert_eq!(closed_plain.hidden_attribute(), Some("hidden"));

        let closed_found = PanelMachine::<u32>::new(PanelVariant::Accordion, false, true);
        let style = merge_styles([Some(&closed_found.style())]);
        assert_eq!(style.get("display"), None);
        assert_eq!(style.get("content-visibility"), Some("hidden"));
        assert_eq!(style.get("overflow"), Some("visible"));
        assert_eq!(style.get("--disclose-accordion-item-panel-height"), Some("none"));
        assert_eq!(closed_found.hidden_attribute(), Some("until-found"));

        let open = PanelMachine::<u32>::new(PanelVariant::Collapsible, true, true);
        let style = merge_styles([Some(&open.style())]);
        assert_eq!(style.get("content-visibility"), None);
        assert_eq!(style.get("--disclose-collapsible-panel-height"), Some("auto"));
        assert_eq!(open.hidden_attribute(), None);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Step {
            Sync(bool),
            Deferred,
            End,
        }

        fn step() -> impl Strategy<Value = Step> {
            prop_oneof![
                any::<bool>().prop_map(Step::Sync),
                Just(Step::Deferred),
                Just(Step::End),
            ]
        }

        proptest! {
            #[test]
            fn settles_consistently(
                steps in prop::collection::vec(step(), 0..24),
                hidden_until_found in any::<bool>(),
                motion in 0_u8..3,
            ) {
                let mut f = Fixture::new(PanelVariant::Accordion, false, hidden_until_found);
                match motion {
                    1 => f.dom.set_sheet(f.node, "transition-duration", "0.2s"),
                    2 => f.dom.set_sheet(f.node, "animation-duration", "0.2s"),
                    _ => {}
                }

                let mut last = Schedule::default();
                let mut settled = 0;
                for step in steps {
                    match step {
                        Step::Sync(open) => {
                            if open == f.machine.state().open {
                                continue;
                            }
                            let before = f.completions().len();
                            let schedule = f.sync(open);
                            if schedule.is_idle() && f.completions().len() > before {
                                settled += 1;
                            }
                            last = schedule;
                        }
                        Step::Deferred => {
                            if let Some(ticket) = last.deferred {
                                f.deferred(ticket);
                            }
                        }
                        Step::End => {
                            if let Some((event, _)) = last.awaiting {
                                if f.end(event) {
                                    settled += 1;
                                }
                            }
                        }
                    }
                }

                // Drain whatever is still pending.
                if let Some(ticket) = last.deferred {
                    f.deferred(ticket);
                }
                if let Some((event, _)) = last.awaiting {
                    if f.end(event) {
                        settled += 1;
                    }
                }

                let state = *f.machine.state();
                prop_assert!(!f.machine.is_pending());
                prop_assert_eq!(state.hidden, state.visual == VisualState::Closed);
                prop_assert_eq!(f.completions().len(), settled);
                if let Some(&last_open) = f.completions().last() {
                    prop_assert_eq!(last_open, state.open);
                }
                let expected = match (state.open, hidden_until_found) {
                    (true, _) => PanelHeight::Auto,
                    (false, true) => PanelHeight::None,
                    (false, false) => PanelHeight::ZERO,
                };
                prop_assert_eq!(state.height, expected);
            }
        }
    }
}
