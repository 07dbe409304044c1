// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclose: headless, accessible disclosure components.
//!
//! Two component families share one animated panel engine:
//!
//! - [`collapsible`]: a single trigger showing and hiding a single panel.
//! - [`accordion`]: a stack of items, in single or multiple selection, with
//!   arrow-key focus across the item triggers.
//!
//! Components hold state and describe what to render as [`Element`]s; they do
//! not own a document. A host (a `web-sys` binding, a native toolkit, a test
//! double) implements [`Dom`], mounts nodes, forwards events, and applies the
//! rendered attributes and styles. Parts never reference each other: every part
//! method takes its owner (root, item) explicitly, and triggers and panels
//! correlate through ids.
//!
//! ## Driving a panel
//!
//! After anything that may change an open state, call the panel's `sync` and
//! honor the returned [`Schedule`]:
//!
//! - `deferred`: call `run_deferred(ticket)` on the next macrotask.
//! - `awaiting`: call `on_end_event(event)` when that event fires on the panel.
//!
//! A newer `sync`, or `unmount`, supersedes anything still pending.
//!
//! ## Minimal example
//!
//! ```rust
//! use disclose::collapsible::{
//!     CollapsiblePanel, CollapsibleRoot, CollapsibleRootProps, CollapsibleTrigger,
//! };
//! use disclose::{ClickEvent, PanelProps};
//! use disclose_core::dom::mock::MockDom;
//! use disclose_core::id::IdSource;
//! use disclose_panel::PanelHeight;
//!
//! let mut dom = MockDom::new();
//! let mut ids = IdSource::new();
//!
//! let mut root = CollapsibleRoot::new(CollapsibleRootProps::default(), &mut ids);
//! let mut trigger = CollapsibleTrigger::default();
//! let mut panel = CollapsiblePanel::new(PanelProps::default(), &root);
//!
//! let button = dom.create();
//! let content = dom.create();
//! dom.set_content_height(content, 120.0);
//! trigger.mount(&mut root);
//! panel.mount(&mut root, content);
//! panel.render(&root).apply(&mut dom, content);
//! trigger.render(&root).apply(&mut dom, button);
//! assert_eq!(dom.attribute(button, "aria-expanded"), Some("false"));
//!
//! // No CSS motion: the panel settles at `auto` right away.
//! trigger.click(&mut root, &ClickEvent);
//! let schedule = panel.sync(&mut dom, &root);
//! assert!(schedule.is_idle());
//! assert_eq!(panel.state().height, PanelHeight::Auto);
//!
//! let button_el = trigger.render(&root);
//! assert_eq!(button_el.get("aria-expanded"), Some("true"));
//! assert_eq!(button_el.get("aria-controls"), root.panel_id());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing` (default): development warnings and panel traces via `tracing`.
//! - `test-helpers`: exposes `MockDom` in `disclose_core`.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`Dom`]: disclose_core::dom::Dom
//! [`Element`]: disclose_core::element::Element
//! [`Schedule`]: disclose_panel::Schedule

#![no_std]

extern crate alloc;

pub mod accordion;
pub mod collapsible;
pub mod events;
pub mod indicator;
pub mod panel;
pub mod trigger;
pub mod view;

pub use events::{
    BeforeMatchEvent, BeforeMatchOutcome, ClickEvent, KeyDownEvent, KeyDownResponse,
};
pub use indicator::IndicatorProps;
pub use panel::PanelProps;
pub use trigger::TriggerProps;
pub use view::DisclosureView;
