// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclose Panel: the animated height engine behind collapsible panels.
//!
//! A disclosure panel animates its height between `0` and its content height
//! through a CSS custom property that the consumer's stylesheet reads. Getting
//! that right takes careful sequencing:
//!
//! - [`measure`]: measure the natural height of content that is currently
//!   hidden, by laying out an invisible clone next to it.
//! - [`timing`]: read computed `transition-duration` / `animation-duration`
//!   to decide which completion event, if any, to wait for.
//! - [`machine`]: the [`PanelMachine`] that runs the opening and closing
//!   sequences, manages `hidden` vs `hidden="until-found"`, and handles
//!   `beforematch` (find-in-page) reveals.
//! - [`height`]: the legal values of the height property.
//!
//! All DOM access goes through [`disclose_core::dom::Dom`].
//!
//! ## Minimal example
//!
//! ```rust
//! use disclose_core::dom::mock::MockDom;
//! use disclose_panel::{EndEvent, PanelHeight, PanelMachine, PanelVariant};
//!
//! let mut dom = MockDom::new();
//! let node = dom.create();
//! dom.set_content_height(node, 48.0);
//! dom.set_sheet(node, "transition-duration", "0.25s");
//!
//! let mut panel = PanelMachine::new(PanelVariant::Collapsible, false, false);
//! panel.attach(node);
//!
//! // Opening animates from 0px to the measured height…
//! let schedule = panel.sync_open(&mut dom, true);
//! assert_eq!(panel.state().height, PanelHeight::px(48.0));
//! assert_eq!(schedule.awaiting.map(|(event, _)| event), Some(EndEvent::TransitionEnd));
//!
//! // …and the host reports `transitionend` to finish at `auto`.
//! panel.on_end_event(&mut dom, EndEvent::TransitionEnd);
//! assert_eq!(panel.state().height, PanelHeight::Auto);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing` (default): emit `trace` events for each transition step and
//!   route development warnings through `tracing`.
//! - `test-helpers`: re-enables `MockDom` in `disclose_core`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

macro_rules! trace_step {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "disclose", $($arg)*);
    };
}

pub mod height;
pub mod machine;
pub mod measure;
pub mod timing;

pub use height::PanelHeight;
pub use machine::{
    BeforeMatchResponse, PanelMachine, PanelState, PanelVariant, Schedule, Ticket, VisualState,
};
pub use measure::{css_dimensions, measure_natural_height};
pub use timing::{EndEvent, Motion, Timing, TimingMode, classify};
