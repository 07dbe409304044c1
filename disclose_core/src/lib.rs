// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclose Core: the host seam and shared plumbing for headless disclosure components.
//!
//! This crate knows nothing about collapsibles or accordions. It provides the
//! small, framework-agnostic pieces the component crates are assembled from:
//!
//! - [`Dom`](dom::Dom): the trait a host implements so components can read and
//!   write attributes and styles, measure, move focus, and scroll. A browser host
//!   typically wraps `web-sys`; tests use the in-memory `MockDom` (feature
//!   `test-helpers`).
//! - [`Handlers`](handlers::Handlers): ordered consumer handler chains. Each
//!   handler returns an [`Outcome`](handlers::Outcome); a `Stop` suppresses the
//!   component's internal default behavior.
//! - [`Controllable`](controllable::Controllable): one read/request interface over
//!   state that is either owned by the caller (controlled) or kept internally
//!   (uncontrolled).
//! - [`IdSource`](id::IdSource) and [`IdManager`](id::IdManager): prefixed id
//!   generation with explicit overrides, injected rather than global.
//! - [`merge_styles`](style::merge_styles): compose inline style strings and
//!   records into one normalized [`Style`](style::Style).
//! - [`Element`](element::Element): the rendered description of a host element
//!   (tag, attributes, style).
//! - [`diagnostics`]: development-only warnings and the crate [`Error`].
//!
//! ## Minimal example
//!
//! ```rust
//! use disclose_core::handlers::{Handlers, Outcome};
//! use disclose_core::style::{Style, StyleSource, merge_styles};
//!
//! // Consumer handlers run in order; a `Stop` tells the component to skip its own logic.
//! let mut on_click: Handlers<u32> = Handlers::new();
//! on_click.push(|clicks: &u32| if *clicks > 1 { Outcome::Stop } else { Outcome::Continue });
//! assert_eq!(on_click.run(&1), Outcome::Continue);
//! assert_eq!(on_click.run(&2), Outcome::Stop);
//!
//! // Later style sources win on key collisions.
//! let base = StyleSource::record([("contain", Some("layout style"))]);
//! let consumer = StyleSource::from("contain: none; marginTop: 4px");
//! let style: Style = merge_styles([Some(&base), Some(&consumer)]);
//! assert_eq!(style.get("contain"), Some("none"));
//! assert_eq!(style.get("margin-top"), Some("4px"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing` (default): development warnings are emitted as `tracing` events.
//! - `test-helpers`: exposes [`dom::mock`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod controllable;
pub mod diagnostics;
pub mod dom;
pub mod element;
pub mod handlers;
pub mod id;
pub mod style;

pub use controllable::{Controllable, SharedState, shared};
pub use diagnostics::Error;
pub use dom::Dom;
pub use element::Element;
pub use handlers::{Handlers, Outcome};
pub use id::{IdManager, IdSource};
pub use style::{Style, StyleSource, merge_styles};
