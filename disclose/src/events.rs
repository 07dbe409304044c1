// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events delivered to components, and what components ask the host to do.
//!
//! Events are immutable. Consumer handlers see them first; what the host should
//! do afterwards (`preventDefault`, scheduling panel work) comes back in a
//! response value instead of being written onto the event.

use alloc::string::String;

use disclose_panel::Schedule;

/// A trigger `click`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent;

/// A `keydown` bubbling to an accordion root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyDownEvent<N> {
    /// `KeyboardEvent.key`.
    pub key: String,
    /// The node that had focus, if known.
    pub target: Option<N>,
}

impl<N> KeyDownEvent<N> {
    /// A key press on `target`.
    pub fn new(key: impl Into<String>, target: Option<N>) -> Self {
        Self {
            key: key.into(),
            target,
        }
    }
}

/// A `beforematch` on a panel closed with `hidden="until-found"`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BeforeMatchEvent;

/// Result of [`AccordionRoot::handle_key_down`](crate::accordion::AccordionRoot::handle_key_down).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyDownResponse<N> {
    /// Call `preventDefault()` so the page does not scroll.
    pub prevent_default: bool,
    /// The trigger that received focus.
    pub focused: Option<N>,
}

impl<N> Default for KeyDownResponse<N> {
    fn default() -> Self {
        Self {
            prevent_default: false,
            focused: None,
        }
    }
}

/// Result of a panel's `beforematch` handling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BeforeMatchOutcome {
    /// Call `preventDefault()` on the event.
    pub prevent_default: bool,
    /// Panel work produced by the resulting open.
    pub schedule: Schedule,
}
