// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only view a disclosure exposes to its parts.

/// What a trigger, panel, header, or indicator reads from its owner.
///
/// A collapsible root and an accordion item both produce one. Parts never hold
/// references to each other; ids correlate them instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisclosureView<'a> {
    /// Authoritative open state.
    pub open: bool,
    /// Inherited disabled state (root for a collapsible, item for an accordion).
    pub disabled: bool,
    /// Id of the mounted trigger.
    pub trigger_id: Option<&'a str>,
    /// Id of the mounted panel.
    pub panel_id: Option<&'a str>,
}

impl DisclosureView<'_> {
    /// Value of `data-state`.
    pub const fn data_state(&self) -> &'static str {
        if self.open { "open" } else { "closed" }
    }
}
