// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Development diagnostics and the crate error type.
//!
//! Three kinds of failure exist in Disclose:
//!
//! - **Misconfiguration** (for example a panel styled with both a CSS transition
//!   and a CSS animation). Reported with [`warn`] in development builds only; the
//!   component falls back to a safe behavior and carries on.
//! - **Contract violations** (a required value is missing and there is no way to
//!   proceed). Reported as [`Error::ContractViolation`] through a `Result`.
//! - **Timing races** (a node is detached before pending work lands). Not reported
//!   at all: callers check [`Dom::is_connected`](crate::dom::Dom::is_connected) and
//!   treat absence as a no-op.

use alloc::string::String;

/// Prefix carried by every message this workspace emits.
pub const PREFIX: &str = "[disclose]";

/// Errors surfaced by Disclose components.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required value was missing and the operation cannot continue.
    #[error("{prefix} {0}", prefix = PREFIX)]
    ContractViolation(String),
}

/// Build a [`Error::ContractViolation`] from message parts joined by a single space.
pub fn fail(messages: &[&str]) -> Error {
    Error::ContractViolation(messages.join(" "))
}

/// Emit a development-only warning.
///
/// Message parts are joined by a single space and prefixed with [`PREFIX`].
/// Release builds, and builds without the `tracing` feature, emit nothing.
pub fn warn(messages: &[&str]) {
    #[cfg(all(feature = "tracing", debug_assertions))]
    {
        let message = messages.join(" ");
        tracing::warn!(target: "disclose", "{PREFIX} {message}");
    }
    #[cfg(not(all(feature = "tracing", debug_assertions)))]
    let _ = messages;
}
