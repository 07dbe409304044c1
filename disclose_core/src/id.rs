// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prefixed id generation and per-part id management.
//!
//! Triggers and panels correlate through ids (`aria-controls`,
//! `aria-labelledby`) without holding references to each other. Each pairing
//! owns two [`IdManager`]s; a part sets its manager when it mounts and clears it
//! when it unmounts, so the other side only advertises a relation while both
//! halves exist.
//!
//! Ids are drawn from an [`IdSource`] that the host passes in. There is no global
//! counter: two independent trees can use two sources.

use alloc::format;
use alloc::string::{String, ToString};

/// Prefix used when a caller does not provide one.
pub const DEFAULT_PREFIX: &str = "disclose-";

/// A monotonically increasing id generator.
#[derive(Clone, Debug, Default)]
pub struct IdSource {
    next: u64,
}

impl IdSource {
    /// Create a source starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce `prefix` (trimmed) followed by the next counter value.
    ///
    /// An empty prefix falls back to [`DEFAULT_PREFIX`].
    pub fn generate(&mut self, prefix: &str) -> String {
        let n = self.next;
        self.next += 1;
        let prefix = match prefix.trim() {
            "" => DEFAULT_PREFIX,
            p => p,
        };
        format!("{prefix}{n}")
    }
}

/// The id of one mounted part, with a generated fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdManager {
    fallback: String,
    id: Option<String>,
}

impl IdManager {
    /// An unset manager whose fallback is drawn from `source`.
    pub fn new(prefix: &str, source: &mut IdSource) -> Self {
        Self {
            fallback: source.generate(prefix),
            id: None,
        }
    }

    /// A manager that starts out set to its fallback.
    pub fn initialized(prefix: &str, source: &mut IdSource) -> Self {
        let mut manager = Self::new(prefix, source);
        manager.set(None);
        manager
    }

    /// The current id, if the owning part is mounted.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The generated id used when no explicit id is given.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Set the id. Empty or whitespace-only explicit ids use the fallback.
    pub fn set(&mut self, explicit: Option<&str>) {
        let id = match explicit.map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.fallback.clone(),
        };
        self.id = Some(id);
    }

    /// Unset the id.
    pub fn clear(&mut self) {
        self.id = None;
    }
}
