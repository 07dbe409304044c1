// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclose Focus: roving focus primitives for composite widgets.
//!
//! Composite widgets such as an accordion keep a single tab stop and move focus
//! among their items with the arrow keys. This crate models that as:
//! - **Navigation intents** ([`Navigation`]): [`Navigation::Next`],
//!   [`Navigation::Prev`], [`Navigation::First`], [`Navigation::Last`], usually
//!   derived from a key with [`Navigation::from_key`].
//! - **Candidates** ([`FocusEntry`] / [`FocusSpace`]): the focusable items in
//!   document order, each with an enabled flag.
//! - Pluggable **policies** ([`FocusPolicy`]) that pick the next focused item
//!   given an origin, an intent, and a read-only view of candidates.
//!
//! ## Minimal example
//!
//! Three triggers where the middle one is disabled:
//!
//! ```rust
//! use disclose_focus::{
//!     DefaultPolicy, FocusEntry, FocusPolicy, FocusSpace, Navigation, WrapMode,
//! };
//!
//! let entries = [
//!     FocusEntry::new(1_u32),
//!     FocusEntry { enabled: false, ..FocusEntry::new(2) },
//!     FocusEntry::new(3),
//! ];
//! let space = FocusSpace { nodes: &entries };
//! let policy = DefaultPolicy { wrap: WrapMode::Scope };
//!
//! // ArrowDown skips the disabled trigger…
//! let down = Navigation::from_key("ArrowDown").unwrap();
//! assert_eq!(policy.next(Some(1), down, &space), Some(3));
//! // …and wraps at the end.
//! assert_eq!(policy.next(Some(3), down, &space), Some(1));
//!
//! // Without wrapping, the edges hold still.
//! let policy = DefaultPolicy { wrap: WrapMode::Never };
//! assert_eq!(policy.next(Some(1), Navigation::Prev, &space), None);
//! ```
//!
//! The core types are generic over the node identifier `K`, so callers can use
//! any small, copyable handle (for example a host DOM node handle).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Direction of roving focus navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move to the next candidate (`ArrowDown`).
    Next,
    /// Move to the previous candidate (`ArrowUp`).
    Prev,
    /// Move to the first candidate (`Home`).
    First,
    /// Move to the last candidate (`End`).
    Last,
}

impl Navigation {
    /// Map a `KeyboardEvent.key` value to an intent.
    ///
    /// Only the vertical arrows, `Home`, and `End` take part in roving focus;
    /// every other key yields `None` and should be left to the browser.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Prev),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// A single focusable candidate within a [`FocusSpace`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusEntry<K> {
    /// Identifier for this focusable node.
    pub id: K,
    /// Whether this node is enabled for focus.
    ///
    /// Disabled nodes are skipped during traversal.
    pub enabled: bool,
}

impl<K> FocusEntry<K> {
    /// An enabled entry in document order.
    pub const fn new(id: K) -> Self {
        Self { id, enabled: true }
    }
}

/// A read-only view of focusable candidates, in document order.
#[derive(Clone, Debug)]
pub struct FocusSpace<'a, K> {
    /// Focusable candidates.
    pub nodes: &'a [FocusEntry<K>],
}

/// Wrap mode configuration for focus traversal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Do not wrap; the edges hold still.
    Never,
    /// Wrap from the last candidate to the first and back.
    #[default]
    Scope,
}

impl WrapMode {
    /// `Scope` when `loop_focus` is set, else `Never`.
    pub const fn from_loop(loop_focus: bool) -> Self {
        if loop_focus { Self::Scope } else { Self::Never }
    }
}

/// Trait for focus traversal policies.
///
/// `origin` is the currently focused node, or `None` when focus is outside the
/// candidate set. A `None` return means focus should not move.
pub trait FocusPolicy<K>
where
    K: Copy + Eq,
{
    /// Compute the next focus target.
    fn next(&self, origin: Option<K>, direction: Navigation, space: &FocusSpace<'_, K>)
    -> Option<K>;
}

/// Linear roving focus over enabled candidates.
///
/// - `Next` from the last candidate wraps to the first under
///   [`WrapMode::Scope`] and stays put under [`WrapMode::Never`].
/// - `Prev` from the first candidate is symmetric.
/// - With an origin outside the enabled set, `Next` lands on the first
///   candidate and `Prev` does nothing.
/// - `First` and `Last` ignore the origin.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultPolicy {
    /// Wrap behavior at the edges.
    pub wrap: WrapMode,
}

impl<K> FocusPolicy<K> for DefaultPolicy
where
    K: Copy + Eq,
{
    fn next(
        &self,
        origin: Option<K>,
        direction: Navigation,
        space: &FocusSpace<'_, K>,
    ) -> Option<K> {
        let nodes = space.nodes;
        let indices = enabled_in_order(nodes);
        let (&first, &last) = (indices.first()?, indices.last()?);
        let origin_pos = origin.and_then(|o| indices.iter().position(|&i| nodes[i].id == o));
        let wraps = matches!(self.wrap, WrapMode::Scope);

        let target = match direction {
            Navigation::First => first,
            Navigation::Last => last,
            Navigation::Next => match origin_pos {
                Some(pos) if pos + 1 < indices.len() => indices[pos + 1],
                Some(_) if wraps => first,
                Some(_) => return None,
                None => first,
            },
            Navigation::Prev => match origin_pos {
                Some(pos) if pos > 0 => indices[pos - 1],
                Some(_) if wraps => last,
                _ => return None,
            },
        };

        let target = nodes[target].id;
        (origin != Some(target)).then_some(target)
    }
}

fn enabled_in_order<K>(nodes: &[FocusEntry<K>]) -> Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.enabled.then_some(i))
        .collect()
}
