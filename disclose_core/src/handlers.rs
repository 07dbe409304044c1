// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered consumer handler chains.
//!
//! Every interactive part (trigger click, root key down, panel `beforematch`)
//! accepts consumer handlers that run **before** the part's internal handler.
//! A consumer opts out of the internal behavior by returning [`Outcome::Stop`];
//! the event itself is never mutated.
//!
//! ## Semantics
//!
//! - Handlers run in insertion order.
//! - [`Outcome::Stop`] ends the chain immediately: later consumer handlers and
//!   the internal handler are skipped.
//! - [`Handlers::run`] reports the overall outcome; [`Handlers::run_then`] also
//!   invokes the internal handler when nobody stopped.
//!
//! ```
//! use disclose_core::handlers::{Handlers, Outcome};
//!
//! #[derive(Debug)]
//! struct Click;
//!
//! let mut chain: Handlers<Click> = Handlers::new()
//!     .with(|_| Outcome::Continue)
//!     .with(|_| Outcome::Stop);
//!
//! let mut toggled = false;
//! let ran = chain.run_then(&Click, |_| toggled = true);
//! assert!(!ran);
//! assert!(!toggled);
//! ```

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Result of a consumer handler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Keep going: later handlers and the internal handler still run.
    #[default]
    Continue,
    /// Stop here and skip the internal handler.
    Stop,
}

impl Outcome {
    /// Whether this outcome stops the chain.
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

type Handler<E> = Box<dyn FnMut(&E) -> Outcome>;

/// An ordered list of consumer handlers for events of type `E`.
pub struct Handlers<E> {
    list: SmallVec<[Handler<E>; 2]>,
}

impl<E> Handlers<E> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            list: SmallVec::new(),
        }
    }

    /// Builder form of [`Handlers::push`].
    #[must_use]
    pub fn with(mut self, handler: impl FnMut(&E) -> Outcome + 'static) -> Self {
        self.push(handler);
        self
    }

    /// Append a handler to the end of the chain.
    pub fn push(&mut self, handler: impl FnMut(&E) -> Outcome + 'static) {
        self.list.push(Box::new(handler));
    }

    /// Number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the chain has no handlers.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Run the consumer handlers in order and return the overall outcome.
    pub fn run(&mut self, event: &E) -> Outcome {
        for handler in &mut self.list {
            if handler(event).is_stop() {
                return Outcome::Stop;
            }
        }
        Outcome::Continue
    }

    /// Run the consumer handlers, then `internal` unless one of them stopped.
    ///
    /// Returns `true` when the internal handler ran.
    pub fn run_then(&mut self, event: &E, internal: impl FnOnce(&E)) -> bool {
        if self.run(event).is_stop() {
            return false;
        }
        internal(event);
        true
    }
}

impl<E> Default for Handlers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Handlers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("len", &self.list.len())
            .finish_non_exhaustive()
    }
}
