// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled / uncontrolled state behind one interface.
//!
//! A component's authoritative state (a collapsible's `open`, an accordion's list
//! of open values) is either:
//!
//! - **controlled**: owned by the caller in a [`SharedState`] cell. The component
//!   reads the cell but never writes it; [`Controllable::request`] only notifies
//!   the change callback and the caller decides whether to apply the value.
//! - **uncontrolled**: kept inside the component, seeded from a default value.
//!   [`Controllable::request`] stores the value, then notifies.
//!
//! ```
//! use disclose_core::controllable::{Controllable, ControllableParams, shared};
//!
//! // Uncontrolled: the request is applied immediately.
//! let mut open = Controllable::uncontrolled(false);
//! open.request(true);
//! assert!(open.get());
//!
//! // Controlled: the caller owns the cell.
//! let cell = shared(false);
//! let mut open = Controllable::new(ControllableParams {
//!     controlled: Some(cell.clone()),
//!     ..ControllableParams::default()
//! })
//! .unwrap();
//! open.request(true);
//! assert!(!open.get());
//! *cell.borrow_mut() = true;
//! assert!(open.get());
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::diagnostics::{Error, fail};

/// A caller-owned state cell used in controlled mode.
pub type SharedState<T> = Rc<RefCell<T>>;

/// Wrap a value in a fresh [`SharedState`] cell.
pub fn shared<T>(value: T) -> SharedState<T> {
    Rc::new(RefCell::new(value))
}

/// Callback notified with every requested value.
pub type ChangeCallback<T> = Box<dyn FnMut(&T)>;

/// Construction parameters for [`Controllable`].
pub struct ControllableParams<T> {
    /// Initial value for uncontrolled mode.
    pub default_value: Option<T>,
    /// Caller-owned cell; when present the state is controlled.
    pub controlled: Option<SharedState<T>>,
    /// Notified with each requested value, in both modes.
    pub on_change: Option<ChangeCallback<T>>,
}

impl<T> Default for ControllableParams<T> {
    fn default() -> Self {
        Self {
            default_value: None,
            controlled: None,
            on_change: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ControllableParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllableParams")
            .field("default_value", &self.default_value)
            .field("controlled", &self.controlled)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

enum Source<T> {
    Controlled(SharedState<T>),
    Uncontrolled(T),
}

/// State that may be owned by the caller or by the component.
pub struct Controllable<T> {
    source: Source<T>,
    on_change: Option<ChangeCallback<T>>,
}

impl<T> Controllable<T> {
    /// Build from parameters.
    ///
    /// A controlled cell takes precedence over `default_value`. Missing both is a
    /// contract violation.
    pub fn new(params: ControllableParams<T>) -> Result<Self, Error> {
        let ControllableParams {
            default_value,
            controlled,
            on_change,
        } = params;

        let source = match (controlled, default_value) {
            (Some(cell), _) => Source::Controlled(cell),
            (None, Some(value)) => Source::Uncontrolled(value),
            (None, None) => {
                return Err(fail(&[
                    "A 'default_value' is required when no controlled state cell is provided.",
                    "Either provide a 'default_value' for uncontrolled mode, or pass a cell for controlled mode.",
                ]));
            }
        };
        Ok(Self { source, on_change })
    }

    /// Internally owned state seeded with `value`.
    pub fn uncontrolled(value: T) -> Self {
        Self {
            source: Source::Uncontrolled(value),
            on_change: None,
        }
    }

    /// State owned by the caller through `cell`.
    pub fn controlled(cell: SharedState<T>) -> Self {
        Self {
            source: Source::Controlled(cell),
            on_change: None,
        }
    }

    /// Attach a change callback.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(&T) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Whether the caller owns the state.
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, Source::Controlled(_))
    }

    /// Read the current value through a closure.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match &self.source {
            Source::Controlled(cell) => f(&cell.borrow()),
            Source::Uncontrolled(value) => f(value),
        }
    }

    /// Request a new value.
    ///
    /// Uncontrolled state stores it first; controlled state leaves the cell alone.
    /// The change callback sees the requested value in both cases.
    pub fn request(&mut self, value: T) {
        match &mut self.source {
            Source::Controlled(_) => {
                if let Some(on_change) = &mut self.on_change {
                    on_change(&value);
                }
            }
            Source::Uncontrolled(current) => {
                *current = value;
                if let Some(on_change) = &mut self.on_change {
                    on_change(current);
                }
            }
        }
    }
}

impl<T: Clone> Controllable<T> {
    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T: fmt::Debug> fmt::Debug for Controllable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Controllable");
        match &self.source {
            Source::Controlled(cell) => s.field("controlled", &*cell.borrow()),
            Source::Uncontrolled(value) => s.field("uncontrolled", value),
        };
        s.field("on_change", &self.on_change.is_some()).finish()
    }
}
