// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accordion: a stack of collapsible items with roving arrow-key focus.
//!
//! Parts:
//! - [`AccordionRoot`] owns the open item values (single or multiple
//!   selection), `disabled`, `hidden_until_found`, and the trigger registry
//!   used by [`AccordionRoot::handle_key_down`].
//! - [`AccordionItem`] correlates one trigger with one panel through ids.
//! - [`AccordionItemHeader`], [`AccordionItemTrigger`], [`AccordionItemPanel`]
//!   and [`AccordionItemIndicator`] render from the item's view.
//!
//! In single selection, opening an item closes the open one. Both panels must be
//! synced afterwards: one closes and one opens.

mod item;
mod panel;
mod root;
mod trigger;

pub use item::{AccordionItem, AccordionItemHeader, AccordionItemIndicator, AccordionItemProps};
pub use panel::AccordionItemPanel;
pub use root::{AccordionRoot, AccordionRootProps};
pub use trigger::AccordionItemTrigger;
