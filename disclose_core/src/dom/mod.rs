// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host DOM seam.
//!
//! Components never talk to a browser directly. Everything they need from the
//! element tree goes through [`Dom`], keyed by a small copyable node handle. A
//! `web-sys` host implements it over `HtmlElement`s; tests use
//! [`mock::MockDom`] (feature `test-helpers`).
//!
//! All methods are synchronous. Methods that mutate a node must tolerate a node
//! that has been detached; callers check [`Dom::is_connected`] first and treat
//! absence as a no-op.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

use kurbo::Size;

#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;

/// `behavior` of `Element.scrollIntoView`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Let the user agent decide.
    #[default]
    Auto,
    /// Animate the scroll.
    Smooth,
    /// Jump.
    Instant,
}

/// `block` / `inline` alignment of `Element.scrollIntoView`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollAlign {
    /// Align to the start edge.
    Start,
    /// Center in the scroll container.
    Center,
    /// Align to the end edge.
    End,
    /// Scroll as little as possible.
    #[default]
    Nearest,
}

/// Options for [`Dom::scroll_into_view`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScrollIntoViewOptions {
    /// Scroll animation.
    pub behavior: ScrollBehavior,
    /// Vertical alignment.
    pub block: ScrollAlign,
    /// Horizontal alignment.
    pub inline: ScrollAlign,
}

/// Operations a host element tree provides to Disclose components.
pub trait Dom {
    /// Handle to one element.
    type Node: Copy + Eq + fmt::Debug;

    /// Whether `node` is still attached to the document.
    fn is_connected(&self, node: Self::Node) -> bool;

    /// Relative document order of two connected nodes, as reported by
    /// `a.compareDocumentPosition(b)`: `Less` when `a` precedes `b`.
    fn compare_document_position(&self, a: Self::Node, b: Self::Node) -> Ordering;

    /// `setAttribute(name, value)`.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// `removeAttribute(name)`.
    fn remove_attribute(&mut self, node: Self::Node, name: &str);

    /// `style.setProperty(property, value)`; `property` is kebab-case or `--custom`.
    fn set_style_property(&mut self, node: Self::Node, property: &str, value: &str);

    /// `style.removeProperty(property)`.
    fn remove_style_property(&mut self, node: Self::Node, property: &str);

    /// Resolved value of `property` from `getComputedStyle`.
    fn computed_style(&self, node: Self::Node, property: &str) -> String;

    /// `offsetWidth` / `offsetHeight`, or `None` for nodes without layout boxes
    /// of that kind (for example SVG elements).
    fn offset_size(&self, node: Self::Node) -> Option<Size>;

    /// `cloneNode(true)`; the clone starts detached.
    fn clone_node(&mut self, node: Self::Node) -> Self::Node;

    /// `reference.after(node)`.
    fn insert_after(&mut self, reference: Self::Node, node: Self::Node);

    /// `node.remove()`.
    fn remove(&mut self, node: Self::Node);

    /// `focus()`.
    fn focus(&mut self, node: Self::Node);

    /// Whether the non-standard `scrollIntoViewIfNeeded` is available on `node`.
    fn supports_scroll_into_view_if_needed(&self, node: Self::Node) -> bool;

    /// `scrollIntoViewIfNeeded(center)`.
    fn scroll_into_view_if_needed(&mut self, node: Self::Node, center: bool);

    /// `scrollIntoView(options)`.
    fn scroll_into_view(&mut self, node: Self::Node, options: ScrollIntoViewOptions);
}

/// Scroll `node` into view, preferring `scrollIntoViewIfNeeded` where the host has it.
///
/// The fallback uses `scrollIntoView` with `block: center` (or `nearest` when
/// `center` is false) and `inline: nearest`.
pub fn scroll_into_view_if_needed<D: Dom>(dom: &mut D, node: D::Node, center: bool) {
    if dom.supports_scroll_into_view_if_needed(node) {
        dom.scroll_into_view_if_needed(node, center);
    } else {
        dom.scroll_into_view(
            node,
            ScrollIntoViewOptions {
                behavior: ScrollBehavior::Auto,
                block: if center {
                    ScrollAlign::Center
                } else {
                    ScrollAlign::Nearest
                },
                inline: ScrollAlign::Nearest,
            },
        );
    }
}
