// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Dom`] for tests.
//!
//! `MockDom` keeps just enough of a document to exercise Disclose components:
//! attributes, inline styles layered over per-node "stylesheet" values, a fixed
//! content size per node, focus, and a log of scroll requests and inline style
//! writes.
//!
//! Nodes form a flat document: [`MockDom::create`] appends, and
//! [`MockDom::insert_before`] or [`Dom::insert_after`] move a node next to
//! another. Detached nodes have no position.
//!
//! Computed style resolution is deliberately simple:
//!
//! - inline style, then the node's stylesheet values, then defaults;
//! - `transition-duration` and `animation-duration` default to `0s`;
//! - `display` is `none` when set so, or when a plain `hidden` attribute is
//!   present; `hidden="until-found"` keeps the box;
//! - `width` / `height` resolve to the content size in `px`, or `auto` when
//!   the node does not render.

use alloc::collections::BTreeMap;
use core::cmp::Ordering;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Size;

use super::{Dom, ScrollIntoViewOptions};

/// Handle to a [`MockDom`] node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MockNodeId(usize);

/// A recorded scroll request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scroll {
    /// `scrollIntoViewIfNeeded(center)`.
    IfNeeded {
        /// The `centerIfNeeded` argument.
        center: bool,
    },
    /// `scrollIntoView(options)`.
    IntoView(ScrollIntoViewOptions),
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Offset {
    Layout,
    Missing,
    Fixed(Size),
}

#[derive(Clone, Debug)]
struct MockNode {
    connected: bool,
    clone_of: Option<MockNodeId>,
    attributes: BTreeMap<String, String>,
    inline: BTreeMap<String, String>,
    sheet: BTreeMap<String, String>,
    content: Size,
    offset: Offset,
}

impl MockNode {
    fn new() -> Self {
        Self {
            connected: true,
            clone_of: None,
            attributes: BTreeMap::new(),
            inline: BTreeMap::new(),
            sheet: BTreeMap::new(),
            content: Size::ZERO,
            offset: Offset::Layout,
        }
    }

    fn display(&self) -> &str {
        if let Some(display) = self.inline.get("display").or_else(|| self.sheet.get("display")) {
            return display;
        }
        match self.attributes.get("hidden").map(String::as_str) {
            Some("until-found") | None => "block",
            Some(_) => "none",
        }
    }

    fn renders(&self) -> bool {
        self.display() != "none"
    }
}

/// In-memory document used by tests.
#[derive(Clone, Debug)]
pub struct MockDom {
    nodes: Vec<MockNode>,
    document: Vec<MockNodeId>,
    focused: Option<MockNodeId>,
    supports_if_needed: bool,
    scrolls: Vec<(MockNodeId, Scroll)>,
    style_log: Vec<(MockNodeId, String, Option<String>)>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// An empty document whose nodes support `scrollIntoViewIfNeeded`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            document: Vec::new(),
            focused: None,
            supports_if_needed: true,
            scrolls: Vec::new(),
            style_log: Vec::new(),
        }
    }

    /// Create a connected node with no content, last in document order.
    pub fn create(&mut self) -> MockNodeId {
        self.nodes.push(MockNode::new());
        let id = MockNodeId(self.nodes.len() - 1);
        self.document.push(id);
        id
    }

    /// Move `node` into the document just before `reference`.
    pub fn insert_before(&mut self, reference: MockNodeId, node: MockNodeId) {
        self.unlink(node);
        if let Some(at) = self.position(reference) {
            self.document.insert(at, node);
            self.node_mut(node).connected = true;
        }
    }

    fn position(&self, node: MockNodeId) -> Option<usize> {
        self.document.iter().position(|&n| n == node)
    }

    fn unlink(&mut self, node: MockNodeId) {
        self.document.retain(|&n| n != node);
        self.node_mut(node).connected = false;
    }

    fn node(&self, id: MockNodeId) -> &MockNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: MockNodeId) -> &mut MockNode {
        &mut self.nodes[id.0]
    }

    /// Set the size the node's content lays out to.
    pub fn set_content_size(&mut self, node: MockNodeId, size: Size) {
        self.node_mut(node).content = size;
    }

    /// Set the height the node's content lays out to.
    pub fn set_content_height(&mut self, node: MockNodeId, height: f64) {
        self.node_mut(node).content.height = height;
    }

    /// Set a stylesheet value for `property` on `node` (below inline style).
    pub fn set_sheet(&mut self, node: MockNodeId, property: &str, value: &str) {
        self.node_mut(node)
            .sheet
            .insert(property.to_string(), value.to_string());
    }

    /// Make `offset_size` report `None`, as for an SVG element.
    pub fn set_offset_missing(&mut self, node: MockNodeId) {
        self.node_mut(node).offset = Offset::Missing;
    }

    /// Make `offset_size` report a fixed size regardless of layout.
    pub fn set_offset_size(&mut self, node: MockNodeId, size: Size) {
        self.node_mut(node).offset = Offset::Fixed(size);
    }

    /// Toggle support for `scrollIntoViewIfNeeded`.
    pub fn set_supports_scroll_into_view_if_needed(&mut self, supported: bool) {
        self.supports_if_needed = supported;
    }

    /// Detach `node` from the document.
    pub fn detach(&mut self, node: MockNodeId) {
        self.unlink(node);
    }

    /// Attribute value on `node`.
    pub fn attribute(&self, node: MockNodeId, name: &str) -> Option<&str> {
        self.node(node).attributes.get(name).map(String::as_str)
    }

    /// Inline style value on `node`.
    pub fn inline_style(&self, node: MockNodeId, property: &str) -> Option<&str> {
        self.node(node).inline.get(property).map(String::as_str)
    }

    /// Every inline write to `property` on `node`, in order; `None` is a removal.
    pub fn style_history(&self, node: MockNodeId, property: &str) -> Vec<Option<&str>> {
        self.style_log
            .iter()
            .filter(|(n, p, _)| *n == node && p == property)
            .map(|(_, _, v)| v.as_deref())
            .collect()
    }

    /// Clones made of `node`.
    pub fn clones_of(&self, node: MockNodeId) -> Vec<MockNodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.clone_of == Some(node))
            .map(|(i, _)| MockNodeId(i))
            .collect()
    }

    /// Number of clones currently attached anywhere in the document.
    pub fn attached_clones(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.clone_of.is_some() && n.connected)
            .count()
    }

    /// The focused node.
    pub fn focused(&self) -> Option<MockNodeId> {
        self.focused
    }

    /// Recorded scroll requests.
    pub fn scrolls(&self) -> &[(MockNodeId, Scroll)] {
        &self.scrolls
    }
}

impl Dom for MockDom {
    type Node = MockNodeId;

    fn is_connected(&self, node: MockNodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.connected)
    }

    fn compare_document_position(&self, a: MockNodeId, b: MockNodeId) -> Ordering {
        // Detached nodes sort last.
        let at = |node| self.position(node).unwrap_or(usize::MAX);
        at(a).cmp(&at(b))
    }

    fn set_attribute(&mut self, node: MockNodeId, name: &str, value: &str) {
        self.node_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, node: MockNodeId, name: &str) {
        self.node_mut(node).attributes.remove(name);
    }

    fn set_style_property(&mut self, node: MockNodeId, property: &str, value: &str) {
        self.node_mut(node)
            .inline
            .insert(property.to_string(), value.to_string());
        self.style_log
            .push((node, property.to_string(), Some(value.to_string())));
    }

    fn remove_style_property(&mut self, node: MockNodeId, property: &str) {
        self.node_mut(node).inline.remove(property);
        self.style_log.push((node, property.to_string(), None));
    }

    fn computed_style(&self, node: MockNodeId, property: &str) -> String {
        let n = self.node(node);
        if let Some(value) = n.inline.get(property).or_else(|| n.sheet.get(property)) {
            return value.clone();
        }
        match property {
            "transition-duration" | "animation-duration" => "0s".to_string(),
            "display" => n.display().to_string(),
            "height" if n.renders() => format!("{}px", n.content.height),
            "width" if n.renders() => format!("{}px", n.content.width),
            "height" | "width" => "auto".to_string(),
            _ => String::new(),
        }
    }

    fn offset_size(&self, node: MockNodeId) -> Option<Size> {
        let n = self.node(node);
        match n.offset {
            Offset::Missing => None,
            Offset::Fixed(size) => Some(size),
            Offset::Layout if n.renders() => Some(n.content),
            Offset::Layout => Some(Size::ZERO),
        }
    }

    fn clone_node(&mut self, node: MockNodeId) -> MockNodeId {
        let mut clone = self.node(node).clone();
        clone.connected = false;
        clone.clone_of = Some(node);
        self.nodes.push(clone);
        MockNodeId(self.nodes.len() - 1)
    }

    fn insert_after(&mut self, reference: MockNodeId, node: MockNodeId) {
        self.unlink(node);
        if let Some(at) = self.position(reference) {
            self.document.insert(at + 1, node);
            self.node_mut(node).connected = true;
        }
    }

    fn remove(&mut self, node: MockNodeId) {
        self.unlink(node);
    }

    fn focus(&mut self, node: MockNodeId) {
        if self.is_connected(node) {
            self.focused = Some(node);
        }
    }

    fn supports_scroll_into_view_if_needed(&self, _node: MockNodeId) -> bool {
        self.supports_if_needed
    }

    fn scroll_into_view_if_needed(&mut self, node: MockNodeId, center: bool) {
        self.scrolls.push((node, Scroll::IfNeeded { center }));
    }

    fn scroll_into_view(&mut self, node: MockNodeId, options: ScrollIntoViewOptions) {
        self.scrolls.push((node, Scroll::IntoView(options)));
    }
}
