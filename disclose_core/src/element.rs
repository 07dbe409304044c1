// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendered element descriptions.
//!
//! Components do not create host elements. They describe one: a tag name, an
//! attribute map, and a merged [`Style`]. The host reconciles the description
//! against its own tree. Consumers can swap the tag (`as` in web terms) with
//! [`Element::with_tag`]; void tags such as `input` never receive children.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::dom::Dom;
use crate::style::Style;

/// HTML elements that cannot have children.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// The description of one host element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Tag name, lowercase.
    pub tag: Cow<'static, str>,
    /// Attributes by name; boolean attributes carry an empty value.
    pub attributes: BTreeMap<String, String>,
    /// Merged inline style.
    pub style: Style,
}

impl Element {
    /// An element with `tag` and nothing else.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            style: Style::new(),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Set an attribute when `value` is `Some`.
    #[must_use]
    pub fn attr_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute (`name=""`) when `on` is true.
    #[must_use]
    pub fn flag(self, name: &str, on: bool) -> Self {
        if on { self.attr(name, "") } else { self }
    }

    /// Add the `data-disclose-<part>=""` marker used by stylesheets and queries.
    #[must_use]
    pub fn marker(self, part: &str) -> Self {
        let mut name = String::from("data-disclose-");
        name.push_str(part);
        self.attr(&name, "")
    }

    /// Replace the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Override the tag, keeping attributes and style.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Attribute value, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the attribute is present.
    pub fn has(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Write the attributes and style onto an existing host node.
    ///
    /// This only adds or overwrites; hosts that re-render remove stale entries
    /// themselves.
    pub fn apply<D: Dom>(&self, dom: &mut D, node: D::Node) {
        if !dom.is_connected(node) {
            return;
        }
        for (name, value) in &self.attributes {
            dom.set_attribute(node, name, value);
        }
        for (property, value) in self.style.iter() {
            dom.set_style_property(node, property, value);
        }
    }

    /// Whether the tag is a void (self-closing) HTML element.
    pub fn is_void(&self) -> bool {
        VOID_TAGS
            .iter()
            .any(|tag| self.tag.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_attributes() {
        let el = Element::new("button")
            .attr("type", "button")
            .attr_opt("aria-controls", None::<&str>)
            .attr_opt("id", Some("t-1"))
            .flag("disabled", false)
            .flag("data-disabled", true)
            .marker("collapsible-trigger");

        assert_eq!(el.get("type"), Some("button"));
        assert_eq!(el.get("id"), Some("t-1"));
        assert!(!el.has("aria-controls"));
        assert!(!el.has("disabled"));
        assert_eq!(el.get("data-disabled"), Some(""));
        assert_eq!(el.get("data-disclose-collapsible-trigger"), Some(""));
    }

    #[test]
    fn apply_writes_attributes_and_style() {
        use crate::dom::mock::MockDom;
        use crate::style::{StyleSource, merge_styles};

        let mut dom = MockDom::new();
        let node = dom.create();
        let style = merge_styles([Some(&StyleSource::from("contain: layout style"))]);
        Element::new("div")
            .attr("data-state", "open")
            .with_style(style)
            .apply(&mut dom, node);

        assert_eq!(dom.attribute(node, "data-state"), Some("open"));
        assert_eq!(dom.inline_style(node, "contain"), Some("layout style"));
    }

    #[test]
    fn void_tags() {
        assert!(Element::new("input").is_void());
        assert!(Element::new("IMG").is_void());
        assert!(!Element::new("div").is_void());
        assert!(Element::new("div").with_tag("hr").is_void());
    }
}
