// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style composition.
//!
//! Components build a base style record (height variables, duration overrides,
//! `contain`) and merge the consumer's `style` prop over it. Sources may be inline
//! CSS text or key/value records; the result is one [`Style`] keyed by CSS
//! property name in kebab-case, ready to be written with `style.setProperty`.
//!
//! ## Rules
//!
//! - `None` sources are skipped.
//! - Later sources override earlier ones key by key.
//! - Inline text is split on `;` outside parentheses, so `calc()` and
//!   `url(data:...;base64,...)` survive intact. Declarations without a `:` or with an
//!   empty property or value are dropped.
//! - Custom properties (`--name`) keep their name verbatim. Other keys are
//!   normalized to kebab-case: `backgroundColor` → `background-color`,
//!   `WebkitTransform` → `-webkit-transform`, `msTransition` → `-ms-transition`.
//! - A record entry with a `None` value unsets the key.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// One input to [`merge_styles`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleSource {
    /// Inline CSS text such as `"color: red; margin-top: 10px"`.
    Inline(String),
    /// Property/value pairs; a `None` value unsets the property.
    Record(Vec<(String, Option<String>)>),
}

impl StyleSource {
    /// Build a record source from pairs.
    pub fn record<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> Self {
        Self::Record(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.map(ToString::to_string)))
                .collect(),
        )
    }
}

impl From<&str> for StyleSource {
    fn from(text: &str) -> Self {
        Self::Inline(text.to_string())
    }
}

impl From<String> for StyleSource {
    fn from(text: String) -> Self {
        Self::Inline(text)
    }
}

/// A normalized inline style: kebab-case property names to values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    props: BTreeMap<String, String>,
}

impl Style {
    /// An empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.props.get(property).map(String::as_str)
    }

    /// Set `property` (normalized) to `value`.
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        self.props.insert(normalize_property(property), value.into());
    }

    /// Unset `property` (normalized).
    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.props.remove(&normalize_property(property))
    }

    /// Whether no properties are set.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Iterate properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as inline CSS text (`"a: 1; b: 2"`).
    pub fn to_css_text(&self) -> String {
        let mut out = String::new();
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                out.push_str("; ");
            }
            out.push_str(k);
            out.push_str(": ");
            out.push_str(v);
        }
        out
    }
}

/// Merge style sources into one [`Style`]; later sources win.
pub fn merge_styles<'a>(sources: impl IntoIterator<Item = Option<&'a StyleSource>>) -> Style {
    let mut style = Style::new();
    for source in sources.into_iter().flatten() {
        match source {
            StyleSource::Inline(text) => {
                for (property, value) in parse_declarations(text) {
                    style.set(property, value);
                }
            }
            StyleSource::Record(pairs) => {
                for (property, value) in pairs {
                    match value {
                        Some(value) => style.set(property, value.as_str()),
                        None => {
                            style.remove(property);
                        }
                    }
                }
            }
        }
    }
    style
}

/// Split inline CSS text into `(property, value)` pairs.
pub fn parse_declarations(text: &str) -> Vec<(&str, &str)> {
    let mut declarations = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ';' if depth == 0 => {
                declarations.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    declarations.push(&text[start..]);

    declarations
        .into_iter()
        .filter_map(|declaration| {
            let (property, value) = declaration.trim().split_once(':')?;
            let (property, value) = (property.trim(), value.trim());
            (!property.is_empty() && !value.is_empty()).then_some((property, value))
        })
        .collect()
}

/// Normalize a property name to CSS kebab-case.
pub fn normalize_property(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let mut out = String::with_capacity(property.len() + 4);
    // `msFoo` is the one vendor prefix spelled in lowercase in record form.
    if property
        .strip_prefix("ms")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
    {
        out.push('-');
    }
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
