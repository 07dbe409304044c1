// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Natural-height measurement of hidden content.

use disclose_core::dom::Dom;
use kurbo::Size;

use crate::height::sanitize;

/// Inline style forced onto the measurement clone.
///
/// The clone joins layout with neutral constraints, never paints, and never
/// animates.
pub const CLONE_STYLE: &[(&str, &str)] = &[
    ("pointer-events", "none"),
    ("user-select", "none"),
    ("overflow", "visible"),
    ("height", "auto"),
    ("max-height", "none"),
    ("opacity", "0"),
    ("visibility", "hidden"),
    ("display", "block"),
    ("content-visibility", "visible"),
    ("transition", "none"),
    ("animation", "none"),
    ("position", "absolute"),
    ("top", "-9999px"),
];

/// Measure the height `node` would have if it were laid out, in pixels.
///
/// Deep-clones the node, inserts the clone right after it with [`CLONE_STYLE`]
/// and `aria-hidden="true"`, reads its dimensions, and removes it again before
/// returning. The result is always finite and non-negative.
pub fn measure_natural_height<D: Dom>(dom: &mut D, node: D::Node) -> f64 {
    let clone = dom.clone_node(node);
    dom.set_attribute(clone, "aria-hidden", "true");
    for (property, value) in CLONE_STYLE {
        dom.set_style_property(clone, property, value);
    }

    dom.insert_after(node, clone);
    let size = css_dimensions(dom, clone);
    dom.remove(clone);

    sanitize(size.height)
}

/// Resolved width and height of `node`.
///
/// Parses the computed `width` / `height` (unparseable values read as `0`).
/// When rounding either disagrees with the layout offset size, the offset size
/// wins; nodes without one (SVG) keep the computed values.
pub fn css_dimensions<D: Dom>(dom: &D, node: D::Node) -> Size {
    let width = parse_leading_f64(&dom.computed_style(node, "width")).unwrap_or(0.0);
    let height = parse_leading_f64(&dom.computed_style(node, "height")).unwrap_or(0.0);
    let computed = Size::new(width, height);

    let Some(offset) = dom.offset_size(node) else {
        return computed;
    };
    if round_half_up(width) != offset.width || round_half_up(height) != offset.height {
        offset
    } else {
        computed
    }
}

/// Parse the longest numeric prefix of `text`, like JavaScript's `parseFloat`.
fn parse_leading_f64(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end == digits_start || &text[digits_start..end] == "." {
        return None;
    }
    // Exponent only when it is complete.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > exp_digits {
            end = exp;
        }
    }
    text[..end].parse().ok()
}

/// `Math.round`: nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    // Beyond 2^52 every f64 is already an integer.
    const EXACT: f64 = 4_503_599_627_370_496.0;
    if !value.is_finite() || value.abs() >= EXACT {
        return value;
    }
    let shifted = value + 0.5;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "magnitude is below 2^52, so the integer part fits in i64"
    )]
    let truncated = shifted as i64 as f64;
    if truncated > shifted {
        truncated - 1.0
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disclose_core::dom::mock::MockDom;

    #[test]
    fn measures_hidden_content_without_leaving_a_clone() {
        let mut dom = MockDom::new();
        let node = dom.create();
        dom.set_content_height(node, 120.0);
        dom.set_attribute(node, "hidden", "hidden");

        assert_eq!(measure_natural_height(&mut dom, node), 120.0);
        assert_eq!(dom.attached_clones(), 0);
        // The measured node keeps its own state.
        assert_eq!(dom.attribute(node, "aria-hidden"), None);
        assert_eq!(dom.inline_style(node, "display"), None);
    }

    #[test]
    fn clone_is_neutralized() {
        let mut dom = MockDom::new();
        let node = dom.create();
        dom.set_style_property(node, "display", "none");
        let _ = measure_natural_height(&mut dom, node);

        let clones = dom.clones_of(node);
        assert_eq!(clones.len(), 1);
        let clone = clones[0];
        assert_eq!(dom.attribute(clone, "aria-hidden"), Some("true"));
        for (property, value) in CLONE_STYLE {
            assert_eq!(dom.inline_style(clone, property), Some(*value));
        }
    }

    #[test]
    fn empty_content_measures_zero() {
        let mut dom = MockDom::new();
        let node = dom.create();
        assert_eq!(measure_natural_height(&mut dom, node), 0.0);
    }

    #[test]
    fn offset_size_wins_when_rounding_disagrees() {
        let mut dom = MockDom::new();
        let node = dom.create();
        dom.set_content_size(node, Size::new(100.0, 40.4));
        dom.set_offset_size(node, Size::new(100.0, 40.0));
        // round(40.4) == 40, so the computed value stands.
        assert_eq!(css_dimensions(&dom, node), Size::new(100.0, 40.4));

        dom.set_offset_size(node, Size::new(100.0, 42.0));
        assert_eq!(css_dimensions(&dom, node), Size::new(100.0, 42.0));
    }

    #[test]
    fn missing_offset_keeps_computed_values() {
        let mut dom = MockDom::new();
        let node = dom.create();
        dom.set_offset_missing(node);
        dom.set_sheet(node, "height", "");
        dom.set_sheet(node, "width", "12.5px");
        assert_eq!(css_dimensions(&dom, node), Size::new(12.5, 0.0));
    }

    #[test]
    fn parse_float_prefix() {
        assert_eq!(parse_leading_f64("120px"), Some(120.0));
        assert_eq!(parse_leading_f64(" -3.5em"), Some(-3.5));
        assert_eq!(parse_leading_f64("1e3px"), Some(1000.0));
        assert_eq!(parse_leading_f64("2epx"), Some(2.0));
        assert_eq!(parse_leading_f64(".5"), Some(0.5));
        assert_eq!(parse_leading_f64("auto"), None);
        assert_eq!(parse_leading_f64("."), None);
        assert_eq!(parse_leading_f64(""), None);
    }

    #[test]
    fn rounding_matches_math_round() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_negative_or_non_finite(
                height in prop_oneof![
                    any::<f64>(),
                    Just(f64::NAN),
                    Just(f64::NEG_INFINITY),
                    -1.0e6..1.0e6_f64,
                ],
                offset in prop::option::of(-1.0e6..1.0e6_f64),
            ) {
                let mut dom = MockDom::new();
                let node = dom.create();
                dom.set_content_height(node, height);
                if let Some(offset) = offset {
                    dom.set_offset_size(node, Size::new(0.0, offset));
                }
                let measured = measure_natural_height(&mut dom, node);
                prop_assert!(measured.is_finite());
                prop_assert!(measured >= 0.0);
            }
        }
    }
}
