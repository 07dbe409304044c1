// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use disclose_core::controllable::{ChangeCallback, Controllable, SharedState};
use disclose_core::diagnostics::warn;
use disclose_core::dom::Dom;
use disclose_core::element::Element;
use disclose_core::handlers::Handlers;
use disclose_core::style::{StyleSource, merge_styles};
use disclose_focus::{DefaultPolicy, FocusEntry, FocusPolicy, FocusSpace, Navigation, WrapMode};
use hashbrown::HashMap;

use crate::events::{KeyDownEvent, KeyDownResponse};

/// Props of [`AccordionRoot`].
pub struct AccordionRootProps<N> {
    /// Initially open item values when uncontrolled.
    pub default_value: Vec<String>,
    /// Caller-owned open values; makes the root controlled.
    pub value: Option<SharedState<Vec<String>>>,
    /// Notified with every requested list of open values.
    pub on_value_change: Option<ChangeCallback<Vec<String>>>,
    /// Allow several items open at once.
    pub multiple: bool,
    /// Wrap arrow-key focus at the first and last trigger.
    pub loop_focus: bool,
    /// Close every panel with `hidden="until-found"`.
    pub hidden_until_found: bool,
    /// Disable every item.
    pub disabled: bool,
    /// Consumer `keydown` handlers, run before roving focus.
    pub on_key_down: Handlers<KeyDownEvent<N>>,
    /// Consumer style, merged over `contain: layout style`.
    pub style: Option<StyleSource>,
}

impl<N> Default for AccordionRootProps<N> {
    fn default() -> Self {
        Self {
            default_value: Vec::new(),
            value: None,
            on_value_change: None,
            multiple: false,
            loop_focus: true,
            hidden_until_found: false,
            disabled: false,
            on_key_down: Handlers::new(),
            style: None,
        }
    }
}

impl<N> fmt::Debug for AccordionRootProps<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionRootProps")
            .field("default_value", &self.default_value)
            .field("value", &self.value)
            .field("on_value_change", &self.on_value_change.is_some())
            .field("multiple", &self.multiple)
            .field("loop_focus", &self.loop_focus)
            .field("hidden_until_found", &self.hidden_until_found)
            .field("disabled", &self.disabled)
            .field("on_key_down", &self.on_key_down)
            .field("style", &self.style)
            .finish()
    }
}

/// A mounted item trigger, as seen by roving focus.
#[derive(Copy, Clone, Debug)]
struct TriggerSlot<N> {
    node: N,
    /// The trigger's own `disabled` prop.
    disabled: Option<bool>,
    /// The item's own `disabled` prop.
    item_disabled: bool,
}

/// `Accordion.Root`.
///
/// Owns the list of open item values and the registry of mounted triggers used
/// for arrow-key navigation. Triggers are visited in document order, whatever
/// order they mounted in. The registry is keyed per item, so items sharing a
/// value each keep their trigger.
pub struct AccordionRoot<N> {
    value: Controllable<Vec<String>>,
    multiple: bool,
    loop_focus: bool,
    hidden_until_found: bool,
    disabled: bool,
    on_key_down: Handlers<KeyDownEvent<N>>,
    style: Option<StyleSource>,
    triggers: HashMap<String, TriggerSlot<N>>,
}

impl<N: fmt::Debug> fmt::Debug for AccordionRoot<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionRoot")
            .field("value", &self.value)
            .field("multiple", &self.multiple)
            .field("loop_focus", &self.loop_focus)
            .field("hidden_until_found", &self.hidden_until_found)
            .field("disabled", &self.disabled)
            .field("on_key_down", &self.on_key_down)
            .field("style", &self.style)
            .field("triggers", &self.triggers)
            .finish()
    }
}

impl<N: Copy + Eq + fmt::Debug> AccordionRoot<N> {
    /// Create a root.
    ///
    /// In development builds, a single-selection root starting with more than
    /// one open value logs a warning.
    pub fn new(props: AccordionRootProps<N>) -> Self {
        let AccordionRootProps {
            default_value,
            value,
            on_value_change,
            multiple,
            loop_focus,
            hidden_until_found,
            disabled,
            on_key_down,
            style,
        } = props;

        let mut state = match value {
            Some(cell) => Controllable::controlled(cell),
            None => Controllable::uncontrolled(default_value),
        };
        if let Some(on_change) = on_value_change {
            state = state.with_on_change(on_change);
        }

        let open = state.with(Vec::len);
        if !multiple && open > 1 {
            let received = format!("but received {open} open items in 'value' or 'default_value'.");
            warn(&[
                "The 'Accordion.Root' component is in single-selection mode,",
                &received,
                "This may lead to unpredictable behavior.",
            ]);
        }

        Self {
            value: state,
            multiple,
            loop_focus,
            hidden_until_found,
            disabled,
            on_key_down,
            style,
            triggers: HashMap::new(),
        }
    }

    /// The open item values.
    pub fn value(&self) -> Vec<String> {
        self.value.get()
    }

    /// Whether the item with `value` is open.
    pub fn is_item_open(&self, value: &str) -> bool {
        self.value.with(|open| open.iter().any(|v| v == value))
    }

    /// Open the item with `value`.
    ///
    /// Single selection replaces the list; multiple selection appends.
    pub fn open_item(&mut self, value: &str) {
        let next = if self.multiple {
            let mut open = self.value();
            if !open.iter().any(|v| v == value) {
                open.push(value.into());
            }
            open
        } else {
            Vec::from([String::from(value)])
        };
        self.value.request(next);
    }

    /// Close the item with `value`, leaving any other open item alone.
    pub fn close_item(&mut self, value: &str) {
        let next: Vec<String> = self
            .value
            .with(|open| open.iter().filter(|v| *v != value).cloned().collect());
        self.value.request(next);
    }

    /// Whether several items may be open at once.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Whether arrow-key focus wraps.
    pub fn loop_focus(&self) -> bool {
        self.loop_focus
    }

    /// Whether panels close with `hidden="until-found"`.
    pub fn hidden_until_found(&self) -> bool {
        self.hidden_until_found
    }

    /// Update `hidden_until_found`; panels pick it up on their next sync.
    pub fn set_hidden_until_found(&mut self, hidden_until_found: bool) {
        self.hidden_until_found = hidden_until_found;
    }

    /// Whether the root is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Update `disabled`.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// `slot` identifies the item, not its value.
    pub(crate) fn register_trigger(
        &mut self,
        slot: &str,
        node: N,
        disabled: Option<bool>,
        item_disabled: bool,
    ) {
        self.triggers.insert(
            slot.into(),
            TriggerSlot {
                node,
                disabled,
                item_disabled,
            },
        );
    }

    pub(crate) fn unregister_trigger(&mut self, slot: &str) -> Option<N> {
        self.triggers.remove(slot).map(|slot| slot.node)
    }

    pub(crate) fn set_item_disabled(&mut self, slot: &str, disabled: bool) {
        if let Some(slot) = self.triggers.get_mut(slot) {
            slot.item_disabled = disabled;
        }
    }

    /// Handle a `keydown` bubbling from within the accordion.
    ///
    /// Consumer handlers run first; [`Outcome::Stop`] leaves the event alone.
    /// `ArrowDown`, `ArrowUp`, `Home` and `End` ask the host to prevent the page
    /// scroll and move focus among the enabled, connected triggers. Without
    /// `loop_focus` the edges hold still.
    ///
    /// [`Outcome::Stop`]: disclose_core::handlers::Outcome::Stop
    pub fn handle_key_down<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        event: &KeyDownEvent<N>,
    ) -> KeyDownResponse<N> {
        if self.on_key_down.run(event).is_stop() {
            return KeyDownResponse::default();
        }
        let Some(direction) = Navigation::from_key(&event.key) else {
            return KeyDownResponse::default();
        };

        let mut slots: Vec<&TriggerSlot<N>> = self
            .triggers
            .values()
            .filter(|slot| dom.is_connected(slot.node))
            .collect();
        slots.sort_by(|a, b| dom.compare_document_position(a.node, b.node));
        let entries: Vec<FocusEntry<N>> = slots
            .iter()
            .map(|slot| FocusEntry {
                enabled: !slot.disabled.unwrap_or(slot.item_disabled || self.disabled),
                ..FocusEntry::new(slot.node)
            })
            .collect();

        let policy = DefaultPolicy {
            wrap: WrapMode::from_loop(self.loop_focus),
        };
        let focused = policy.next(event.target, direction, &FocusSpace { nodes: &entries });
        if let Some(node) = focused {
            dom.focus(node);
        }
        KeyDownResponse {
            prevent_default: true,
            focused,
        }
    }

    /// Describe the root element.
    pub fn render(&self) -> Element {
        let base = StyleSource::record([("contain", Some("layout style"))]);
        Element::new("div")
            .marker("accordion-root")
            .flag("data-disabled", self.disabled)
            .with_style(merge_styles([Some(&base), self.style.as_ref()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use disclose_core::controllable::shared;
    use disclose_core::dom::mock::{MockDom, MockNodeId};
    use disclose_core::handlers::Outcome;

    fn values(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn single_selection_replaces_and_clears() {
        let mut root: AccordionRoot<MockNodeId> = AccordionRoot::new(AccordionRootProps {
            default_value: values(&["a"]),
            ..AccordionRootProps::default()
        });
        root.open_item("b");
        assert_eq!(root.value(), values(&["b"]));
        assert!(!root.is_item_open("a"));
        root.close_item("b");
        assert!(root.value().is_empty());
    }

    #[test]
    fn multiple_selection_tracks_each_item() {
        let mut root: AccordionRoot<MockNodeId> = AccordionRoot::new(AccordionRootProps {
            multiple: true,
            ..AccordionRootProps::default()
        });
        root.open_item("a");
        root.open_item("b");
        root.open_item("a");
        assert_eq!(root.value(), values(&["a", "b"]));
        root.close_item("a");
        assert_eq!(root.value(), values(&["b"]));
    }

    #[test]
    fn controlled_value_only_notifies() {
        let cell = shared(values(&["a"]));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut root: AccordionRoot<MockNodeId> = AccordionRoot::new(AccordionRootProps {
            value: Some(Rc::clone(&cell)),
            on_value_change: Some(alloc::boxed::Box::new(move |v: &Vec<String>| {
                sink.borrow_mut().push(v.clone());
            })),
            ..AccordionRootProps::default()
        });
        root.open_item("b");
        assert_eq!(root.value(), values(&["a"]));
        assert_eq!(*seen.borrow(), vec![values(&["b"])]);
        *cell.borrow_mut() = values(&["b"]);
        assert!(root.is_item_open("b"));
    }

    #[test]
    fn single_mode_with_several_values_still_builds() {
        let root: AccordionRoot<MockNodeId> = AccordionRoot::new(AccordionRootProps {
            default_value: values(&["a", "b"]),
            ..AccordionRootProps::default()
        });
        assert!(root.is_item_open("a"));
        assert!(root.is_item_open("b"));
    }

    fn setup(count: usize) -> (MockDom, AccordionRoot<MockNodeId>, Vec<MockNodeId>) {
        let mut dom = MockDom::new();
        let mut root = AccordionRoot::new(AccordionRootProps::default());
        let nodes: Vec<_> = (0..count).map(|_| dom.create()).collect();
        for (i, &node) in nodes.iter().enumerate() {
            root.register_trigger(&format!("item-{i}"), node, None, false);
        }
        (dom, root, nodes)
    }

    #[test]
    fn arrows_move_and_wrap() {
        let (mut dom, mut root, nodes) = setup(3);

        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("ArrowDown", Some(nodes[0])));
        assert!(r.prevent_default);
        assert_eq!(r.focused, Some(nodes[1]));
        assert_eq!(dom.focused(), Some(nodes[1]));

        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("ArrowDown", Some(nodes[2])));
        assert_eq!(r.focused, Some(nodes[0]));

        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("ArrowUp", Some(nodes[0])));
        assert_eq!(r.focused, Some(nodes[2]));

        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("End", Some(nodes[0])));
        assert_eq!(r.focused, Some(nodes[2]));
        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("Home", Some(nodes[2])));
        assert_eq!(r.focused, Some(nodes[0]));
    }

    #[test]
    fn other_keys_are_left_alone() {
        let (mut dom, mut root, nodes) = setup(2);
        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("Enter", Some(nodes[0])));
        assert_eq!(r, KeyDownResponse::default());
        assert_eq!(dom.focused(), None);
    }

    #[test]
    fn consumer_stop_skips_navigation() {
        let mut dom = MockDom::new();
        let mut root = AccordionRoot::new(AccordionRootProps {
            on_key_down: Handlers::new().with(|_| Outcome::Stop),
            ..AccordionRootProps::default()
        });
        let a = dom.create();
        root.register_trigger("a", a, None, false);
        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("Home", None));
        assert!(!r.prevent_default);
        assert_eq!(dom.focused(), None);
    }

    #[test]
    fn disabled_and_detached_triggers_are_skipped() {
        let (mut dom, mut root, nodes) = setup(4);
        root.set_item_disabled("item-1", true);
        dom.detach(nodes[2]);

        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("ArrowDown", Some(nodes[0])));
        assert_eq!(r.focused, Some(nodes[3]));

        // The trigger's own prop wins over the item's.
        root.register_trigger("item-1", nodes[1], Some(false), true);
        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("End", Some(nodes[0])));
        assert_eq!(r.focused, Some(nodes[1]));
    }

    #[test]
    fn root_disabled_blocks_inheriting_triggers() {
        let (mut dom, mut root, nodes) = setup(2);
        root.set_disabled(true);
        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("ArrowDown", Some(nodes[0])));
        assert!(r.prevent_default);
        assert_eq!(r.focused, None);
    }

    #[test]
    fn without_loop_the_edges_hold() {
        let mut dom = MockDom::new();
        let mut root = AccordionRoot::new(AccordionRootProps {
            loop_focus: false,
            ..AccordionRootProps::default()
        });
        let a = dom.create();
        let b = dom.create();
        root.register_trigger("a", a, None, false);
        root.register_trigger("b", b, None, false);

        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("ArrowUp", Some(a)));
        assert!(r.prevent_default);
        assert_eq!(r.focused, None);
        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("ArrowDown", Some(b)));
        assert_eq!(r.focused, None);
    }

    #[test]
    fn navigation_follows_document_order_not_mount_order() {
        let (mut dom, mut root, nodes) = setup(3);

        // Remounting the first trigger keeps its place.
        root.unregister_trigger("item-0");
        root.register_trigger("item-0", nodes[0], None, false);
        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("Home", Some(nodes[2])));
        assert_eq!(r.focused, Some(nodes[0]));

        // A trigger inserted between the others is visited between them.
        let late = dom.create();
        dom.insert_before(nodes[1], late);
        root.register_trigger("item-late", late, None, false);
        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("ArrowDown", Some(nodes[0])));
        assert_eq!(r.focused, Some(late));
        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("End", Some(nodes[0])));
        assert_eq!(r.focused, Some(nodes[2]));
    }

    #[test]
    fn unregistered_triggers_drop_out() {
        let (mut dom, mut root, nodes) = setup(3);
        assert_eq!(root.unregister_trigger("item-1"), Some(nodes[1]));
        let r = root.handle_key_down(&mut dom, &KeyDownEvent::new("ArrowDown", Some(nodes[0])));
        assert_eq!(r.focused, Some(nodes[2]));
    }

    #[test]
    fn root_renders_contain_and_disabled() {
        let root: AccordionRoot<MockNodeId> = AccordionRoot::new(AccordionRootProps {
            disabled: true,
            ..AccordionRootProps::default()
        });
        let el = root.render();
        assert_eq!(el.get("data-disclose-accordion-root"), Some(""));
        assert_eq!(el.get("data-disabled"), Some(""));
        assert_eq!(el.style.get("contain"), Some("layout style"));
    }
}
