// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An accordion with roving arrow-key focus and single selection.
//!
//! The root starts in single-selection mode with two open values, which logs a
//! development warning. Opening an item then closes the others, and arrow keys
//! skip the disabled item.
//!
//! Run:
//! - `cargo run -p disclose_demos --example accordion_keyboard`

use disclose::accordion::{
    AccordionItem, AccordionItemPanel, AccordionItemProps, AccordionItemTrigger, AccordionRoot,
    AccordionRootProps,
};
use disclose::{ClickEvent, KeyDownEvent, PanelProps};
use disclose_core::dom::mock::{MockDom, MockNodeId};
use disclose_core::id::IdSource;
use tracing_subscriber::EnvFilter;

struct Section {
    item: AccordionItem,
    trigger: AccordionItemTrigger<MockNodeId>,
    panel: AccordionItemPanel<MockNodeId>,
    button: MockNodeId,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("disclose=warn")),
        )
        .init();

    let mut dom = MockDom::new();
    let mut ids = IdSource::new();
    let mut root = AccordionRoot::new(AccordionRootProps {
        default_value: vec!["shipping".into(), "returns".into()],
        ..AccordionRootProps::default()
    });

    let mut sections: Vec<Section> = [
        ("shipping", false),
        ("returns", true),
        ("warranty", false),
    ]
    .into_iter()
    .map(|(value, disabled)| {
        let mut item = AccordionItem::new(
            AccordionItemProps {
                value: Some(value.into()),
                disabled,
                ..AccordionItemProps::default()
            },
            &mut ids,
        );
        let trigger = AccordionItemTrigger::default();
        let mut panel = AccordionItemPanel::new(PanelProps::default(), &root, &item);
        let button = dom.create();
        let content = dom.create();
        dom.set_content_height(content, 96.0);
        trigger.mount(&mut root, &mut item, button);
        panel.mount(&mut item, content);
        Section {
            item,
            trigger,
            panel,
            button,
        }
    })
    .collect();

    println!("open at start: {:?}", root.value());

    let warranty = &mut sections[2];
    warranty
        .trigger
        .click(&mut root, &warranty.item, &ClickEvent);
    for s in &mut sections {
        s.panel.sync(&mut dom, &root, &s.item);
    }
    println!("after opening warranty: {:?}", root.value());
    for s in &sections {
        println!(
            "  {:<9} data-state={}",
            s.item.value(),
            s.panel.state().visual.as_str()
        );
    }

    let names = |node: Option<MockNodeId>| {
        node.and_then(|n| sections.iter().find(|s| s.button == n))
            .map_or("(stays)", |s| s.item.value())
    };
    for (key, from) in [("ArrowDown", 0), ("ArrowDown", 2), ("ArrowUp", 0), ("Home", 2)] {
        let event = KeyDownEvent::new(key, Some(sections[from].button));
        let response = root.handle_key_down(&mut dom, &event);
        println!(
            "{key:<9} from {:<9} -> {:<9} prevent_default={}",
            sections[from].item.value(),
            names(response.focused),
            response.prevent_default,
        );
    }
}
