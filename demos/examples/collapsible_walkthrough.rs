// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A collapsible driven by hand against `MockDom`, step by step.
//!
//! Shows what a host does with the `Schedule` returned by `sync`:
//! - run the deferred height write on the next macrotask,
//! - report `transitionend` once the CSS transition finishes.
//!
//! Panel traces go to stderr; set `RUST_LOG` to change the filter.
//!
//! Run:
//! - `cargo run -p disclose_demos --example collapsible_walkthrough`

use disclose::collapsible::{
    CollapsiblePanel, CollapsibleRoot, CollapsibleRootProps, CollapsibleTrigger,
};
use disclose::{BeforeMatchEvent, ClickEvent, PanelProps};
use disclose_core::dom::mock::{MockDom, MockNodeId};
use disclose_core::id::IdSource;
use disclose_panel::{EndEvent, Schedule};
use tracing_subscriber::EnvFilter;

const HEIGHT_VAR: &str = "--disclose-collapsible-panel-height";

fn report(dom: &MockDom, panel: &CollapsiblePanel<MockNodeId>, node: MockNodeId, step: &str) {
    let state = panel.state();
    println!(
        "{step:<28} data-state={:<6} hidden={:<12} height-var={}",
        state.visual.as_str(),
        dom.attribute(node, "hidden").unwrap_or("-"),
        dom.inline_style(node, HEIGHT_VAR).unwrap_or("-"),
    );
}

/// Play the host's part: deferred write first, then the end event.
fn drive(
    dom: &mut MockDom,
    panel: &mut CollapsiblePanel<MockNodeId>,
    node: MockNodeId,
    schedule: Schedule,
) {
    if let Some(ticket) = schedule.deferred {
        panel.run_deferred(dom, ticket);
        report(dom, panel, node, "  after next macrotask");
    }
    if let Some((event, _)) = schedule.awaiting {
        panel.on_end_event(dom, event);
        report(dom, panel, node, &format!("  after {}", event.event_type()));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("disclose=trace")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut dom = MockDom::new();
    let mut ids = IdSource::new();

    let mut root = CollapsibleRoot::new(CollapsibleRootProps::default(), &mut ids);
    let mut trigger = CollapsibleTrigger::default();
    let mut panel = CollapsiblePanel::new(
        PanelProps {
            hidden_until_found: true,
            on_open_change_complete: Some(Box::new(|open: bool| {
                println!("  on_open_change_complete({open})");
            })),
            ..PanelProps::default()
        },
        &root,
    );

    let button = dom.create();
    let content = dom.create();
    dom.set_content_height(content, 180.0);
    dom.set_sheet(content, "transition-duration", "250ms");

    trigger.mount(&mut root);
    panel.mount(&mut root, content);
    trigger.render(&root).apply(&mut dom, button);
    panel.render(&root).apply(&mut dom, content);
    report(&dom, &panel, content, "mounted");

    trigger.click(&mut root, &ClickEvent);
    let schedule = panel.sync(&mut dom, &root);
    report(&dom, &panel, content, "click: opening");
    drive(&mut dom, &mut panel, content, schedule);

    trigger.click(&mut root, &ClickEvent);
    let schedule = panel.sync(&mut dom, &root);
    report(&dom, &panel, content, "click: closing");
    drive(&mut dom, &mut panel, content, schedule);

    let outcome = panel.before_match(&mut dom, &mut root, &BeforeMatchEvent);
    report(&dom, &panel, content, "find-in-page match");
    println!(
        "  prevent_default={} scrolls={:?}",
        outcome.prevent_default,
        dom.scrolls()
    );
    drive(&mut dom, &mut panel, content, outcome.schedule);

    let el = trigger.render(&root);
    println!(
        "trigger: aria-expanded={:?} aria-controls={:?}",
        el.get("aria-expanded"),
        el.get("aria-controls"),
    );
}
