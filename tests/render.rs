use bdui::widget::{ListView, MASK_CHAR};
use bdui::{ingest, render, validate_tree, Descriptor, Host, Intent, Node, NodeKind, Widget};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn render_value(value: serde_json::Value) -> Widget {
    let node = Node::from(ingest(&value));
    render(Some(&node), |_| (), |_, _| ())
}

fn list(widget: Widget) -> ListView {
    match widget {
        Widget::List(list) => list,
        other => panic!("expected a list, got {:?}", other),
    }
}

#[test]
fn discriminator_precedence() {
    init_logging();
    let d = ingest(&json!({ "id": "x", "componentType": "text", "type": "button", "text": "a" }));
    assert_eq!(d.kind(), NodeKind::Text);
}

#[test]
fn heuristic_fallback_order() {
    init_logging();
    let list = ingest(&json!({ "id": "x", "items": [{ "id": "y", "text": "y" }] }));
    assert_eq!(list.kind(), NodeKind::List);
    let button = ingest(&json!({ "id": "x", "text": "go", "action": { "type": "none" } }));
    assert_eq!(button.kind(), NodeKind::Button);
}

#[test]
fn divider_count_for_any_length() {
    init_logging();
    for n in 0..5 {
        let items: Vec<_> = (0..n)
            .map(|i| json!({ "id": format!("t{}", i), "type": "text", "text": "x" }))
            .collect();
        let list = list(render_value(json!({
            "id": "l", "type": "list", "dividerEnabled": true, "items": items,
        })));
        assert_eq!(list.items().count(), n, "items for n = {}", n);
        assert_eq!(list.divider_count(), n.saturating_sub(1), "dividers for n = {}", n);
    }
}

#[test]
fn malformed_child_is_contained() {
    init_logging();
    let widget = render_value(json!({
        "id": "c",
        "type": "container",
        "children": [{ "id": "t", "type": "text", "text": "ok" }, {}],
    }));
    assert_eq!(widget.subviews().len(), 2);
    assert!(matches!(widget.subviews()[0], Widget::Label(_)));
    assert!(widget.subviews()[1].is_placeholder());
}

#[test]
fn root_repair_is_idempotent() {
    init_logging();
    let root = ingest(&json!({ "id": "hello", "type": "image", "url": "x" }));
    let first = validate_tree(root);
    assert!(first.repaired);
    let second = validate_tree(first.root.clone());
    assert!(!second.repaired);
    assert_eq!(second.root, first.root);
}

#[test]
fn repaired_tree_reingests_identically() {
    init_logging();
    let root = validate_tree(ingest(&json!({
        "id": "greeting", "type": "text", "text": "hi",
    })))
    .root;
    let json = serde_json::to_value(&root).unwrap();
    let again: Descriptor = ingest(&json);
    assert_eq!(again, root);
}

#[test]
fn inputs_limit_and_mask() {
    init_logging();
    let mut host = Host::new();
    let node = Node::from(ingest(&json!({
        "id": "pin", "type": "input", "inputType": "password", "maxLength": 4, "initialValue": "12",
    })));
    host.mount(Some(&node));
    assert!(host.edit("pin", "1234"));
    assert!(!host.edit("pin", "12345"));
    match host.root() {
        Some(Widget::TextField(field)) => {
            assert_eq!(field.value, "1234");
            assert_eq!(field.display_value(), MASK_CHAR.to_string().repeat(4));
        }
        other => panic!("expected a text field, got {:?}", other),
    }
}

#[test]
fn activation_reaches_the_right_callback() {
    init_logging();
    let log = Arc::new(Mutex::new(Vec::new()));
    let (nav, api) = (Arc::clone(&log), Arc::clone(&log));
    let node = Node::from(ingest(&json!({
        "id": "main_container",
        "children": [
            { "id": "a", "type": "button", "text": "A", "action": { "type": "navigate", "url": "a" } },
            { "id": "b", "type": "button", "text": "B", "action": { "type": "api", "url": "/b" } },
            { "id": "c", "type": "button", "text": "C", "action": { "type": "toggle" } },
            { "id": "d", "type": "button", "text": "D", "enabled": false,
              "action": { "type": "navigate", "url": "d" } },
        ],
    })));
    let widget = render(
        Some(&node),
        move |target| nav.lock().push(format!("nav:{}", target)),
        move |endpoint, _| api.lock().push(format!("api:{}", endpoint)),
    );
    for id in ["a", "b", "c", "d"] {
        let target = widget.find(id).unwrap();
        target.activate(Default::default());
    }
    assert_eq!(*log.lock(), ["nav:a", "api:/b", "api:toggle"]);
}

#[test]
fn host_queues_intents_in_order() {
    init_logging();
    let mut host = Host::new();
    let node = Node::from(ingest(&json!({
        "id": "main_container",
        "children": [
            { "id": "row", "type": "container", "action": { "type": "navigate", "url": "row" },
              "children": [{ "id": "label", "type": "text", "text": "Row" }] },
            { "id": "save", "type": "button", "text": "Save", "action": { "type": "api_call" } },
        ],
    })));
    host.mount(Some(&node));
    assert!(host.activate("save"));
    assert!(host.activate("row"));
    assert!(!host.activate("label"), "plain text isn't interactive");
    assert_eq!(
        host.poll(),
        [
            Intent::ApiCall {
                endpoint: String::new(),
                payload: None,
            },
            Intent::Navigate("row".to_string()),
        ]
    );
}
