use bdui::{group, CardScreen, Entry, Host, Intent, NodeKind, Widget};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn two_headers_two_groups() {
    init_logging();
    let root = group(&[
        Entry::header("A"),
        Entry::row("1", "one"),
        Entry::row("2", "two"),
        Entry::header("B"),
        Entry::row("3", "three"),
    ]);
    let children = root.children();
    assert_eq!(children.len(), 4);
    assert_eq!(children[0].kind(), NodeKind::Text);
    assert_eq!(children[1].kind(), NodeKind::List);
    assert_eq!(children[1].items().len(), 2);
    assert_eq!(children[3].items().len(), 1);
}

#[test]
fn lone_header_has_no_groups() {
    init_logging();
    assert!(group(&[Entry::header("A")]).children().is_empty());
}

#[test]
fn card_screen_renders_end_to_end() {
    init_logging();
    let screen = CardScreen::from_json_str(
        r#"{
            "id": "cards_screen",
            "title": "Cards",
            "items": [
                { "id": "1", "title": "Popular", "type": "HEADER", "image": "" },
                { "id": "2", "title": "Green Tea", "type": "ROW", "image": "tea",
                  "actionUrl": "details/tea" },
                { "id": "3", "title": "Coffee", "type": "ROW", "image": "coffee" },
                { "id": "4", "title": "Buy now", "type": "BUTTON", "image": "" }
            ]
        }"#,
    )
    .unwrap()
    .into_screen();

    let mut host = Host::new();
    host.mount_screen(&screen);
    let view = host.screen().unwrap();
    assert!(view.valid);
    assert_eq!(view.toolbar.as_ref().map(|t| t.title.as_str()), Some("Cards"));

    let body = host.root().unwrap();
    assert_eq!(body.id(), Some("main_container"));
    match body.find("list_Popular") {
        Some(Widget::List(list)) => {
            assert_eq!(list.items().count(), 2);
            assert_eq!(list.divider_count(), 1);
        }
        other => panic!("expected the popular list, got {:?}", other),
    }
    assert!(body.find("image_green_tea").is_some());

    assert!(host.activate("row_green_tea"));
    assert!(!host.activate("row_coffee"), "rows without an action url aren't tappable");
    assert_eq!(host.poll(), [Intent::Navigate("details/tea".to_string())]);
}
