//! Rendering whole screens.

use crate::color::Color;
use crate::dispatch::Dispatcher;
use crate::widget::Widget;
use bdui_core::{validate_tree, Node, Screen};
use tracing::{info, warn};

/// Message shown for screens without a root component.
pub const EMPTY_SCREEN_MESSAGE: &str = "Error: Screen has no content to display";

#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    pub title: String,
    pub background: Color,
    pub text_color: Color,
}

/// A rendered screen.
#[derive(Debug, Clone)]
pub struct ScreenView {
    pub id: String,
    pub background: Color,
    /// Only present if the screen has a title.
    pub toolbar: Option<Toolbar>,
    pub status_bar: Option<Color>,
    pub body: Widget,
    /// Whether the tree passed validation. Invalid trees are still rendered.
    pub valid: bool,
}

impl Dispatcher {
    /// Renders a screen. The root is validated first and coerced to a container if needed.
    pub fn render_screen(&self, screen: &Screen) -> ScreenView {
        let config = &self.config().screen;

        let (body, valid) = match &screen.root {
            Some(root) => {
                let validated = validate_tree(root.clone());
                if validated.repaired {
                    info!(screen = %screen.id, "screen root was coerced to a container");
                }
                if !validated.valid {
                    warn!(screen = %screen.id, "screen has invalid components");
                }
                let node = Node::from(validated.root);
                (self.render(Some(&node)), validated.valid)
            }
            None => {
                warn!(screen = %screen.id, "screen has no content");
                (self.placeholder(None, EMPTY_SCREEN_MESSAGE.to_string()), false)
            }
        };

        ScreenView {
            id: screen.id.clone(),
            background: self.color(screen.background_color.as_deref(), &config.background),
            toolbar: screen.title.as_ref().map(|title| Toolbar {
                title: title.clone(),
                background: self.color(screen.toolbar_color.as_deref(), &config.toolbar),
                text_color: self.color(None, &config.toolbar_text),
            }),
            status_bar: screen
                .status_bar_color
                .as_deref()
                .map(|status_bar| self.color(Some(status_bar), &config.toolbar)),
            body,
            valid,
        }
    }
}

#[test]
fn test_screen_without_root() {
    let dispatcher = Dispatcher::new(crate::host::Discard);
    let view = dispatcher.render_screen(&Screen {
        id: "empty".into(),
        title: Some("Empty".into()),
        ..Screen::default()
    });
    match &view.body {
        Widget::Placeholder(placeholder) => assert_eq!(placeholder.message, EMPTY_SCREEN_MESSAGE),
        other => panic!("expected a placeholder, got {:?}", other),
    }
    assert!(!view.valid);
    assert_eq!(view.toolbar.map(|toolbar| toolbar.title), Some("Empty".to_string()));
}

#[test]
fn test_screen_root_is_coerced() {
    let screen = Screen::from_json_str(
        r##"{
            "id": "s",
            "backgroundColor": "#F5F5F5",
            "statusBarColor": "#1976D2",
            "rootComponent": { "id": "hello", "type": "text", "text": "Hi" }
        }"##,
    )
    .unwrap();
    let view = Dispatcher::new(crate::host::Discard).render_screen(&screen);
    assert!(view.valid);
    assert!(view.toolbar.is_none(), "no title, no toolbar");
    assert_eq!(view.background, Color::from_argb(0xFFF5_F5F5));
    assert_eq!(view.status_bar, Some(Color::from_argb(0xFF19_76D2)));
    match &view.body {
        Widget::Layer(layer) => {
            assert_eq!(layer.id, "hello");
            assert!(layer.subviews.is_empty());
        }
        other => panic!("expected a layer, got {:?}", other),
    }
}
