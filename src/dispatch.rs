//! Rendering nodes into widgets.

use crate::action::{activation_handler, ActionSink, Callbacks, SharedSink};
use crate::color::{Color, ColorResolver, NamedColors};
use crate::config::RenderConfig;
use crate::layer::Layer;
use crate::resources::{ImageResolver, ResourceMap};
use crate::widget::{
    ButtonView, Divider, ImageSource, ImageView, Label, ListView, Placeholder, Sizing, TextField,
    Widget,
};
use bdui_core::node::{
    ButtonNode, ContainerNode, ImageNode, InputNode, ListNode, TextNode, UnknownNode,
};
use bdui_core::{Node, Payload};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

/// Renders nodes into widgets, binding actions to a sink.
///
/// Rendering is total: every node produces exactly one widget, and anything that can't be
/// rendered produces a [`Placeholder`] with a message instead of failing.
pub struct Dispatcher {
    config: RenderConfig,
    colors: Box<dyn ColorResolver>,
    images: Box<dyn ImageResolver>,
    sink: SharedSink,
}

impl Dispatcher {
    pub fn new<S: ActionSink + 'static>(sink: S) -> Dispatcher {
        Dispatcher::with_config(sink, RenderConfig::default())
    }

    pub fn with_config<S: ActionSink + 'static>(sink: S, config: RenderConfig) -> Dispatcher {
        Dispatcher::with_shared_sink(Arc::new(Mutex::new(sink)), config)
    }

    /// Creates a dispatcher whose widgets route actions into an existing shared sink.
    pub fn with_shared_sink(sink: SharedSink, config: RenderConfig) -> Dispatcher {
        let fallback = NamedColors::default().resolve(&config.fallback_color);
        Dispatcher {
            colors: Box::new(NamedColors { fallback }),
            images: Box::new(ResourceMap::from(&config.images)),
            config,
            sink,
        }
    }

    /// Replaces the color resolver.
    pub fn colors(mut self, colors: impl ColorResolver + 'static) -> Self {
        self.colors = Box::new(colors);
        self
    }

    /// Replaces the image resolver.
    pub fn images(mut self, images: impl ImageResolver + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a node. An absent node renders as a placeholder.
    pub fn render(&self, node: Option<&Node>) -> Widget {
        match node {
            Some(node) => self.render_node(node),
            None => {
                warn!("asked to render a missing component");
                self.placeholder(None, "Component is null".to_string())
            }
        }
    }

    fn render_node(&self, node: &Node) -> Widget {
        debug!(id = node.id(), kind = %node.kind(), "rendering component");
        match node {
            Node::Container(container) => self.render_container(container),
            Node::Text(text) => self.render_text(text),
            Node::Button(button) => self.render_button(button),
            Node::Image(image) => self.render_image(image),
            Node::Input(input) => self.render_input(input),
            Node::List(list) => self.render_list(list),
            Node::Unknown(unknown) => self.render_unknown(unknown),
        }
    }

    /// Resolves an optional color string, falling back to a default color string.
    pub(crate) fn color(&self, color: Option<&str>, default: &str) -> Color {
        self.colors.resolve(color.unwrap_or(default))
    }

    pub(crate) fn placeholder(&self, id: Option<&str>, message: String) -> Widget {
        Widget::Placeholder(Placeholder {
            id: id.map(str::to_string),
            message,
            color: self.colors.resolve(&self.config.placeholder_color),
        })
    }

    fn render_container(&self, container: &ContainerNode) -> Widget {
        let on_activate = container
            .action
            .as_ref()
            .map(|action| activation_handler(action.clone(), &self.sink));

        Widget::Layer(Layer {
            id: container.id.clone(),
            axis: container.orientation,
            background: container
                .background
                .as_deref()
                .map(|color| self.colors.resolve(color)),
            corner_radius: container.corner_radius.map_or(0., f64::from),
            margin: container.margin.into(),
            padding: container.padding.into(),
            subviews: container
                .children
                .iter()
                .map(|child| self.render_node(child))
                .collect(),
            on_activate,
        })
    }

    fn render_text(&self, text: &TextNode) -> Widget {
        Widget::Label(Label {
            id: text.id.clone(),
            text: text.text.clone(),
            size: text.size.map_or(self.config.text.size, f64::from),
            color: self.color(text.color.as_deref(), &self.config.text.color),
            weight: text.weight,
            align: text.align,
            margin: text.margin.into(),
            padding: text.padding.into(),
        })
    }

    fn render_button(&self, button: &ButtonNode) -> Widget {
        let defaults = &self.config.button;
        Widget::Button(ButtonView {
            id: button.id.clone(),
            label: button
                .text
                .clone()
                .unwrap_or_else(|| defaults.label.clone()),
            background: self.color(button.background.as_deref(), &defaults.background),
            text_color: self.color(button.text_color.as_deref(), &defaults.text_color),
            corner_radius: button
                .corner_radius
                .map_or(defaults.corner_radius, f64::from),
            enabled: button.enabled,
            margin: button.margin.into(),
            padding: button.padding.into(),
            on_activate: activation_handler(button.action.clone(), &self.sink),
        })
    }

    fn render_image(&self, image: &ImageNode) -> Widget {
        let source = match image.resource_key() {
            Some(key) => ImageSource::Resource(self.images.resolve(key)),
            None => ImageSource::Url(image.url.clone()),
        };
        Widget::Image(ImageView {
            id: image.id.clone(),
            source,
            sizing: Sizing::from_dimensions(image.width, image.height),
            fit: image.scale,
            corner_radius: image.corner_radius.map_or(0., f64::from),
            margin: image.margin.into(),
            padding: image.padding.into(),
        })
    }

    fn render_input(&self, input: &InputNode) -> Widget {
        let defaults = &self.config.input;
        Widget::TextField(TextField {
            id: input.id.clone(),
            value: input.initial_value.clone().unwrap_or_default(),
            hint: input.hint.clone().unwrap_or_default(),
            keyboard: input.kind,
            max_length: input.max_length,
            background: self.color(input.background.as_deref(), &defaults.background),
            corner_radius: input
                .corner_radius
                .map_or(defaults.corner_radius, f64::from),
            margin: input.margin.into(),
            padding: input.padding.into(),
        })
    }

    fn render_list(&self, list: &ListNode) -> Widget {
        let divider = Divider {
            color: self.color(list.divider_color.as_deref(), &self.config.list.divider_color),
            axis: list.orientation,
            thickness: self.config.list.divider_thickness,
        };

        let mut slots = Vec::with_capacity(list.items.len() * 2);
        for (index, item) in list.items.iter().enumerate() {
            if index > 0 && list.divider_enabled {
                slots.push(Widget::Divider(divider));
            }
            slots.push(self.render_node(item));
        }

        Widget::List(ListView {
            id: list.id.clone(),
            axis: list.orientation,
            margin: list.margin.into(),
            padding: list.padding.into(),
            slots,
        })
    }

    fn render_unknown(&self, unknown: &UnknownNode) -> Widget {
        let kind = unknown.discriminator.as_deref().unwrap_or("unknown");
        warn!(id = %unknown.id, kind, "cannot render component");
        self.placeholder(
            Some(&unknown.id),
            format!("Unknown component type: {}", kind),
        )
    }
}

/// Renders a node with default styling, routing actions to two callbacks.
pub fn render<N, A>(node: Option<&Node>, on_navigate: N, on_api_call: A) -> Widget
where
    N: FnMut(&str) + Send + 'static,
    A: FnMut(&str, Option<&Payload>) + Send + 'static,
{
    Dispatcher::new(Callbacks::new(on_navigate, on_api_call)).render(node)
}
