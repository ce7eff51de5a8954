//! Rendered widgets.
//!
//! Widgets are the output of rendering: fully resolved values (colors parsed, sizes in points,
//! actions bound to handlers) that a platform backend can draw without consulting the
//! descriptor again.

use crate::color::Color;
use crate::edges::Edges;
use crate::events::{Activate, EventHandler};
use crate::layer::Layer;
use crate::resources::ResourceId;
use bdui_core::node::{ContentScale, FontWeight, InputKind, Orientation, TextAlign};
use cgmath::Vector2;
use tracing::debug;

/// Character shown in place of each character of a masked input.
pub const MASK_CHAR: char = '•';

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub id: String,
    pub text: String,
    /// Font size in points.
    pub size: f64,
    pub color: Color,
    pub weight: FontWeight,
    pub align: TextAlign,
    pub margin: Edges,
    pub padding: Edges,
}

#[derive(Debug, Clone)]
pub struct ButtonView {
    pub id: String,
    pub label: String,
    pub background: Color,
    pub text_color: Color,
    pub corner_radius: f64,
    pub enabled: bool,
    pub margin: Edges,
    pub padding: Edges,
    pub on_activate: EventHandler<Activate>,
}

impl ButtonView {
    /// Presses the button. Disabled buttons ignore presses.
    pub fn press(&self, event: Activate) -> bool {
        if !self.enabled {
            debug!(id = %self.id, "ignoring press on disabled button");
            return false;
        }
        self.on_activate.fire(event);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A remote image.
    Url(String),
    /// An image bundled with the host.
    Resource(ResourceId),
}

/// How an image is sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// Exactly this size.
    Fixed(Vector2<f64>),
    /// This width; the height follows the content.
    Width(f64),
    /// This height, filling the available width.
    Height(f64),
    /// Fills the available width; the height follows the content.
    FillWidth,
}

impl Sizing {
    pub fn from_dimensions(width: Option<i32>, height: Option<i32>) -> Sizing {
        match (width, height) {
            (Some(w), Some(h)) => Sizing::Fixed(Vector2::new(f64::from(w), f64::from(h))),
            (Some(w), None) => Sizing::Width(f64::from(w)),
            (None, Some(h)) => Sizing::Height(f64::from(h)),
            (None, None) => Sizing::FillWidth,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    pub id: String,
    pub source: ImageSource,
    pub sizing: Sizing,
    pub fit: ContentScale,
    pub corner_radius: f64,
    pub margin: Edges,
    pub padding: Edges,
}

/// A single-line text input. Holds its own editing state.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub id: String,
    pub value: String,
    pub hint: String,
    pub keyboard: InputKind,
    pub max_length: Option<usize>,
    pub background: Color,
    pub corner_radius: f64,
    pub margin: Edges,
    pub padding: Edges,
}

impl TextField {
    /// Whether the value is shown masked.
    pub fn is_masked(&self) -> bool {
        self.keyboard == InputKind::Password
    }

    /// Replaces the value, unless the new one is longer than the maximum length. Returns whether
    /// the edit was accepted.
    pub fn edit(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                debug!(id = %self.id, max, "rejecting edit over maximum length");
                return false;
            }
        }
        self.value = value;
        true
    }

    /// The text shown on screen.
    pub fn display_value(&self) -> String {
        if self.is_masked() {
            self.value.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.value.clone()
        }
    }
}

/// A rendered list. Dividers sit between items, never after the last one.
#[derive(Debug, Clone)]
pub struct ListView {
    pub id: String,
    pub axis: Orientation,
    pub margin: Edges,
    pub padding: Edges,
    /// Items interleaved with dividers.
    pub slots: Vec<Widget>,
}

impl ListView {
    /// Items without the dividers.
    pub fn items(&self) -> impl Iterator<Item = &Widget> {
        self.slots
            .iter()
            .filter(|slot| !matches!(slot, Widget::Divider(_)))
    }

    pub fn divider_count(&self) -> usize {
        self.slots.len() - self.items().count()
    }
}

/// A 1pt line separating list items. Drawn across the list axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    pub color: Color,
    pub axis: Orientation,
    pub thickness: f64,
}

/// A visible stand-in for something that couldn't be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub id: Option<String>,
    pub message: String,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub enum Widget {
    Layer(Layer),
    Label(Label),
    Button(ButtonView),
    Image(ImageView),
    TextField(TextField),
    List(ListView),
    Divider(Divider),
    Placeholder(Placeholder),
}

impl Widget {
    pub fn id(&self) -> Option<&str> {
        match self {
            Widget::Layer(layer) => Some(&layer.id),
            Widget::Label(label) => Some(&label.id),
            Widget::Button(button) => Some(&button.id),
            Widget::Image(image) => Some(&image.id),
            Widget::TextField(field) => Some(&field.id),
            Widget::List(list) => Some(&list.id),
            Widget::Divider(_) => None,
            Widget::Placeholder(placeholder) => placeholder.id.as_deref(),
        }
    }

    pub fn subviews(&self) -> &[Widget] {
        match self {
            Widget::Layer(layer) => &layer.subviews,
            Widget::List(list) => &list.slots,
            _ => &[],
        }
    }

    fn subviews_mut(&mut self) -> &mut [Widget] {
        match self {
            Widget::Layer(layer) => &mut layer.subviews,
            Widget::List(list) => &mut list.slots,
            _ => &mut [],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Widget::Placeholder(_))
    }

    /// Finds a widget by id, depth first.
    pub fn find(&self, id: &str) -> Option<&Widget> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.subviews().iter().find_map(|subview| subview.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Widget> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.subviews_mut()
            .iter_mut()
            .find_map(|subview| subview.find_mut(id))
    }

    /// Activates the widget. Returns whether anything handled the activation.
    pub fn activate(&self, event: Activate) -> bool {
        match self {
            Widget::Button(button) => button.press(event),
            Widget::Layer(layer) => layer.activate(event),
            _ => false,
        }
    }

    /// Counts this widget and all descendants.
    pub fn count(&self) -> usize {
        1 + self.subviews().iter().map(Widget::count).sum::<usize>()
    }
}
