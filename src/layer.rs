//! Container widgets.

use crate::color::Color;
use crate::edges::Edges;
use crate::events::{Activate, EventHandler};
use crate::widget::Widget;
use bdui_core::node::Orientation;
use core::fmt;
use tracing::debug;

/// A rendered container that stacks its subviews along an axis.
#[derive(Clone)]
pub struct Layer {
    pub id: String,

    /// Stacking axis of the subviews.
    pub axis: Orientation,

    /// Background color, with which the layer bounds will be filled--respecting the corner radius.
    pub background: Option<Color>,

    /// Corner radius.
    pub corner_radius: f64,

    pub margin: Edges,
    pub padding: Edges,

    /// Subviews of this layer, in order.
    pub subviews: Vec<Widget>,

    /// Called when the layer is tapped; layers without one aren’t interactive.
    pub on_activate: Option<EventHandler<Activate>>,
}

struct DebugifyOption<'a, T>(&'a Option<T>);
impl<'a, T> fmt::Debug for DebugifyOption<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_some() {
            write!(f, "Some(..)")
        } else {
            write!(f, "None")
        }
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Layer")
            .field("id", &self.id)
            .field("axis", &self.axis)
            .field("background", &self.background)
            .field("corner_radius", &self.corner_radius)
            .field("margin", &self.margin)
            .field("padding", &self.padding)
            .field("subviews", &self.subviews)
            .field("on_activate", &DebugifyOption(&self.on_activate))
            .finish()
    }
}

impl Default for Layer {
    fn default() -> Self {
        Layer {
            id: String::new(),
            axis: Orientation::Vertical,
            background: None,
            corner_radius: 0.,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            subviews: Vec::new(),
            on_activate: None,
        }
    }
}

impl Layer {
    /// Whether tapping the layer does anything.
    pub fn is_interactive(&self) -> bool {
        self.on_activate.is_some()
    }

    /// Fires the activation handler, if any. Returns whether one was fired.
    pub fn activate(&self, event: Activate) -> bool {
        match &self.on_activate {
            Some(handler) => {
                debug!(id = %self.id, "layer activated");
                handler.fire(event);
                true
            }
            None => false,
        }
    }
}

#[test]
fn test_layer_debug_hides_handler() {
    let layer = Layer {
        id: "row".into(),
        on_activate: Some(EventHandler::new(|_: Activate| ())),
        ..Layer::default()
    };
    let debug = format!("{:?}", layer);
    assert!(debug.contains("on_activate: Some(..)"), "got {}", debug);
    assert!(layer.is_interactive());
    assert!(!Layer::default().activate(Activate::tap()));
}
