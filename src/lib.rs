//! Server-driven UI rendering.
//!
//! Turns descriptor trees from [`bdui_core`] into widget trees a platform backend can draw.
//!
//! ## Rendering
//! A [`Dispatcher`] renders one [`Node`] into exactly one [`Widget`]. It never fails: nodes of
//! unknown kinds and missing nodes render as placeholders with a message, so one bad component
//! never takes down a screen. Everything a descriptor leaves out comes from a [`RenderConfig`].
//!
//! ## Actions
//! Buttons and tappable containers carry event handlers that route their action to an
//! [`ActionSink`]: navigation goes to `navigate`, API calls and toggles go to `api_call`. The
//! [`Host`] uses a sink that queues [`Intent`]s on a channel, to be picked up with
//! [`Host::poll`].

mod action;
pub mod color;
mod config;
mod dispatch;
mod edges;
mod error;
pub mod events;
mod host;
mod layer;
mod resources;
mod screen;
pub mod widget;

pub use action::{route, ActionSink, Callbacks, SharedSink, TOGGLE_ENDPOINT};
pub use config::{
    ButtonConfig, ImageConfig, InputConfig, ListConfig, RenderConfig, ScreenConfig, TextConfig,
};
pub use dispatch::{render, Dispatcher};
pub use edges::Edges;
pub use error::{Error, Result};
pub use host::{ChannelSink, Discard, Host, Intent};
pub use layer::Layer;
pub use resources::{ImageResolver, ResourceId, ResourceMap};
pub use screen::{ScreenView, Toolbar, EMPTY_SCREEN_MESSAGE};
pub use widget::Widget;

pub use bdui_core::{
    group, ingest, ingest_str, validate, validate_tree, Action, ActionKind, CardScreen,
    Descriptor, Entry, Node, NodeKind, Payload, Screen,
};
