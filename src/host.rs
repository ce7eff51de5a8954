//! Hosting rendered trees and queueing the intents they produce.

use crate::action::ActionSink;
use crate::config::RenderConfig;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::events::Activate;
use crate::screen::ScreenView;
use crate::widget::Widget;
use bdui_core::{Node, Payload, Screen};
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use tracing::{debug, error, warn};

/// Something a rendered screen asked the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Navigate(String),
    ApiCall {
        endpoint: String,
        payload: Option<Payload>,
    },
}

/// Forwards actions into a channel as [`Intent`]s.
pub struct ChannelSink(Sender<Intent>);

impl ChannelSink {
    fn send(&self, intent: Intent) {
        if let Err(err) = self.0.send(intent) {
            error!("failed to send intent: {}", err);
        }
    }
}

impl ActionSink for ChannelSink {
    fn navigate(&mut self, target: &str) {
        self.send(Intent::Navigate(target.to_string()));
    }

    fn api_call(&mut self, endpoint: &str, payload: Option<&Payload>) {
        self.send(Intent::ApiCall {
            endpoint: endpoint.to_string(),
            payload: payload.cloned(),
        });
    }
}

/// An action sink that drops every action.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl ActionSink for Discard {
    fn navigate(&mut self, target: &str) {
        debug!(target, "discarding navigation");
    }

    fn api_call(&mut self, endpoint: &str, _payload: Option<&Payload>) {
        debug!(endpoint, "discarding api call");
    }
}

#[derive(Debug)]
enum Mounted {
    Widget(Widget),
    Screen(ScreenView),
}

/// Holds the mounted widget tree and queues the intents it produces.
///
/// Activating widgets never calls back into the application directly; intents are queued and
/// handed out by [`poll`](Host::poll).
pub struct Host {
    dispatcher: Dispatcher,
    mounted: Option<Mounted>,
    intent_recv: Receiver<Intent>,
}

impl Host {
    /// Creates a new Host with the default render config.
    pub fn new() -> Host {
        Host::with_config(RenderConfig::default())
    }

    pub fn with_config(config: RenderConfig) -> Host {
        let (intent_sender, intent_recv) = channel::unbounded();
        Host {
            dispatcher: Dispatcher::with_config(ChannelSink(intent_sender), config),
            mounted: None,
            intent_recv,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Renders a node and mounts it, replacing whatever was mounted.
    pub fn mount(&mut self, node: Option<&Node>) {
        let widget = self.dispatcher.render(node);
        self.mounted = Some(Mounted::Widget(widget));
    }

    /// Renders a screen and mounts it, replacing whatever was mounted.
    pub fn mount_screen(&mut self, screen: &Screen) {
        let view = self.dispatcher.render_screen(screen);
        self.mounted = Some(Mounted::Screen(view));
    }

    /// Reads a screen from JSON and mounts it. Only malformed JSON is an error.
    pub fn mount_json(&mut self, json: &str) -> Result<()> {
        let screen = Screen::from_json_str(json)?;
        self.mount_screen(&screen);
        Ok(())
    }

    /// The mounted widget tree; the body if a screen is mounted.
    pub fn root(&self) -> Option<&Widget> {
        match &self.mounted {
            Some(Mounted::Widget(widget)) => Some(widget),
            Some(Mounted::Screen(view)) => Some(&view.body),
            None => None,
        }
    }

    fn root_mut(&mut self) -> Option<&mut Widget> {
        match &mut self.mounted {
            Some(Mounted::Widget(widget)) => Some(widget),
            Some(Mounted::Screen(view)) => Some(&mut view.body),
            None => None,
        }
    }

    /// The mounted screen, if a screen is mounted.
    pub fn screen(&self) -> Option<&ScreenView> {
        match &self.mounted {
            Some(Mounted::Screen(view)) => Some(view),
            _ => None,
        }
    }

    /// Taps the widget with the given id. Returns whether anything handled it.
    pub fn activate(&self, id: &str) -> bool {
        match self.root().and_then(|root| root.find(id)) {
            Some(widget) => widget.activate(Activate::tap()),
            None => {
                warn!(id, "no widget to activate");
                false
            }
        }
    }

    /// Edits the text field with the given id. Returns whether the edit was accepted.
    pub fn edit(&mut self, id: &str, value: &str) -> bool {
        match self.root_mut().and_then(|root| root.find_mut(id)) {
            Some(Widget::TextField(field)) => field.edit(value),
            _ => {
                warn!(id, "no text field to edit");
                false
            }
        }
    }

    /// Receives all intents from the queue.
    pub fn poll(&mut self) -> Vec<Intent> {
        let mut intents = Vec::new();
        loop {
            match self.intent_recv.try_recv() {
                Ok(intent) => intents.push(intent),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    error!("intent sender has been disconnected");
                    break;
                }
            }
        }
        intents
    }
}

impl Default for Host {
    fn default() -> Self {
        Host::new()
    }
}

#[test]
fn test_host_queues_intents() {
    let mut host = Host::new();
    host.mount_json(
        r#"{
            "id": "home",
            "rootComponent": {
                "id": "main_container",
                "children": [
                    { "id": "go", "type": "button", "text": "Go",
                      "action": { "type": "navigate", "url": "details" } },
                    { "id": "like", "type": "button", "text": "Like",
                      "action": { "type": "toggle", "payload": { "post": "1" } } },
                    { "id": "name", "type": "input", "maxLength": 4 }
                ]
            }
        }"#,
    )
    .unwrap();

    assert!(host.poll().is_empty());
    assert!(host.activate("go"));
    assert!(host.activate("like"));
    assert!(!host.activate("name"));
    assert!(!host.activate("missing"));

    let mut payload = Payload::new();
    payload.insert("post".to_string(), "1".to_string());
    assert_eq!(
        host.poll(),
        [
            Intent::Navigate("details".to_string()),
            Intent::ApiCall {
                endpoint: "toggle".to_string(),
                payload: Some(payload),
            },
        ]
    );
    assert!(host.poll().is_empty(), "poll drains the queue");

    assert!(host.edit("name", "Ada"));
    assert!(!host.edit("name", "Grace"));
    assert!(!host.edit("go", "x"));
}

#[test]
fn test_host_rejects_malformed_json() {
    let mut host = Host::new();
    assert!(host.mount_json("{").is_err());
    assert!(host.root().is_none());
}
