//! Routing triggered actions to the host.

use crate::events::{Activate, EventHandler};
use bdui_core::{Action, ActionKind, Payload};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

/// Endpoint toggle actions are sent to.
pub const TOGGLE_ENDPOINT: &str = "toggle";

/// Receives the effects of triggered actions.
pub trait ActionSink: Send {
    /// Navigates to a route.
    fn navigate(&mut self, target: &str);

    /// Calls an API endpoint.
    fn api_call(&mut self, endpoint: &str, payload: Option<&Payload>);
}

/// An action sink shared by every widget of a rendered tree.
pub type SharedSink = Arc<Mutex<dyn ActionSink>>;

/// An [`ActionSink`] made of two closures.
pub struct Callbacks<N, A> {
    on_navigate: N,
    on_api_call: A,
}

impl<N, A> Callbacks<N, A>
where
    N: FnMut(&str) + Send,
    A: FnMut(&str, Option<&Payload>) + Send,
{
    pub fn new(on_navigate: N, on_api_call: A) -> Self {
        Callbacks {
            on_navigate,
            on_api_call,
        }
    }
}

impl<N, A> ActionSink for Callbacks<N, A>
where
    N: FnMut(&str) + Send,
    A: FnMut(&str, Option<&Payload>) + Send,
{
    fn navigate(&mut self, target: &str) {
        (self.on_navigate)(target)
    }

    fn api_call(&mut self, endpoint: &str, payload: Option<&Payload>) {
        (self.on_api_call)(endpoint, payload)
    }
}

/// Performs an action against a sink.
///
/// - `navigate` navigates to the target; without a target nothing happens
/// - `api_call` calls the target endpoint, or `""` without one
/// - `toggle` calls [`TOGGLE_ENDPOINT`]
/// - anything else does nothing
pub fn route(action: &Action, sink: &mut dyn ActionSink) {
    match &action.kind {
        ActionKind::Navigate => match action.target.as_deref() {
            Some(target) => {
                debug!(target, "navigating");
                sink.navigate(target);
            }
            None => warn!("navigate action has no target"),
        },
        ActionKind::ApiCall => {
            let endpoint = action.target.as_deref().unwrap_or("");
            debug!(endpoint, "calling api");
            sink.api_call(endpoint, action.payload.as_ref());
        }
        ActionKind::Toggle => {
            debug!("toggling");
            sink.api_call(TOGGLE_ENDPOINT, action.payload.as_ref());
        }
        ActionKind::None => debug!("action does nothing"),
        ActionKind::Other(kind) => warn!(kind = %kind, "ignoring action of unknown type"),
    }
}

/// Creates a handler that routes `action` to `sink` on every activation.
pub(crate) fn activation_handler(action: Action, sink: &SharedSink) -> EventHandler<Activate> {
    let sink = Arc::clone(sink);
    EventHandler::new(move |event: Activate| {
        debug!(device = ?event.device, kind = action.kind.as_str(), "activated");
        route(&action, &mut *sink.lock());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Recorder(Vec<String>);

    impl ActionSink for Recorder {
        fn navigate(&mut self, target: &str) {
            self.0.push(format!("navigate {}", target));
        }

        fn api_call(&mut self, endpoint: &str, payload: Option<&Payload>) {
            let payload = payload.map_or(0, |payload| payload.len());
            self.0.push(format!("api {} {}", endpoint, payload));
        }
    }

    fn action(kind: ActionKind, target: Option<&str>) -> Action {
        Action {
            kind,
            target: target.map(str::to_string),
            payload: None,
        }
    }

    #[test]
    fn routes_by_kind() {
        let mut sink = Recorder::default();
        route(&action(ActionKind::Navigate, Some("home")), &mut sink);
        route(&action(ActionKind::Navigate, None), &mut sink);
        route(&action(ActionKind::ApiCall, Some("/like")), &mut sink);
        route(&action(ActionKind::ApiCall, None), &mut sink);
        route(&action(ActionKind::Toggle, Some("ignored")), &mut sink);
        route(&action(ActionKind::None, Some("x")), &mut sink);
        route(&action(ActionKind::Other("share".into()), Some("x")), &mut sink);
        assert_eq!(
            sink.0,
            ["navigate home", "api /like 0", "api  0", "api toggle 0"]
        );
    }

    #[test]
    fn payload_is_forwarded() {
        let mut payload = Payload::new();
        payload.insert("id".into(), "7".into());
        let mut sink = Recorder::default();
        route(&Action::api_call("/like", Some(payload)), &mut sink);
        assert_eq!(sink.0, ["api /like 1"]);
    }

    #[test]
    fn handler_routes_into_shared_sink() {
        let recorder = Arc::new(Mutex::new(Recorder::default()));
        let sink: SharedSink = recorder.clone();
        let handler = activation_handler(Action::navigate("next"), &sink);
        handler.fire(Activate::tap());
        handler.fire(Activate::tap());
        assert_eq!(recorder.lock().0, ["navigate next", "navigate next"]);
    }
}
