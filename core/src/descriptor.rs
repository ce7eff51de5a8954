//! Descriptor nodes.
//!
//! A [`Descriptor`] is the wide, wire-level form of one node in a UI tree: a single struct that
//! can carry the fields of every component kind, plus the [`NodeKind`] resolved from them.
//! Descriptors are plain values; a tree is built bottom-up once and never mutated afterwards.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// String key/value pairs attached to an action.
pub type Payload = BTreeMap<String, String>;

/// Ids that always denote the root container of a screen.
const ROOT_IDS: [&str; 2] = ["main_container", "root_container"];

/// Prefix of synthesized ids.
const FALLBACK_ID_PREFIX: &str = "_fallback_";

/// The semantic kind of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    Container,
    Text,
    Button,
    Image,
    Input,
    List,
    #[default]
    Unknown,
}

impl NodeKind {
    /// Kinds that can be named, in the order id keywords are tried.
    pub const NAMED: [NodeKind; 6] = [
        NodeKind::Container,
        NodeKind::Text,
        NodeKind::Button,
        NodeKind::Image,
        NodeKind::Input,
        NodeKind::List,
    ];

    /// The wire name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Container => "container",
            NodeKind::Text => "text",
            NodeKind::Button => "button",
            NodeKind::Image => "image",
            NodeKind::Input => "input",
            NodeKind::List => "list",
            NodeKind::Unknown => "unknown",
        }
    }

    /// Parses a discriminator value.
    ///
    /// Returns `None` for anything that isn't one of the six named kinds, including `"unknown"`.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        let name = name.trim();
        NodeKind::NAMED
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A padding or margin quadruple, in density-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Inset {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Inset {
    pub const ZERO: Inset = Inset::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Inset {
        Inset {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same inset on all four sides.
    pub const fn uniform(value: i32) -> Inset {
        Inset::new(value, value, value, value)
    }
}

/// What an action does when triggered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Navigates to the action target.
    Navigate,
    /// Calls the API endpoint named by the action target.
    ApiCall,
    /// Calls the toggle endpoint with the action payload.
    Toggle,
    /// Does nothing.
    None,
    /// An action type this client doesn’t know; triggering it does nothing.
    Other(String),
}

impl ActionKind {
    /// Parses an action type. `"api"` is accepted as an older spelling of `"api_call"`.
    pub fn parse(name: &str) -> ActionKind {
        match name.trim() {
            "navigate" => ActionKind::Navigate,
            "api_call" | "api" => ActionKind::ApiCall,
            "toggle" => ActionKind::Toggle,
            "none" | "" => ActionKind::None,
            other => ActionKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Navigate => "navigate",
            ActionKind::ApiCall => "api_call",
            ActionKind::Toggle => "toggle",
            ActionKind::None => "none",
            ActionKind::Other(name) => name,
        }
    }
}

impl Serialize for ActionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A user-triggerable effect attached to a button or container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,

    /// Navigation route or API endpoint.
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

impl Action {
    /// An action that does nothing; buttons without an action get this one.
    pub fn none() -> Action {
        Action {
            kind: ActionKind::None,
            target: None,
            payload: None,
        }
    }

    pub fn navigate(target: impl Into<String>) -> Action {
        Action {
            kind: ActionKind::Navigate,
            target: Some(target.into()),
            payload: None,
        }
    }

    pub fn api_call(endpoint: impl Into<String>, payload: Option<Payload>) -> Action {
        Action {
            kind: ActionKind::ApiCall,
            target: Some(endpoint.into()),
            payload,
        }
    }
}

impl Default for Action {
    fn default() -> Action {
        Action::none()
    }
}

/// One node of a declaratively described UI tree.
///
/// Every field except `id` is optional; which ones matter depends on the resolved
/// [`kind`](Descriptor::kind). Serializes back to the JSON shape ingestion accepts.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub id: String,

    /// The preferred discriminator (`componentType` on the wire).
    #[serde(rename = "componentType", skip_serializing_if = "Option::is_none")]
    pub explicit_kind: Option<String>,

    /// The older discriminator (`type` on the wire).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub legacy_kind: Option<String>,

    #[serde(skip)]
    pub(crate) kind: NodeKind,

    // container and list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Descriptor>>,

    // text and button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    // image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_scale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,

    // input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(rename = "inputType", skip_serializing_if = "Option::is_none")]
    pub input_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,

    // list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Descriptor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Inset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Inset>,
}

impl Descriptor {
    /// Creates an empty descriptor with the given id. Its kind is unresolved until
    /// [`resolved`](Descriptor::resolved) is called.
    pub fn new(id: impl Into<String>) -> Descriptor {
        Descriptor {
            id: id.into(),
            ..Descriptor::default()
        }
    }

    /// Creates a descriptor that names its kind through both discriminators.
    pub fn of_kind(id: impl Into<String>, kind: NodeKind) -> Descriptor {
        Descriptor {
            id: id.into(),
            explicit_kind: Some(kind.name().to_string()),
            legacy_kind: Some(kind.name().to_string()),
            ..Descriptor::default()
        }
        .resolved()
    }

    /// Returns a fresh id for a node that arrived without one.
    pub fn synthesize_id() -> String {
        format!("{}{}", FALLBACK_ID_PREFIX, Uuid::new_v4().simple())
    }

    /// Returns true if the id was synthesized rather than supplied by the source.
    pub fn has_synthesized_id(&self) -> bool {
        self.id.starts_with(FALLBACK_ID_PREFIX)
    }

    /// The resolved kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Re-derives the kind from the other fields.
    pub fn resolved(mut self) -> Descriptor {
        self.kind = resolve_kind(&self);
        self
    }

    /// The discriminator in effect: the explicit one if set, otherwise the legacy one.
    pub fn discriminator(&self) -> Option<&str> {
        non_empty(&self.explicit_kind).or_else(|| non_empty(&self.legacy_kind))
    }

    /// Returns the discriminator if it names a kind this client doesn’t know.
    ///
    /// An explicit `"unknown"` is not a kind of its own and never counts.
    pub fn unrecognized_discriminator(&self) -> Option<&str> {
        self.discriminator().filter(|name| {
            NodeKind::from_name(name).is_none()
                && !name.trim().eq_ignore_ascii_case(NodeKind::Unknown.name())
        })
    }

    /// Children in document order; empty if absent.
    pub fn children(&self) -> &[Descriptor] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// List items in document order; empty if absent.
    pub fn items(&self) -> &[Descriptor] {
        self.items.as_deref().unwrap_or(&[])
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

fn has_nodes(value: &Option<Vec<Descriptor>>) -> bool {
    value.as_ref().map_or(false, |nodes| !nodes.is_empty())
}

/// Resolves the kind of a descriptor. The first rule that matches wins:
///
/// 1. the explicit discriminator, if non-empty
/// 2. the legacy discriminator, if non-empty
/// 3. well-known root ids (`main_container`, `root_container`)
/// 4. a kind keyword contained in the id
/// 5. the node’s shape: non-empty children, text without action, text with action, url, hint
///    or input type, non-empty items
/// 6. otherwise [`NodeKind::Unknown`]
///
/// A discriminator that names no known kind resolves to `Unknown` without consulting the later
/// rules.
pub fn resolve_kind(node: &Descriptor) -> NodeKind {
    if let Some(name) = node.discriminator() {
        return NodeKind::from_name(name).unwrap_or(NodeKind::Unknown);
    }

    if ROOT_IDS.contains(&node.id.as_str()) {
        return NodeKind::Container;
    }

    if let Some(kind) = NodeKind::NAMED
        .iter()
        .find(|kind| node.id.contains(kind.name()))
    {
        return *kind;
    }

    if has_nodes(&node.children) {
        NodeKind::Container
    } else if node.text.is_some() && node.action.is_none() {
        NodeKind::Text
    } else if node.text.is_some() {
        NodeKind::Button
    } else if node.url.is_some() {
        NodeKind::Image
    } else if node.hint.is_some() || node.input_kind.is_some() {
        NodeKind::Input
    } else if has_nodes(&node.items) {
        NodeKind::List
    } else {
        NodeKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> Descriptor {
        Descriptor::new(id)
    }

    #[test]
    fn explicit_discriminator_wins() {
        let d = Descriptor {
            explicit_kind: Some("text".into()),
            legacy_kind: Some("button".into()),
            ..node("a")
        };
        assert_eq!(resolve_kind(&d), NodeKind::Text);
    }

    #[test]
    fn blank_discriminator_falls_through() {
        let d = Descriptor {
            explicit_kind: Some("  ".into()),
            legacy_kind: Some("image".into()),
            ..node("a")
        };
        assert_eq!(resolve_kind(&d), NodeKind::Image);
    }

    #[test]
    fn unrecognized_discriminator_is_unknown_but_remembered() {
        let d = Descriptor {
            legacy_kind: Some("carousel".into()),
            children: Some(vec![node("text_1").resolved()]),
            ..node("a")
        }
        .resolved();
        assert_eq!(d.kind(), NodeKind::Unknown);
        assert_eq!(d.unrecognized_discriminator(), Some("carousel"));
    }

    #[test]
    fn root_ids_are_containers() {
        assert_eq!(resolve_kind(&node("main_container")), NodeKind::Container);
        assert_eq!(resolve_kind(&node("root_container")), NodeKind::Container);
    }

    #[test]
    fn id_keywords_are_tried_in_order() {
        assert_eq!(resolve_kind(&node("header_text")), NodeKind::Text);
        assert_eq!(resolve_kind(&node("submit_button")), NodeKind::Button);
        // "text" is tried before "input"
        assert_eq!(resolve_kind(&node("text_input")), NodeKind::Text);
        assert_eq!(resolve_kind(&node("card_container_list")), NodeKind::Container);
    }

    #[test]
    fn shape_heuristics() {
        let list = Descriptor {
            items: Some(vec![node("x")]),
            ..node("a")
        };
        assert_eq!(resolve_kind(&list), NodeKind::List);

        let button = Descriptor {
            text: Some("Go".into()),
            action: Some(Action::navigate("home")),
            ..node("a")
        };
        assert_eq!(resolve_kind(&button), NodeKind::Button);

        let text = Descriptor {
            text: Some("Hi".into()),
            ..node("a")
        };
        assert_eq!(resolve_kind(&text), NodeKind::Text);

        let input = Descriptor {
            input_kind: Some("email".into()),
            ..node("a")
        };
        assert_eq!(resolve_kind(&input), NodeKind::Input);

        let empty_children = Descriptor {
            children: Some(Vec::new()),
            url: Some("https://example.com/a.png".into()),
            ..node("a")
        };
        assert_eq!(resolve_kind(&empty_children), NodeKind::Image);

        let empty_text = Descriptor {
            text: Some(String::new()),
            ..node("a")
        };
        assert_eq!(resolve_kind(&empty_text), NodeKind::Text, "present but empty text counts");

        let empty_url = Descriptor {
            url: Some(String::new()),
            items: Some(vec![node("x")]),
            ..node("a")
        };
        assert_eq!(resolve_kind(&empty_url), NodeKind::Image);

        let empty_items = Descriptor {
            items: Some(Vec::new()),
            ..node("a")
        };
        assert_eq!(resolve_kind(&empty_items), NodeKind::Unknown);
    }

    #[test]
    fn nothing_matches() {
        assert_eq!(resolve_kind(&node("zzz")), NodeKind::Unknown);
        assert_eq!(resolve_kind(&node(&Descriptor::synthesize_id())), NodeKind::Unknown);
    }

    #[test]
    fn action_kinds() {
        assert_eq!(ActionKind::parse("api"), ActionKind::ApiCall);
        assert_eq!(ActionKind::parse("api_call"), ActionKind::ApiCall);
        assert_eq!(ActionKind::parse(""), ActionKind::None);
        assert_eq!(
            ActionKind::parse("share"),
            ActionKind::Other("share".to_string())
        );
    }

    #[test]
    fn serializes_to_wire_shape() {
        let d = Descriptor {
            text: Some("Hi".into()),
            input_kind: Some("password".into()),
            padding: Some(Inset::uniform(4)),
            ..Descriptor::of_kind("t", NodeKind::Text)
        };
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["componentType"], "text");
        assert_eq!(value["type"], "text");
        assert_eq!(value["inputType"], "password");
        assert_eq!(value["padding"]["left"], 4);
        assert!(value.get("children").is_none(), "absent fields are omitted");
        assert!(value.get("kind").is_none());
    }
}
