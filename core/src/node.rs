//! Typed nodes.
//!
//! A [`Node`] is a [`Descriptor`] whose kind has been fixed: each variant carries exactly the
//! fields its kind uses, with defaults applied and enumerations parsed. Renderers match on
//! `Node` rather than on the wide descriptor.

use crate::descriptor::{Action, Descriptor, Inset, NodeKind};

/// Url prefix naming an image bundled with the host instead of a remote one.
pub const RESOURCE_SCHEME: &str = "resource:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Anything other than `"horizontal"` is vertical.
    pub fn from_wire(value: Option<&str>) -> Orientation {
        match value {
            Some(value) if value.eq_ignore_ascii_case("horizontal") => Orientation::Horizontal,
            _ => Orientation::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    Medium,
    Bold,
}

impl FontWeight {
    pub fn from_wire(value: Option<&str>) -> FontWeight {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("bold") => FontWeight::Bold,
            Some("medium") => FontWeight::Medium,
            Some("light") => FontWeight::Light,
            _ => FontWeight::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

impl TextAlign {
    /// `"right"` and `"end"` align to the end; anything unrecognized aligns to the start.
    pub fn from_wire(value: Option<&str>) -> TextAlign {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("center") => TextAlign::Center,
            Some("right") | Some("end") => TextAlign::End,
            _ => TextAlign::Start,
        }
    }
}

/// How an image is scaled into its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentScale {
    /// Stretch to fill, ignoring aspect ratio.
    Fill,
    /// Scale to fit entirely, keeping aspect ratio.
    Fit,
    /// Scale to cover and crop the overflow.
    Crop,
    /// Like `Fit`, but never scale up.
    #[default]
    Inside,
}

impl ContentScale {
    pub fn from_wire(value: Option<&str>) -> ContentScale {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("fill") => ContentScale::Fill,
            Some("fit") => ContentScale::Fit,
            Some("crop") => ContentScale::Crop,
            _ => ContentScale::Inside,
        }
    }
}

/// Keyboard and masking behavior of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    #[default]
    Text,
    Number,
    Email,
    Password,
}

impl InputKind {
    pub fn from_wire(value: Option<&str>) -> InputKind {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("number") => InputKind::Number,
            Some("email") => InputKind::Email,
            Some("password") => InputKind::Password,
            _ => InputKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    pub id: String,
    pub orientation: Orientation,
    pub background: Option<String>,
    pub corner_radius: Option<i32>,
    pub action: Option<Action>,
    pub children: Vec<Node>,
    pub padding: Inset,
    pub margin: Inset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub id: String,
    pub text: String,
    pub size: Option<i32>,
    pub color: Option<String>,
    pub weight: FontWeight,
    pub align: TextAlign,
    pub padding: Inset,
    pub margin: Inset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonNode {
    pub id: String,
    pub text: Option<String>,
    pub text_color: Option<String>,
    pub background: Option<String>,
    pub corner_radius: Option<i32>,
    pub enabled: bool,
    pub action: Action,
    pub padding: Inset,
    pub margin: Inset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    pub id: String,
    pub url: String,
    pub scale: ContentScale,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub corner_radius: Option<i32>,
    pub padding: Inset,
    pub margin: Inset,
}

impl ImageNode {
    /// The key of a bundled image, if the url uses the `resource:` scheme.
    pub fn resource_key(&self) -> Option<&str> {
        self.url.strip_prefix(RESOURCE_SCHEME)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputNode {
    pub id: String,
    pub hint: Option<String>,
    pub initial_value: Option<String>,
    pub kind: InputKind,
    /// Maximum number of characters; negative values on the wire are ignored.
    pub max_length: Option<usize>,
    pub background: Option<String>,
    pub corner_radius: Option<i32>,
    pub padding: Inset,
    pub margin: Inset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListNode {
    pub id: String,
    pub orientation: Orientation,
    pub items: Vec<Node>,
    pub divider_enabled: bool,
    pub divider_color: Option<String>,
    pub padding: Inset,
    pub margin: Inset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownNode {
    pub id: String,
    /// The discriminator the source sent, if any.
    pub discriminator: Option<String>,
}

/// A node whose kind has been fixed.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Container(ContainerNode),
    Text(TextNode),
    Button(ButtonNode),
    Image(ImageNode),
    Input(InputNode),
    List(ListNode),
    Unknown(UnknownNode),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Container(node) => &node.id,
            Node::Text(node) => &node.id,
            Node::Button(node) => &node.id,
            Node::Image(node) => &node.id,
            Node::Input(node) => &node.id,
            Node::List(node) => &node.id,
            Node::Unknown(node) => &node.id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Container(_) => NodeKind::Container,
            Node::Text(_) => NodeKind::Text,
            Node::Button(_) => NodeKind::Button,
            Node::Image(_) => NodeKind::Image,
            Node::Input(_) => NodeKind::Input,
            Node::List(_) => NodeKind::List,
            Node::Unknown(_) => NodeKind::Unknown,
        }
    }

    /// Direct descendants: container children or list items.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container(node) => &node.children,
            Node::List(node) => &node.items,
            _ => &[],
        }
    }
}

fn into_nodes(nodes: Option<Vec<Descriptor>>) -> Vec<Node> {
    nodes.unwrap_or_default().into_iter().map(Node::from).collect()
}

impl From<Descriptor> for Node {
    fn from(d: Descriptor) -> Node {
        let padding = d.padding.unwrap_or_default();
        let margin = d.margin.unwrap_or_default();

        match d.kind() {
            NodeKind::Container => Node::Container(ContainerNode {
                orientation: Orientation::from_wire(d.orientation.as_deref()),
                background: d.background.or(d.background_color),
                corner_radius: d.corner_radius,
                action: d.action,
                children: into_nodes(d.children),
                id: d.id,
                padding,
                margin,
            }),
            NodeKind::Text => Node::Text(TextNode {
                text: d.text.unwrap_or_default(),
                size: d.text_size,
                color: d.text_color,
                weight: FontWeight::from_wire(d.font_weight.as_deref()),
                align: TextAlign::from_wire(d.text_align.as_deref()),
                id: d.id,
                padding,
                margin,
            }),
            NodeKind::Button => Node::Button(ButtonNode {
                text: d.text,
                text_color: d.text_color,
                background: d.background_color.or(d.background),
                corner_radius: d.corner_radius,
                enabled: d.enabled.unwrap_or(true),
                action: d.action.unwrap_or_default(),
                id: d.id,
                padding,
                margin,
            }),
            NodeKind::Image => Node::Image(ImageNode {
                url: d.url.unwrap_or_default(),
                scale: ContentScale::from_wire(d.content_scale.as_deref()),
                width: d.width,
                height: d.height,
                corner_radius: d.corner_radius,
                id: d.id,
                padding,
                margin,
            }),
            NodeKind::Input => Node::Input(InputNode {
                hint: d.hint,
                initial_value: d.initial_value,
                kind: InputKind::from_wire(d.input_kind.as_deref()),
                max_length: d.max_length.and_then(|len| usize::try_from(len).ok()),
                background: d.background_color.or(d.background),
                corner_radius: d.corner_radius,
                id: d.id,
                padding,
                margin,
            }),
            NodeKind::List => Node::List(ListNode {
                orientation: Orientation::from_wire(d.orientation.as_deref()),
                items: into_nodes(d.items),
                divider_enabled: d.divider_enabled.unwrap_or(false),
                divider_color: d.divider_color,
                id: d.id,
                padding,
                margin,
            }),
            NodeKind::Unknown => Node::Unknown(UnknownNode {
                discriminator: d.discriminator().map(str::to_string),
                id: d.id,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ActionKind;

    #[test]
    fn enumerations_fall_back() {
        assert_eq!(Orientation::from_wire(Some("HORIZONTAL")), Orientation::Horizontal);
        assert_eq!(Orientation::from_wire(Some("diagonal")), Orientation::Vertical);
        assert_eq!(TextAlign::from_wire(Some("right")), TextAlign::End);
        assert_eq!(TextAlign::from_wire(None), TextAlign::Start);
        assert_eq!(FontWeight::from_wire(Some("heavy")), FontWeight::Normal);
        assert_eq!(ContentScale::from_wire(Some("stretch")), ContentScale::Inside);
        assert_eq!(InputKind::from_wire(Some("phone")), InputKind::Text);
    }

    #[test]
    fn button_defaults() {
        let d = Descriptor {
            text: Some("Go".into()),
            ..Descriptor::of_kind("b", NodeKind::Button)
        };
        match Node::from(d) {
            Node::Button(button) => {
                assert!(button.enabled);
                assert_eq!(button.action.kind, ActionKind::None);
                assert_eq!(button.padding, Inset::ZERO);
            }
            other => panic!("expected a button, got {:?}", other),
        }
    }

    #[test]
    fn tree_shape_is_kept() {
        let d = Descriptor {
            children: Some(vec![
                Descriptor {
                    text: Some("a".into()),
                    ..Descriptor::of_kind("a", NodeKind::Text)
                },
                Descriptor {
                    legacy_kind: Some("carousel".into()),
                    ..Descriptor::new("c")
                }
                .resolved(),
            ]),
            ..Descriptor::of_kind("root", NodeKind::Container)
        };
        let node = Node::from(d);
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[0].kind(), NodeKind::Text);
        match &node.children()[1] {
            Node::Unknown(unknown) => {
                assert_eq!(unknown.discriminator.as_deref(), Some("carousel"))
            }
            other => panic!("expected an unknown node, got {:?}", other),
        }
    }

    #[test]
    fn negative_max_length_is_ignored() {
        let d = Descriptor {
            max_length: Some(-1),
            ..Descriptor::of_kind("i", NodeKind::Input)
        };
        match Node::from(d) {
            Node::Input(input) => assert_eq!(input.max_length, None),
            other => panic!("expected an input, got {:?}", other),
        }
    }

    #[test]
    fn resource_urls() {
        let image = ImageNode {
            id: "i".into(),
            url: "resource:avatar".into(),
            scale: ContentScale::default(),
            width: None,
            height: None,
            corner_radius: None,
            padding: Inset::ZERO,
            margin: Inset::ZERO,
        };
        assert_eq!(image.resource_key(), Some("avatar"));
    }
}
