//! Diagnostic validation of descriptor trees.
//!
//! Validation never rejects a tree; it reports problems through `tracing` and a boolean so hosts
//! can decide what to do. Every node is visited, even after the first failure, so a single pass
//! logs every problem in the tree.

use crate::descriptor::{Descriptor, NodeKind};
use tracing::{debug, warn};

/// Result of [`validate_tree`].
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    /// The root, coerced to a container if it wasn’t one.
    pub root: Descriptor,
    /// Whether every node in the (possibly coerced) tree is valid.
    pub valid: bool,
    /// Whether the root had to be coerced.
    pub repaired: bool,
}

/// Returns true if the node and every descendant satisfy the rules for their kind.
///
/// | kind      | valid when                                   |
/// |-----------|----------------------------------------------|
/// | container | children absent, or every child valid        |
/// | text      | text present                                 |
/// | button    | text and action present                      |
/// | image     | url present                                  |
/// | list      | items present and every item valid           |
/// | input     | always                                       |
/// | unknown   | only if the source named a kind of its own   |
pub fn validate(node: &Descriptor) -> bool {
    validate_at(node, 0)
}

fn validate_at(node: &Descriptor, depth: usize) -> bool {
    let id = node.id.as_str();
    let valid = match node.kind() {
        NodeKind::Container => match &node.children {
            Some(children) => all_valid(id, "child", children, depth),
            None => {
                debug!(id, depth, "container has no children and will render empty");
                true
            }
        },
        NodeKind::Text => {
            if node.text.is_none() {
                warn!(id, depth, "text component is missing its text");
            }
            node.text.is_some()
        }
        NodeKind::Button => {
            if node.text.is_none() {
                warn!(id, depth, "button is missing its text");
            }
            if node.action.is_none() {
                warn!(id, depth, "button is missing its action");
            }
            node.text.is_some() && node.action.is_some()
        }
        NodeKind::Image => {
            if node.url.is_none() {
                warn!(id, depth, "image is missing its url");
            }
            node.url.is_some()
        }
        NodeKind::List => match &node.items {
            Some(items) => all_valid(id, "item", items, depth),
            None => {
                warn!(id, depth, "list is missing its items");
                false
            }
        },
        NodeKind::Input => true,
        NodeKind::Unknown => match node.unrecognized_discriminator() {
            Some(name) => {
                warn!(id, depth, kind = name, "accepting component of a kind this client can't render");
                true
            }
            None => {
                warn!(id, depth, "component kind could not be determined");
                false
            }
        },
    };

    debug!(id, depth, kind = %node.kind(), valid, "validated component");
    valid
}

fn all_valid(parent: &str, role: &str, nodes: &[Descriptor], depth: usize) -> bool {
    nodes
        .iter()
        .enumerate()
        .fold(true, |valid, (index, node)| {
            let node_valid = validate_at(node, depth + 1);
            if !node_valid {
                warn!(parent, index, "{} is invalid", role);
            }
            valid && node_valid
        })
}

/// Returns the node re-typed as a container, keeping its id and children.
pub fn coerce_to_container(node: Descriptor) -> Descriptor {
    let name = NodeKind::Container.name().to_string();
    Descriptor {
        explicit_kind: Some(name.clone()),
        legacy_kind: Some(name),
        ..node
    }
    .resolved()
}

/// Validates a whole tree, first coercing the root to a container if it isn’t one.
pub fn validate_tree(root: Descriptor) -> Validated {
    let repaired = root.kind() != NodeKind::Container;
    let root = if repaired {
        warn!(id = %root.id, kind = %root.kind(), "root is not a container, coercing it");
        coerce_to_container(root)
    } else {
        root
    };
    let valid = validate(&root);
    Validated {
        root,
        valid,
        repaired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Action;
    use crate::ingest::ingest;
    use serde_json::json;

    fn text(id: &str, text: Option<&str>) -> Descriptor {
        Descriptor {
            text: text.map(str::to_string),
            ..Descriptor::of_kind(id, NodeKind::Text)
        }
    }

    fn container(id: &str, children: Option<Vec<Descriptor>>) -> Descriptor {
        Descriptor {
            children,
            ..Descriptor::of_kind(id, NodeKind::Container)
        }
    }

    #[test]
    fn container_without_children_is_valid() {
        assert!(validate(&container("c", None)));
        assert!(validate(&container("c", Some(Vec::new()))));
    }

    #[test]
    fn invalid_descendant_fails_the_tree() {
        let tree = container(
            "root",
            Some(vec![
                text("a", Some("a")),
                container("inner", Some(vec![text("b", None)])),
            ]),
        );
        assert!(!validate(&tree));
    }

    #[test]
    fn button_needs_text_and_action() {
        let mut button = Descriptor {
            text: Some("Go".into()),
            ..Descriptor::of_kind("b", NodeKind::Button)
        };
        assert!(!validate(&button));
        button.action = Some(Action::none());
        assert!(validate(&button));
        button.text = None;
        assert!(!validate(&button));
    }

    #[test]
    fn lists_need_items() {
        let mut list = Descriptor::of_kind("l", NodeKind::List);
        assert!(!validate(&list));
        list.items = Some(Vec::new());
        assert!(validate(&list));
        list.items = Some(vec![text("x", None)]);
        assert!(!validate(&list));
    }

    #[test]
    fn unknown_kinds() {
        let unresolved = Descriptor::new("zzz").resolved();
        assert!(!validate(&unresolved));

        let custom = Descriptor {
            legacy_kind: Some("carousel".into()),
            ..Descriptor::new("zzz")
        }
        .resolved();
        assert!(validate(&custom));

        let input = Descriptor::of_kind("i", NodeKind::Input);
        assert!(validate(&input));
    }

    #[test]
    fn explicit_unknown_is_invalid() {
        let node = ingest(&json!({ "id": "zzz", "type": "unknown" }));
        assert_eq!(node.kind(), NodeKind::Unknown);
        assert_eq!(node.unrecognized_discriminator(), None);
        assert!(!validate(&node));

        let shouted = ingest(&json!({ "id": "zzz", "componentType": "UNKNOWN" }));
        assert!(!validate(&shouted));
    }

    #[test]
    fn non_container_root_is_repaired() {
        let result = validate_tree(text("hello", Some("hi")));
        assert!(result.repaired);
        assert!(result.valid);
        assert_eq!(result.root.kind(), NodeKind::Container);
        assert_eq!(result.root.id, "hello");
        assert_eq!(result.root.explicit_kind.as_deref(), Some("container"));
        assert_eq!(result.root.legacy_kind.as_deref(), Some("container"));
    }

    #[test]
    fn container_root_is_untouched() {
        let root = container("main_container", Some(vec![text("a", Some("a"))]));
        let result = validate_tree(root.clone());
        assert!(!result.repaired);
        assert!(result.valid);
        assert_eq!(result.root, root);
    }
}
