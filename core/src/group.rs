//! Grouping a flat feed of header and row entries into a styled descriptor tree.
//!
//! Each header starts a group; the rows after it become the items of a list under that header.
//! Headers with no rows produce nothing, and rows that appear before the first header are
//! dropped.

use crate::descriptor::{Action, Descriptor, Inset, NodeKind};
use crate::node::RESOURCE_SCHEME;
use serde::Deserialize;
use std::mem;
use tracing::{debug, warn};

const ROOT_ID: &str = "main_container";
const TITLE_COLOR: &str = "#333333";
const ROW_BACKGROUND: &str = "#FFFFFF";
const DIVIDER_COLOR: &str = "#E0E0E0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryKind {
    Header,
    Row,
    #[serde(other)]
    Other,
}

/// One entry of a flat feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Key of a bundled image; only used by rows.
    #[serde(default)]
    pub image: String,
    /// Route to navigate to when the row is activated.
    #[serde(default)]
    pub action_url: Option<String>,
}

impl Entry {
    pub fn header(title: impl Into<String>) -> Entry {
        Entry {
            id: None,
            title: title.into(),
            kind: EntryKind::Header,
            image: String::new(),
            action_url: None,
        }
    }

    pub fn row(title: impl Into<String>, image: impl Into<String>) -> Entry {
        Entry {
            id: None,
            title: title.into(),
            kind: EntryKind::Row,
            image: image.into(),
            action_url: None,
        }
    }
}

/// Lowercases a title and replaces spaces with underscores.
fn slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}

/// Groups entries into a vertical root container of alternating headers and lists.
pub fn group(entries: &[Entry]) -> Descriptor {
    let mut groups = Vec::new();
    let mut header: Option<&str> = None;
    let mut rows = Vec::new();

    for entry in entries {
        match entry.kind {
            EntryKind::Header => {
                flush(header, &mut rows, &mut groups);
                header = Some(entry.title.as_str());
            }
            EntryKind::Row => rows.push(row(entry)),
            EntryKind::Other => debug!(title = %entry.title, "skipping entry of unknown type"),
        }
    }
    flush(header, &mut rows, &mut groups);

    debug!(entries = entries.len(), groups = groups.len() / 2, "grouped entries");

    Descriptor {
        orientation: Some("vertical".to_string()),
        children: Some(groups),
        ..Descriptor::of_kind(ROOT_ID, NodeKind::Container)
    }
}

fn flush(header: Option<&str>, rows: &mut Vec<Descriptor>, groups: &mut Vec<Descriptor>) {
    if rows.is_empty() {
        return;
    }
    match header {
        Some(title) => {
            groups.push(header_text(title));
            groups.push(list(title, mem::take(rows)));
        }
        None => {
            warn!(rows = rows.len(), "dropping rows that appear before any header");
            rows.clear();
        }
    }
}

fn header_text(title: &str) -> Descriptor {
    Descriptor {
        text: Some(title.to_string()),
        text_size: Some(18),
        text_color: Some(TITLE_COLOR.to_string()),
        font_weight: Some("bold".to_string()),
        padding: Some(Inset::new(16, 16, 8, 4)),
        ..Descriptor::of_kind(format!("header_{}", slug(title)), NodeKind::Text)
    }
}

fn list(title: &str, rows: Vec<Descriptor>) -> Descriptor {
    Descriptor {
        orientation: Some("vertical".to_string()),
        items: Some(rows),
        divider_enabled: Some(true),
        divider_color: Some(DIVIDER_COLOR.to_string()),
        padding: Some(Inset::new(16, 0, 16, 0)),
        ..Descriptor::of_kind(format!("list_{}", title), NodeKind::List)
    }
}

fn row(entry: &Entry) -> Descriptor {
    let slug = slug(&entry.title);

    let image = Descriptor {
        url: Some(format!("{}{}", RESOURCE_SCHEME, entry.image)),
        width: Some(60),
        height: Some(60),
        corner_radius: Some(4),
        ..Descriptor::of_kind(format!("image_{}", slug), NodeKind::Image)
    };
    let title = Descriptor {
        text: Some(entry.title.clone()),
        text_size: Some(16),
        text_color: Some(TITLE_COLOR.to_string()),
        padding: Some(Inset::new(16, 0, 0, 0)),
        ..Descriptor::of_kind(format!("text_{}", slug), NodeKind::Text)
    };

    Descriptor {
        orientation: Some("horizontal".to_string()),
        background: Some(ROW_BACKGROUND.to_string()),
        corner_radius: Some(8),
        padding: Some(Inset::uniform(16)),
        margin: Some(Inset::new(0, 0, 0, 8)),
        action: entry.action_url.clone().map(Action::navigate),
        children: Some(vec![image, title]),
        ..Descriptor::of_kind(format!("row_{}", slug), NodeKind::Container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    fn ids(nodes: &[Descriptor]) -> Vec<&str> {
        nodes.iter().map(|node| node.id.as_str()).collect()
    }

    #[test]
    fn groups_rows_under_headers() {
        let root = group(&[
            Entry::header("Fruits"),
            Entry::row("Apple", "apple"),
            Entry::row("Banana", "banana"),
            Entry::header("Vegetables"),
            Entry::row("Carrot", "carrot"),
        ]);
        assert_eq!(root.id, "main_container");
        assert_eq!(root.kind(), NodeKind::Container);
        assert_eq!(
            ids(root.children()),
            ["header_fruits", "list_Fruits", "header_vegetables", "list_Vegetables"]
        );
        assert_eq!(ids(root.children()[1].items()), ["row_apple", "row_banana"]);
        assert_eq!(ids(root.children()[3].items()), ["row_carrot"]);
        assert!(validate(&root));
    }

    #[test]
    fn empty_headers_produce_nothing() {
        let root = group(&[
            Entry::header("Empty"),
            Entry::header("Full"),
            Entry::row("One", "x"),
            Entry::header("Trailing"),
        ]);
        assert_eq!(ids(root.children()), ["header_full", "list_Full"]);
    }

    #[test]
    fn rows_before_any_header_are_dropped() {
        let root = group(&[
            Entry::row("Orphan", "x"),
            Entry::header("A"),
            Entry::row("One", "y"),
        ]);
        assert_eq!(ids(root.children()), ["header_a", "list_A"]);
        assert_eq!(ids(root.children()[1].items()), ["row_one"]);
    }

    #[test]
    fn no_entries() {
        let root = group(&[]);
        assert_eq!(root.children().len(), 0);
        assert!(validate(&root));
    }

    #[test]
    fn row_layout() {
        let mut entry = Entry::row("Green Tea", "tea");
        entry.action_url = Some("details/tea".to_string());
        let root = group(&[Entry::header("Drinks"), entry]);

        let header = &root.children()[0];
        assert_eq!(header.text_size, Some(18));
        assert_eq!(header.font_weight.as_deref(), Some("bold"));

        let row = &root.children()[1].items()[0];
        assert_eq!(row.id, "row_green_tea");
        assert_eq!(row.orientation.as_deref(), Some("horizontal"));
        assert_eq!(row.action, Some(Action::navigate("details/tea")));
        assert_eq!(ids(row.children()), ["image_green_tea", "text_green_tea"]);
        assert_eq!(row.children()[0].url.as_deref(), Some("resource:tea"));
        assert_eq!(row.children()[0].width, Some(60));
    }

    #[test]
    fn deserializes_entries() {
        let entries: Vec<Entry> = serde_json::from_str(
            r#"[
                {"id": "1", "title": "A", "type": "HEADER"},
                {"id": "2", "title": "B", "type": "ROW", "image": "b", "actionUrl": "b"},
                {"id": "3", "title": "C", "type": "BANNER"}
            ]"#,
        )
        .unwrap();
        assert_eq!(entries[0].kind, EntryKind::Header);
        assert_eq!(entries[1].action_url.as_deref(), Some("b"));
        assert_eq!(entries[2].kind, EntryKind::Other);
    }
}
