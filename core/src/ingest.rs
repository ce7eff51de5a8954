//! Tolerant ingestion of descriptor trees from loosely structured JSON.
//!
//! Ingestion never fails on a well-formed JSON value. Fields of the wrong type are treated as
//! absent, entries that aren’t objects become unknown nodes, and nodes without an id get a
//! synthesized one.
//!
//! Some sources wrap a node’s fields in a nested `"component"` object (a *carrier*). The outer
//! object’s discriminators take precedence over the carrier’s, and only the fields relevant to
//! the resolved kind are taken from the carrier.

use crate::descriptor::{Action, ActionKind, Descriptor, Inset, NodeKind, Payload};
use crate::error::Result;
use serde_json::{Map, Value};
use tracing::{debug, warn};

type Object = Map<String, Value>;

const CARRIER_KEY: &str = "component";

/// Builds a descriptor tree from a JSON value.
pub fn ingest(value: &Value) -> Descriptor {
    match value {
        Value::Object(object) => ingest_object(object),
        other => {
            warn!(
                found = json_type(other),
                "descriptor is not an object, substituting an unknown node"
            );
            Descriptor::new(Descriptor::synthesize_id()).resolved()
        }
    }
}

/// Parses JSON text and ingests it. Only malformed JSON is an error.
pub fn ingest_str(json: &str) -> Result<Descriptor> {
    let value: Value = serde_json::from_str(json)?;
    Ok(ingest(&value))
}

fn ingest_object(object: &Object) -> Descriptor {
    if let Some(carrier) = object.get(CARRIER_KEY).and_then(Value::as_object) {
        return ingest_carrier(object, carrier);
    }

    let node = Descriptor {
        id: string(object, "id").unwrap_or_else(Descriptor::synthesize_id),
        explicit_kind: string(object, "componentType"),
        legacy_kind: string(object, "type"),
        ..fields(object)
    }
    .resolved();

    debug!(id = %node.id, kind = %node.kind(), "ingested descriptor");
    node
}

fn ingest_carrier(outer: &Object, carrier: &Object) -> Descriptor {
    let id = string(carrier, "id")
        .or_else(|| string(outer, "id"))
        .unwrap_or_else(Descriptor::synthesize_id);
    let explicit_kind = string(outer, "componentType").or_else(|| string(carrier, "componentType"));
    let legacy_kind = string(outer, "type").or_else(|| string(carrier, "type"));

    let full = Descriptor {
        id,
        explicit_kind,
        legacy_kind,
        ..fields(carrier)
    }
    .resolved();

    let node = match full.kind() {
        NodeKind::Container => Descriptor {
            id: full.id,
            explicit_kind: full.explicit_kind,
            legacy_kind: full.legacy_kind,
            kind: full.kind,
            orientation: full.orientation,
            background: full.background.or(full.background_color),
            children: full.children,
            action: full.action,
            corner_radius: full.corner_radius,
            padding: full.padding,
            margin: full.margin,
            ..Descriptor::default()
        },
        NodeKind::List => Descriptor {
            id: full.id,
            explicit_kind: full.explicit_kind,
            legacy_kind: full.legacy_kind,
            kind: full.kind,
            orientation: full.orientation,
            items: full.items,
            divider_enabled: full.divider_enabled,
            divider_color: full.divider_color,
            padding: full.padding,
            margin: full.margin,
            ..Descriptor::default()
        },
        kind => {
            warn!(id = %full.id, %kind, "carrier of this kind keeps only its id and kind");
            Descriptor {
                id: full.id,
                explicit_kind: full.explicit_kind,
                legacy_kind: full.legacy_kind,
                kind,
                ..Descriptor::default()
            }
        }
    };

    debug!(id = %node.id, kind = %node.kind(), "ingested carrier descriptor");
    node
}

/// Extracts every non-identifying field of a node.
fn fields(object: &Object) -> Descriptor {
    Descriptor {
        orientation: string(object, "orientation"),
        background: string(object, "background"),
        children: nodes(object, "children").or_else(|| nodes(object, "components")),
        text: string(object, "text"),
        text_size: int(object, "textSize"),
        text_color: string(object, "textColor"),
        font_weight: string(object, "fontWeight"),
        text_align: string(object, "textAlign"),
        action: action(object),
        background_color: string(object, "backgroundColor"),
        corner_radius: int(object, "cornerRadius"),
        enabled: boolean(object, "enabled"),
        url: string(object, "url"),
        content_scale: string(object, "contentScale"),
        width: int(object, "width"),
        height: int(object, "height"),
        hint: string(object, "hint"),
        initial_value: string(object, "initialValue"),
        input_kind: string(object, "inputType"),
        max_length: int(object, "maxLength"),
        items: nodes(object, "items"),
        divider_enabled: boolean(object, "dividerEnabled").or_else(|| boolean(object, "divider")),
        divider_color: string(object, "dividerColor"),
        padding: inset(object, "padding"),
        margin: inset(object, "margin"),
        ..Descriptor::default()
    }
}

/// Reads a string field. Numbers and booleans are coerced to their text form.
fn string(object: &Object, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        Value::Null => None,
        other => {
            debug!(key, found = json_type(other), "ignoring non-scalar string field");
            None
        }
    }
}

/// Reads an integer field. Only JSON numbers are accepted; fractions are truncated.
fn int(object: &Object, key: &str) -> Option<i32> {
    let value = match object.get(key)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value.trunc() as i64)),
        other => {
            debug!(key, found = json_type(other), "ignoring non-numeric field");
            None
        }
    }?;
    i32::try_from(value).ok()
}

/// Reads a boolean field. Only JSON booleans are accepted.
fn boolean(object: &Object, key: &str) -> Option<bool> {
    object.get(key)?.as_bool()
}

fn inset(object: &Object, key: &str) -> Option<Inset> {
    let inset = object.get(key)?.as_object()?;
    let side = |name: &str, alias: &str| int(inset, name).or_else(|| int(inset, alias)).unwrap_or(0);
    Some(Inset {
        left: side("left", "start"),
        top: int(inset, "top").unwrap_or(0),
        right: side("right", "end"),
        bottom: int(inset, "bottom").unwrap_or(0),
    })
}

fn action(object: &Object) -> Option<Action> {
    let action = object.get("action")?.as_object()?;
    Some(Action {
        kind: string(action, "type")
            .map(|kind| ActionKind::parse(&kind))
            .unwrap_or(ActionKind::None),
        target: string(action, "url"),
        payload: action
            .get("payload")
            .and_then(Value::as_object)
            .map(payload),
    })
}

fn payload(object: &Object) -> Payload {
    object
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(value) => value.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}

fn nodes(object: &Object, key: &str) -> Option<Vec<Descriptor>> {
    let entries = object.get(key)?.as_array()?;
    Some(entries.iter().map(ingest).collect())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
