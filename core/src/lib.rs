//! Server-driven UI descriptors.
//!
//! # Conceptual overview
//! A server describes a screen as a tree of loosely typed JSON nodes. This crate turns such trees
//! into something a renderer can trust without ever refusing a payload that is valid JSON.
//!
//! ## Descriptors
//! A [`Descriptor`] is the wide form of one node: every field any component kind might use, all
//! optional, plus the [`NodeKind`] resolved from them. Kinds are resolved from explicit
//! discriminators first, then from well-known ids and id keywords, and finally from the shape of
//! the node (see [`resolve_kind`]). Descriptors are built bottom-up by [`ingest`] and are never
//! mutated afterwards; repairs produce new values.
//!
//! ## Validation
//! [`validate`] walks a whole tree and reports every problem it finds through `tracing`. It never
//! rejects a tree. [`validate_tree`] additionally coerces a root that isn't a container into one,
//! since every renderer expects a container at the top.
//!
//! ## Nodes
//! A [`Node`] is a descriptor whose kind has been fixed: a tagged union where each variant only
//! carries the fields its kind uses, with defaults applied. Renderers dispatch on nodes.
//!
//! ## Grouping
//! Some sources send a flat list of header and row entries instead of a tree. [`group`] folds such
//! a list into a root container of alternating header texts and lists of styled rows.
//!
//! ## Screens
//! A [`Screen`] wraps an optional root descriptor with the chrome around it: a title for the
//! toolbar and toolbar, background and status bar colors.

mod descriptor;
mod error;
mod group;
mod ingest;
pub mod node;
mod screen;
mod validate;

pub use descriptor::{resolve_kind, Action, ActionKind, Descriptor, Inset, NodeKind, Payload};
pub use error::{Error, Result};
pub use group::{group, Entry, EntryKind};
pub use ingest::{ingest, ingest_str};
pub use node::Node;
pub use screen::{CardScreen, Screen};
pub use validate::{coerce_to_container, validate, validate_tree, Validated};
