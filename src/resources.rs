//! Bundled image resources.

use crate::config::ImageConfig;
use std::collections::HashMap;
use tracing::debug;

/// Identifies an image bundled with the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(pub String);

impl From<&str> for ResourceId {
    fn from(name: &str) -> Self {
        ResourceId(name.to_string())
    }
}

/// Maps image keys from descriptors to bundled resources.
pub trait ImageResolver: Send + Sync {
    /// Resolves a key. Unknown keys resolve to some default resource.
    fn resolve(&self, key: &str) -> ResourceId;
}

/// A fixed table of resources with a default for unknown keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceMap {
    entries: HashMap<String, ResourceId>,
    default: ResourceId,
}

impl ResourceMap {
    pub fn new(default: impl Into<ResourceId>) -> ResourceMap {
        ResourceMap {
            entries: HashMap::new(),
            default: default.into(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, resource: impl Into<ResourceId>) {
        self.entries.insert(key.into(), resource.into());
    }

    pub fn with(mut self, key: impl Into<String>, resource: impl Into<ResourceId>) -> Self {
        self.insert(key, resource);
        self
    }
}

impl From<&ImageConfig> for ResourceMap {
    fn from(config: &ImageConfig) -> Self {
        let mut map = ResourceMap::new(config.default_resource.as_str());
        for (key, resource) in &config.resources {
            map.insert(key.as_str(), resource.as_str());
        }
        map
    }
}

impl ImageResolver for ResourceMap {
    fn resolve(&self, key: &str) -> ResourceId {
        match self.entries.get(key) {
            Some(resource) => resource.clone(),
            None => {
                debug!(key, "no bundled image for key, using default");
                self.default.clone()
            }
        }
    }
}

#[test]
fn test_resource_map_default() {
    let map = ResourceMap::new("placeholder").with("tea", "ic_tea");
    assert_eq!(map.resolve("tea"), ResourceId::from("ic_tea"));
    assert_eq!(map.resolve("coffee"), ResourceId::from("placeholder"));
}
