//! Item descriptors: the small JSON documents that point an item at its model.

use serde::{Deserialize, Serialize};

/// Model type written into every descriptor.
pub const MODEL_TYPE: &str = "minecraft:model";

/// An item definition document.
///
/// ```json
/// {
///   "model": {
///     "type": "minecraft:model",
///     "model": "examplemod:item/example_item"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub model: ModelDescriptor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub model: String,
}

impl ItemDescriptor {
    pub fn new(model_reference: impl Into<String>) -> Self {
        Self {
            model: ModelDescriptor {
                kind: MODEL_TYPE.to_string(),
                model: model_reference.into(),
            },
        }
    }

    pub fn model_reference(&self) -> &str {
        &self.model.model
    }

    /// Serializes to JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds descriptors for one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorEmitter {
    namespace: String,
}

impl DescriptorEmitter {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the descriptor pointing at `<namespace>:item/<name>`.
    pub fn describe(&self, name: &str) -> ItemDescriptor {
        ItemDescriptor::new(format!("{}:item/{name}", self.namespace))
    }

    /// Like [`describe`](Self::describe), but `model` replaces the reference when set.
    pub fn describe_with(&self, name: &str, model: Option<&str>) -> ItemDescriptor {
        match model {
            Some(model) => ItemDescriptor::new(model),
            None => self.describe(name),
        }
    }
}
