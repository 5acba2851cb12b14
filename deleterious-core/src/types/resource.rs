//! Resource description, resolved once when a resource is wired up

use serde::{Deserialize, Serialize};

/// A deletable resource kind
///
/// Holds the model name the messages and route names are derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    model_name: String,
    url_path: String,
}

impl ResourceDescriptor {
    /// Describe a resource by its model name.
    ///
    /// The name is lower-cased, the way an ORM reports a model name
    /// (`"Widget"` and `"widget"` describe the same resource).
    #[must_use]
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.trim().to_lowercase(),
            url_path: String::new(),
        }
    }

    /// Override the path segment appended to the collection root (default: none).
    #[must_use]
    pub fn with_url_path(mut self, url_path: &str) -> Self {
        self.url_path = url_path.trim_matches('/').to_string();
        self
    }

    /// Lower-cased model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Path segment under the collection root, empty for the root itself
    pub fn url_path(&self) -> &str {
        &self.url_path
    }

    /// Human label used in messages: first letter upper case, the rest lower case.
    #[must_use]
    pub fn label(&self) -> String {
        let mut chars = self.model_name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Route name for reverse lookups
    #[must_use]
    pub fn url_name(&self) -> String {
        format!("delete_{}", self.model_name)
    }
}
