//! The plugin registry.
//!
//! A fixed mapping from type tag to strategy object, populated once at
//! process start and read-only afterwards. Compilation fails for any tag
//! that does not resolve here.

use crate::plugins::{
    ArrayPlugin, BooleanPlugin, DatePlugin, NumberPlugin, ObjectPlugin, StringPlugin,
};
use shapecheck_core::{TypePlugin, tags};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Maps type tags to their validator plugins. Closed set; no mutation API.
pub struct PluginRegistry {
    plugins: HashMap<&'static str, Box<dyn TypePlugin>>,
}

impl PluginRegistry {
    /// Builds the registry of built-in plugins.
    fn builtin() -> Self {
        let mut plugins: HashMap<&'static str, Box<dyn TypePlugin>> = HashMap::new();
        plugins.insert(tags::STRING, Box::new(StringPlugin));
        plugins.insert(tags::NUMBER, Box::new(NumberPlugin));
        plugins.insert(tags::BOOLEAN, Box::new(BooleanPlugin));
        plugins.insert(tags::DATE, Box::new(DatePlugin));
        plugins.insert(tags::OBJECT, Box::new(ObjectPlugin));
        plugins.insert(tags::ARRAY, Box::new(ArrayPlugin));
        Self { plugins }
    }

    /// Resolves a type tag to its plugin.
    pub fn get(&self, type_tag: &str) -> Option<&dyn TypePlugin> {
        self.plugins.get(type_tag).map(|plugin| plugin.as_ref())
    }

    /// Returns true if the tag resolves to a registered plugin.
    pub fn contains(&self, type_tag: &str) -> bool {
        self.plugins.contains_key(type_tag)
    }

    /// Returns the registered tags, sorted.
    pub fn type_tags(&self) -> Vec<&'static str> {
        let mut known: Vec<&'static str> = self.plugins.keys().copied().collect();
        known.sort_unstable();
        known
    }
}

/// Returns the process-wide registry instance.
pub fn registry() -> &'static PluginRegistry {
    static REGISTRY: LazyLock<PluginRegistry> = LazyLock::new(PluginRegistry::builtin);
    &REGISTRY
}
