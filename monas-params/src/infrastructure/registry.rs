use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::port::TypePlugin;

use super::plugins::{
    AnyPlugin, BooleanPlugin, CidAndPathPlugin, CidPlugin, IpfsPathPlugin, JsonPlugin,
    MultiaddrPlugin, MultibaseNamePlugin, NumberPlugin, StringPlugin, TimeoutPlugin,
};

static BUILTIN: Lazy<Arc<PluginRegistry>> = Lazy::new(|| Arc::new(PluginRegistry::with_builtin()));

/// Parameter type name to plugin mapping.
///
/// Populated once at startup through `&mut self`; after it is wrapped in an
/// `Arc` and shared it can only be read.
#[derive(Clone, Default)]
pub struct PluginRegistry(HashMap<String, Arc<dyn TypePlugin>>);

impl PluginRegistry {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Registry holding every built-in type.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();

        registry.register("string", StringPlugin);
        registry.register("number", NumberPlugin);
        registry.register("boolean", BooleanPlugin);
        registry.register("any", AnyPlugin);

        registry.register("cid", CidPlugin);
        registry.register("ipfsPath", IpfsPathPlugin);
        registry.register("multiaddr", MultiaddrPlugin);
        registry.register("timeout", TimeoutPlugin);
        registry.register("cidAndPath", CidAndPathPlugin);
        registry.register("cidBase", MultibaseNamePlugin);
        registry.register("json", JsonPlugin);

        registry
    }

    /// Process-wide built-in registry, created on first use.
    pub fn builtin() -> Arc<PluginRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Register `plugin` under `name`, replacing any earlier registration.
    pub fn register(&mut self, name: impl Into<String>, plugin: impl TypePlugin + 'static) {
        let name = name.into();
        tracing::debug!("Registering parameter type {}", name);
        self.0.insert(name, Arc::new(plugin));
    }

    pub fn resolve(&self, name: &str) -> Option<Arc<dyn TypePlugin>> {
        self.0.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PluginRegistry").field(&self.names()).finish()
    }
}
