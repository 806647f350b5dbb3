// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name-to-adapter registry with construction deferred to first lookup.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use sparkle_config::SparkleConfig;
use sparkle_core::SparkleError;
use sparkle_exec::Invoker;
use sparkle_skill::{Tool, ToolRegistry};
use tracing::{info, warn};

use crate::adapter::Adapter;
use crate::catalog::CATALOG;
use crate::spec::AdapterSpec;

struct Entry {
    spec: &'static AdapterSpec,
    adapter: OnceLock<Arc<Adapter>>,
}

/// Resolves adapter names to adapters, building each one at most once.
pub struct AdapterRegistry {
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
    disabled: HashSet<String>,
    invoker: Invoker,
    working_dir: Option<Arc<str>>,
}

impl AdapterRegistry {
    /// Registry over the built-in catalog with the default invocation policy.
    pub fn new() -> Self {
        Self::with_specs(CATALOG.iter().copied(), Invoker::new())
    }

    /// Registry over the built-in catalog, applying `[exec]` and `[adapters]`.
    pub fn from_config(config: &SparkleConfig) -> Self {
        let invoker = match config.exec.timeout_secs {
            Some(secs) => Invoker::with_timeout(Duration::from_secs(secs)),
            None => Invoker::new(),
        };
        let mut registry = Self::with_specs(CATALOG.iter().copied(), invoker);
        for name in &config.adapters.disabled {
            if !registry.index.contains_key(name.as_str()) {
                warn!(adapter = %name, "disabled adapter is not in the catalog");
            }
        }
        registry.disabled = config.adapters.disabled.iter().cloned().collect();
        registry.working_dir = config.exec.working_dir.as_deref().map(Arc::from);
        registry
    }

    /// Registry over an explicit list of adapter tables, in order.
    pub fn with_specs(
        specs: impl IntoIterator<Item = &'static AdapterSpec>,
        invoker: Invoker,
    ) -> Self {
        let entries: Vec<Entry> = specs
            .into_iter()
            .map(|spec| Entry {
                spec,
                adapter: OnceLock::new(),
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.spec.key, i))
            .collect();

        Self {
            entries,
            index,
            disabled: HashSet::new(),
            invoker,
            working_dir: None,
        }
    }

    /// Resolve `name` to its adapter, constructing it on first use.
    pub fn get_adapter(&self, name: &str) -> Result<Arc<Adapter>, SparkleError> {
        let entry = self
            .index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| SparkleError::UnknownAdapter {
                name: name.to_string(),
                available: self.list_adapters().iter().map(|k| k.to_string()).collect(),
            })?;

        if self.disabled.contains(name) {
            return Err(SparkleError::AdapterDisabled {
                name: name.to_string(),
            });
        }

        let adapter = entry.adapter.get_or_init(|| {
            info!(adapter = entry.spec.key, binary = entry.spec.binary, "loading adapter");
            Arc::new(Adapter::with_working_dir(
                entry.spec,
                self.invoker,
                self.working_dir.clone(),
            ))
        });
        Ok(Arc::clone(adapter))
    }

    /// Every registered adapter name in declaration order, disabled ones included.
    pub fn list_adapters(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.spec.key).collect()
    }

    pub fn adapter_count(&self) -> usize {
        self.entries.len()
    }

    /// The static table for `name`, without constructing the adapter.
    pub fn spec(&self, name: &str) -> Option<&'static AdapterSpec> {
        self.index.get(name).map(|&i| self.entries[i].spec)
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.contains(name)
    }

    /// Whether `name`'s adapter has been constructed yet.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.index
            .get(name)
            .is_some_and(|&i| self.entries[i].adapter.get().is_some())
    }

    /// Find the tool called `tool_name`, loading only the adapter that owns it.
    pub fn find_tool(&self, tool_name: &str) -> Result<Arc<dyn Tool>, SparkleError> {
        let owner = self
            .entries
            .iter()
            .find(|entry| {
                entry.spec.version.name == tool_name
                    || entry.spec.tools.iter().any(|tool| tool.name == tool_name)
            })
            .ok_or_else(|| SparkleError::UnknownTool(tool_name.to_string()))?;

        self.get_adapter(owner.spec.key)?
            .tool(tool_name)
            .ok_or_else(|| SparkleError::UnknownTool(tool_name.to_string()))
    }

    /// A tool registry holding every tool of every enabled adapter.
    pub fn tool_registry(&self) -> Result<ToolRegistry, SparkleError> {
        let mut registry = ToolRegistry::new();
        for key in self.list_adapters() {
            if self.is_disabled(key) {
                continue;
            }
            self.get_adapter(key)?.register_tools(&mut registry);
        }
        Ok(registry)
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn lists_all_adapters_in_order() {
        let registry = AdapterRegistry::new();
        let names = registry.list_adapters();
        assert_eq!(registry.adapter_count(), 28);
        assert_eq!(names.len(), 28);
        assert_eq!(names[0], "babashka");
        assert_eq!(names[6], "nimblePublisher");
        assert_eq!(names[23], "zola");
        assert_eq!(names[27], "wub");
        assert_eq!(registry.spec("hakyll").map(|s| s.binary), Some("site"));
        assert!(!registry.is_loaded("hakyll"));
    }

    #[test]
    fn unknown_adapter_lists_every_name() {
        let registry = AdapterRegistry::new();
        let err = registry.get_adapter("jekyll").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("unknown adapter: jekyll. Available: babashka, cryogen"));
        assert!(message.ends_with("publish, wub"));
        match err {
            SparkleError::UnknownAdapter { available, .. } => assert_eq!(available.len(), 28),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn adapters_are_built_lazily_and_cached() {
        let registry = AdapterRegistry::new();
        assert!(!registry.is_loaded("zola"));

        let first = registry.get_adapter("zola").unwrap();
        assert!(registry.is_loaded("zola"));
        assert!(!registry.is_loaded("mdbook"));

        let second = registry.get_adapter("zola").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name(), "Zola");
        assert_eq!(first.tools().len(), 5);
    }

    #[test]
    fn disabled_adapter_is_refused_but_listed() {
        let mut config = SparkleConfig::default();
        config.adapters.disabled = vec!["wub".to_string()];
        let registry = AdapterRegistry::from_config(&config);

        assert!(matches!(
            registry.get_adapter("wub"),
            Err(SparkleError::AdapterDisabled { .. })
        ));
        assert!(registry.list_adapters().contains(&"wub"));
        assert!(registry.get_adapter("zola").is_ok());
    }

    #[test]
    fn find_tool_loads_only_its_owner() {
        let registry = AdapterRegistry::new();
        let tool = registry.find_tool("mdbook_build").unwrap();
        assert_eq!(tool.name(), "mdbook_build");
        assert!(registry.is_loaded("mdbook"));
        assert!(!registry.is_loaded("zola"));

        assert!(registry.find_tool("zola_version").is_ok());
        assert!(matches!(
            registry.find_tool("hugo_build"),
            Err(SparkleError::UnknownTool(_))
        ));
    }

    #[test]
    fn tool_registry_skips_disabled_adapters() {
        let mut config = SparkleConfig::default();
        config.adapters.disabled = vec!["zola".to_string()];
        let registry = AdapterRegistry::from_config(&config);

        let tools = registry.tool_registry().unwrap();
        assert!(tools.get("zola_build").is_none());
        assert!(tools.get("mdbook_build").is_some());
        assert!(tools.get("wub_version").is_some());
    }

    #[test]
    fn concurrent_lookups_share_one_adapter() {
        let registry = Arc::new(AdapterRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.get_adapter("cobalt").unwrap())
            })
            .collect();
        let adapters: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(adapters.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    #[traced_test]
    fn unknown_disabled_name_is_warned() {
        let mut config = SparkleConfig::default();
        config.adapters.disabled = vec!["zolla".to_string(), "wub".to_string()];
        let registry = AdapterRegistry::from_config(&config);

        assert!(logs_contain("disabled adapter is not in the catalog"));
        assert!(logs_contain("zolla"));
        assert!(!logs_contain("adapter=wub"));
        assert!(registry.get_adapter("zola").is_ok());
    }

    #[test]
    #[traced_test]
    fn first_lookup_is_logged() {
        let registry = AdapterRegistry::new();
        registry.get_adapter("frog").unwrap();
        assert!(logs_contain("loading adapter"));
        assert!(logs_contain("raco"));
    }
}
