// registry.rs - Statistic registry and factory

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::stats::gapstat::GapStatistic;
use crate::stats::jensen::JensenShannonStatistic;
use crate::stats::kabat::KabatStatistic;
use crate::stats::traits::Statistic;
use crate::stats::trident::TridentStatistic;
use crate::stats::wentropy::WeightedEntropyStatistic;

type StatisticFactory = Box<dyn Fn() -> Box<dyn Statistic>>;

/// Registry mapping statistic names to factories.
///
/// `new` registers the built-in statistics; downstream code can add its
/// own with `register`. Names are registered once at startup. The registry
/// is an explicit value owned by the caller and passed to whatever selects
/// statistics by name.
pub struct StatisticRegistry {
    factories: HashMap<String, StatisticFactory>,
}

impl StatisticRegistry {
    /// Create a registry with all built-in statistics registered.
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register("wentropy", || Box::new(WeightedEntropyStatistic::new()));
        registry.register("trident", || Box::new(TridentStatistic::new()));
        registry.register("kabat", || Box::new(KabatStatistic::new()));
        registry.register("jensen", || Box::new(JensenShannonStatistic::new()));
        registry.register("gap", || Box::new(GapStatistic::new()));
        registry
    }

    /// Register a statistic factory under a name.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Statistic> + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Instantiate the statistic registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Statistic>> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(Error::UnknownStatistic(name.to_string())),
        }
    }

    /// Whether a statistic is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// (name, description) pairs for the listing output, sorted by name.
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .factories
            .iter()
            .map(|(name, factory)| (name.clone(), factory().description().to_string()))
            .collect();
        entries.sort();
        entries
    }
}

impl Default for StatisticRegistry {
    fn default() -> Self {
        Self::new()
    }
}
