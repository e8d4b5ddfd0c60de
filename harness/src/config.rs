//! Run configuration: which strategy to run and with which overrides.
//!
//! Every field except `strategy` is an optional override; `None` falls back to
//! the engine defaults (`prune_expanded = true`, unbounded depth) and to a
//! thread-local random generator for depth-first child ordering.

use waypoint_search::{SearchPolicy, Strategy, UNBOUNDED_DEPTH};

use crate::error::HarnessError;

/// Strategy used when none is configured.
pub const DEFAULT_STRATEGY: Strategy = Strategy::BreadthFirst;

/// Configuration for one harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Search strategy to dispatch to.
    pub strategy: Strategy,
    /// Expanded-set pruning. `None` uses the engine default. Ignored by
    /// heuristic search.
    pub prune_expanded: Option<bool>,
    /// Depth limit. `None` means unbounded.
    pub depth_limit: Option<u32>,
    /// Seed for depth-first child ordering. `None` draws from the
    /// thread-local generator, so runs are not reproducible.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STRATEGY)
    }
}

impl RunConfig {
    /// A config for `strategy` with every override unset.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            prune_expanded: None,
            depth_limit: None,
            seed: None,
        }
    }

    /// Set the depth limit.
    #[must_use]
    pub fn with_depth_limit(self, depth_limit: u32) -> Self {
        Self {
            depth_limit: Some(depth_limit),
            ..self
        }
    }

    /// Set the pruning flag.
    #[must_use]
    pub fn with_pruning(self, prune_expanded: bool) -> Self {
        Self {
            prune_expanded: Some(prune_expanded),
            ..self
        }
    }

    /// Set the depth-first seed.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Resolve overrides against engine defaults.
    #[must_use]
    pub fn search_policy(&self) -> SearchPolicy {
        let defaults = SearchPolicy::default();
        SearchPolicy::new(
            self.prune_expanded.unwrap_or(defaults.prune_expanded),
            self.depth_limit.unwrap_or(UNBOUNDED_DEPTH),
        )
    }

    /// Parse a config from a JSON object.
    ///
    /// Recognised keys: `strategy` (`"depth_first"`, `"breadth_first"`,
    /// `"heuristic"`), `prune_expanded` (bool), `depth_limit` (integer),
    /// `seed` (unsigned integer). Missing keys keep their defaults; unknown
    /// keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for a non-object value, an
    /// unknown key, a wrongly typed value, an unknown strategy, or a depth
    /// limit that is negative or does not fit in `u32`. A depth limit of 0
    /// parses; the engine rejects it when the run starts.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, HarnessError> {
        let obj = value
            .as_object()
            .ok_or_else(|| HarnessError::invalid_config("run config must be a JSON object"))?;

        let mut config = Self::default();
        for (key, field) in obj {
            match key.as_str() {
                "strategy" => {
                    let name = field.as_str().ok_or_else(|| {
                        HarnessError::invalid_config("strategy must be a string")
                    })?;
                    config.strategy = Strategy::parse(name).ok_or_else(|| {
                        HarnessError::invalid_config(format!("unknown strategy: {name}"))
                    })?;
                }
                "prune_expanded" => {
                    config.prune_expanded = Some(field.as_bool().ok_or_else(|| {
                        HarnessError::invalid_config("prune_expanded must be a boolean")
                    })?);
                }
                "depth_limit" => {
                    config.depth_limit = Some(parse_depth_limit(field)?);
                }
                "seed" => {
                    config.seed = Some(field.as_u64().ok_or_else(|| {
                        HarnessError::invalid_config("seed must be an unsigned integer")
                    })?);
                }
                other => {
                    return Err(HarnessError::invalid_config(format!(
                        "unknown run config key: {other}"
                    )));
                }
            }
        }
        Ok(config)
    }

    /// JSON echo of this config, as recorded in run reports.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let policy = self.search_policy();
        serde_json::json!({
            "depth_limit": policy.depth_limit,
            "prune_expanded": policy.prune_expanded,
            "seed": self.seed,
            "strategy": self.strategy.as_str(),
        })
    }
}

fn parse_depth_limit(field: &serde_json::Value) -> Result<u32, HarnessError> {
    if let Some(n) = field.as_i64() {
        if n < 0 {
            return Err(HarnessError::invalid_config(format!(
                "a depth limit of {n} is too low, expected at least 1"
            )));
        }
    }
    let n = field
        .as_u64()
        .ok_or_else(|| HarnessError::invalid_config("depth_limit must be an integer"))?;
    u32::try_from(n)
        .map_err(|_| HarnessError::invalid_config(format!("depth_limit {n} exceeds u32::MAX")))
}
