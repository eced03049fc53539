//! Per-model recommended token limits registry.
//!
//! Provides known limits for the supported generation models, with
//! fallback to configurable user overrides loaded from a JSON file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Known per-model limits: (pattern, total capacity, conversation budget,
/// warning level).
///
/// The conversation budget leaves room for the system instruction and the
/// response; the warning level is where callers should surface advisories.
pub const KNOWN_MODEL_LIMITS: &[(&str, u32, u32, u32)] = &[
    ("gemini-2.0-flash-exp", 1_000_000, 30_000, 25_000),
    ("gemini-1.5-flash", 1_000_000, 30_000, 25_000),
    ("gemini-1.5-pro", 2_000_000, 50_000, 40_000),
    // Conservative fallback
    ("default", 30_000, 20_000, 15_000),
];

/// Recommended limits for a model (user-overridable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelLimit {
    /// Model identifier (partial match supported, e.g., "gemini-1.5"
    /// matches "gemini-1.5-flash")
    pub model_pattern: String,
    /// Total context capacity in tokens
    pub total_tokens: u32,
    /// Recommended conversation budget in tokens
    pub conversation_tokens: u32,
    /// Token count at which to start warning the user
    pub warning_tokens: u32,
}

impl ModelLimit {
    /// Create a new model limit.
    pub fn new(
        model_pattern: impl Into<String>,
        total_tokens: u32,
        conversation_tokens: u32,
        warning_tokens: u32,
    ) -> Self {
        Self {
            model_pattern: model_pattern.into(),
            total_tokens,
            conversation_tokens,
            warning_tokens,
        }
    }
}

/// Registry for model limits with built-in defaults and user overrides.
#[derive(Debug, Clone)]
pub struct ModelLimitsRegistry {
    /// User-provided overrides (higher priority than built-in)
    user_limits: HashMap<String, ModelLimit>,
    /// Default path for the user configuration file
    config_path: Option<PathBuf>,
}

impl ModelLimitsRegistry {
    /// Create a new registry with built-in defaults only.
    pub fn new() -> Self {
        Self {
            user_limits: HashMap::new(),
            config_path: None,
        }
    }

    /// Create a registry with a specific config file path.
    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            user_limits: HashMap::new(),
            config_path: Some(path.into()),
        }
    }

    /// Load user overrides from the configuration path.
    ///
    /// Default path: `~/.convo/model_limits.json`. A missing file is not
    /// an error; the built-in table applies.
    pub async fn load_user_config(&mut self) -> std::io::Result<()> {
        let path = self
            .config_path
            .clone()
            .unwrap_or_else(get_default_config_path);

        if !path.exists() {
            return Ok(());
        }

        let content = tokio::fs::read_to_string(&path).await?;
        let limits: Vec<ModelLimit> = serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;

        for limit in limits {
            self.user_limits.insert(limit.model_pattern.clone(), limit);
        }

        tracing::info!(
            "Loaded {} user model limits from {:?}",
            self.user_limits.len(),
            path
        );
        Ok(())
    }

    /// Save current user overrides to the configuration file.
    pub async fn save_user_config(&self) -> std::io::Result<()> {
        let path = self
            .config_path
            .clone()
            .unwrap_or_else(get_default_config_path);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let limits: Vec<&ModelLimit> = self.user_limits.values().collect();
        let content = serde_json::to_string_pretty(&limits)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        tokio::fs::write(&path, content).await?;

        Ok(())
    }

    /// Add a user limit override.
    pub fn add_limit(&mut self, limit: ModelLimit) {
        self.user_limits.insert(limit.model_pattern.clone(), limit);
    }

    /// Get the limit for a model, user overrides taking priority.
    ///
    /// # Matching Strategy
    /// 1. Exact match (highest priority)
    /// 2. Model contains pattern (e.g., "gemini-1.5-flash" contains
    ///    "gemini-1.5")
    /// 3. Pattern contains model
    ///
    /// For partial matches, the longest (most specific) pattern wins.
    pub fn get(&self, model: &str) -> Option<ModelLimit> {
        if let Some(limit) = self.user_limits.get(model) {
            return Some(limit.clone());
        }

        for (pattern, total, conversation, warning) in KNOWN_MODEL_LIMITS {
            if *pattern == model {
                return Some(ModelLimit::new(model, *total, *conversation, *warning));
            }
        }

        let best_user_match = self
            .user_limits
            .iter()
            .filter(|(pattern, _)| model.contains(*pattern) || pattern.contains(model))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, limit)| limit.clone());

        if let Some(limit) = best_user_match {
            return Some(limit);
        }

        KNOWN_MODEL_LIMITS
            .iter()
            .copied()
            .filter(|(pattern, _, _, _)| {
                *pattern != "default" && (model.contains(pattern) || pattern.contains(model))
            })
            .max_by_key(|(pattern, _, _, _)| pattern.len())
            .map(|(pattern, total, conversation, warning)| {
                ModelLimit::new(pattern, total, conversation, warning)
            })
    }

    /// Get the limit for a model with fallback to the default entry.
    pub fn get_or_default(&self, model: &str) -> ModelLimit {
        self.get(model)
            .unwrap_or_else(|| ModelLimit::new("default", 30_000, 20_000, 15_000))
    }

    /// List all user-defined overrides.
    pub fn list_user_limits(&self) -> Vec<&ModelLimit> {
        self.user_limits.values().collect()
    }
}

impl Default for ModelLimitsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Default configuration file path (`~/.convo/model_limits.json`).
pub fn get_default_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".convo").join("model_limits.json")
}
