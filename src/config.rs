//! Scoring configuration.
//!
//! A config file picks the engine, overrides weights and sets the pass
//! threshold for the CLI. Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AiReadyError, Result};
use crate::recommendations::{DEFAULT_MAX_RECOMMENDATIONS, DEFAULT_MAX_STRENGTHS};
use crate::scoring::{DimensionWeights, Engine, EngineKind, PillarWeights};

/// Config file names searched for, in order.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["aiready.yaml", ".aiready.yaml"];

/// Top-level scoring configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub version: String,
    pub name: String,
    pub engine: EngineKind,
    /// Legacy pillar weights.
    pub weights: PillarWeights,
    /// v2 dimension weights.
    pub dimension_weights: DimensionWeights,
    /// Pages scoring below this fail.
    pub min_score: i32,
    pub max_recommendations: usize,
    pub max_strengths: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            name: String::new(),
            engine: EngineKind::default(),
            weights: PillarWeights::default(),
            dimension_weights: DimensionWeights::default(),
            min_score: 0,
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
            max_strengths: DEFAULT_MAX_STRENGTHS,
        }
    }
}

impl ScoringConfig {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        // An empty file is a valid, all-default config.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// An engine configured with this config's weights.
    pub fn engine(&self) -> Engine<'static> {
        Engine::new()
            .weights(self.weights)
            .dimension_weights(self.dimension_weights)
    }

    pub fn passes(&self, overall_score: i32) -> bool {
        overall_score >= self.min_score
    }
}

/// Look for a config file in `dir`.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Validate a config for correctness.
pub fn validate(config: &ScoringConfig) -> Result<()> {
    let pillar = [
        ("weights.technical", config.weights.technical),
        ("weights.content", config.weights.content),
        ("weights.ai_readiness", config.weights.ai_readiness),
        ("weights.performance", config.weights.performance),
    ];
    let dims = &config.dimension_weights;
    let dimension = [
        ("dimension_weights.llms_txt", dims.llms_txt),
        ("dimension_weights.robots_crawlability", dims.robots_crawlability),
        ("dimension_weights.sitemap", dims.sitemap),
        ("dimension_weights.schema_markup", dims.schema_markup),
        ("dimension_weights.meta_tags", dims.meta_tags),
        ("dimension_weights.bot_access", dims.bot_access),
        ("dimension_weights.content_citeability", dims.content_citeability),
    ];
    for (name, value) in pillar.iter().chain(dimension.iter()) {
        if !value.is_finite() || *value < 0.0 {
            return Err(AiReadyError::InvalidConfig(format!(
                "{} must be a non-negative number, got {}",
                name, value
            )));
        }
    }

    if !(0..=100).contains(&config.min_score) {
        return Err(AiReadyError::InvalidConfig(format!(
            "min_score must be between 0 and 100, got {}",
            config.min_score
        )));
    }
    if config.max_recommendations == 0 {
        return Err(AiReadyError::InvalidConfig(
            "max_recommendations must be greater than 0".to_string(),
        ));
    }
    if config.max_strengths == 0 {
        return Err(AiReadyError::InvalidConfig(
            "max_strengths must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
version: "1"
name: "Docs site"
engine: legacy
weights:
  content: 0.5
min_score: 70
"#;
        let config = ScoringConfig::parse(yaml).unwrap();
        assert_eq!(config.name, "Docs site");
        assert_eq!(config.engine, EngineKind::Legacy);
        assert_eq!(config.weights.content, 0.5);
        assert_eq!(config.weights.technical, 0.25);
        assert_eq!(config.min_score, 70);
        assert_eq!(config.max_recommendations, 10);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(ScoringConfig::parse("").unwrap(), ScoringConfig::default());
        assert_eq!(ScoringConfig::default().engine, EngineKind::V2);
    }

    #[test]
    fn test_unknown_engine_rejected() {
        let err = ScoringConfig::parse("engine: v3").unwrap_err();
        assert!(matches!(err, AiReadyError::Yaml(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ScoringConfig::default();
        config.weights.performance = -0.1;
        assert!(matches!(validate(&config), Err(AiReadyError::InvalidConfig(_))));

        let mut config = ScoringConfig::default();
        config.min_score = 101;
        assert!(validate(&config).is_err());

        let mut config = ScoringConfig::default();
        config.max_recommendations = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_discover_and_parse_file() {
        let temp = TempDir::new().unwrap();
        assert!(discover(temp.path()).is_none());

        let path = temp.path().join(".aiready.yaml");
        std::fs::write(&path, "min_score: 80\n").unwrap();
        let found = discover(temp.path()).unwrap();
        assert_eq!(found, path);
        assert_eq!(ScoringConfig::parse_file(&found).unwrap().min_score, 80);

        std::fs::write(temp.path().join("aiready.yaml"), "min_score: 60\n").unwrap();
        assert_eq!(discover(temp.path()).unwrap(), temp.path().join("aiready.yaml"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScoringConfig::parse_file("/nonexistent/aiready.yaml").unwrap_err();
        assert!(matches!(err, AiReadyError::Io(_)));
    }

    #[test]
    fn test_passes() {
        let config = ScoringConfig {
            min_score: 70,
            ..Default::default()
        };
        assert!(config.passes(70));
        assert!(!config.passes(69));
    }
}
