use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Smallest candidate batch a caller may request
    #[serde(default = "default_min_candidates")]
    pub min_candidates: usize,
    /// Candidates shown per round
    #[serde(default = "default_candidates")]
    pub candidates: usize,
    /// Prefix of the exploration ranking that candidates are drawn from
    #[serde(default = "default_exploration_window")]
    pub exploration_window: usize,
    /// Fixed sampling seed; a fresh random seed per run when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Top-k used when reporting the discrimination level
    #[serde(default = "default_discrimination_top")]
    pub discrimination_top: usize,
    /// Minimum score for listed best matches; every entity when absent
    #[serde(default)]
    pub min_score: Option<i64>,
}

fn default_min_candidates() -> usize {
    2
}
fn default_candidates() -> usize {
    2
}
fn default_exploration_window() -> usize {
    10
}
fn default_discrimination_top() -> usize {
    3
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            min_candidates: default_min_candidates(),
            candidates: default_candidates(),
            exploration_window: default_exploration_window(),
            seed: None,
            discrimination_top: default_discrimination_top(),
            min_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_config_default() {
        let cfg = TrainingConfig::default();
        assert_eq!(cfg.min_candidates, 2);
        assert_eq!(cfg.candidates, 2);
        assert_eq!(cfg.exploration_window, 10);
        assert!(cfg.seed.is_none());
        assert_eq!(cfg.discrimination_top, 3);
        assert!(cfg.min_score.is_none());
    }

    #[test]
    fn training_config_toml_roundtrip() {
        let cfg = TrainingConfig {
            seed: Some(42),
            min_score: Some(-3),
            ..TrainingConfig::default()
        };
        let serialized = toml::to_string(&cfg).expect("serialize");
        let deserialized: TrainingConfig = toml::from_str(&serialized).expect("deserialize");
        assert_eq!(deserialized, cfg);
    }

    #[test]
    fn training_config_partial_toml_fills_defaults() {
        let cfg: TrainingConfig = toml::from_str("exploration_window = 4").expect("deserialize");
        assert_eq!(cfg.exploration_window, 4);
        assert_eq!(cfg.min_candidates, 2);
    }
}
