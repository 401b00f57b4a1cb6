use super::Config;
use crate::error::ConfigError;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.training;
        if t.min_candidates == 0 {
            return Err(ConfigError::Validation(
                "training.min_candidates must be at least 1".into(),
            ));
        }
        if t.candidates < t.min_candidates {
            return Err(ConfigError::Validation(format!(
                "training.candidates ({}) is below training.min_candidates ({})",
                t.candidates, t.min_candidates
            )));
        }
        if t.exploration_window == 0 {
            return Err(ConfigError::Validation(
                "training.exploration_window must be at least 1".into(),
            ));
        }
        if t.discrimination_top == 0 {
            return Err(ConfigError::Validation(
                "training.discrimination_top must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn candidates_below_minimum_rejected() {
        let mut config = Config::default();
        config.training.min_candidates = 3;
        config.training.candidates = 2;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_candidates"));
    }

    #[test]
    fn zero_min_candidates_rejected() {
        let mut config = Config::default();
        config.training.min_candidates = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_discrimination_top_rejected() {
        let mut config = Config::default();
        config.training.discrimination_top = 0;
        assert!(config.validate().is_err());
    }
}
