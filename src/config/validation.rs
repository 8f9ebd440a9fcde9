//! Configuration semantic validation.
//!
//! Runs after parsing: range checks that TOML types alone cannot express.

use crate::config::Config;
use crate::{ActivityStatsError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `goal.daily_minutes` or `history.max_age_days` is zero,
/// or `history.path` is blank.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_history_section(config)?;
    validate_goal_section(config)?;
    Ok(())
}

fn validate_history_section(config: &Config) -> Result<()> {
    if let Some(path) = &config.history.path
        && path.trim().is_empty()
    {
        return Err(ActivityStatsError::Config(
            "history.path cannot be empty".to_string(),
        ));
    }

    if config.history.max_age_days == Some(0) {
        return Err(ActivityStatsError::Config(
            "history.max_age_days must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_goal_section(config: &Config) -> Result<()> {
    if config.goal.daily_minutes == Some(0) {
        return Err(ActivityStatsError::Config(
            "goal.daily_minutes must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config_semantics(&Config::default()).is_ok());
    }

    #[test]
    fn zero_daily_goal_is_rejected() {
        let mut config = Config::default();
        config.goal.daily_minutes = Some(0);
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.to_string().contains("goal.daily_minutes"));
    }

    #[test]
    fn zero_max_age_is_rejected() {
        let mut config = Config::default();
        config.history.max_age_days = Some(0);
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.to_string().contains("history.max_age_days"));
    }

    #[test]
    fn blank_history_path_is_rejected() {
        let mut config = Config::default();
        config.history.path = Some("  ".to_string());
        let err = validate_config_semantics(&config).unwrap_err();
        assert!(err.to_string().contains("history.path"));
    }

    #[test]
    fn positive_values_are_valid() {
        let mut config = Config::default();
        config.goal.daily_minutes = Some(45);
        config.history.max_age_days = Some(365);
        config.history.path = Some("history.json".to_string());
        assert!(validate_config_semantics(&config).is_ok());
    }
}
