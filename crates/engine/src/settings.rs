//! Runtime settings gathered from the environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::GameConfig;
use crate::types::FRAME_MS;

pub const CONFIG_VAR: &str = "EGG_CATCH_CONFIG";
pub const SEED_VAR: &str = "EGG_CATCH_SEED";
pub const FRAME_MS_VAR: &str = "EGG_CATCH_FRAME_MS";
pub const LOG_PATH_VAR: &str = "EGG_CATCH_LOG_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub game: GameConfig,
    /// Fixed seed for the first session; later sessions derive from it.
    pub seed: Option<u64>,
    pub frame_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(path) = var(CONFIG_VAR) {
            settings.game = load_config_file(Path::new(path.trim()))?;
        }
        if let Some(seed) = var(SEED_VAR) {
            settings.seed = Some(
                seed.trim()
                    .parse()
                    .with_context(|| format!("{SEED_VAR}={seed:?} is not an unsigned integer"))?,
            );
        }
        if let Some(ms) = var(FRAME_MS_VAR) {
            let ms: u32 = ms
                .trim()
                .parse()
                .with_context(|| format!("{FRAME_MS_VAR}={ms:?} is not an unsigned integer"))?;
            anyhow::ensure!(ms > 0, "{FRAME_MS_VAR} must be at least 1");
            settings.frame_ms = ms;
        }
        settings.log_path = var(LOG_PATH_VAR).map(PathBuf::from);

        Ok(settings)
    }

    /// The configured seed, or one taken from the clock.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

/// Read a JSON game config. Missing fields keep their defaults.
pub fn load_config_file(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = parse_config(&text).with_context(|| format!("invalid config {}", path.display()))?;
    log::info!("loaded game config from {}", path.display());
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<GameConfig> {
    let config: GameConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Seed for a new session from the wall clock.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x853c_49e6_748f_ea9b)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.frame_ms, 16);
    }

    #[test]
    fn reads_seed_frame_and_log_path() {
        let s = Settings::from_lookup(lookup(&[
            (SEED_VAR, " 42 "),
            (FRAME_MS_VAR, "33"),
            (LOG_PATH_VAR, "/tmp/egg.log"),
        ]))
        .unwrap();
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.seed_or_random(), 42);
        assert_eq!(s.frame_ms, 33);
        assert_eq!(s.log_path, Some(PathBuf::from("/tmp/egg.log")));
    }

    #[test]
    fn empty_values_are_unset() {
        let s = Settings::from_lookup(lookup(&[(SEED_VAR, ""), (LOG_PATH_VAR, "  ")])).unwrap();
        assert_eq!(s.seed, None);
        assert_eq!(s.log_path, None);
    }

    #[test]
    fn bad_numbers_are_errors() {
        let err = Settings::from_lookup(lookup(&[(SEED_VAR, "soon")])).unwrap_err();
        assert!(err.to_string().contains(SEED_VAR));
        assert!(Settings::from_lookup(lookup(&[(FRAME_MS_VAR, "0")])).is_err());
        assert!(Settings::from_lookup(lookup(&[(FRAME_MS_VAR, "-5")])).is_err());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_config(r#"{ "miss_limit": 3, "initial_fall_speed": 5.0 }"#).unwrap();
        assert_eq!(config.miss_limit, 3);
        assert_eq!(config.initial_fall_speed, 5.0);
        assert_eq!(config.catch_line, 560.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(parse_config(r#"{ "miss_limit": 0 }"#).is_err());
        assert!(parse_config("not json").is_err());
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let err = Settings::from_lookup(lookup(&[(CONFIG_VAR, "/nonexistent/egg.json")]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/egg.json"));
    }
}
