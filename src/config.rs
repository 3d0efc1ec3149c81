use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::render::Theme;

pub const PREFS_ENV: &str = "PET_AGE_PREFS";
pub const OUTPUT_ENV: &str = "PET_AGE_OUTPUT";
pub const THEME_ENV: &str = "PET_AGE_THEME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prefs_path: PathBuf,
    pub output_path: PathBuf,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefs_path: PathBuf::from("pet-age-prefs.json"),
            output_path: PathBuf::from("result.html"),
            theme: Theme::Light,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source, so tests need not touch
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = lookup(PREFS_ENV) {
            config.prefs_path = path.into();
        }
        if let Some(path) = lookup(OUTPUT_ENV) {
            config.output_path = path.into();
        }
        if let Some(theme) = lookup(THEME_ENV) {
            config.theme = theme
                .parse()
                .map_err(|e| anyhow!("{THEME_ENV} is invalid: {e}"))?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(|key| match key {
            PREFS_ENV => Some("/tmp/prefs.json".into()),
            THEME_ENV => Some("dark".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.prefs_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.output_path, PathBuf::from("result.html"));
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn bad_theme_is_an_error() {
        let err = Config::from_lookup(|key| (key == THEME_ENV).then(|| "neon".into()))
            .unwrap_err();
        assert!(err.to_string().contains(THEME_ENV));
    }
}
