#![forbid(unsafe_code)]

//! Settings file (`.chirp.toml`): active account, API endpoint, output
//! defaults. A missing file yields the defaults; credentials themselves
//! live in the environment, not here.

use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use serde::Deserialize;
use termcolor::ColorChoice;

use crate::commands::DEFAULT_NUM_RESULTS;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub account: AccountConfig,
    pub api: ApiConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountConfig {
    /// Screen name of the active account. Used as the default owner for
    /// `[owner/]list` references that omit the owner part.
    pub screen_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: String,
    /// Name of the environment variable holding the bearer token.
    pub token_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "https://api.twitter.com/1.1".to_string(),
            token_env: "CHIRP_TOKEN".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Result count for the capped commands when `-n` is not given.
    pub default_results: usize,
    pub color: ColorOption,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            default_results: DEFAULT_NUM_RESULTS,
            color: ColorOption::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorOption {
    /// Resolves to a termcolor choice; auto disables color when stdout is
    /// not a terminal.
    pub fn to_color_choice(self) -> ColorChoice {
        match self {
            ColorOption::Always => ColorChoice::Always,
            ColorOption::Never => ColorChoice::Never,
            ColorOption::Auto => {
                if std::io::stdout().is_terminal() {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
        }
    }
}

impl Settings {
    /// Loads settings from `path`; a missing file is not an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(path)?;
        Settings::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.account.screen_name, "");
        assert_eq!(settings.api.base_url, "https://api.twitter.com/1.1");
        assert_eq!(settings.api.token_env, "CHIRP_TOKEN");
        assert_eq!(settings.output.default_results, 20);
        assert_eq!(settings.output.color, ColorOption::Auto);
    }

    #[test]
    fn test_parse_full_file() {
        let settings = Settings::parse(
            r#"
[account]
screen_name = "sferik"

[api]
base_url = "https://example.test/1.1"
token_env = "MY_TOKEN"

[output]
default_results = 50
color = "never"
"#,
        )
        .unwrap();
        assert_eq!(settings.account.screen_name, "sferik");
        assert_eq!(settings.api.base_url, "https://example.test/1.1");
        assert_eq!(settings.output.default_results, 50);
        assert_eq!(settings.output.color, ColorOption::Never);
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let settings = Settings::parse("[account]\nscreen_name = \"me\"\n").unwrap();
        assert_eq!(settings.account.screen_name, "me");
        assert_eq!(settings.output.default_results, 20);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = Settings::parse("[account]\nuser = \"me\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".chirp.toml");
        fs::write(&path, "[account]\nscreen_name = \"alice\"\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.account.screen_name, "alice");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(matches!(
            Settings::parse("not [[ toml"),
            Err(Error::Config(_))
        ));
    }
}
