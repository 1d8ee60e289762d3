//! Configuration module for the stub and rule generator.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `STUBGEN_` and use double
//! underscores to separate nested levels:
//! - `STUBGEN_CLASSMAP_PATH=libraries/classmap.php` sets `classmap_path`
//! - `STUBGEN_STUBS__OUTPUT_DIR=build/stubs` sets `stubs.output_dir`
//! - `STUBGEN_RULES__OUTPUT_DIR=build/rector` sets `rules.output_dir`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Relative path of the settings file within a project.
const SETTINGS_FILE: &str = ".stubgen/settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_schema_version")]
    pub version: u32,

    /// Classmap source file the alias registrations are read from
    #[serde(default = "default_classmap_path")]
    pub classmap_path: PathBuf,

    /// Deprecation snapshot produced by the collect step
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Stub generation settings
    #[serde(default)]
    pub stubs: StubConfig,

    /// Rename-rule generation settings
    #[serde(default)]
    pub rules: RuleConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StubConfig {
    /// Directory stub files are written into
    #[serde(default = "default_stub_output")]
    pub output_dir: PathBuf,

    /// Release label stamped into generated stub headers
    #[serde(default = "default_generated_for")]
    pub generated_for: String,

    /// Replace existing stub files instead of keeping them
    #[serde(default = "default_false")]
    pub overwrite: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RuleConfig {
    /// Directory Rector rule files are written into
    #[serde(default = "default_rule_output")]
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_schema_version(),
            classmap_path: default_classmap_path(),
            snapshot_path: default_snapshot_path(),
            debug: false,
            stubs: StubConfig::default(),
            rules: RuleConfig::default(),
        }
    }
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            output_dir: default_stub_output(),
            generated_for: default_generated_for(),
            overwrite: false,
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            output_dir: default_rule_output(),
        }
    }
}

fn default_schema_version() -> u32 {
    1
}

fn default_classmap_path() -> PathBuf {
    PathBuf::from("libraries/classmap.php")
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(".stubgen/deprecations.json")
}

fn default_stub_output() -> PathBuf {
    PathBuf::from("build/stubs")
}

fn default_rule_output() -> PathBuf {
    PathBuf::from("build/rector")
}

fn default_generated_for() -> String {
    String::from("development")
}

fn default_false() -> bool {
    false
}

impl Settings {
    /// Load configuration from defaults, settings file, and environment.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(SETTINGS_FILE))
            .merge(Env::prefixed("STUBGEN_").split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("STUBGEN_").split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Check whether the project has been initialized.
    pub fn check_init() -> Result<(), String> {
        if PathBuf::from(SETTINGS_FILE).exists() {
            Ok(())
        } else {
            Err(format!(
                "No {SETTINGS_FILE} found. Run 'stubgen init' to create one."
            ))
        }
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = PathBuf::from(SETTINGS_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = r#"# stubgen Configuration File

# Version of the configuration schema
version = 1

# Classmap source file the alias registrations are read from
classmap_path = "libraries/classmap.php"

# Deprecation snapshot produced by the collect step
snapshot_path = ".stubgen/deprecations.json"

# Global debug mode
debug = false

[stubs]
# Directory stub files are written into
output_dir = "build/stubs"

# Release label stamped into generated stub headers
generated_for = "development"

# Replace existing stub files instead of keeping them
overwrite = false

[rules]
# Directory Rector rule files are written into
output_dir = "build/rector"
"#;

        std::fs::write(&config_path, template)?;
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dirs_load_from_settings_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[stubs]\noutput_dir = \"custom/stubs\"\n\n[rules]\noutput_dir = \"custom/rector\"\n",
        )
        .expect("write settings");

        let settings = Settings::load_from(&path).expect("load");
        assert_eq!(settings.stubs.output_dir, PathBuf::from("custom/stubs"));
        assert_eq!(settings.rules.output_dir, PathBuf::from("custom/rector"));
        // Fields the file does not mention keep their defaults.
        assert_eq!(settings.classmap_path, default_classmap_path());
    }

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).expect("serialize");
        let parsed: Settings = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.classmap_path, settings.classmap_path);
        assert_eq!(parsed.stubs.output_dir, settings.stubs.output_dir);
        assert_eq!(parsed.rules.output_dir, settings.rules.output_dir);
        assert!(!parsed.stubs.overwrite);
    }
}
