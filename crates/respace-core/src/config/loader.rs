//! Configuration file discovery and loading

use super::respace_config::RespaceConfiguration;
use crate::error::RespaceError;
use crate::result::ResultExt;
use std::fs;
use std::path::{Path, PathBuf};

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, RespaceError>;

/// Config file names, in discovery priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".respacerc.json",
    ".respacerc.jsonc",
    "respace.yaml",
    "respace.yml",
    "respace.toml",
];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover config file by traversing upward from start_path
    ///
    /// Searches each directory for the names in [`CONFIG_FILE_NAMES`], in
    /// order, starting from the given directory and moving up the directory
    /// tree until a config is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| RespaceError::ConfigError {
                message: format!("Invalid path: {e}"),
            })?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            // Move up to parent directory
            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                // Reached filesystem root
                break;
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific file
    ///
    /// The format follows the extension: `.json`, `.jsonc` (comments and
    /// trailing commas), `.yaml`/`.yml` and `.toml`.
    pub fn load_from_file(path: &Path) -> Result<RespaceConfiguration> {
        let content = fs::read_to_string(path).map_err(|e| RespaceError::ConfigError {
            message: format!("Cannot read config file '{}': {}", path.display(), e),
        })?;

        let invalid = |format: &str, e: &dyn std::fmt::Display| RespaceError::ConfigError {
            message: format!("Invalid {format} in '{}': {e}", path.display()),
        };

        let config: RespaceConfiguration = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| invalid("JSON", &e))?,
            // Use json5 for JSONC support (comments + trailing commas)
            Some("jsonc") => json5::from_str(&content).map_err(|e| invalid("JSONC", &e))?,
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|e| invalid("YAML", &e))?
            }
            Some("toml") => toml::from_str(&content).map_err(|e| invalid("TOML", &e))?,
            _ => {
                return Err(RespaceError::ConfigError {
                    message: format!(
                        "Unsupported config file '{}' (expected .json, .jsonc, .yaml, .yml or .toml)",
                        path.display()
                    ),
                });
            }
        };

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Load config with extends resolution
    ///
    /// This method loads a configuration file and recursively resolves
    /// any `extends` directives, merging parent configurations.
    pub fn load_with_extends(path: &Path) -> Result<RespaceConfiguration> {
        let mut chain = vec![Self::chain_entry(path)];
        Self::load_resolving(path, &mut chain)
    }

    fn load_resolving(path: &Path, chain: &mut Vec<PathBuf>) -> Result<RespaceConfiguration> {
        let mut config = Self::load_from_file(path)?;

        if config.extends.is_some() {
            let base_dir = path.parent().ok_or_else(|| RespaceError::ConfigError {
                message: format!("Cannot determine parent directory of '{}'", path.display()),
            })?;
            Self::apply_extends(&mut config, base_dir, chain)?;
        }

        Ok(config)
    }

    /// Loads and merges the parents named in `extends`
    ///
    /// Parents are loaded first, with their own `extends` resolved, then
    /// merged under the current config so that child values take precedence.
    /// Earlier entries of `extends` win over later ones.
    fn apply_extends(
        config: &mut RespaceConfiguration,
        base_path: &Path,
        chain: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let extends_paths = config.extends.clone().unwrap_or_default();

        for extend_path in &extends_paths {
            let full_path = if Path::new(extend_path).is_absolute() {
                PathBuf::from(extend_path)
            } else {
                base_path.join(extend_path)
            };

            if !full_path.exists() {
                return Err(RespaceError::ConfigError {
                    message: format!("Extended config not found: {}", full_path.display()),
                });
            }

            let entry = Self::chain_entry(&full_path);
            if chain.contains(&entry) {
                return Err(RespaceError::ConfigError {
                    message: format!("Circular extends: {}", full_path.display()),
                });
            }

            chain.push(entry);
            let parent_config = Self::load_resolving(&full_path, chain)?;
            chain.pop();

            // Merge parent into current (current takes precedence)
            config.merge_with(parent_config);
        }

        Ok(())
    }

    fn chain_entry(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
    }

    /// Load config from path or auto-discover
    ///
    /// If a custom path is provided, loads from that path.
    /// Otherwise, attempts to auto-discover a config file starting from
    /// the given directory (or current directory), then keeps merging configs
    /// found further up until one is marked `root`.
    pub fn load(
        custom_path: Option<&Path>,
        start_dir: Option<&Path>,
    ) -> Result<RespaceConfiguration> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(RespaceError::ConfigError {
                    message: format!("Config file not found: {}", path.display()),
                });
            }
            return Self::load_with_extends(path);
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        let config_path =
            Self::auto_discover(search_dir)?.ok_or_else(|| RespaceError::ConfigError {
                message: format!("No config file found ({})", CONFIG_FILE_NAMES.join(", ")),
            })?;
        Self::load_cascading(&config_path)
    }

    /// Loads `path` and merges enclosing directory configs under it
    fn load_cascading(path: &Path) -> Result<RespaceConfiguration> {
        let mut config = Self::load_with_extends(path)?;
        let mut current = path.to_path_buf();

        while config.root != Some(true) {
            let Some(above) = current.parent().and_then(Path::parent) else {
                break;
            };
            let Some(parent_path) = Self::auto_discover(above)? else {
                break;
            };
            tracing::debug!("Merging enclosing config: {}", parent_path.display());
            let parent = Self::load_with_extends(&parent_path)?;
            config.root = parent.root;
            config.merge_with(parent);
            current = parent_path;
        }

        Ok(config)
    }

    /// Load config or use default if not found
    ///
    /// Similar to `load()`, but returns a default configuration instead
    /// of an error if no config file is found.
    pub fn load_or_default(
        custom_path: Option<&Path>,
        start_dir: Option<&Path>,
    ) -> RespaceConfiguration {
        Self::load(custom_path, start_dir)
            .log_and_continue()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    fn around_method(config: &RespaceConfiguration) -> Option<i64> {
        config.blank_lines()?.minimum.as_ref()?.around_method
    }

    fn in_declarations(config: &RespaceConfiguration) -> Option<i64> {
        config.blank_lines()?.keep_maximum.as_ref()?.in_declarations
    }

    #[test]
    fn test_load_from_file_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".respacerc.json",
            r#"{
                "formatter": {
                    "enabled": true,
                    "blankLines": { "minimum": { "aroundMethod": 2 } }
                }
            }"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert!(config.formatter_enabled());
        assert_eq!(around_method(&config), Some(2));
    }

    #[test]
    fn test_load_from_file_jsonc() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".respacerc.jsonc",
            r#"{
                // keep class bodies compact
                "formatter": {
                    "blankLines": {
                        "keepMaximum": { "inDeclarations": 1, },
                    },
                },
            }"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(in_declarations(&config), Some(1));
    }

    #[test]
    fn test_load_from_file_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "respace.yaml",
            "root: true\nformatter:\n  enabled: true\n  blankLines:\n    keepMaximum:\n      inDeclarations: 1\n    minimum:\n      aroundMethod: 1\n",
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(config.root, Some(true));
        assert_eq!(in_declarations(&config), Some(1));
        assert_eq!(around_method(&config), Some(1));
    }

    #[test]
    fn test_load_from_file_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "respace.toml",
            r#"
root = true

[formatter.blankLines.minimum]
aroundMethod = 3
"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(around_method(&config), Some(3));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(temp_dir.path(), "respace.ini", "root = true");

        let err = ConfigLoader::load_from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("Unsupported"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_from_file(Path::new("nonexistent.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path =
            create_temp_config(temp_dir.path(), "invalid.json", r#"{ invalid json }"#);

        let result = ConfigLoader::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_auto_discover() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src/main/java");
        fs::create_dir_all(&nested).unwrap();

        create_temp_config(temp_dir.path(), "respace.yml", "root: true\n");

        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), "respace.yml");
    }

    #[test]
    fn test_auto_discover_priority() {
        let temp_dir = TempDir::new().unwrap();

        create_temp_config(temp_dir.path(), "respace.toml", "root = true\n");
        create_temp_config(temp_dir.path(), "respace.yaml", "root: true\n");
        create_temp_config(temp_dir.path(), ".respacerc.json", r#"{"root": true}"#);

        // Should find .respacerc.json first (highest priority)
        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), ".respacerc.json");
    }

    #[test]
    fn test_extends_resolution() {
        let temp_dir = TempDir::new().unwrap();

        create_temp_config(
            temp_dir.path(),
            "base.yaml",
            "formatter:\n  blankLines:\n    keepMaximum:\n      inDeclarations: 1\n    minimum:\n      aroundMethod: 1\n",
        );
        let config_path = create_temp_config(
            temp_dir.path(),
            ".respacerc.json",
            r#"{
                "extends": ["base.yaml"],
                "formatter": { "blankLines": { "minimum": { "aroundMethod": 2 } } }
            }"#,
        );

        let config = ConfigLoader::load_with_extends(&config_path).unwrap();
        assert_eq!(around_method(&config), Some(2));
        assert_eq!(in_declarations(&config), Some(1));
    }

    #[test]
    fn test_nested_extends() {
        let temp_dir = TempDir::new().unwrap();
        let shared = temp_dir.path().join("shared");
        fs::create_dir_all(&shared).unwrap();

        create_temp_config(
            &shared,
            "root.json",
            r#"{"formatter": {"blankLines": {"keepMaximum": {"inCode": 0}}}}"#,
        );
        create_temp_config(
            &shared,
            "team.json",
            r#"{"extends": ["root.json"], "formatter": {"enabled": false}}"#,
        );
        let config_path = create_temp_config(
            temp_dir.path(),
            ".respacerc.json",
            r#"{"extends": ["shared/team.json"]}"#,
        );

        let config = ConfigLoader::load_with_extends(&config_path).unwrap();
        assert!(!config.formatter_enabled());
        assert_eq!(
            config.blank_lines().unwrap().keep_maximum.as_ref().unwrap().in_code,
            Some(0)
        );
    }

    #[test]
    fn test_missing_extends() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".respacerc.json",
            r#"{"extends": ["missing.json"]}"#,
        );

        let err = ConfigLoader::load_with_extends(&config_path).unwrap_err();
        assert!(err.to_string().contains("Extended config not found"));
    }

    #[test]
    fn test_circular_extends() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), "a.json", r#"{"extends": ["b.json"]}"#);
        create_temp_config(temp_dir.path(), "b.json", r#"{"extends": ["a.json"]}"#);

        let err = ConfigLoader::load_with_extends(&temp_dir.path().join("a.json")).unwrap_err();
        assert!(err.to_string().contains("Circular extends"));
    }

    #[test]
    fn test_load_discovers_from_start_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("module");
        fs::create_dir_all(&nested).unwrap();
        create_temp_config(
            temp_dir.path(),
            "respace.yaml",
            "formatter:\n  blankLines:\n    minimum:\n      aroundMethod: 4\n",
        );

        let config = ConfigLoader::load(None, Some(&nested)).unwrap();
        assert_eq!(around_method(&config), Some(4));
    }

    #[test]
    fn test_load_merges_enclosing_configs_up_to_root() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("project");
        let module = project.join("module");
        fs::create_dir_all(&module).unwrap();
        create_temp_config(
            temp_dir.path(),
            "respace.toml",
            "[formatter.blankLines.minimum]\naroundMethod = 9\n",
        );
        create_temp_config(
            &project,
            "respace.yaml",
            "root: true\nformatter:\n  blankLines:\n    minimum:\n      aroundMethod: 3\n",
        );
        create_temp_config(
            &module,
            ".respacerc.json",
            r#"{"formatter": {"blankLines": {"keepMaximum": {"inDeclarations": 1}}}}"#,
        );

        let config = ConfigLoader::load(None, Some(&module)).unwrap();
        assert_eq!(in_declarations(&config), Some(1));
        assert_eq!(around_method(&config), Some(3));
        assert_eq!(config.root, Some(true));
    }

    #[test]
    fn test_root_config_stops_discovery() {
        let temp_dir = TempDir::new().unwrap();
        let module = temp_dir.path().join("module");
        fs::create_dir_all(&module).unwrap();
        create_temp_config(
            temp_dir.path(),
            "respace.yaml",
            "formatter:\n  blankLines:\n    minimum:\n      aroundMethod: 4\n",
        );
        create_temp_config(&module, ".respacerc.json", r#"{"root": true}"#);

        let config = ConfigLoader::load(None, Some(&module)).unwrap();
        assert_eq!(around_method(&config), None);
    }

    #[test]
    fn test_load_or_default_without_config() {
        let config = ConfigLoader::load_or_default(Some(Path::new("does/not/exist.json")), None);
        assert_eq!(config, RespaceConfiguration::default());
    }
}
