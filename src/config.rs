use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::source::DEFAULT_DIFF_CONTEXT;
use crate::workspace::DEFAULT_DICT_DIR;

pub const CONFIG_FILE_NAME: &str = ".jpug-doc-tool.json";

/// Environment variables that override config file values.
pub const ENV_CLIENT_ID: &str = "JPUG_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "JPUG_CLIENT_SECRET";
pub const ENV_NAME: &str = "JPUG_NAME";
pub const ENV_API_AUTO_TRANSLATE: &str = "JPUG_API_AUTO_TRANSLATE";
pub const ENV_API_AUTO_TRANSLATE_TYPE: &str = "JPUG_API_AUTO_TRANSLATE_TYPE";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Machine translation service credentials.
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub api_auto_translate: String,
    #[serde(default)]
    pub api_auto_translate_type: String,
    /// Extra glob patterns (relative paths) excluded from target discovery.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_dict_dir")]
    pub dict_dir: String,
    #[serde(default = "default_diff_context")]
    pub diff_context: usize,
}

fn default_dict_dir() -> String {
    DEFAULT_DICT_DIR.to_string()
}

fn default_diff_context() -> usize {
    DEFAULT_DIFF_CONTEXT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            name: String::new(),
            api_auto_translate: String::new(),
            api_auto_translate_type: String::new(),
            ignores: Vec::new(),
            dict_dir: default_dict_dir(),
            diff_context: default_diff_context(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.diff_context == 0 {
            bail!("'diffContext' must be greater than 0");
        }

        if self.dict_dir.trim().is_empty() {
            bail!("'dictDir' must not be empty");
        }

        Ok(())
    }

    /// Overrides fields from `JPUG_*` environment variables.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let fields = [
            (ENV_CLIENT_ID, &mut self.client_id),
            (ENV_CLIENT_SECRET, &mut self.client_secret),
            (ENV_NAME, &mut self.name),
            (ENV_API_AUTO_TRANSLATE, &mut self.api_auto_translate),
            (ENV_API_AUTO_TRANSLATE_TYPE, &mut self.api_auto_translate_type),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key) {
                *field = value;
            }
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walks up from `start_dir` looking for the config file, stopping at the
/// repository root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

fn home_config_file() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(CONFIG_FILE_NAME);
    path.exists().then_some(path)
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config came from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Loads the config from `explicit` if given, otherwise from the nearest
/// config file above `start_dir`, otherwise from the home directory.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => find_config_file(start_dir).or_else(home_config_file),
    };

    let mut config = match &path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        }
        None => Config::default(),
    };
    config.apply_env();
    config.validate()?;

    Ok(ConfigLoadResult { config, path })
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::collections::HashMap;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.ignores.is_empty());
        assert_eq!(config.dict_dir, DEFAULT_DICT_DIR);
        assert_eq!(config.diff_context, 100);
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "clientId": "id",
              "clientSecret": "secret",
              "apiAutoTranslate": "https://example.invalid/api",
              "ignores": ["release-*.sgml"],
              "diffContext": 50
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.client_id, "id");
        assert_eq!(config.client_secret, "secret");
        assert_eq!(config.api_auto_translate, "https://example.invalid/api");
        assert_eq!(config.ignores, vec!["release-*.sgml"]);
        assert_eq!(config.diff_context, 50);
        assert_eq!(config.dict_dir, DEFAULT_DICT_DIR);
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("doc").join("src").join("sgml");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["ref/*"] }"#,
        )
        .unwrap();

        let result = load_config(dir.path(), None).unwrap();
        assert!(result.path.is_some());
        assert_eq!(result.config.ignores, vec!["ref/*"]);
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "dictDir": "dict" }"#).unwrap();

        let result = load_config(dir.path(), Some(&path)).unwrap();
        assert_eq!(result.path.as_deref(), Some(path.as_path()));
        assert_eq!(result.config.dict_dir, "dict");
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let dir = tempdir().unwrap();
        let result = load_config(dir.path(), Some(&dir.path().join("missing.json")));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_invalid_ignore_pattern() {
        let config = Config {
            ignores: vec!["[invalid".to_string()],
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ignores"));
    }

    #[test]
    fn test_validate_zero_context() {
        let config = Config {
            diff_context: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_with_invalid_json_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();

        assert!(load_config(dir.path(), None).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(ENV_CLIENT_ID, "from-env"), (ENV_API_AUTO_TRANSLATE_TYPE, "gpt")]);
        let mut config = Config {
            client_id: "from-file".to_string(),
            name: "kept".to_string(),
            ..Default::default()
        };

        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.client_id, "from-env");
        assert_eq!(config.api_auto_translate_type, "gpt");
        assert_eq!(config.name, "kept");
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = default_config_json().unwrap();
        assert!(json.contains("clientId"));
        assert!(json.contains("dictDir"));
        assert!(json.contains("diffContext"));
        assert!(!json.contains("client_id"));
    }
}
