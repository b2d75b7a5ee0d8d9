//! mathwiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level mathwiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathwizConfig {
    /// Content pack file or directory.
    #[serde(default = "default_content_path")]
    pub content_path: PathBuf,
    /// Where saved quiz reports go.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output format when none is given: text or json.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_content_path() -> PathBuf {
    PathBuf::from("./content")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./mathwiz-results")
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for MathwizConfig {
    fn default() -> Self {
        Self {
            content_path: default_content_path(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `mathwiz.toml` in the current directory
/// 2. `~/.config/mathwiz/config.toml`
///
/// `MATHWIZ_CONTENT` overrides `content_path`.
pub fn load_config() -> Result<MathwizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<MathwizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mathwiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MathwizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MathwizConfig::default(),
    };

    if let Ok(content) = std::env::var("MATHWIZ_CONTENT") {
        config.content_path = PathBuf::from(content);
    }

    config.content_path = resolve_path(&config.content_path);
    config.output_dir = resolve_path(&config.output_dir);

    anyhow::ensure!(
        matches!(config.default_format.as_str(), "text" | "json"),
        "default_format must be \"text\" or \"json\", got {:?}",
        config.default_format
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mathwiz"))
}
