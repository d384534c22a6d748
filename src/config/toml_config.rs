use crate::config::TargetConfig;
use crate::utils::error::{RedeployError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid placeholder pattern"));

/// On-disk form of the redeploy settings:
///
/// ```toml
/// dry_run = false
///
/// [target]
/// cluster_name = "${CLUSTER_NAME}"
/// service_name = "api"
/// region = "us-east-1"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeployFile {
    pub target: TargetConfig,
    #[serde(default)]
    pub dry_run: Option<bool>,
}

impl RedeployFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| RedeployError::ConfigError {
            message: format!("Failed to read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content, |name| std::env::var(name).ok());
        toml::from_str(&processed_content).map_err(|e| RedeployError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders from the environment; unknown names are left as written.
    fn substitute_env_vars<F>(content: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for RedeployFile {
    fn validate(&self) -> Result<()> {
        self.target.validate()
    }
}
