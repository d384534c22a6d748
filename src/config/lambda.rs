use crate::config::TargetConfig;
use crate::utils::error::{RedeployError, Result};
use std::env;

pub const CLUSTER_NAME_VAR: &str = "CLUSTER_NAME";
pub const SERVICE_NAME_VAR: &str = "SERVICE_NAME";
pub const REGION_VAR: &str = "ECS_REGION";

impl TargetConfig {
    /// Reads the target from the function's environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| RedeployError::MissingConfigError {
                field: key.to_string(),
            })
        };

        Ok(Self {
            cluster_name: required(CLUSTER_NAME_VAR)?,
            service_name: required(SERVICE_NAME_VAR)?,
            region: lookup(REGION_VAR).filter(|r| !r.is_empty()),
        })
    }
}
