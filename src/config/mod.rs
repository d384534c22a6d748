#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::core::TargetProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_aws_region, validate_ecs_identifier, EcsResource, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::RedeployFile;

/// Which service to redeploy, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub cluster_name: String,
    pub service_name: String,
    #[serde(default)]
    pub region: Option<String>,
}

impl TargetProvider for TargetConfig {
    fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    fn service_name(&self) -> &str {
        &self.service_name
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Validate for TargetConfig {
    fn validate(&self) -> Result<()> {
        validate_ecs_identifier("cluster_name", &self.cluster_name, EcsResource::Cluster)?;
        validate_ecs_identifier("service_name", &self.service_name, EcsResource::Service)?;

        if let Some(region) = &self.region {
            validate_aws_region("region", region)?;
        }

        tracing::debug!(
            "Target configuration validated: {}/{}",
            self.cluster_name,
            self.service_name
        );
        Ok(())
    }
}
