pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::EcsDeployer;
pub use crate::config::{RedeployFile, TargetConfig};
pub use crate::core::redeploy::RedeployEngine;
pub use crate::core::{DeploymentOutcome, DeploymentTarget, RedeployResponse, ServiceDeployer};
pub use crate::utils::error::{RedeployError, Result};
