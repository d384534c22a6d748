use crate::core::{DeploymentTarget, RedeployResponse, RotationEvent, ServiceDeployer};
use crate::utils::error::Result;
use serde_json::Value;

/// Turns one rotation event into one forced redeploy of the configured service.
pub struct RedeployEngine<D: ServiceDeployer> {
    deployer: D,
    target: DeploymentTarget,
    dry_run: bool,
}

impl<D: ServiceDeployer> RedeployEngine<D> {
    pub fn new(deployer: D, target: DeploymentTarget) -> Self {
        Self {
            deployer,
            target,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn target(&self) -> &DeploymentTarget {
        &self.target
    }

    pub fn deployer(&self) -> &D {
        &self.deployer
    }

    /// Errors from the deployer are logged and returned as-is.
    pub async fn handle(&self, event: &Value) -> Result<RedeployResponse> {
        let summary = RotationEvent::from_value(event);
        let raw = serde_json::to_string(event)?;

        tracing::info!(
            secret_id = summary.secret_id.as_deref().unwrap_or("-"),
            event_name = summary.event_name.as_deref().unwrap_or("-"),
            source = summary.source.as_deref().unwrap_or("-"),
            "Secret rotation detected: {}",
            raw
        );

        if self.dry_run {
            tracing::info!(
                "Dry run: would force a new deployment of {} in cluster {}",
                self.target.service,
                self.target.cluster
            );
            return Ok(RedeployResponse::dry_run(&self.target));
        }

        tracing::debug!(
            cluster = %self.target.cluster,
            service = %self.target.service,
            "Calling UpdateService with forceNewDeployment"
        );

        match self.deployer.force_new_deployment(&self.target).await {
            Ok(outcome) => {
                tracing::info!(
                    deployment_id = outcome.deployment_id.as_deref().unwrap_or("-"),
                    "Triggered deployment for service {}: {}",
                    self.target.service,
                    outcome.service_arn
                );
                Ok(RedeployResponse::success(outcome))
            }
            Err(e) => {
                tracing::error!("Error triggering deployment: {}", e);
                Err(e)
            }
        }
    }
}
