use crate::domain::model::{DeploymentOutcome, DeploymentTarget};
use crate::utils::error::Result;

/// Issues the force-new-deployment call against the orchestration service.
pub trait ServiceDeployer: Send + Sync {
    fn force_new_deployment(
        &self,
        target: &DeploymentTarget,
    ) -> impl std::future::Future<Output = Result<DeploymentOutcome>> + Send;
}

pub trait TargetProvider: Send + Sync {
    fn cluster_name(&self) -> &str;
    fn service_name(&self) -> &str;
    fn region(&self) -> Option<&str>;
}
