use crate::core::{DeploymentOutcome, DeploymentTarget, ServiceDeployer};
use crate::utils::error::{RedeployError, Result};
use aws_config::BehaviorVersion;
use aws_sdk_ecs::config::Region;
use aws_sdk_ecs::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_ecs::operation::update_service::UpdateServiceOutput;
use aws_sdk_ecs::Client as EcsClient;

const PRIMARY_DEPLOYMENT: &str = "PRIMARY";

#[derive(Debug, Clone)]
pub struct EcsDeployer {
    client: EcsClient,
}

impl EcsDeployer {
    pub fn new(client: EcsClient) -> Self {
        Self { client }
    }

    /// Builds a client from the ambient AWS configuration, optionally pinned to `region`.
    pub async fn from_env(region: Option<&str>) -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_ecs::config::Builder::from(&config);
        if let Some(region) = region {
            builder = builder.region(Region::new(region.to_string()));
        }
        Self::new(EcsClient::from_conf(builder.build()))
    }
}

impl ServiceDeployer for EcsDeployer {
    async fn force_new_deployment(&self, target: &DeploymentTarget) -> Result<DeploymentOutcome> {
        let output = self
            .client
            .update_service()
            .cluster(&target.cluster)
            .service(&target.service)
            .force_new_deployment(true)
            .send()
            .await
            .map_err(|err| RedeployError::DeploymentError {
                cluster: target.cluster.clone(),
                service: target.service.clone(),
                code: err.code().map(str::to_string),
                message: err
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| DisplayErrorContext(&err).to_string()),
            })?;

        outcome_from_output(target, &output)
    }
}

pub(crate) fn outcome_from_output(
    target: &DeploymentTarget,
    output: &UpdateServiceOutput,
) -> Result<DeploymentOutcome> {
    let service = output
        .service()
        .ok_or_else(|| RedeployError::MissingServiceArn {
            service: target.service.clone(),
        })?;

    let service_arn = service
        .service_arn()
        .ok_or_else(|| RedeployError::MissingServiceArn {
            service: target.service.clone(),
        })?;

    let deployment_id = service
        .deployments()
        .iter()
        .find(|d| d.status() == Some(PRIMARY_DEPLOYMENT))
        .and_then(|d| d.id())
        .map(str::to_string);

    Ok(DeploymentOutcome {
        service_arn: service_arn.to_string(),
        deployment_id,
    })
}
