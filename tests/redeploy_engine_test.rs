use anyhow::Result;
use rotation_redeploy::core::RedeployStatus;
use rotation_redeploy::{
    DeploymentOutcome, DeploymentTarget, RedeployEngine, RedeployError, ServiceDeployer,
    TargetConfig,
};
use serde_json::json;
use std::sync::Mutex;

type Responder = fn(&DeploymentTarget) -> rotation_redeploy::Result<DeploymentOutcome>;

/// Records every target it is asked to redeploy.
struct RecordingDeployer {
    calls: Mutex<Vec<DeploymentTarget>>,
    respond: Responder,
}

impl RecordingDeployer {
    fn new(respond: Responder) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            respond,
        }
    }

    fn calls(&self) -> Vec<DeploymentTarget> {
        self.calls.lock().unwrap().clone()
    }
}

impl ServiceDeployer for RecordingDeployer {
    async fn force_new_deployment(
        &self,
        target: &DeploymentTarget,
    ) -> rotation_redeploy::Result<DeploymentOutcome> {
        self.calls.lock().unwrap().push(target.clone());
        (self.respond)(target)
    }
}

fn succeed(target: &DeploymentTarget) -> rotation_redeploy::Result<DeploymentOutcome> {
    Ok(DeploymentOutcome {
        service_arn: format!(
            "arn:aws:ecs:us-east-1:123456789012:service/{}/{}",
            target.cluster, target.service
        ),
        deployment_id: Some("ecs-svc/9876543210".to_string()),
    })
}

fn service_not_found(target: &DeploymentTarget) -> rotation_redeploy::Result<DeploymentOutcome> {
    Err(RedeployError::DeploymentError {
        cluster: target.cluster.clone(),
        service: target.service.clone(),
        code: Some("ServiceNotFoundException".to_string()),
        message: "Service not found.".to_string(),
    })
}

fn rotation_event() -> serde_json::Value {
    json!({
        "id": "c7a1d0f2-0000-4000-8000-000000000001",
        "detail-type": "AWS Service Event via CloudTrail",
        "source": "aws.secretsmanager",
        "time": "2024-03-01T12:30:00Z",
        "region": "us-east-1",
        "detail": {
            "eventName": "RotationSucceeded",
            "additionalEventData": { "SecretId": "db-creds" }
        }
    })
}

#[tokio::test]
async fn test_calls_update_with_configured_identifiers() -> Result<()> {
    let config = TargetConfig {
        cluster_name: "prod-cluster".to_string(),
        service_name: "api".to_string(),
        region: None,
    };
    let engine = RedeployEngine::new(
        RecordingDeployer::new(succeed),
        DeploymentTarget::from_provider(&config),
    );

    let response = engine.handle(&rotation_event()).await?;

    assert_eq!(
        engine.deployer().calls(),
        vec![DeploymentTarget::new("prod-cluster", "api")]
    );
    assert_eq!(response.status, RedeployStatus::Success);
    assert_eq!(
        serde_json::to_value(&response)?,
        json!({
            "status": "success",
            "service": "arn:aws:ecs:us-east-1:123456789012:service/prod-cluster/api",
            "deployment_id": "ecs-svc/9876543210"
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_any_event_shape_triggers_one_call() -> Result<()> {
    let engine = RedeployEngine::new(
        RecordingDeployer::new(succeed),
        DeploymentTarget::new("prod", "worker"),
    );

    engine.handle(&json!({})).await?;
    engine.handle(&json!(["unexpected"])).await?;

    assert_eq!(engine.deployer().calls().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_deployer_error_propagates_unchanged() {
    let engine = RedeployEngine::new(
        RecordingDeployer::new(service_not_found),
        DeploymentTarget::new("prod", "api"),
    );

    let err = engine.handle(&rotation_event()).await.unwrap_err();

    match err {
        RedeployError::DeploymentError {
            cluster,
            service,
            code,
            message,
        } => {
            assert_eq!(cluster, "prod");
            assert_eq!(service, "api");
            assert_eq!(code.as_deref(), Some("ServiceNotFoundException"));
            assert_eq!(message, "Service not found.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(engine.deployer().calls().len(), 1);
}

#[tokio::test]
async fn test_dry_run_skips_the_call() -> Result<()> {
    let engine = RedeployEngine::new(
        RecordingDeployer::new(service_not_found),
        DeploymentTarget::new("prod", "api"),
    )
    .with_dry_run(true);

    let response = engine.handle(&rotation_event()).await?;

    assert!(engine.deployer().calls().is_empty());
    assert_eq!(response.status, RedeployStatus::DryRun);
    assert_eq!(response.service, "api");
    Ok(())
}
