use crate::domain::ports::TargetProvider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The cluster/service pair passed to `UpdateService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTarget {
    pub cluster: String,
    pub service: String,
}

impl DeploymentTarget {
    pub fn new(cluster: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            service: service.into(),
        }
    }

    pub fn from_provider<P: TargetProvider + ?Sized>(provider: &P) -> Self {
        Self::new(provider.cluster_name(), provider.service_name())
    }
}

/// Summary of an incoming rotation event, for logging only.
///
/// Understands the EventBridge envelope and the CloudTrail `detail` that
/// Secrets Manager emits; anything else leaves the fields empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RotationEvent {
    pub event_id: Option<String>,
    pub source: Option<String>,
    pub detail_type: Option<String>,
    pub event_name: Option<String>,
    pub secret_id: Option<String>,
    pub region: Option<String>,
    pub time: Option<DateTime<Utc>>,
}

impl RotationEvent {
    pub fn from_value(event: &Value) -> Self {
        let text = |pointer: &str| {
            event
                .pointer(pointer)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let secret_id = text("/detail/additionalEventData/SecretId")
            .or_else(|| text("/detail/requestParameters/secretId"))
            .or_else(|| text("/resources/0"));

        let time = text("/time")
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|t| t.with_timezone(&Utc));

        Self {
            event_id: text("/id"),
            source: text("/source"),
            detail_type: text("/detail-type"),
            event_name: text("/detail/eventName"),
            secret_id,
            region: text("/region"),
            time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentOutcome {
    pub service_arn: String,
    pub deployment_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedeployStatus {
    Success,
    DryRun,
}

/// Status payload handed back to the invoking platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeployResponse {
    pub status: RedeployStatus,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
}

impl RedeployResponse {
    pub fn success(outcome: DeploymentOutcome) -> Self {
        Self {
            status: RedeployStatus::Success,
            service: outcome.service_arn,
            deployment_id: outcome.deployment_id,
        }
    }

    pub fn dry_run(target: &DeploymentTarget) -> Self {
        Self {
            status: RedeployStatus::DryRun,
            service: target.service.clone(),
            deployment_id: None,
        }
    }
}
