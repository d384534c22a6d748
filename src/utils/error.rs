use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedeployError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("UpdateService failed for {service} in {cluster}: {message}")]
    DeploymentError {
        cluster: String,
        service: String,
        code: Option<String>,
        message: String,
    },

    #[error("UpdateService response for {service} carried no service ARN")]
    MissingServiceArn { service: String },
}

impl RedeployError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RedeployError::ConfigError { .. }
                | RedeployError::MissingConfigError { .. }
                | RedeployError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RedeployError::MissingConfigError { field } => {
                format!("{} is not set", field)
            }
            RedeployError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
            RedeployError::DeploymentError {
                service,
                code: Some(code),
                message,
                ..
            } => format!("Could not redeploy {}: {} ({})", service, message, code),
            RedeployError::DeploymentError {
                service, message, ..
            } => format!("Could not redeploy {}: {}", service, message),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RedeployError::MissingConfigError { .. } => {
                "Set CLUSTER_NAME and SERVICE_NAME, or pass --cluster/--service"
            }
            RedeployError::InvalidConfigValueError { .. } => {
                "Check the cluster/service identifiers and region"
            }
            RedeployError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            RedeployError::DeploymentError { .. } => {
                "Check that the service exists and the caller may call ecs:UpdateService"
            }
            RedeployError::MissingServiceArn { .. } => {
                "Inspect the service in the ECS console; the update may still have been applied"
            }
            RedeployError::IoError(_) => "Check that the event file exists and is readable",
            RedeployError::SerializationError(_) => "Check that the event file is valid JSON",
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, RedeployError>;
