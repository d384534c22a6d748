use crate::utils::error::{RedeployError, Result};
use regex::Regex;
use std::sync::LazyLock;

static ECS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,255}$").expect("valid ECS name pattern"));

static ECS_ARN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:aws[a-z-]*:ecs:[a-z0-9-]+:\d{12}:(cluster|service)/[A-Za-z0-9_/-]+$")
        .expect("valid ECS ARN pattern")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Resource kinds that `UpdateService` accepts as a name or an ARN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcsResource {
    Cluster,
    Service,
}

impl EcsResource {
    fn arn_kind(self) -> &'static str {
        match self {
            EcsResource::Cluster => "cluster",
            EcsResource::Service => "service",
        }
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RedeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| RedeployError::MissingConfigError {
            field: field_name.to_string(),
        })
}

/// Accepts either a short name or a full ARN of the given kind.
pub fn validate_ecs_identifier(field_name: &str, value: &str, kind: EcsResource) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.starts_with("arn:") {
        let captures = ECS_ARN
            .captures(value)
            .ok_or_else(|| RedeployError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Not a valid ECS ARN".to_string(),
            })?;

        if &captures[1] != kind.arn_kind() {
            return Err(RedeployError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: format!("Expected a {} ARN, got a {} ARN", kind.arn_kind(), &captures[1]),
            });
        }
        return Ok(());
    }

    if !ECS_NAME.is_match(value) {
        return Err(RedeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "ECS names are 1-255 letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    // AWS region format validation
    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(RedeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}
