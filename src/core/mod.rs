pub mod redeploy;

pub use crate::domain::model::{
    DeploymentOutcome, DeploymentTarget, RedeployResponse, RedeployStatus, RotationEvent,
};
pub use crate::domain::ports::{ServiceDeployer, TargetProvider};
pub use crate::utils::error::Result;
