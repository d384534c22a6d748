use crate::config::{RedeployFile, TargetConfig};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rotation-redeploy")]
#[command(about = "Force a new ECS deployment so tasks pick up rotated secrets")]
pub struct CliConfig {
    /// Cluster name or ARN
    #[arg(long, env = "CLUSTER_NAME")]
    pub cluster: Option<String>,

    /// Service name or ARN
    #[arg(long, env = "SERVICE_NAME")]
    pub service: Option<String>,

    /// Region override for the ECS client
    #[arg(long, env = "ECS_REGION")]
    pub region: Option<String>,

    /// TOML file with a [target] section; flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Replay a rotation event from a JSON file instead of a synthetic one
    #[arg(long)]
    pub event_file: Option<PathBuf>,

    /// Log the request without calling ECS
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Settings after merging flags over the optional config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCli {
    pub target: TargetConfig,
    pub dry_run: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ResolvedCli> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                Some(RedeployFile::from_file(path)?)
            }
            None => None,
        };
        let file_target = file.as_ref().map(|f| &f.target);

        let cluster = self
            .cluster
            .clone()
            .or_else(|| file_target.map(|t| t.cluster_name.clone()));
        let service = self
            .service
            .clone()
            .or_else(|| file_target.map(|t| t.service_name.clone()));
        let region = self
            .region
            .clone()
            .or_else(|| file_target.and_then(|t| t.region.clone()));
        let file_dry_run = file.as_ref().and_then(|f| f.dry_run).unwrap_or(false);

        Ok(ResolvedCli {
            target: TargetConfig {
                cluster_name: validate_required_field("cluster", &cluster)?.clone(),
                service_name: validate_required_field("service", &service)?.clone(),
                region,
            },
            dry_run: self.dry_run || file_dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RedeployError;
    use std::io::Write;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["rotation-redeploy"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_only() {
        let resolved = parse(&["--cluster", "prod", "--service", "api", "--dry-run"])
            .resolve()
            .unwrap();
        assert_eq!(resolved.target.cluster_name, "prod");
        assert_eq!(resolved.target.service_name, "api");
        assert!(resolved.dry_run);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "dry_run = true\n[target]\ncluster_name = \"staging\"\nservice_name = \"worker\"\nregion = \"eu-west-1\""
        )
        .unwrap();

        let cli = CliConfig {
            cluster: None,
            service: Some("api".to_string()),
            region: None,
            config: Some(file.path().to_path_buf()),
            event_file: None,
            dry_run: false,
            verbose: false,
        };
        let resolved = cli.resolve().unwrap();

        assert_eq!(resolved.target.cluster_name, "staging");
        assert_eq!(resolved.target.service_name, "api");
        assert_eq!(resolved.target.region.as_deref(), Some("eu-west-1"));
        assert!(resolved.dry_run);
    }

    #[test]
    fn test_missing_service_without_file() {
        let cli = CliConfig {
            cluster: Some("prod".to_string()),
            service: None,
            region: None,
            config: None,
            event_file: None,
            dry_run: false,
            verbose: false,
        };
        assert!(matches!(
            cli.resolve(),
            Err(RedeployError::MissingConfigError { ref field }) if field == "service"
        ));
    }
}
