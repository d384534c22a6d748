use clap::Parser;
use rotation_redeploy::core::TargetProvider;
use rotation_redeploy::utils::{logger, validation::Validate};
use rotation_redeploy::{CliConfig, DeploymentTarget, EcsDeployer, RedeployEngine, RedeployError};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting rotation-redeploy CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("❌ Redeploy failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(cli: CliConfig) -> Result<(), RedeployError> {
    // 驗證配置
    let resolved = cli.resolve()?;
    resolved.target.validate()?;

    let event = match &cli.event_file {
        Some(path) => {
            tracing::info!("📁 Replaying event from {}", path.display());
            let raw = tokio::fs::read_to_string(path).await?;
            serde_json::from_str::<Value>(&raw)?
        }
        None => manual_event(&resolved.target.service_name),
    };

    let deployer = EcsDeployer::from_env(resolved.target.region()).await;
    let engine = RedeployEngine::new(deployer, DeploymentTarget::from_provider(&resolved.target))
        .with_dry_run(resolved.dry_run);

    let response = engine.handle(&event).await?;

    tracing::info!("✅ Redeploy request completed");
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn manual_event(service: &str) -> Value {
    json!({
        "source": "rotation-redeploy.cli",
        "detail-type": "Manual redeploy",
        "time": chrono::Utc::now().to_rfc3339(),
        "detail": { "service": service }
    })
}
