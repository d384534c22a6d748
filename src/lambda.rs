#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use rotation_redeploy::core::TargetProvider;
#[cfg(feature = "lambda")]
use rotation_redeploy::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use rotation_redeploy::{
    DeploymentTarget, EcsDeployer, RedeployEngine, RedeployResponse, TargetConfig,
};
#[cfg(feature = "lambda")]
use serde_json::Value;

#[cfg(feature = "lambda")]
async fn function_handler(
    engine: &RedeployEngine<EcsDeployer>,
    event: LambdaEvent<Value>,
) -> Result<RedeployResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Handling rotation event");

    let response = engine.handle(&event.payload).await?;
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時載入配置；缺少環境變數直接讓初始化失敗
    let config = TargetConfig::from_env()?;
    config.validate()?;

    let deployer = EcsDeployer::from_env(config.region()).await;
    let engine = RedeployEngine::new(deployer, DeploymentTarget::from_provider(&config));

    tracing::info!(
        "Rotation redeploy hook ready for {}/{}",
        engine.target().cluster,
        engine.target().service
    );

    let engine = &engine;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(engine, event).await
    }))
    .await
}
