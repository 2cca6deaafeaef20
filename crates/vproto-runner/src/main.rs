//! Spec generation runner binary.
//!
//! Usage: vproto-runner <group> <description> <scene_json> [object_name...]

use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vproto_runner::{
    run_generation, AgentServiceClient, RunRequest, RunnerConfig,
};
use vproto_upload::{FileStoreClient, ImageStore};

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("vproto=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting vproto-runner");

    let request = match parse_args(std::env::args().skip(1).collect()) {
        Ok(r) => r,
        Err(message) => {
            error!("{}", message);
            std::process::exit(1);
        }
    };

    let config = RunnerConfig::from_env();
    info!("Runner config: {:?}", config);

    let store = if config.upload_images {
        match FileStoreClient::from_env() {
            Ok(client) => Some(client),
            Err(e) => {
                error!("Failed to create file store client: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let pipeline = match AgentServiceClient::from_env() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to create pipeline client: {}", e);
            std::process::exit(1);
        }
    };

    let store_ref = store.as_ref().map(|s| s as &dyn ImageStore);
    match run_generation(&request, &config, store_ref, &pipeline).await {
        Ok(summary) => {
            info!(
                "OK: {} batch(es), {} image(s); files generated in {}",
                summary.batch_count,
                summary.total_images,
                summary.spec_dir.display()
            );
        }
        Err(e) => {
            error!("Run failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Parse positional args: group, description, scene JSON path, then
/// any number of requested object names.
fn parse_args(args: Vec<String>) -> Result<RunRequest, String> {
    let mut args = args.into_iter();
    let group = args.next().unwrap_or_else(|| "GeneratedGroup".to_string());
    let description = args.next().unwrap_or_default();
    if description.is_empty() {
        return Err("No description provided; pass at least a short scene description".to_string());
    }
    let scene_path = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| "No scene JSON path provided".to_string())?;
    let object_names: Vec<String> = args.collect();

    Ok(RunRequest {
        group,
        description,
        scene_path,
        object_names,
    })
}
