mod cli;

use crate::cli::{Cli, Commands};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use camera_members_server::AppConfig;
use camera_members_server::application::use_cases::{
    CaptureSnapshotUseCase, InitializeDatabaseUseCase, RunApplicationUseCase,
};
use camera_members_server::debug::{DebugConfig, init_logging, log_error_details};
use camera_members_server::infrastructure::camera::FswebcamFrameSource;
use camera_members_server::infrastructure::persistence::MySqlMemberRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // 環境変数と `run` のフラグから一度だけ組み立てる
    let config = {
        let mut config = AppConfig::from_env();
        if let Commands::Run { port, host, .. } = &cli.command {
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(host) = host {
                config.server.host = host.clone();
            }
        }
        config
    };

    // Initialize logging
    let debug_config = match &config.log_directory {
        Some(directory) => DebugConfig::production(directory.clone()),
        None if cli.debug => DebugConfig::development(),
        None => DebugConfig::default(),
    };
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        build = env!("BUILD_TIMESTAMP"),
        "Starting camera members server"
    );

    match cli.command {
        Commands::Run { memory_store, .. } => {
            info!(
                host = %config.server.host,
                port = config.server.port,
                database = ?config.database,
                camera = ?config.camera,
                "Configuration loaded"
            );

            let use_case = RunApplicationUseCase::new(config);
            match use_case.execute(memory_store).await {
                Ok(_) => {
                    info!("Application terminated normally");
                }
                Err(e) => {
                    log_error_details(&*e, "run");
                    eprintln!("❌ Application failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::InitDb => {
            info!("Initializing members table...");
            let repository = Arc::new(MySqlMemberRepository::connect_lazy(&config.database));
            let use_case = InitializeDatabaseUseCase::new(
                repository,
                config.database.init_attempts,
                config.database.init_retry_delay,
            );

            match use_case.execute().await {
                Ok(_) => {
                    println!("✅ members table is ready");
                }
                Err(e) => {
                    error!("Database initialization failed: {}", e);
                    eprintln!("❌ Database initialization failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Snapshot { output } => {
            let frame_source = Arc::new(FswebcamFrameSource::new(config.camera.clone()));
            let use_case = CaptureSnapshotUseCase::new(frame_source);

            match use_case.execute(&output).await {
                Ok(bytes) => {
                    println!("📷 Saved {} bytes to {}", bytes, output.display());
                }
                Err(e) => {
                    log_error_details(&*e, "snapshot");
                    eprintln!("❌ Snapshot failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
