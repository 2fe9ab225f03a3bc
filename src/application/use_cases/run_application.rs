use crate::config::{AppConfig, LightConfig};
use crate::domain::camera::FrameSource;
use crate::domain::light::LightDriver;
use crate::domain::members::MemberRepository;
use crate::infrastructure::camera::FswebcamFrameSource;
use crate::infrastructure::light::{CommandLight, PlaceholderLight};
use crate::infrastructure::persistence::{InMemoryMemberRepository, MySqlMemberRepository};
use crate::interfaces::web::AppState;
use crate::interfaces::web::server::create_server;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use super::InitializeDatabaseUseCase;

pub struct RunApplicationUseCase {
    config: AppConfig,
}

impl RunApplicationUseCase {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, memory_store: bool) -> anyhow::Result<()> {
        let addr: SocketAddr =
            format!("{}:{}", self.config.server.host, self.config.server.port).parse()?;

        // Dependency injection
        let members: Arc<dyn MemberRepository> = if memory_store {
            warn!("Using in-memory member store; data is lost on exit");
            Arc::new(InMemoryMemberRepository::new())
        } else {
            Arc::new(MySqlMemberRepository::connect_lazy(&self.config.database))
        };
        let frame_source: Arc<dyn FrameSource> =
            Arc::new(FswebcamFrameSource::new(self.config.camera.clone()));
        let light = build_light_driver(&self.config.light);
        info!(driver = light.name(), "Light driver selected");

        // スキーマが確認できなくても起動は続ける
        let init = InitializeDatabaseUseCase::new(
            members.clone(),
            self.config.database.init_attempts,
            self.config.database.init_retry_delay,
        );
        if let Err(e) = init.execute().await {
            warn!("Starting without a confirmed members schema: {}", e);
        }

        let state = Arc::new(AppState::new(
            members,
            frame_source,
            light,
            self.config.camera.retry_interval,
        ));

        create_server(addr, state).await
    }
}

/// 設定からドライバーを選ぶ。コマンドが使えなければプレースホルダーに戻す
pub fn build_light_driver(config: &LightConfig) -> Arc<dyn LightDriver> {
    match config.command.as_deref().map(CommandLight::from_command_line) {
        Some(Ok(light)) => Arc::new(light),
        Some(Err(e)) => {
            warn!("Failed to configure light command: {}", e);
            warn!("Falling back to placeholder light.");
            Arc::new(PlaceholderLight::new())
        }
        None => Arc::new(PlaceholderLight::new()),
    }
}
