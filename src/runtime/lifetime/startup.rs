use crate::config::AppConfig;
use crate::services::AppServices;
use tracing::warn;

pub struct StartupContext {
    pub services: AppServices,
}

/// 准备服务器启动的上下文
/// 包括存储（含迁移）与各实体服务
pub async fn prepare_server_startup(config: &AppConfig) -> StartupContext {
    // 重复安装（例如同一进程内多次启动）时保留已有的 provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let storage = crate::storage::create_storage(&config.database)
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let services = AppServices::new(storage);
    warn!("Entity services initialized");

    StartupContext { services }
}
