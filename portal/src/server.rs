use crate::config::Config;
use crate::error::PortalError;
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use portal_infra::database::{InMemoryInformasiRepository, SeaOrmInformasiRepository};
use portal_infra::storage::LocalObjectStore;
use portal_service::{DefaultInformasiService, InformasiService};
use portal_web::AppState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

/// 创建应用路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Informasi摄取与读取路由
        .route(
            "/api/v1alpha1/informasi",
            get(portal_web::list_informasi).post(portal_web::create_informasi),
        )
        .route(
            "/api/v1alpha1/informasi/general",
            post(portal_web::create_general),
        )
        .route(
            "/api/v1alpha1/informasi/gallery",
            post(portal_web::create_gallery),
        )
        .route(
            "/api/v1alpha1/informasi/article",
            post(portal_web::create_article),
        )
        .route(
            "/api/v1alpha1/informasi/upload-url",
            post(portal_web::generate_upload_url),
        )
        .route(
            "/api/v1alpha1/informasi/:slug",
            get(portal_web::get_informasi_by_slug),
        )
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

/// 健康检查端点
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// 初始化应用状态
///
/// 配置了数据库URL时使用Sea-ORM仓储（slug列带唯一索引），
/// 否则退回进程内仓储（开发模式）。
pub async fn init_app_state(config: &Config) -> Result<AppState, PortalError> {
    let store = Arc::new(LocalObjectStore::new(
        config.storage.root.clone(),
        config.storage.public_base_url.clone(),
    ));

    let informasi_service: Arc<dyn InformasiService> = match &config.database.url {
        Some(url) => {
            let db = sea_orm::Database::connect(url.as_str())
                .await
                .map_err(|e| PortalError::Database(e.to_string()))?;
            let repo = Arc::new(SeaOrmInformasiRepository::new(Arc::new(db)));
            info!("Using Sea-ORM repository");
            Arc::new(DefaultInformasiService::new(repo, store))
        }
        None => {
            let repo = Arc::new(InMemoryInformasiRepository::new());
            info!("No database configured, using in-memory repository");
            Arc::new(DefaultInformasiService::new(repo, store))
        }
    };

    Ok(AppState { informasi_service })
}
