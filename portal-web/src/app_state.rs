use portal_service::InformasiService;
use std::sync::Arc;

/// 应用状态
///
/// 管线对外只暴露服务trait；认证/角色门由部署环境在路由之外提供。
#[derive(Clone)]
pub struct AppState {
    pub informasi_service: Arc<dyn InformasiService>,
}
