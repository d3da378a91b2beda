use async_trait::async_trait;
use portal_api::repository::InformasiRepository;
use portal_domain::content::Informasi;
use tokio::sync::RwLock;

/// InMemoryInformasiRepository 进程内仓储
///
/// 无数据库配置时的开发/测试后端。没有唯一索引，slug唯一性
/// 完全依赖分配器的探测循环。
#[derive(Default)]
pub struct InMemoryInformasiRepository {
    records: RwLock<Vec<Informasi>>,
}

impl InMemoryInformasiRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InformasiRepository for InMemoryInformasiRepository {
    async fn insert(&self, record: Informasi) -> anyhow::Result<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> anyhow::Result<Option<Informasi>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.slug == slug).cloned())
    }

    async fn list_published(&self, limit: usize) -> anyhow::Result<Vec<Informasi>> {
        let records = self.records.read().await;
        let mut published: Vec<Informasi> = records
            .iter()
            .filter(|r| r.is_published())
            .cloned()
            .collect();
        published.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        published.truncate(limit);
        Ok(published)
    }
}
