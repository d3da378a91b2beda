use async_trait::async_trait;
use portal_domain::content::Informasi;

/// Informasi仓储trait，定义内容记录的数据访问操作
///
/// slug的唯一性依赖`find_by_slug`的读后写探测；并发创建同一base slug
/// 时两个调用方可能同时探测到空位并各自提交，产生重复slug。SQL后端
/// 通过slug列的唯一索引在事务层拒绝重复，内存后端只有探测循环本身。
#[async_trait]
pub trait InformasiRepository: Send + Sync {
    /// 单次原子插入一条完整记录
    async fn insert(&self, record: Informasi) -> anyhow::Result<()>;

    /// 按slug精确查找
    async fn find_by_slug(&self, slug: &str) -> anyhow::Result<Option<Informasi>>;

    /// 列出已发布记录，按创建时间倒序，最多`limit`条
    async fn list_published(&self, limit: usize) -> anyhow::Result<Vec<Informasi>>;
}
