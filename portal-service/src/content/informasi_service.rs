use crate::content::slug::{ensure_unique_slug, slugify};
use crate::content::upload_verifier::UploadVerifier;
use crate::content::validator;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portal_api::error::IngestError;
use portal_api::repository::InformasiRepository;
use portal_api::storage::{ObjectStore, UploadTarget};
use portal_domain::content::constant::PUBLISHED_LIST_LIMIT;
use portal_domain::content::{Informasi, InformasiStatus, InformasiType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const DEFAULT_STATUS: &str = "draft";

/// 遗留umum入口的创建请求
#[derive(Debug, Clone)]
pub struct CreateGeneralRequest {
    pub title: String,
    pub description: String,
    pub photo_id: Option<String>,
    pub status: Option<String>,
}

/// 遗留galeri入口的创建请求
#[derive(Debug, Clone)]
pub struct CreateGalleryRequest {
    pub title: String,
    pub description: Option<String>,
    pub image_ids: Vec<String>,
    pub status: Option<String>,
}

/// 遗留artikel入口的创建请求
#[derive(Debug, Clone)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub cover_image_id: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_image_id: Option<String>,
    pub status: Option<String>,
}

/// 统一入口的创建请求
#[derive(Debug, Clone)]
pub struct CreateInformasiRequest {
    pub kind: String,
    pub title: String,
    pub meta: String,
    pub content: Option<String>,
    pub cover_image_id: Option<String>,
    pub tags: Vec<String>,
    pub category: String,
    pub status: String,
}

/// 创建成功的返回：记录标识与分配到的slug
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedInformasi {
    pub id: String,
    pub slug: String,
}

/// 门户列表条目（简化版，带已解析的封面URL）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedInformasi {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InformasiType,
    pub title: String,
    pub description: Option<String>,
    pub status: InformasiStatus,
    pub slug: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
}

/// 按slug查询的详情
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformasiDetail {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InformasiType,
    pub title: String,
    pub description: String,
    pub status: InformasiStatus,
    pub slug: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
    pub content: Option<String>,
}

/// Informasi服务trait：摄取管线的入口点集合
///
/// 每个创建入口按同一顺序执行：验证上传 → 校验字段 → 分配slug →
/// 写入记录。任何一步失败都会中止整个操作，不会留下部分记录；
/// 已被拒绝删除的对象保持删除状态。
#[async_trait]
pub trait InformasiService: Send + Sync {
    /// 创建普通公告（umum）
    async fn create_general(
        &self,
        request: CreateGeneralRequest,
    ) -> Result<CreatedInformasi, IngestError>;

    /// 创建照片图库（galeri）
    async fn create_gallery(
        &self,
        request: CreateGalleryRequest,
    ) -> Result<CreatedInformasi, IngestError>;

    /// 创建富文本文章（artikel）
    async fn create_article(
        &self,
        request: CreateArticleRequest,
    ) -> Result<CreatedInformasi, IngestError>;

    /// 统一创建入口（umum/galeri/artikel共用一套规则表）
    async fn create_informasi(
        &self,
        request: CreateInformasiRequest,
    ) -> Result<CreatedInformasi, IngestError>;

    /// 签发短期上传URL（委托给对象存储能力）
    async fn generate_upload_url(&self) -> Result<UploadTarget, IngestError>;

    /// 列出已发布内容，最新在前，上限50条
    async fn list_informasi(&self) -> Result<Vec<ListedInformasi>, IngestError>;

    /// 按slug查询详情
    async fn get_informasi_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<InformasiDetail>, IngestError>;
}

/// 默认Informasi服务实现
///
/// 请求处理是短生命周期的：每次调用只依赖自己的局部变量和两个
/// 协作者的当前内容，进程内不共享任何可变状态（没有slug缓存，
/// 也没有跨请求的上传追踪）。
pub struct DefaultInformasiService<R: InformasiRepository, S: ObjectStore> {
    repo: Arc<R>,
    store: Arc<S>,
}

impl<R: InformasiRepository, S: ObjectStore> DefaultInformasiService<R, S> {
    pub fn new(repo: Arc<R>, store: Arc<S>) -> Self {
        Self { repo, store }
    }

    /// 写入阶段：组装完整记录并单次原子插入
    ///
    /// 时间戳在这里统一生成；publishedAt只在以published状态创建时
    /// 设置。插入失败时不存在任何记录。
    async fn write_record(&self, mut record: Informasi) -> Result<CreatedInformasi, IngestError> {
        let now = Utc::now();
        record.id = Uuid::new_v4().to_string();
        record.created_at = now;
        record.updated_at = now;
        if record.status == InformasiStatus::Published {
            record.published_at = Some(now);
        }

        let id = record.id.clone();
        let slug = record.slug.clone();
        let kind = record.kind;

        self.repo
            .insert(record)
            .await
            .map_err(|e| IngestError::Persistence(e.to_string()))?;

        info!(%kind, %slug, "informasi dibuat");
        Ok(CreatedInformasi { id, slug })
    }

    async fn allocate_slug(&self, title: &str) -> Result<String, IngestError> {
        let base = slugify(title);
        ensure_unique_slug(self.repo.as_ref(), &base).await
    }

    /// 封面URL解析；存储错误按不可用处理，不阻断读路径
    async fn resolve_cover_url(&self, record: &Informasi) -> Option<String> {
        let candidate = record.cover_candidate()?;
        match self.store.get_url(candidate).await {
            Ok(url) => url,
            Err(_) => None,
        }
    }

    fn blank_record(kind: InformasiType, title: String, slug: String, status: InformasiStatus) -> Informasi {
        Informasi {
            id: String::new(),
            kind,
            title,
            slug,
            status,
            description: None,
            content: None,
            cover_image_id: None,
            image_ids: None,
            tags: None,
            category: None,
            meta: None,
            meta_title: None,
            meta_description: None,
            meta_image_id: None,
            published_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            author_id: None,
        }
    }
}

#[async_trait]
impl<R: InformasiRepository, S: ObjectStore> InformasiService for DefaultInformasiService<R, S> {
    async fn create_general(
        &self,
        request: CreateGeneralRequest,
    ) -> Result<CreatedInformasi, IngestError> {
        let verifier = UploadVerifier::new(self.store.as_ref());
        if let Some(ref photo_id) = request.photo_id {
            verifier.verify(photo_id, "file").await?;
        }

        let status_raw = request.status.as_deref().unwrap_or(DEFAULT_STATUS);
        let status = validator::validate_general(&request.title, &request.description, status_raw)?;

        let slug = self.allocate_slug(&request.title).await?;

        let mut record =
            Self::blank_record(InformasiType::Umum, request.title, slug, status);
        record.description = Some(request.description);
        record.cover_image_id = request.photo_id;
        self.write_record(record).await
    }

    async fn create_gallery(
        &self,
        request: CreateGalleryRequest,
    ) -> Result<CreatedInformasi, IngestError> {
        let verifier = UploadVerifier::new(self.store.as_ref());
        verifier.verify_all(&request.image_ids).await?;

        let status_raw = request.status.as_deref().unwrap_or(DEFAULT_STATUS);
        let status =
            validator::validate_gallery(&request.title, &request.image_ids, status_raw)?;

        let slug = self.allocate_slug(&request.title).await?;

        let mut record =
            Self::blank_record(InformasiType::Galeri, request.title, slug, status);
        record.description = request.description;
        record.image_ids = Some(request.image_ids);
        self.write_record(record).await
    }

    async fn create_article(
        &self,
        request: CreateArticleRequest,
    ) -> Result<CreatedInformasi, IngestError> {
        let verifier = UploadVerifier::new(self.store.as_ref());
        verifier.verify(&request.cover_image_id, "cover image").await?;
        if let Some(ref meta_image_id) = request.meta_image_id {
            verifier.verify(meta_image_id, "meta image").await?;
        }

        let status_raw = request.status.as_deref().unwrap_or(DEFAULT_STATUS);
        let status =
            validator::validate_article(&request.title, &request.content, status_raw)?;

        let slug = self.allocate_slug(&request.title).await?;

        let mut record =
            Self::blank_record(InformasiType::Artikel, request.title, slug, status);
        record.content = Some(request.content);
        record.cover_image_id = Some(request.cover_image_id);
        record.meta_title = request.meta_title;
        record.meta_description = request.meta_description;
        record.meta_image_id = request.meta_image_id;
        self.write_record(record).await
    }

    async fn create_informasi(
        &self,
        request: CreateInformasiRequest,
    ) -> Result<CreatedInformasi, IngestError> {
        let verifier = UploadVerifier::new(self.store.as_ref());
        if let Some(ref cover_image_id) = request.cover_image_id {
            verifier.verify(cover_image_id, "cover image").await?;
        }

        let (kind, status) = validator::validate_unified(
            &request.kind,
            &request.status,
            &request.title,
            &request.meta,
            request.content.as_deref(),
            &request.category,
        )?;

        let slug = self.allocate_slug(&request.title).await?;

        let mut record = Self::blank_record(kind, request.title, slug, status);
        // 向后兼容：meta同时落在description字段
        record.description = Some(request.meta.clone());
        record.meta = Some(request.meta);
        record.content = request.content;
        record.cover_image_id = request.cover_image_id;
        record.tags = Some(request.tags);
        record.category = Some(request.category);
        self.write_record(record).await
    }

    async fn generate_upload_url(&self) -> Result<UploadTarget, IngestError> {
        self.store
            .generate_upload_url()
            .await
            .map_err(|e| IngestError::UploadUnavailable(e.to_string()))
    }

    async fn list_informasi(&self) -> Result<Vec<ListedInformasi>, IngestError> {
        let rows = self
            .repo
            .list_published(PUBLISHED_LIST_LIMIT)
            .await
            .map_err(|e| IngestError::Persistence(e.to_string()))?;

        let mut listed = Vec::with_capacity(rows.len());
        for row in rows {
            let cover_url = self.resolve_cover_url(&row).await;
            listed.push(ListedInformasi {
                id: row.id,
                kind: row.kind,
                title: row.title,
                description: row.description,
                status: row.status,
                slug: row.slug,
                created_at: row.created_at,
                cover_url,
            });
        }
        Ok(listed)
    }

    async fn get_informasi_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<InformasiDetail>, IngestError> {
        let row = self
            .repo
            .find_by_slug(slug)
            .await
            .map_err(|e| IngestError::Persistence(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let cover_url = self.resolve_cover_url(&row).await;
        let description = row
            .description
            .clone()
            .or_else(|| row.meta.clone())
            .unwrap_or_default();

        Ok(Some(InformasiDetail {
            id: row.id,
            kind: row.kind,
            title: row.title,
            description,
            status: row.status,
            slug: row.slug,
            created_at: row.created_at,
            category: row.category,
            tags: row.tags.unwrap_or_default(),
            cover_url,
            content: row.content,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_infra::database::InMemoryInformasiRepository;
    use portal_infra::storage::InMemoryObjectStore;

    fn service() -> (
        DefaultInformasiService<InMemoryInformasiRepository, InMemoryObjectStore>,
        Arc<InMemoryInformasiRepository>,
        Arc<InMemoryObjectStore>,
    ) {
        let repo = Arc::new(InMemoryInformasiRepository::new());
        let store = Arc::new(InMemoryObjectStore::new());
        let service = DefaultInformasiService::new(repo.clone(), store.clone());
        (service, repo, store)
    }

    #[tokio::test]
    async fn test_create_gallery_end_to_end_with_slug_collision() {
        let (service, _repo, store) = service();
        store
            .put_with_metadata("ref1", "image/jpeg", Some(1024))
            .await;
        store
            .put_with_metadata("ref2", "image/jpeg", Some(2048))
            .await;

        let request = CreateGalleryRequest {
            title: "Pensi 2024".to_string(),
            description: Some("desc".to_string()),
            image_ids: vec!["ref1".to_string(), "ref2".to_string()],
            status: Some("draft".to_string()),
        };
        let first = service.create_gallery(request.clone()).await.unwrap();
        assert_eq!(first.slug, "pensi-2024");
        assert!(!first.id.is_empty());

        let second = service.create_gallery(request).await.unwrap();
        assert_eq!(second.slug, "pensi-2024-2");
    }

    #[tokio::test]
    async fn test_create_general_oversize_photo_writes_no_record() {
        let (service, _repo, store) = service();
        // 10 MiB的图片超过5MB上限
        store
            .put_with_metadata("besar", "image/png", Some(10 * 1024 * 1024))
            .await;

        let err = service
            .create_general(CreateGeneralRequest {
                title: "Libur".to_string(),
                description: "desc".to_string(),
                photo_id: Some("besar".to_string()),
                status: Some("published".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, IngestError::UploadPolicyViolation(_)));
        assert!(!store.contains("besar").await);
        assert!(service.list_informasi().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_general_defaults_to_draft() {
        let (service, repo, _store) = service();
        let created = service
            .create_general(CreateGeneralRequest {
                title: "Pengumuman".to_string(),
                description: "isi".to_string(),
                photo_id: None,
                status: None,
            })
            .await
            .unwrap();

        let stored = repo.find_by_slug(&created.slug).await.unwrap().unwrap();
        assert_eq!(stored.status, InformasiStatus::Draft);
        assert!(stored.published_at.is_none());
        // 草稿不出现在门户列表
        assert!(service.list_informasi().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_article_sets_published_at() {
        let (service, repo, store) = service();
        store
            .put_with_metadata("cover", "image/jpeg", Some(1024))
            .await;

        let created = service
            .create_article(CreateArticleRequest {
                title: "Artikel Baru".to_string(),
                content: "[{\"type\":\"p\"}]".to_string(),
                cover_image_id: "cover".to_string(),
                meta_title: None,
                meta_description: None,
                meta_image_id: None,
                status: Some("published".to_string()),
            })
            .await
            .unwrap();

        let stored = repo.find_by_slug(&created.slug).await.unwrap().unwrap();
        assert_eq!(stored.kind, InformasiType::Artikel);
        assert!(stored.published_at.is_some());
        assert_eq!(stored.created_at, stored.updated_at);
    }

    #[tokio::test]
    async fn test_create_article_rejected_meta_image_aborts_everything() {
        let (service, _repo, store) = service();
        store
            .put_with_metadata("cover", "image/jpeg", Some(1024))
            .await;
        store
            .put_with_metadata("meta", "application/pdf", Some(1024))
            .await;

        let err = service
            .create_article(CreateArticleRequest {
                title: "Artikel".to_string(),
                content: "[]".to_string(),
                cover_image_id: "cover".to_string(),
                meta_title: None,
                meta_description: None,
                meta_image_id: Some("meta".to_string()),
                status: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, IngestError::UploadPolicyViolation(_)));
        // 被拒的meta image已删除；cover已验证过但本次不落库
        assert!(!store.contains("meta").await);
        assert!(service.list_informasi().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_informasi_unified_path() {
        let (service, repo, _store) = service();
        let created = service
            .create_informasi(CreateInformasiRequest {
                kind: "umum".to_string(),
                title: "Penerimaan Siswa".to_string(),
                meta: "Info PPDB".to_string(),
                content: None,
                cover_image_id: None,
                tags: vec!["ppdb".to_string(), "sekolah".to_string()],
                category: "pengumuman".to_string(),
                status: "published".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.slug, "penerimaan-siswa");

        let stored = repo.find_by_slug("penerimaan-siswa").await.unwrap().unwrap();
        assert_eq!(stored.meta.as_deref(), Some("Info PPDB"));
        assert_eq!(stored.description.as_deref(), Some("Info PPDB"));
        assert_eq!(stored.category.as_deref(), Some("pengumuman"));

        let listed = service.list_informasi().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].slug, "penerimaan-siswa");
    }

    #[tokio::test]
    async fn test_unified_path_requires_category() {
        let (service, _repo, _store) = service();
        let err = service
            .create_informasi(CreateInformasiRequest {
                kind: "umum".to_string(),
                title: "T".to_string(),
                meta: "M".to_string(),
                content: None,
                cover_image_id: None,
                tags: vec![],
                category: "  ".to_string(),
                status: "draft".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::InputInvalid(_)));
    }

    #[tokio::test]
    async fn test_get_by_slug_resolves_gallery_cover_from_first_image() {
        let (service, _repo, store) = service();
        store
            .put_with_metadata("ref1", "image/jpeg", Some(10))
            .await;
        store
            .put_with_metadata("ref2", "image/jpeg", Some(10))
            .await;

        service
            .create_gallery(CreateGalleryRequest {
                title: "Galeri Foto".to_string(),
                description: None,
                image_ids: vec!["ref1".to_string(), "ref2".to_string()],
                status: Some("published".to_string()),
            })
            .await
            .unwrap();

        let detail = service
            .get_informasi_by_slug("galeri-foto")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            detail.cover_url.as_deref(),
            Some("memory://objects/ref1")
        );
        assert!(service
            .get_informasi_by_slug("tidak-ada")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_generate_upload_url_returns_fresh_ref() {
        let (service, _repo, _store) = service();
        let a = service.generate_upload_url().await.unwrap();
        let b = service.generate_upload_url().await.unwrap();
        assert_ne!(a.storage_ref, b.storage_ref);
        assert!(!a.url.is_empty());
    }
}
