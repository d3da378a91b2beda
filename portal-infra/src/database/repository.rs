use crate::database::entity::{self, Entity as InformasiEntity, Model as InformasiModel};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use portal_api::repository::InformasiRepository;
use portal_domain::content::{Informasi, InformasiStatus, InformasiType};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

/// SeaOrmInformasiRepository 使用Sea-ORM实现的仓储
pub struct SeaOrmInformasiRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmInformasiRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InformasiRepository for SeaOrmInformasiRepository {
    async fn insert(&self, record: Informasi) -> anyhow::Result<()> {
        let model = to_model(&record)?;
        let active_model: entity::ActiveModel = model.into_active_model();

        InformasiEntity::insert(active_model)
            .exec(&*self.db)
            .await
            .context("failed to insert informasi record")?;

        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> anyhow::Result<Option<Informasi>> {
        let result = InformasiEntity::find()
            .filter(entity::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .context("failed to query informasi by slug")?;

        result.map(from_model).transpose()
    }

    async fn list_published(&self, limit: usize) -> anyhow::Result<Vec<Informasi>> {
        let rows = InformasiEntity::find()
            .filter(entity::Column::Status.eq(InformasiStatus::Published.as_str()))
            .order_by_desc(entity::Column::CreatedAt)
            .limit(limit as u64)
            .all(&*self.db)
            .await
            .context("failed to list published informasi")?;

        rows.into_iter().map(from_model).collect()
    }
}

fn to_model(record: &Informasi) -> anyhow::Result<InformasiModel> {
    Ok(InformasiModel {
        id: record.id.clone(),
        kind: record.kind.as_str().to_string(),
        title: record.title.clone(),
        slug: record.slug.clone(),
        status: record.status.as_str().to_string(),
        description: record.description.clone(),
        content: record.content.clone(),
        cover_image_id: record.cover_image_id.clone(),
        image_ids: record
            .image_ids
            .as_ref()
            .map(serde_json::to_value)
            .transpose()?,
        tags: record.tags.as_ref().map(serde_json::to_value).transpose()?,
        category: record.category.clone(),
        meta: record.meta.clone(),
        meta_title: record.meta_title.clone(),
        meta_description: record.meta_description.clone(),
        meta_image_id: record.meta_image_id.clone(),
        published_at: record.published_at,
        created_at: record.created_at,
        updated_at: record.updated_at,
        author_id: record.author_id.clone(),
    })
}

fn from_model(model: InformasiModel) -> anyhow::Result<Informasi> {
    let kind = InformasiType::parse(&model.kind)
        .ok_or_else(|| anyhow!("unknown informasi type in storage: {}", model.kind))?;
    let status = InformasiStatus::parse(&model.status)
        .ok_or_else(|| anyhow!("unknown informasi status in storage: {}", model.status))?;

    Ok(Informasi {
        id: model.id,
        kind,
        title: model.title,
        slug: model.slug,
        status,
        description: model.description,
        content: model.content,
        cover_image_id: model.cover_image_id,
        image_ids: model
            .image_ids
            .map(serde_json::from_value)
            .transpose()
            .context("malformed imageIds column")?,
        tags: model
            .tags
            .map(serde_json::from_value)
            .transpose()
            .context("malformed tags column")?,
        category: model.category,
        meta: model.meta,
        meta_title: model.meta_title,
        meta_description: model.meta_description,
        meta_image_id: model.meta_image_id,
        published_at: model.published_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
        author_id: model.author_id,
    })
}
