use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Informasi实体，对应数据库中的informasi表
///
/// slug列带唯一索引：SQL后端在事务层拒绝重复slug，
/// 分配器的探测循环只是唯一性的第一道防线。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "informasi")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(Some(64))")]
    pub id: String,

    /// 内容变体：umum | galeri | artikel
    #[sea_orm(column_name = "type", column_type = "String(Some(16))")]
    pub kind: String,

    pub title: String,

    #[sea_orm(unique, column_type = "String(Some(255))")]
    pub slug: String,

    /// 发布状态：draft | published
    #[sea_orm(column_type = "String(Some(16))")]
    pub status: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// 序列化的富文本树
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,

    #[sea_orm(nullable)]
    pub cover_image_id: Option<String>,

    /// JSON数组：图库的有序图片引用
    #[sea_orm(nullable)]
    pub image_ids: Option<Json>,

    /// JSON数组：自由标签
    #[sea_orm(nullable)]
    pub tags: Option<Json>,

    #[sea_orm(nullable)]
    pub category: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub meta: Option<String>,

    #[sea_orm(nullable)]
    pub meta_title: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub meta_description: Option<String>,

    #[sea_orm(nullable)]
    pub meta_image_id: Option<String>,

    #[sea_orm(nullable)]
    pub published_at: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,

    #[sea_orm(nullable)]
    pub author_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
