use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Informasi实体：门户的统一内容记录
///
/// 三种变体（公告/图库/文章）共用同一张表；变体字段的取舍由
/// 校验器在写入前保证，实体本身不做约束。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Informasi {
    /// 系统分配的唯一标识，写入时生成，之后不可变
    pub id: String,

    /// 内容变体，创建后不可变
    #[serde(rename = "type")]
    pub kind: InformasiType,

    pub title: String,

    /// URL安全的唯一标识，由title派生，创建后永不改变
    pub slug: String,

    pub status: InformasiStatus,

    /// SEO/摘要文本；umum必填，其余变体可选（统一入口全部必填）
    pub description: Option<String>,

    /// 序列化的富文本树，artikel与galeri必填，umum不携带
    pub content: Option<String>,

    /// 封面图引用
    #[serde(rename = "coverImageId")]
    pub cover_image_id: Option<String>,

    /// 图库变体的有序图片引用
    #[serde(rename = "imageIds")]
    pub image_ids: Option<Vec<String>>,

    /// 自由标签；唯一性与顺序无关，展示顺序保留
    pub tags: Option<Vec<String>>,

    pub category: Option<String>,

    /// SEO meta描述（统一入口写入）
    pub meta: Option<String>,

    #[serde(rename = "metaTitle")]
    pub meta_title: Option<String>,

    #[serde(rename = "metaDescription")]
    pub meta_description: Option<String>,

    #[serde(rename = "metaImageId")]
    pub meta_image_id: Option<String>,

    /// 仅在以published状态创建时设置
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,

    /// 可选的作者引用，身份系统在本核心之外
    #[serde(rename = "authorId")]
    pub author_id: Option<String>,
}

impl Informasi {
    /// 检查记录是否已发布
    pub fn is_published(&self) -> bool {
        self.status == InformasiStatus::Published
    }

    /// 封面候选：优先coverImageId，图库变体退回第一张图
    pub fn cover_candidate(&self) -> Option<&str> {
        if let Some(ref cover) = self.cover_image_id {
            return Some(cover.as_str());
        }
        if self.kind == InformasiType::Galeri {
            if let Some(ids) = &self.image_ids {
                return ids.first().map(|s| s.as_str());
            }
        }
        None
    }
}

/// 内容变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InformasiType {
    /// 普通公告
    Umum,
    /// 照片图库
    Galeri,
    /// 富文本文章
    Artikel,
}

impl InformasiType {
    /// 解析用户传入的type字符串；未知值返回None
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "umum" => Some(Self::Umum),
            "galeri" => Some(Self::Galeri),
            "artikel" => Some(Self::Artikel),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Umum => "umum",
            Self::Galeri => "galeri",
            Self::Artikel => "artikel",
        }
    }
}

impl fmt::Display for InformasiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 发布状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InformasiStatus {
    Draft,
    Published,
}

impl InformasiStatus {
    /// 解析用户传入的status字符串；未知值返回None
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for InformasiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
