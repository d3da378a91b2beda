//! 变体相关的字段校验
//!
//! 统一入口与三个遗留入口的规则表重叠但不相同：统一入口对所有
//! 变体都要求meta描述和分类，遗留入口只有umum要求描述。两套规则
//! 有意并存以保持对既有调用方的兼容，差异不做静默合并。
//!
//! 所有函数都是纯函数（无I/O），按固定顺序检查，首个失败即返回。

use portal_api::error::IngestError;
use portal_domain::content::{InformasiStatus, InformasiType};

const STATUS_MESSAGE: &str = "Status harus 'draft' atau 'published'";
const TYPE_MESSAGE: &str = "Type harus 'umum', 'galeri', atau 'artikel'";
const TITLE_MESSAGE: &str = "Judul tidak boleh kosong";

fn parse_status(status: &str) -> Result<InformasiStatus, IngestError> {
    InformasiStatus::parse(status)
        .ok_or_else(|| IngestError::InputInvalid(STATUS_MESSAGE.to_string()))
}

fn require_non_blank(value: &str, message: &str) -> Result<(), IngestError> {
    if value.trim().is_empty() {
        return Err(IngestError::InputInvalid(message.to_string()));
    }
    Ok(())
}

/// 遗留umum入口的规则表：status合法、标题非空、描述非空
pub fn validate_general(
    title: &str,
    description: &str,
    status: &str,
) -> Result<InformasiStatus, IngestError> {
    let status = parse_status(status)?;
    require_non_blank(title, TITLE_MESSAGE)?;
    require_non_blank(description, "Deskripsi tidak boleh kosong")?;
    Ok(status)
}

/// 遗留galeri入口的规则表：图片列表非空、status合法、标题非空
///
/// 描述在这个入口是可选的（与统一入口不同）。
pub fn validate_gallery(
    title: &str,
    image_refs: &[String],
    status: &str,
) -> Result<InformasiStatus, IngestError> {
    if image_refs.is_empty() {
        return Err(IngestError::InputInvalid(
            "Minimal satu foto wajib diunggah".to_string(),
        ));
    }
    let status = parse_status(status)?;
    require_non_blank(title, TITLE_MESSAGE)?;
    Ok(status)
}

/// 遗留artikel入口的规则表：status合法、标题非空、内容非空
pub fn validate_article(
    title: &str,
    content: &str,
    status: &str,
) -> Result<InformasiStatus, IngestError> {
    let status = parse_status(status)?;
    require_non_blank(title, TITLE_MESSAGE)?;
    require_non_blank(content, "Konten tidak boleh kosong untuk tipe artikel")?;
    Ok(status)
}

/// 统一入口的规则表，按顺序：type、status、标题、meta、内容、分类
///
/// meta对所有变体必填；artikel与galeri还要求内容。
pub fn validate_unified(
    kind: &str,
    status: &str,
    title: &str,
    meta: &str,
    content: Option<&str>,
    category: &str,
) -> Result<(InformasiType, InformasiStatus), IngestError> {
    let kind = InformasiType::parse(kind)
        .ok_or_else(|| IngestError::InputInvalid(TYPE_MESSAGE.to_string()))?;
    let status = parse_status(status)?;
    require_non_blank(title, TITLE_MESSAGE)?;
    require_non_blank(meta, "Meta description tidak boleh kosong")?;

    if matches!(kind, InformasiType::Artikel | InformasiType::Galeri)
        && content.map_or(true, |c| c.trim().is_empty())
    {
        return Err(IngestError::InputInvalid(format!(
            "Konten tidak boleh kosong untuk tipe {kind}"
        )));
    }

    require_non_blank(category, "Kategori tidak boleh kosong")?;
    Ok((kind, status))
}
