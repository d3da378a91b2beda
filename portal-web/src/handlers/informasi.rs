use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portal_api::error::IngestError;
use portal_service::{
    CreateArticleRequest, CreateGalleryRequest, CreateGeneralRequest, CreateInformasiRequest,
};
use serde::{Deserialize, Serialize};

/// 错误响应体：描述性文本直接透给调用方/UI
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// IngestError到HTTP状态码的映射
fn error_response(err: IngestError) -> Response {
    let status = match err {
        IngestError::InputInvalid(_) | IngestError::UploadPolicyViolation(_) => {
            StatusCode::BAD_REQUEST
        }
        IngestError::UploadUnavailable(_) => StatusCode::BAD_GATEWAY,
        IngestError::Persistence(_) | IngestError::SlugAllocationExhausted(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorBody {
            message: err.to_string(),
        }),
    )
        .into_response()
}

/// 创建umum请求体
#[derive(Debug, Deserialize)]
pub struct CreateGeneralBody {
    pub title: String,
    pub description: String,
    #[serde(rename = "photoId")]
    pub photo_id: Option<String>,
    pub status: Option<String>,
}

/// 创建galeri请求体
#[derive(Debug, Deserialize)]
pub struct CreateGalleryBody {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "imageIds", default)]
    pub image_ids: Vec<String>,
    pub status: Option<String>,
}

/// 创建artikel请求体
#[derive(Debug, Deserialize)]
pub struct CreateArticleBody {
    pub title: String,
    pub content: String,
    #[serde(rename = "coverImageId")]
    pub cover_image_id: String,
    #[serde(rename = "metaTitle")]
    pub meta_title: Option<String>,
    #[serde(rename = "metaDescription")]
    pub meta_description: Option<String>,
    #[serde(rename = "metaImageId")]
    pub meta_image_id: Option<String>,
    pub status: Option<String>,
}

/// 统一创建请求体
#[derive(Debug, Deserialize)]
pub struct CreateInformasiBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub meta: String,
    pub content: Option<String>,
    #[serde(rename = "coverImageId")]
    pub cover_image_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    pub status: String,
}

/// 创建umum公告
/// POST /api/v1alpha1/informasi/general
pub async fn create_general(
    State(state): State<AppState>,
    Json(body): Json<CreateGeneralBody>,
) -> Response {
    let request = CreateGeneralRequest {
        title: body.title,
        description: body.description,
        photo_id: body.photo_id,
        status: body.status,
    };
    match state.informasi_service.create_general(request).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 创建galeri图库
/// POST /api/v1alpha1/informasi/gallery
pub async fn create_gallery(
    State(state): State<AppState>,
    Json(body): Json<CreateGalleryBody>,
) -> Response {
    let request = CreateGalleryRequest {
        title: body.title,
        description: body.description,
        image_ids: body.image_ids,
        status: body.status,
    };
    match state.informasi_service.create_gallery(request).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 创建artikel文章
/// POST /api/v1alpha1/informasi/article
pub async fn create_article(
    State(state): State<AppState>,
    Json(body): Json<CreateArticleBody>,
) -> Response {
    let request = CreateArticleRequest {
        title: body.title,
        content: body.content,
        cover_image_id: body.cover_image_id,
        meta_title: body.meta_title,
        meta_description: body.meta_description,
        meta_image_id: body.meta_image_id,
        status: body.status,
    };
    match state.informasi_service.create_article(request).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 统一创建入口
/// POST /api/v1alpha1/informasi
pub async fn create_informasi(
    State(state): State<AppState>,
    Json(body): Json<CreateInformasiBody>,
) -> Response {
    let request = CreateInformasiRequest {
        kind: body.kind,
        title: body.title,
        meta: body.meta,
        content: body.content,
        cover_image_id: body.cover_image_id,
        tags: body.tags,
        category: body.category,
        status: body.status,
    };
    match state.informasi_service.create_informasi(request).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 签发短期上传URL
/// POST /api/v1alpha1/informasi/upload-url
pub async fn generate_upload_url(State(state): State<AppState>) -> Response {
    match state.informasi_service.generate_upload_url().await {
        Ok(target) => Json(target).into_response(),
        Err(e) => error_response(e),
    }
}

/// 门户列表（仅published，最新在前，上限50条）
/// GET /api/v1alpha1/informasi
pub async fn list_informasi(State(state): State<AppState>) -> Response {
    match state.informasi_service.list_informasi().await {
        Ok(listed) => Json(listed).into_response(),
        Err(e) => error_response(e),
    }
}

/// 按slug查询详情
/// GET /api/v1alpha1/informasi/{slug}
pub async fn get_informasi_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match state.informasi_service.get_informasi_by_slug(&slug).await {
        Ok(Some(detail)) => Json(detail).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                message: "Informasi tidak ditemukan".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (
                IngestError::InputInvalid("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                IngestError::UploadPolicyViolation("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                IngestError::UploadUnavailable("x".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                IngestError::Persistence("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                IngestError::SlugAllocationExhausted("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(error_response(err).status(), expected);
        }
    }

    #[test]
    fn test_unified_body_wire_names() {
        let body: CreateInformasiBody = serde_json::from_str(
            r#"{
                "type": "artikel",
                "title": "T",
                "meta": "M",
                "content": "[]",
                "coverImageId": "ref1",
                "tags": ["a"],
                "category": "umum",
                "status": "draft"
            }"#,
        )
        .unwrap();
        assert_eq!(body.kind, "artikel");
        assert_eq!(body.cover_image_id.as_deref(), Some("ref1"));
    }
}
