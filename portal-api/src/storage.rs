use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 已上传二进制对象的不透明引用
///
/// 客户端先通过短期上传URL把字节写入存储，再把引用交给管线。
/// 管线只通过`ObjectStore`能力接口访问对象，从不直接读文件内容。
pub type StorageRef = String;

/// 对象的声明元数据（仅元数据，不包含对象内容）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectMetadata {
    /// 声明的MIME类型，例如`image/png`
    #[serde(rename = "contentType")]
    pub content_type: String,

    /// 声明的字节数；存储后端无法确定时为None
    #[serde(rename = "contentLength")]
    pub content_length: Option<u64>,
}

/// 对象存储能力trait
///
/// 任何存储后端都必须实现这四个操作。验证器依赖的两步协议
/// （reserve → verify-or-discard）建立在`metadata`和`delete`之上。
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 解析对象的可访问URL；对象不存在时返回None
    async fn get_url(&self, storage_ref: &str) -> anyhow::Result<Option<String>>;

    /// 获取对象的声明元数据（不下载对象内容）
    async fn metadata(&self, storage_ref: &str) -> anyhow::Result<ObjectMetadata>;

    /// 删除对象；验证被拒绝的上传由此清理
    async fn delete(&self, storage_ref: &str) -> anyhow::Result<()>;

    /// 签发一个短期的可写上传URL，同时返回新对象的引用
    async fn generate_upload_url(&self) -> anyhow::Result<UploadTarget>;
}

/// `generate_upload_url`的结果：对象引用与可写URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadTarget {
    #[serde(rename = "storageRef")]
    pub storage_ref: StorageRef,
    pub url: String,
}
