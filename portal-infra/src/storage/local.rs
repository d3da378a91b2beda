use async_trait::async_trait;
use portal_api::storage::{ObjectMetadata, ObjectStore, UploadTarget};
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// 本地文件对象存储
///
/// 对象内容存放在`{base_path}/{ref}`，声明元数据存放在sidecar
/// `{base_path}/{ref}.meta.json`。`metadata`只读sidecar，从不打开
/// 对象内容本身。
pub struct LocalObjectStore {
    base_path: PathBuf,
    /// 对外可访问URL的前缀，例如`http://localhost:8090/uploads`
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(base_path: PathBuf, public_base_url: String) -> Self {
        Self {
            base_path,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn object_path(&self, storage_ref: &str) -> PathBuf {
        self.base_path.join(storage_ref)
    }

    fn sidecar_path(&self, storage_ref: &str) -> PathBuf {
        self.base_path.join(format!("{storage_ref}.meta.json"))
    }

    /// 写入对象与sidecar元数据
    ///
    /// 生产环境中客户端通过上传URL直接写入；这个入口供开发模式
    /// 与测试填充对象使用。
    pub async fn put(
        &self,
        storage_ref: &str,
        content: &[u8],
        content_type: &str,
    ) -> anyhow::Result<()> {
        let path = self.object_path(storage_ref);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, content).await?;

        let metadata = ObjectMetadata {
            content_type: content_type.to_string(),
            content_length: Some(content.len() as u64),
        };
        fs::write(
            self.sidecar_path(storage_ref),
            serde_json::to_vec(&metadata)?,
        )
        .await?;
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn get_url(&self, storage_ref: &str) -> anyhow::Result<Option<String>> {
        if !self.exists(&self.object_path(storage_ref)).await {
            return Ok(None);
        }
        Ok(Some(format!("{}/{}", self.public_base_url, storage_ref)))
    }

    async fn metadata(&self, storage_ref: &str) -> anyhow::Result<ObjectMetadata> {
        let raw = fs::read(self.sidecar_path(storage_ref)).await?;
        let metadata: ObjectMetadata = serde_json::from_slice(&raw)?;
        Ok(metadata)
    }

    async fn delete(&self, storage_ref: &str) -> anyhow::Result<()> {
        let path = self.object_path(storage_ref);
        if self.exists(&path).await {
            fs::remove_file(&path).await?;
        }
        let sidecar = self.sidecar_path(storage_ref);
        if self.exists(&sidecar).await {
            fs::remove_file(&sidecar).await?;
        }
        Ok(())
    }

    async fn generate_upload_url(&self) -> anyhow::Result<UploadTarget> {
        let storage_ref = Uuid::new_v4().to_string();
        fs::create_dir_all(&self.base_path).await?;
        // 本地后端的"上传URL"就是目标文件路径
        let url = self.object_path(&storage_ref).display().to_string();
        Ok(UploadTarget { storage_ref, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_metadata_and_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(
            dir.path().to_path_buf(),
            "http://localhost:8090/uploads/".to_string(),
        );

        store.put("foto-1", b"bytes", "image/png").await.unwrap();

        let url = store.get_url("foto-1").await.unwrap();
        assert_eq!(url.as_deref(), Some("http://localhost:8090/uploads/foto-1"));

        let metadata = store.metadata("foto-1").await.unwrap();
        assert_eq!(metadata.content_type, "image/png");
        assert_eq!(metadata.content_length, Some(5));
    }

    #[tokio::test]
    async fn test_delete_removes_object_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(
            dir.path().to_path_buf(),
            "http://localhost:8090/uploads".to_string(),
        );

        store.put("foto-2", b"bytes", "image/jpeg").await.unwrap();
        store.delete("foto-2").await.unwrap();

        assert!(store.get_url("foto-2").await.unwrap().is_none());
        assert!(store.metadata("foto-2").await.is_err());
    }

    #[tokio::test]
    async fn test_missing_object_resolves_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(
            dir.path().to_path_buf(),
            "http://localhost:8090/uploads".to_string(),
        );
        assert!(store.get_url("tidak-ada").await.unwrap().is_none());
    }
}
