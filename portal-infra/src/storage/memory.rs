use async_trait::async_trait;
use portal_api::storage::{ObjectMetadata, ObjectStore, UploadTarget};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// InMemoryObjectStore 进程内对象存储
///
/// 无外部存储配置时的开发后端，同时是管线测试的标准替身：
/// `put_with_metadata`可以伪造任意声明元数据，覆盖策略拒绝路径。
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<String, ObjectMetadata>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个对象及其声明元数据
    pub async fn put_with_metadata(
        &self,
        storage_ref: &str,
        content_type: &str,
        content_length: Option<u64>,
    ) {
        self.objects.write().await.insert(
            storage_ref.to_string(),
            ObjectMetadata {
                content_type: content_type.to_string(),
                content_length,
            },
        );
    }

    /// 对象是否仍然存在（测试里检查拒绝后的删除后置条件）
    pub async fn contains(&self, storage_ref: &str) -> bool {
        self.objects.read().await.contains_key(storage_ref)
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn get_url(&self, storage_ref: &str) -> anyhow::Result<Option<String>> {
        let objects = self.objects.read().await;
        Ok(objects
            .contains_key(storage_ref)
            .then(|| format!("memory://objects/{storage_ref}")))
    }

    async fn metadata(&self, storage_ref: &str) -> anyhow::Result<ObjectMetadata> {
        let objects = self.objects.read().await;
        objects
            .get(storage_ref)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("object not found: {storage_ref}"))
    }

    async fn delete(&self, storage_ref: &str) -> anyhow::Result<()> {
        self.objects.write().await.remove(storage_ref);
        Ok(())
    }

    async fn generate_upload_url(&self) -> anyhow::Result<UploadTarget> {
        let storage_ref = Uuid::new_v4().to_string();
        let url = format!("memory://upload/{storage_ref}");
        Ok(UploadTarget { storage_ref, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registered_object_is_resolvable() {
        let store = InMemoryObjectStore::new();
        store
            .put_with_metadata("ref1", "image/jpeg", Some(1024))
            .await;

        assert!(store.get_url("ref1").await.unwrap().is_some());
        let metadata = store.metadata("ref1").await.unwrap();
        assert_eq!(metadata.content_type, "image/jpeg");
        assert_eq!(metadata.content_length, Some(1024));
    }

    #[tokio::test]
    async fn test_deleted_object_becomes_unavailable() {
        let store = InMemoryObjectStore::new();
        store.put_with_metadata("ref2", "image/png", None).await;
        store.delete("ref2").await.unwrap();

        assert!(store.get_url("ref2").await.unwrap().is_none());
        assert!(store.metadata("ref2").await.is_err());
        assert!(!store.contains("ref2").await);
    }
}
