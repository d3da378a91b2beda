use portal_api::error::IngestError;
use portal_api::storage::ObjectStore;
use portal_domain::content::constant::MAX_IMAGE_BYTES;
use tracing::warn;

/// 上传验证器
///
/// 客户端在管线运行之前已经通过短期上传URL把字节写入存储，服务端
/// 看不到原始字节；验证因此与上传解耦，只信任存储子系统声明的
/// 元数据。两步协议：reserve（客户端上传）→ verify-or-discard。
/// 一个引用的终态只有两种：验证通过被保留，或被拒绝并删除——
/// 永远不会变成孤儿对象。
pub struct UploadVerifier<'a, S: ObjectStore + ?Sized> {
    store: &'a S,
    max_bytes: u64,
}

impl<'a, S: ObjectStore + ?Sized> UploadVerifier<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            max_bytes: MAX_IMAGE_BYTES,
        }
    }

    /// 验证单个已上传对象
    ///
    /// 顺序：解析URL（失败是硬错误）→ 元数据获取 → 类型检查 →
    /// 大小检查（上限本身是合法值）。策略违规时先删除对象再抛错，
    /// `label`用于在多文件流程中指明是哪个文件。
    pub async fn verify(&self, storage_ref: &str, label: &str) -> Result<(), IngestError> {
        let url = self
            .store
            .get_url(storage_ref)
            .await
            .map_err(|e| IngestError::UploadUnavailable(e.to_string()))?;
        if url.is_none() {
            return Err(IngestError::UploadUnavailable(format!(
                "URL {label} tidak tersedia"
            )));
        }

        let metadata = self.store.metadata(storage_ref).await.map_err(|_| {
            IngestError::UploadUnavailable(format!("Gagal memeriksa metadata {label}"))
        })?;

        if !metadata.content_type.starts_with("image/") {
            self.discard(storage_ref).await;
            return Err(IngestError::UploadPolicyViolation(format!(
                "{label} harus bertipe gambar"
            )));
        }

        if let Some(length) = metadata.content_length {
            if length > self.max_bytes {
                self.discard(storage_ref).await;
                return Err(IngestError::UploadPolicyViolation(format!(
                    "Ukuran {label} melebihi 5MB"
                )));
            }
        }

        Ok(())
    }

    /// 按提交顺序验证一组对象，首个失败即中止
    ///
    /// 全部通过后才允许进入字段校验；已删除的被拒对象保持删除状态。
    pub async fn verify_all(&self, storage_refs: &[String]) -> Result<(), IngestError> {
        for (index, storage_ref) in storage_refs.iter().enumerate() {
            self.verify(storage_ref, &format!("foto ke-{}", index + 1))
                .await?;
        }
        Ok(())
    }

    /// 删除被拒绝的对象；删除本身失败只记日志，不掩盖策略错误
    async fn discard(&self, storage_ref: &str) {
        if let Err(e) = self.store.delete(storage_ref).await {
            warn!(storage_ref, error = %e, "Gagal menghapus objek yang ditolak");
        }
    }
}
