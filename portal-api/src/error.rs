use thiserror::Error;

/// 内容摄取管线的错误分类
///
/// 每个变体对应一类失败：任何一个错误都会中止整个创建操作，
/// 不会留下半写入的记录。
#[derive(Error, Debug)]
pub enum IngestError {
    /// 字段校验失败（标题/meta/分类缺失、非法的type/status枚举值）
    /// 调用方修正输入后可以直接重试
    #[error("{0}")]
    InputInvalid(String),

    /// 上传策略违规（非图片类型、超过大小上限）
    /// 被拒绝的对象在错误抛出前已经被删除
    #[error("{0}")]
    UploadPolicyViolation(String),

    /// 上传对象不可用（URL解析失败、元数据获取失败）
    /// 属于环境错误，调用方需要重新走完整的上传流程
    #[error("{0}")]
    UploadUnavailable(String),

    /// 持久化写入失败，不存在部分写入的记录
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// slug探测次数超过上限，关闭失败（fail closed）
    #[error("Slug allocation exhausted for base '{0}'")]
    SlugAllocationExhausted(String),
}

impl From<anyhow::Error> for IngestError {
    fn from(err: anyhow::Error) -> Self {
        IngestError::Persistence(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
