pub mod informasi;

pub use informasi::{Informasi, InformasiStatus, InformasiType};

/// 内容管理相关的常量
pub mod constant {
    /// 上传图片的大小上限（5 MiB，含边界值本身）
    pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

    /// 门户列表一次最多返回的已发布条目数
    pub const PUBLISHED_LIST_LIMIT: usize = 50;

    /// slug冲突时追加的数字后缀起始值
    pub const SLUG_SUFFIX_START: u32 = 2;

    /// slug探测次数上限，超过则关闭失败
    pub const MAX_SLUG_PROBES: u32 = 1000;

    /// slugify结果为空时的兜底token
    pub const SLUG_FALLBACK: &str = "post";
}
