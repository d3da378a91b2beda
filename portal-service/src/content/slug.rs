use portal_api::error::IngestError;
use portal_api::repository::InformasiRepository;
use portal_domain::content::constant::{MAX_SLUG_PROBES, SLUG_FALLBACK, SLUG_SUFFIX_START};
use regex::Regex;
use std::sync::OnceLock;

fn strip_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9\s-]").unwrap())
}

fn whitespace_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn hyphen_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").unwrap())
}

/// 把自由文本转成URL安全的slug
///
/// 小写、去掉`[a-z0-9\s-]`以外的字符、空白折叠成单个连字符、
/// 连续连字符折叠、去掉首尾连字符。结果为空时返回固定的兜底
/// token。纯函数，无I/O。
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = strip_pattern().replace_all(lowered.trim(), "");
    let hyphenated = whitespace_pattern().replace_all(&stripped, "-");
    let collapsed = hyphen_pattern().replace_all(&hyphenated, "-");
    let trimmed = collapsed.trim_matches('-');

    if trimmed.is_empty() {
        SLUG_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}

/// 为base slug分配一个当前未被占用的slug
///
/// 从base本身开始探测，已占用时追加`-2`、`-3`……直到探测到空位。
/// 读后写探测在并发下不是race-safe的：两个并发调用方用同一个base
/// 可能都探测到空位并各自提交同一个slug。这是已接受的设计限制，
/// SQL后端靠slug列的唯一索引兜底，内存后端没有第二道防线。
/// 探测次数超过上限时关闭失败，避免对抗性输入造成无界循环。
pub async fn ensure_unique_slug<R>(repo: &R, base: &str) -> Result<String, IngestError>
where
    R: InformasiRepository + ?Sized,
{
    let mut candidate = base.to_string();
    let mut counter = SLUG_SUFFIX_START;

    for _ in 0..MAX_SLUG_PROBES {
        let existing = repo
            .find_by_slug(&candidate)
            .await
            .map_err(|e| IngestError::Persistence(e.to_string()))?;
        if existing.is_none() {
            return Ok(candidate);
        }
        candidate = format!("{base}-{counter}");
        counter += 1;
    }

    Err(IngestError::SlugAllocationExhausted(base.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use portal_domain::content::{Informasi, InformasiStatus, InformasiType};
    use portal_infra::database::InMemoryInformasiRepository;

    #[test]
    fn test_slugify_examples() {
        assert_eq!(slugify("  Hello, World!  "), "hello-world");
        assert_eq!(slugify("Pensi 2024"), "pensi-2024");
        assert_eq!(slugify("Libur   --  Sekolah"), "libur-sekolah");
        assert_eq!(slugify("!!!"), "post");
        assert_eq!(slugify(""), "post");
    }

    #[test]
    fn test_slugify_idempotent() {
        for input in ["  Hello, World!  ", "Pensi 2024", "!!!", "a--b", "YANG Sudah-slug"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    fn stored(slug: &str) -> Informasi {
        Informasi {
            id: format!("inf-{slug}"),
            kind: InformasiType::Umum,
            title: slug.to_string(),
            slug: slug.to_string(),
            status: InformasiStatus::Draft,
            description: None,
            content: None,
            cover_image_id: None,
            image_ids: None,
            tags: None,
            category: None,
            meta: None,
            meta_title: None,
            meta_description: None,
            meta_image_id: None,
            published_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            author_id: None,
        }
    }

    #[tokio::test]
    async fn test_allocate_returns_base_on_miss() {
        let repo = InMemoryInformasiRepository::new();
        assert_eq!(ensure_unique_slug(&repo, "a").await.unwrap(), "a");
    }

    #[tokio::test]
    async fn test_allocate_appends_numeric_suffix() {
        let repo = InMemoryInformasiRepository::new();
        repo.insert(stored("a")).await.unwrap();
        assert_eq!(ensure_unique_slug(&repo, "a").await.unwrap(), "a-2");

        repo.insert(stored("a-2")).await.unwrap();
        assert_eq!(ensure_unique_slug(&repo, "a").await.unwrap(), "a-3");
    }

    #[tokio::test]
    async fn test_allocate_fails_closed_when_exhausted() {
        let repo = InMemoryInformasiRepository::new();
        repo.insert(stored("x")).await.unwrap();
        for n in 2..1002u32 {
            repo.insert(stored(&format!("x-{n}"))).await.unwrap();
        }

        let err = ensure_unique_slug(&repo, "x").await.unwrap_err();
        assert!(matches!(err, IngestError::SlugAllocationExhausted(_)));
    }
}
