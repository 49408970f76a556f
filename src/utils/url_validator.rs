//! URL 验证模块
//!
//! 站点基础 URL 和社交链接 URL 必须是绝对的 http(s) 地址

use url::Url;

/// URL 验证错误
#[derive(Debug)]
pub enum UrlValidationError {
    Empty,
    BlockedScheme(String),
    UnsupportedScheme(String),
    MissingHost,
    Malformed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL cannot be empty"),
            Self::BlockedScheme(scheme) => {
                write!(f, "Blocked URL scheme: {}", scheme)
            }
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported scheme: {}. Only http:// and https:// are allowed",
                scheme
            ),
            Self::MissingHost => write!(f, "URL has no host"),
            Self::Malformed(msg) => write!(f, "Malformed URL: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 禁止的 URL scheme
const BLOCKED_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

/// 验证绝对 URL 并返回解析结果
///
/// 检查项目：
/// 1. URL 不为空
/// 2. 不是被禁止的 scheme（javascript:, data:, file: 等）
/// 3. scheme 必须是 http 或 https
/// 4. 能被解析且带有 host
pub fn ensure_absolute_url(input: &str) -> Result<Url, UrlValidationError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let scheme = input
        .split(':')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if BLOCKED_SCHEMES.contains(&scheme.as_str()) {
        return Err(UrlValidationError::BlockedScheme(scheme));
    }

    if scheme != "http" && scheme != "https" {
        return Err(UrlValidationError::UnsupportedScheme(scheme));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}
