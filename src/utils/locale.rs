//! Locale tag 验证模块
//!
//! 站点配置使用两种形式的 locale tag：
//! - `lang`: BCP 47 风格，连字符分隔（如 `ko-KR`）
//! - `og_locale`: Open Graph 风格，下划线分隔（如 `ko_KR`）

/// 验证 BCP 47 风格的语言标签（如 `ko`、`ko-KR`、`zh-Hant-TW`）
pub fn validate_lang_tag(tag: &str) -> Result<(), String> {
    validate_tag(tag, '-')
}

/// 验证 Open Graph 风格的 locale（如 `ko_KR`、`en_US`）
pub fn validate_og_locale(tag: &str) -> Result<(), String> {
    validate_tag(tag, '_')
}

fn validate_tag(tag: &str, separator: char) -> Result<(), String> {
    if tag.is_empty() {
        return Err("locale tag cannot be empty".to_string());
    }

    let segments: Vec<&str> = tag.split(separator).collect();

    // 首段：2-3 位小写字母的语言代码
    let language = segments[0];
    if !(2..=3).contains(&language.len())
        || !language.chars().all(|c| c.is_ascii_lowercase())
    {
        return Err(format!(
            "invalid language code '{}' in '{}': expected 2-3 lowercase letters",
            language, tag
        ));
    }

    // 后续段：script（4 位字母）或 region（2 位大写字母 / 3 位数字）
    for segment in &segments[1..] {
        let valid = match segment.len() {
            4 => segment.chars().all(|c| c.is_ascii_alphabetic()),
            2 => segment.chars().all(|c| c.is_ascii_uppercase()),
            3 => segment.chars().all(|c| c.is_ascii_digit()),
            _ => false,
        };
        if !valid {
            return Err(format!(
                "invalid subtag '{}' in '{}': expected a script or region code",
                segment, tag
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_lang_tags() {
        assert!(validate_lang_tag("ko").is_ok());
        assert!(validate_lang_tag("ko-KR").is_ok());
        assert!(validate_lang_tag("en-US").is_ok());
        assert!(validate_lang_tag("zh-Hant-TW").is_ok());
    }

    #[test]
    fn test_valid_og_locales() {
        assert!(validate_og_locale("ko_KR").is_ok());
        assert!(validate_og_locale("en_US").is_ok());
        assert!(validate_og_locale("ja").is_ok());
    }

    #[test]
    fn test_wrong_separator() {
        // lang 使用连字符，og_locale 使用下划线，反过来都不合法
        assert!(validate_lang_tag("ko_KR").is_err());
        assert!(validate_og_locale("ko-KR").is_err());
    }

    #[test]
    fn test_invalid_tags() {
        assert!(validate_lang_tag("").is_err());
        assert!(validate_lang_tag("KO-KR").is_err());
        assert!(validate_lang_tag("korean-KR").is_err());
        assert!(validate_lang_tag("ko-kr").is_err());
        assert!(validate_og_locale("ko_kr").is_err());
        assert!(validate_lang_tag("ko-").is_err());
    }
}
