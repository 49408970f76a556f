//! 配置值验证模块
//!
//! 配置本身是无行为的静态数据，所有约束在这里集中检查：
//! 分页大小为正整数、站点 URL 为绝对地址、locale tag 形式合法、
//! 每个社交链接的名称 / URL 非空且图标资源存在。
//! 验证不在第一个错误处停下，所有违反项一次性报出。

use crate::links::SocialLink;
use crate::utils::locale::{validate_lang_tag, validate_og_locale};
use crate::utils::url_validator::ensure_absolute_url;

use super::{BlogConfig, SiteConfig};

/// 验证站点元数据，返回所有违反项
pub fn validate_site(site: &SiteConfig) -> Vec<String> {
    let mut violations = Vec::new();

    if site.title.trim().is_empty() {
        violations.push("site.title cannot be empty".to_string());
    }

    if site.author.trim().is_empty() {
        violations.push("site.author cannot be empty".to_string());
    }

    if let Err(e) = ensure_absolute_url(&site.site) {
        violations.push(format!("site.site: {}", e));
    }

    if let Err(e) = validate_lang_tag(&site.lang) {
        violations.push(format!("site.lang: {}", e));
    }

    if let Err(e) = validate_og_locale(&site.og_locale) {
        violations.push(format!("site.og_locale: {}", e));
    }

    if site.pagination_size == 0 {
        violations.push("site.pagination_size must be greater than 0".to_string());
    }

    violations
}

/// 验证社交链接注册表，返回所有违反项
///
/// 每个条目的每项检查独立报告，报错信息带上条目序号方便定位。
pub fn validate_links(links: &[SocialLink]) -> Vec<String> {
    let mut violations = Vec::new();

    for (index, link) in links.iter().enumerate() {
        if link.name.trim().is_empty() {
            violations.push(format!("links[{}].name cannot be empty", index));
        }

        if let Err(e) = ensure_absolute_url(&link.url) {
            violations.push(format!("links[{}].url ({}): {}", index, link.name, e));
        }

        if link.icon.svg().is_none() {
            violations.push(format!(
                "links[{}].icon ({}): no embedded asset for '{}'",
                index,
                link.name,
                link.icon.asset_name()
            ));
        }
    }

    violations
}

/// 验证整个配置，收集所有违反项
pub fn validate_config(config: &BlogConfig) -> Result<(), Vec<String>> {
    let mut violations = validate_site(&config.site);
    violations.extend(validate_links(&config.links));

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::SocialIcon;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&BlogConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_pagination_rejected() {
        let mut site = SiteConfig::default();
        site.pagination_size = 0;

        let violations = validate_site(&site);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("pagination_size"));
    }

    #[test]
    fn test_relative_site_url_rejected() {
        let mut site = SiteConfig::default();
        site.site = "/blog".to_string();
        assert!(!validate_site(&site).is_empty());
    }

    #[test]
    fn test_bad_locale_tags_rejected() {
        let mut site = SiteConfig::default();
        site.lang = "ko_KR".to_string();
        assert!(validate_site(&site).iter().any(|v| v.contains("site.lang")));

        let mut site = SiteConfig::default();
        site.og_locale = "ko-KR".to_string();
        assert!(
            validate_site(&site)
                .iter()
                .any(|v| v.contains("site.og_locale"))
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut site = SiteConfig::default();
        site.title = "  ".to_string();
        assert!(!validate_site(&site).is_empty());

        let links = vec![SocialLink::new("", "https://example.com", SocialIcon::Rss)];
        assert!(
            validate_links(&links)
                .iter()
                .any(|v| v.contains("links[0].name"))
        );
    }

    #[test]
    fn test_link_url_must_be_absolute() {
        let links = vec![SocialLink::new("Github", "github.com/foo", SocialIcon::Github)];

        let violations = validate_links(&links);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("links[0].url"));
        assert!(violations[0].contains("Github"));
    }

    #[test]
    fn test_every_bad_link_is_reported() {
        let links = vec![
            SocialLink::new("", "https://example.com", SocialIcon::Rss),
            SocialLink::new("X", "ftp://example.com", SocialIcon::Twitter),
        ];

        let violations = validate_links(&links);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].contains("links[0].name"));
        assert!(violations[1].contains("links[1].url"));
    }

    #[test]
    fn test_one_link_can_violate_twice() {
        let links = vec![SocialLink::new("", "not-a-url", SocialIcon::Email)];
        assert_eq!(validate_links(&links).len(), 2);
    }

    #[test]
    fn test_violations_are_collected_across_sections() {
        let mut config = BlogConfig::default();
        config.site.pagination_size = 0;
        config.links[0].url = String::new();

        let violations = validate_config(&config).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
