//! 社交链接注册表
//!
//! 站点页脚渲染的社交网络入口。顺序即展示顺序。

pub mod icon;

pub use icon::SocialIcon;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 社交链接条目
///
/// `name` 为展示名称，`url` 为个人主页地址，`icon` 指向一个可渲染的图标资源。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/data/types.generated.ts")]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: SocialIcon,
}

impl SocialLink {
    pub fn new<N: Into<String>, U: Into<String>>(name: N, url: U, icon: SocialIcon) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon,
        }
    }
}

/// 编译期内置的社交链接注册表
///
/// 未提供 site.toml 或其中没有 `[[links]]` 时使用。
pub fn default_social_networks() -> Vec<SocialLink> {
    vec![
        SocialLink::new("Github", "https://github.com/sungpyocho", SocialIcon::Github),
        SocialLink::new(
            "LinkedIn",
            "https://www.linkedin.com/in/sungpyo-cho/",
            SocialIcon::LinkedIn,
        ),
    ]
}

/// 当前生效的社交链接注册表（展示顺序）
///
/// # Panics
/// 全局配置未初始化时 panic，需要先调用 `config::init_config()`
pub fn social_networks() -> Vec<SocialLink> {
    crate::config::get_config().links.clone()
}
