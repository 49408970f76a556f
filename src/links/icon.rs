use std::borrow::Cow;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};
use ts_rs::TS;

// 使用 RustEmbed 自动嵌入图标资源
#[derive(Embed)]
#[folder = "assets/icons/"]
struct IconAssets;

/// 社交网络图标
///
/// 每个变体对应 assets/icons/ 下的一个 SVG 文件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, EnumIter, AsRefStr)]
#[ts(export, export_to = "../frontend/src/data/types.generated.ts")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SocialIcon {
    Github,
    LinkedIn,
    Twitter,
    Rss,
    Email,
}

impl SocialIcon {
    /// 图标对应的嵌入资源文件名
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::Github => "github.svg",
            Self::LinkedIn => "linkedin.svg",
            Self::Twitter => "twitter.svg",
            Self::Rss => "rss.svg",
            Self::Email => "email.svg",
        }
    }

    /// 图标的 SVG 内容
    pub fn svg(&self) -> Option<Cow<'static, [u8]>> {
        IconAssets::get(self.asset_name()).map(|file| file.data)
    }
}

impl std::fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Github => write!(f, "github"),
            Self::LinkedIn => write!(f, "linkedin"),
            Self::Twitter => write!(f, "twitter"),
            Self::Rss => write!(f, "rss"),
            Self::Email => write!(f, "email"),
        }
    }
}

impl std::str::FromStr for SocialIcon {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "github" => Ok(Self::Github),
            "linkedin" => Ok(Self::LinkedIn),
            "twitter" => Ok(Self::Twitter),
            "rss" => Ok(Self::Rss),
            "email" => Ok(Self::Email),
            _ => Err(format!(
                "Invalid icon: '{}'. Valid: github, linkedin, twitter, rss, email",
                s
            )),
        }
    }
}
