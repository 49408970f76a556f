use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::links::{SocialLink, default_social_networks};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "site.toml";

/// 站点静态配置（从 TOML 加载，构建时使用）
///
/// 包含三部分：
/// - site: 站点元数据（标题、作者、locale、分页大小）
/// - links: 社交链接注册表（页脚展示顺序）
/// - logging: 日志配置
///
/// 所有值在进程启动后只读，站点生成框架通过 `get_config()` 消费。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default = "default_social_networks")]
    pub links: Vec<SocialLink>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BlogConfig {
    /// 解析最终生效的配置
    ///
    /// 三层合并，后者覆盖前者：内置默认值、TOML 文件、`SC__` 前缀的环境
    /// 变量（分隔符 `__`，如 `SC__SITE__PAGINATION_SIZE=10`）。`path` 为
    /// None 时读取 ./site.toml。文件缺失不算错误；文件损坏或类型不匹配时
    /// 退回默认值并在 stderr 上留痕，构建端永远能拿到一份可用配置。
    pub fn resolve(path: Option<&str>) -> Self {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let layered = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("SC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize::<BlogConfig>());

        match layered {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[siteconf] using configuration file {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[siteconf] falling back to built-in defaults: {}", e);
                Self::default()
            }
        }
    }

    /// 以内置默认值渲染示例 TOML
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("# failed to render sample config: {}", e))
    }

    /// 将当前配置写入 TOML 文件，父目录不存在时一并创建
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> crate::errors::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// 站点元数据
///
/// 字段与前端消费的形状一一对应（meta 标签、分页、locale 选择、分享文案）。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/data/types.generated.ts")]
#[ts(rename_all = "camelCase")]
pub struct SiteConfig {
    /// 站点规范 URL
    #[serde(default = "default_site_url")]
    pub site: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// meta 标签里的站点描述
    #[serde(default = "default_description")]
    pub description: String,
    /// BCP 47 语言标签（连字符形式）
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Open Graph locale（下划线形式）
    #[serde(default = "default_og_locale")]
    pub og_locale: String,
    /// 分享按钮文案
    #[serde(default = "default_share_message")]
    pub share_message: String,
    /// 每页文章数
    #[serde(default = "default_pagination_size")]
    pub pagination_size: u32,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_site_url() -> String {
    "https://sungpyo.dev".to_string()
}

fn default_author() -> String {
    "Pyo".to_string()
}

fn default_title() -> String {
    "pyo.blog".to_string()
}

fn default_description() -> String {
    "나의 블로그".to_string()
}

fn default_lang() -> String {
    "ko-KR".to_string()
}

fn default_og_locale() -> String {
    "ko_KR".to_string()
}

fn default_share_message() -> String {
    "Share this post".to_string()
}

fn default_pagination_size() -> u32 {
    6
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            links: default_social_networks(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: default_site_url(),
            author: default_author(),
            title: default_title(),
            description: default_description(),
            lang: default_lang(),
            og_locale: default_og_locale(),
            share_message: default_share_message(),
            pagination_size: default_pagination_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
