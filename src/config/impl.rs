use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::BlogConfig;

static CONFIG: OnceLock<ArcSwap<BlogConfig>> = OnceLock::new();

/// 初始化全局配置
///
/// `path` 为 None 时按默认顺序解析（./site.toml，其后是 SC__ 环境变量）。
/// 只有第一次调用会真正加载，之后的调用不产生任何效果。
///
/// # Examples
/// ```no_run
/// siteconf::config::init_config(None);
/// ```
pub fn init_config(path: Option<&str>) {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(BlogConfig::resolve(path)));
}

/// 读取全局配置快照
///
/// 返回的 Arc 克隆廉价，读取端不持有任何锁。
///
/// # Panics
/// 配置尚未初始化时 panic，需要先调用 [`init_config`]
pub fn get_config() -> Arc<BlogConfig> {
    let slot = CONFIG
        .get()
        .expect("global config missing, init_config() must run first");
    slot.load_full()
}
