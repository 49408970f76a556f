use std::fmt;

#[derive(Debug, Clone)]
pub enum SiteconfError {
    ConfigLoad(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
}

impl SiteconfError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SiteconfError::ConfigLoad(_) => "E001",
            SiteconfError::FileOperation(_) => "E002",
            SiteconfError::Validation(_) => "E003",
            SiteconfError::NotFound(_) => "E004",
            SiteconfError::Serialization(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SiteconfError::ConfigLoad(_) => "Configuration Load Error",
            SiteconfError::FileOperation(_) => "File Operation Error",
            SiteconfError::Validation(_) => "Validation Error",
            SiteconfError::NotFound(_) => "Resource Not Found",
            SiteconfError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SiteconfError::ConfigLoad(msg) => msg,
            SiteconfError::FileOperation(msg) => msg,
            SiteconfError::Validation(msg) => msg,
            SiteconfError::NotFound(msg) => msg,
            SiteconfError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SiteconfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SiteconfError {}

// 便捷的构造函数
impl SiteconfError {
    pub fn config_load<T: Into<String>>(msg: T) -> Self {
        SiteconfError::ConfigLoad(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SiteconfError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        SiteconfError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SiteconfError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SiteconfError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for SiteconfError {
    fn from(err: std::io::Error) -> Self {
        SiteconfError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SiteconfError {
    fn from(err: serde_json::Error) -> Self {
        SiteconfError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for SiteconfError {
    fn from(err: toml::ser::Error) -> Self {
        SiteconfError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for SiteconfError {
    fn from(err: toml::de::Error) -> Self {
        SiteconfError::ConfigLoad(err.to_string())
    }
}

impl From<config::ConfigError> for SiteconfError {
    fn from(err: config::ConfigError) -> Self {
        SiteconfError::ConfigLoad(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SiteconfError>;
