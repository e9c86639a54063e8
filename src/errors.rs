use std::fmt;

#[derive(Debug, Clone)]
pub enum GatewayError {
    Config(String),
    Validation(String),
    FileOperation(String),
    Serialization(String),
}

impl GatewayError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::Config(_) => "E001",
            GatewayError::Validation(_) => "E002",
            GatewayError::FileOperation(_) => "E003",
            GatewayError::Serialization(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GatewayError::Config(_) => "Configuration Error",
            GatewayError::Validation(_) => "Validation Error",
            GatewayError::FileOperation(_) => "File Operation Error",
            GatewayError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GatewayError::Config(msg)
            | GatewayError::Validation(msg)
            | GatewayError::FileOperation(msg)
            | GatewayError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
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

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GatewayError {}

// 便捷的构造函数
impl GatewayError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        GatewayError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        GatewayError::Validation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        GatewayError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        GatewayError::Serialization(msg.into())
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        GatewayError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for GatewayError {
    fn from(err: config::ConfigError) -> Self {
        GatewayError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GatewayError {
    fn from(err: toml::ser::Error) -> Self {
        GatewayError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
