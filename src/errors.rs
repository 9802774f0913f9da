use std::fmt;

/// Application-level errors (startup, terminal, configuration).
///
/// API failures are modelled separately by [`crate::client::ClientError`];
/// views turn those into display strings and never bubble them up here.
#[derive(Debug, Clone)]
pub enum ShortlyError {
    ConfigLoad(String),
    ConfigInvalid(String),
    Terminal(String),
    Clipboard(String),
    Logging(String),
    Serialization(String),
}

impl ShortlyError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortlyError::ConfigLoad(_) => "E001",
            ShortlyError::ConfigInvalid(_) => "E002",
            ShortlyError::Terminal(_) => "E003",
            ShortlyError::Clipboard(_) => "E004",
            ShortlyError::Logging(_) => "E005",
            ShortlyError::Serialization(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortlyError::ConfigLoad(_) => "Configuration Load Error",
            ShortlyError::ConfigInvalid(_) => "Invalid Configuration",
            ShortlyError::Terminal(_) => "Terminal Error",
            ShortlyError::Clipboard(_) => "Clipboard Error",
            ShortlyError::Logging(_) => "Logging Setup Error",
            ShortlyError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortlyError::ConfigLoad(msg)
            | ShortlyError::ConfigInvalid(msg)
            | ShortlyError::Terminal(msg)
            | ShortlyError::Clipboard(msg)
            | ShortlyError::Logging(msg)
            | ShortlyError::Serialization(msg) => msg,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortlyError {}

// 便捷的构造函数
impl ShortlyError {
    pub fn config_load<T: Into<String>>(msg: T) -> Self {
        ShortlyError::ConfigLoad(msg.into())
    }

    pub fn config_invalid<T: Into<String>>(msg: T) -> Self {
        ShortlyError::ConfigInvalid(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Terminal(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Clipboard(msg.into())
    }

    pub fn logging<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Logging(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Serialization(msg.into())
    }
}

impl From<std::io::Error> for ShortlyError {
    fn from(err: std::io::Error) -> Self {
        ShortlyError::Terminal(err.to_string())
    }
}

impl From<config::ConfigError> for ShortlyError {
    fn from(err: config::ConfigError) -> Self {
        ShortlyError::ConfigLoad(err.to_string())
    }
}

impl From<toml::ser::Error> for ShortlyError {
    fn from(err: toml::ser::Error) -> Self {
        ShortlyError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortlyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            ShortlyError::config_load("a"),
            ShortlyError::config_invalid("a"),
            ShortlyError::terminal("a"),
            ShortlyError::clipboard("a"),
            ShortlyError::logging("a"),
            ShortlyError::serialization("a"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = ShortlyError::config_invalid("base_url must be absolute");
        assert_eq!(
            err.to_string(),
            "Invalid Configuration: base_url must be absolute"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::other("tty gone");
        let err: ShortlyError = io.into();
        assert!(matches!(err, ShortlyError::Terminal(_)));
        assert!(err.message().contains("tty gone"));
    }
}
