//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_quizgen_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum QuizGenError {
            $($variant(String),)*
        }

        impl QuizGenError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(QuizGenError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(QuizGenError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(QuizGenError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl QuizGenError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        QuizGenError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_quizgen_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    StoragePluginNotFound("E010", "Storage Plugin Not Found"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    UniqueViolation("E014", "Unique Constraint Violation"),
    AuthService("E015", "Auth Service Error"),
    GenerationService("E016", "Generation Service Error"),
    GenerationParse("E017", "Generation Parse Error"),
}

impl QuizGenError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为数据库唯一约束冲突
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, QuizGenError::UniqueViolation(_))
            || self.message().contains("UNIQUE constraint failed")
            || self.message().contains("duplicate key value")
    }
}

impl fmt::Display for QuizGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for QuizGenError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for QuizGenError {
    fn from(err: sea_orm::DbErr) -> Self {
        QuizGenError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for QuizGenError {
    fn from(err: std::io::Error) -> Self {
        QuizGenError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for QuizGenError {
    fn from(err: serde_json::Error) -> Self {
        QuizGenError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for QuizGenError {
    fn from(err: chrono::ParseError) -> Self {
        QuizGenError::DateParse(err.to_string())
    }
}

impl From<reqwest::Error> for QuizGenError {
    fn from(err: reqwest::Error) -> Self {
        QuizGenError::GenerationService(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuizGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(QuizGenError::cache_connection("test").code(), "E001");
        assert_eq!(QuizGenError::database_config("test").code(), "E003");
        assert_eq!(QuizGenError::validation("test").code(), "E007");
        assert_eq!(QuizGenError::authentication("test").code(), "E012");
        assert_eq!(QuizGenError::generation_parse("test").code(), "E017");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            QuizGenError::generation_service("test").error_type(),
            "Generation Service Error"
        );
        assert_eq!(
            QuizGenError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = QuizGenError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = QuizGenError::auth_service("upstream unavailable");
        let formatted = err.format_simple();
        assert!(formatted.contains("Auth Service Error"));
        assert!(formatted.contains("upstream unavailable"));
    }

    #[test]
    fn test_unique_violation_detection() {
        let err = QuizGenError::database_operation(
            "insert failed: UNIQUE constraint failed: submissions.test_id",
        );
        assert!(err.is_unique_violation());
        assert!(!QuizGenError::database_operation("timeout").is_unique_violation());
    }
}
