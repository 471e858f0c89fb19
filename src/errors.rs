//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_school_system_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum SchoolSystemError {
            $($variant(String),)*
        }

        impl SchoolSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_system_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    InvalidArgument("E005", "Invalid Argument"),
    NotFound("E006", "Resource Not Found"),
    ReferenceNotFound("E007", "Referenced Resource Not Found"),
    ConstraintViolation("E008", "Constraint Violation"),
}

impl SchoolSystemError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 将数据库错误归类并附加上下文
    ///
    /// 唯一约束和外键约束冲突归为 `ConstraintViolation`，其余归为 `DatabaseOperation`。
    pub fn from_db(context: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                SchoolSystemError::constraint_violation(format!("{context}: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                SchoolSystemError::constraint_violation(format!("{context}: {detail}"))
            }
            _ => SchoolSystemError::database_operation(format!("{context}: {err}")),
        }
    }
}

impl fmt::Display for SchoolSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolSystemError {}

// 为常见的错误类型实现 From trait
impl From<DbErr> for SchoolSystemError {
    fn from(err: DbErr) -> Self {
        SchoolSystemError::from_db("数据库操作失败", err)
    }
}

pub type Result<T> = std::result::Result<T, SchoolSystemError>;
