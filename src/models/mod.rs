pub mod assignments;
pub mod auth;
pub mod classes;
pub mod common;
pub mod reports;
pub mod submissions;
pub mod tests;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 程序启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
