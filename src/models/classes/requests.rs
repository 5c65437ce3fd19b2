use serde::Deserialize;
use ts_rs::TS;

// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub student_emails: Vec<String>,
}

// 更新班级请求（class_code 不可更新）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub student_emails: Option<Vec<String>>,
}
