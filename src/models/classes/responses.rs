use serde::Serialize;
use ts_rs::TS;

// 班级列表条目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub class_code: String,
    pub student_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 花名册中的学生，注册用户附带姓名
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassStudent {
    pub email: String,
    pub name: Option<String>,
}

// 班级详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassDetailResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub class_code: String,
    pub students: Vec<ClassStudent>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
