use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级花名册，仅作为分组便利；不授予测验访问权限
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 教师ID
    pub teacher_id: i64,
    // 班级名称
    pub name: String,
    // 班级描述
    pub description: Option<String>,
    // 班级码，创建时生成一次，不可变更
    pub class_code: String,
    // 学生邮箱名单
    pub student_emails: Vec<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
