use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 测验分配记录，每张测验至多一条；重新分配会整体替换学生名单
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub test_id: i64,
    pub student_emails: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Assignment {
    pub fn contains_email(&self, email: &str) -> bool {
        self.student_emails.iter().any(|e| e == email)
    }
}
