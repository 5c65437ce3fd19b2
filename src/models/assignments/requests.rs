use serde::Deserialize;
use ts_rs::TS;

// 分配测验请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignTestRequest {
    pub test_id: i64,
    pub student_emails: Vec<String>,
}
