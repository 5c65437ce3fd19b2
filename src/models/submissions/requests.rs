use serde::Deserialize;
use ts_rs::TS;

use super::entities::StudentAnswer;

// 提交测验请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitTestRequest {
    pub test_id: i64,
    pub answers: Vec<StudentAnswer>,
}
