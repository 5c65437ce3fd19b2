use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生作答，按题目 ID 关联原始答案键
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct StudentAnswer {
    pub question_id: String,
    pub selected_answer: usize,
}

// 单个标准的正确率统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct StandardStat {
    pub correct: i64,
    pub total: i64,
    pub percentage: f64,
}

// 提交记录，创建后不可变
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub test_id: i64,
    pub student_id: i64,
    pub answers: Vec<StudentAnswer>,
    pub score: f64,
    pub standards_breakdown: HashMap<String, StandardStat>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// 新提交写入参数，分数与统计由提交引擎预先算好
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub test_id: i64,
    pub student_id: i64,
    pub answers: Vec<StudentAnswer>,
    pub score: f64,
    pub standards_breakdown: HashMap<String, StandardStat>,
}
