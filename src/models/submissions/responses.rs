use serde::Serialize;
use ts_rs::TS;

use super::entities::Submission;

// 教师视角的提交记录，附带学生信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionWithStudent {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    pub student_name: String,
    pub student_email: String,
}
