use std::collections::HashMap;

use serde::Serialize;
use ts_rs::TS;

use crate::models::submissions::entities::StandardStat;

// 测验维度的标准汇总（全班合并）
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StandardOverview {
    pub correct: i64,
    pub total: i64,
    pub percentage: f64,
}

// 按总分分层的学生条目
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct TierStudent {
    pub id: i64,
    pub name: String,
    pub score: f64,
}

// 按单个标准正确率分层的学生条目
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StandardTierStudent {
    pub id: i64,
    pub name: String,
    pub percentage: f64,
}

// 四档水平分组：advanced [90,100]、proficient [70,90)、basic [50,70)、below_basic [0,50)
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ProficiencyGroups<T: TS> {
    pub advanced: Vec<T>,
    pub proficient: Vec<T>,
    pub basic: Vec<T>,
    pub below_basic: Vec<T>,
}

impl<T: TS> Default for ProficiencyGroups<T> {
    fn default() -> Self {
        Self {
            advanced: Vec::new(),
            proficient: Vec::new(),
            basic: Vec::new(),
            below_basic: Vec::new(),
        }
    }
}

// 测验报告中的单个学生成绩
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StudentResult {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub score: f64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

// 测验维度报告；无提交时返回全零的空壳而不是错误
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct TestReportResponse {
    pub test_id: i64,
    pub test_title: String,
    pub total_submissions: i64,
    pub class_average: f64,
    pub standards_overview: HashMap<String, StandardOverview>,
    pub proficiency_groups: ProficiencyGroups<TierStudent>,
    pub standards_proficiency_groups: HashMap<String, ProficiencyGroups<StandardTierStudent>>,
    pub student_results: Vec<StudentResult>,
}

// 学生维度的标准汇总，附带参与统计的测验数
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StudentStandardPerformance {
    pub correct: i64,
    pub total: i64,
    pub percentage: f64,
    pub tests_count: i64,
}

// 学生报告中的历史条目
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct TestHistoryEntry {
    pub test_id: i64,
    pub test_title: String,
    pub score: f64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub standards_breakdown: HashMap<String, StandardStat>,
}

// 学生维度报告，限定在请求教师拥有的测验范围内
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StudentReportResponse {
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub total_tests: i64,
    pub average_score: f64,
    pub overall_standards_performance: HashMap<String, StudentStandardPerformance>,
    pub test_history: Vec<TestHistoryEntry>,
}
