use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 测验状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub enum TestStatus {
    Draft,     // 草稿，仅教师可见
    Published, // 已发布，可分配给学生
}

impl TestStatus {
    pub const DRAFT: &'static str = "draft";
    pub const PUBLISHED: &'static str = "published";
}

impl<'de> Deserialize<'de> for TestStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            TestStatus::DRAFT => Ok(TestStatus::Draft),
            TestStatus::PUBLISHED => Ok(TestStatus::Published),
            _ => Err(serde::de::Error::custom(format!(
                "无效的测验状态: '{s}'. 支持的状态: draft, published"
            ))),
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestStatus::Draft => write!(f, "{}", TestStatus::DRAFT),
            TestStatus::Published => write!(f, "{}", TestStatus::PUBLISHED),
        }
    }
}

impl std::str::FromStr for TestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(TestStatus::Draft),
            "published" => Ok(TestStatus::Published),
            _ => Err(format!("Invalid test status: {s}")),
        }
    }
}

// 单选题，内嵌于测验文档
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct Question {
    pub id: String,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub standard: String,
}

impl Question {
    /// 校验选项数量与正确答案下标
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == 4 && self.correct_answer < self.options.len()
    }
}

// 测验实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct Test {
    pub id: i64,
    pub title: String,
    pub teacher_id: i64,
    pub resource_description: String,
    pub questions: Vec<Question>,
    pub status: TestStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Test {
    /// 测验中已出现的标准（去重，保持首次出现顺序）
    pub fn distinct_standards(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.questions
            .iter()
            .filter(|q| seen.insert(q.standard.clone()))
            .map(|q| q.standard.clone())
            .collect()
    }
}

/// 新测验写入参数
#[derive(Debug, Clone)]
pub struct NewTest {
    pub title: String,
    pub teacher_id: i64,
    pub resource_description: String,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(standard: &str) -> Question {
        Question {
            id: uuid::Uuid::new_v4().to_string(),
            question_text: "What is 2 + 2?".into(),
            options: vec!["1".into(), "2".into(), "3".into(), "4".into()],
            correct_answer: 3,
            standard: standard.into(),
        }
    }

    #[test]
    fn test_question_well_formed() {
        assert!(question("CCSS.Math.3.OA.A.1").is_well_formed());

        let mut q = question("CCSS.Math.3.OA.A.1");
        q.correct_answer = 4;
        assert!(!q.is_well_formed());

        let mut q = question("CCSS.Math.3.OA.A.1");
        q.options.pop();
        assert!(!q.is_well_formed());
    }

    #[test]
    fn test_distinct_standards_keeps_order() {
        let test = Test {
            id: 1,
            title: "t".into(),
            teacher_id: 1,
            resource_description: "r".into(),
            questions: vec![question("A"), question("B"), question("A")],
            status: TestStatus::Draft,
            created_at: chrono::Utc::now(),
        };
        assert_eq!(test.distinct_standards(), vec!["A", "B"]);
    }
}
