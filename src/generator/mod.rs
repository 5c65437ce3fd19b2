//! 题目生成适配器
//!
//! 把资源描述（外加可选的上传文件）变成结构化的单选题列表：
//! 拼提示词 -> 调外部生成服务 -> 剥掉可能的 Markdown 代码围栏 -> 解析 JSON。
//! 失败不重试，解析失败时在错误里带上截断后的原始输出便于排查。

pub mod gemini;

use serde::Deserialize;
use tracing::info;

use crate::errors::{QuizGenError, Result};
use crate::models::tests::entities::{Question, Test};

pub use gemini::Attachment;
use gemini::GeminiClient;

const SYSTEM_PREAMBLE: &str = "You are an expert educational content creator. \
Generate high-quality multiple choice questions based on the provided resources.";

/// 解析失败时保留的原始输出长度
const RAW_SNIPPET_LEN: usize = 200;

/// 生成服务返回的题目形状，入库前补全 ID
#[derive(Debug, Deserialize)]
struct GeneratedQuestion {
    question_text: String,
    options: Vec<String>,
    correct_answer: usize,
    standard: String,
}

pub struct QuestionGenerator {
    client: GeminiClient,
}

impl QuestionGenerator {
    pub fn from_config() -> Result<Self> {
        Ok(Self {
            client: GeminiClient::from_config()?,
        })
    }

    /// 根据资源描述生成一批新题目
    pub async fn generate(
        &self,
        resource_description: &str,
        num_questions: usize,
        standards: Option<&str>,
        file: Option<&Attachment>,
    ) -> Result<Vec<Question>> {
        let prompt = build_generate_prompt(resource_description, num_questions, standards);
        let raw = self.client.generate_content(&prompt, file).await?;
        let questions = parse_questions(&raw)?;
        info!("Generated {} questions", questions.len());
        Ok(questions)
    }

    /// 为已有测验追加题目，提示词中列出已覆盖的标准以避开重复主题
    pub async fn generate_more(
        &self,
        test: &Test,
        num_questions: usize,
        file: Option<&Attachment>,
    ) -> Result<Vec<Question>> {
        let prompt = build_generate_more_prompt(test, num_questions);
        let raw = self.client.generate_content(&prompt, file).await?;
        let questions = parse_questions(&raw)?;
        info!(
            "Generated {} additional questions for test {}",
            questions.len(),
            test.id
        );
        Ok(questions)
    }
}

fn build_generate_prompt(
    resource_description: &str,
    num_questions: usize,
    standards: Option<&str>,
) -> String {
    let standards_line = standards
        .filter(|s| !s.trim().is_empty())
        .map(|s| format!("Standards to cover: {s}\n"))
        .unwrap_or_default();

    format!(
        "{SYSTEM_PREAMBLE}

Create {num_questions} multiple choice questions based on the following resource:

Resource Description: {resource_description}
{standards_line}
For each question:
1. Write a clear, appropriate-level question
2. Provide exactly 4 answer options
3. Indicate which option is correct (0-3)
4. Tag with the relevant standard

Return ONLY a valid JSON array with this exact structure:
[
  {{
    \"question_text\": \"Question here?\",
    \"options\": [\"Option A\", \"Option B\", \"Option C\", \"Option D\"],
    \"correct_answer\": 0,
    \"standard\": \"Standard code (e.g., CCSS.Math.3.OA.A.1)\"
  }}
]

Do not include any markdown formatting or explanatory text, just the JSON array."
    )
}

fn build_generate_more_prompt(test: &Test, num_questions: usize) -> String {
    let existing_standards = test.distinct_standards();
    let standards_text = if existing_standards.is_empty() {
        "relevant educational standards".to_string()
    } else {
        existing_standards.join(", ")
    };

    format!(
        "{SYSTEM_PREAMBLE}

Create {num_questions} NEW multiple choice questions based on the following resource:

Resource Description: {}
Standards to cover: {standards_text}

IMPORTANT: Generate questions that are DIFFERENT from these existing topics that are already covered in the test.

For each question:
1. Write a clear, appropriate-level question
2. Provide exactly 4 answer options
3. Indicate which option is correct (0-3)
4. Tag with the relevant standard

Return ONLY a valid JSON array with this exact structure:
[
  {{
    \"question_text\": \"Question here?\",
    \"options\": [\"Option A\", \"Option B\", \"Option C\", \"Option D\"],
    \"correct_answer\": 0,
    \"standard\": \"Standard code\"
  }}
]

Do not include any markdown formatting or explanatory text, just the JSON array.",
        test.resource_description
    )
}

/// 剥掉包裹响应的一层 Markdown 代码围栏（``` 或 ```json）
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// 解析生成服务的 JSON 输出并补全题目 ID
fn parse_questions(raw: &str) -> Result<Vec<Question>> {
    let cleaned = strip_code_fence(raw);

    let generated: Vec<GeneratedQuestion> = serde_json::from_str(cleaned).map_err(|e| {
        QuizGenError::generation_parse(format!(
            "failed to parse AI response: {e}. Response: {}",
            gemini::truncate(cleaned, RAW_SNIPPET_LEN)
        ))
    })?;

    let questions: Vec<Question> = generated
        .into_iter()
        .map(|q| Question {
            id: uuid::Uuid::new_v4().to_string(),
            question_text: q.question_text,
            options: q.options,
            correct_answer: q.correct_answer,
            standard: q.standard,
        })
        .collect();

    // 形状校验：4 个选项、答案下标有效
    if let Some(bad) = questions.iter().find(|q| !q.is_well_formed()) {
        return Err(QuizGenError::generation_parse(format!(
            "malformed question in AI response: '{}' has {} options, correct_answer {}",
            gemini::truncate(&bad.question_text, 80),
            bad.options.len(),
            bad.correct_answer
        )));
    }

    Ok(questions)
}
