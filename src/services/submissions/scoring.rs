//! 评分引擎
//!
//! 对照测验的原始（未打乱）答案键逐题判分，并按标准聚合正确率。
//! 纯函数，不触碰存储。

use std::collections::HashMap;

use crate::models::submissions::entities::{StandardStat, StudentAnswer};
use crate::models::tests::entities::Question;

/// 评分结果
#[derive(Debug)]
pub struct ScoreOutcome {
    /// 0-100，保留两位小数；分母是测验的总题数而不是作答数
    pub score: f64,
    pub standards_breakdown: HashMap<String, StandardStat>,
}

/// 四舍五入保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 对一次作答评分
///
/// 规则：
/// - 未知题目 ID 直接跳过，不计入任何统计
/// - 总分分母是测验的全部题数，部分作答按全卷算分
/// - 每个标准的 percentage 做除零保护，total 为 0 时记 0
pub fn score_submission(questions: &[Question], answers: &[StudentAnswer]) -> ScoreOutcome {
    let by_id: HashMap<&str, &Question> =
        questions.iter().map(|q| (q.id.as_str(), q)).collect();

    let mut correct_count: i64 = 0;
    let mut stats: HashMap<String, StandardStat> = HashMap::new();

    for answer in answers {
        let Some(question) = by_id.get(answer.question_id.as_str()) else {
            continue;
        };

        let entry = stats
            .entry(question.standard.clone())
            .or_insert(StandardStat {
                correct: 0,
                total: 0,
                percentage: 0.0,
            });

        entry.total += 1;
        if answer.selected_answer == question.correct_answer {
            correct_count += 1;
            entry.correct += 1;
        }
    }

    for stat in stats.values_mut() {
        stat.percentage = if stat.total > 0 {
            round2(stat.correct as f64 / stat.total as f64 * 100.0)
        } else {
            0.0
        };
    }

    let score = if questions.is_empty() {
        0.0
    } else {
        round2(correct_count as f64 / questions.len() as f64 * 100.0)
    };

    ScoreOutcome {
        score,
        standards_breakdown: stats,
    }
}
