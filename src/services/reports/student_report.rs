use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use tracing::error;

use super::ReportService;
use crate::middlewares::RequireSession;
use crate::models::reports::responses::{
    StudentReportResponse, StudentStandardPerformance, TestHistoryEntry,
};
use crate::models::submissions::entities::Submission;
use crate::models::tests::entities::Test;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::submissions::scoring::round2;

/// 学生维度报告：限定在请求教师拥有的测验范围内
pub async fn get_student_report(
    service: &ReportService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let teacher_id = match RequireSession::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let storage = service.get_storage(request);

    let student = match storage.get_user_by_id(student_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to load student: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load student: {e}"),
                )),
            );
        }
    };

    let submissions = match storage.list_submissions_by_student(student_id).await {
        Ok(submissions) => submissions,
        Err(e) => {
            error!("Failed to list submissions: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list submissions: {e}"),
                )),
            );
        }
    };

    // 只保留请求教师拥有的测验
    let mut rows = Vec::new();
    for submission in submissions {
        match storage.get_test_by_id(submission.test_id).await {
            Ok(Some(test)) if test.teacher_id == teacher_id => rows.push((submission, test)),
            Ok(_) => {}
            Err(e) => {
                error!("Failed to load test {}: {}", submission.test_id, e);
            }
        }
    }

    let report = build_student_report(&student, &rows);
    Ok(HttpResponse::Ok()
        .json(ApiResponse::<StudentReportResponse>::success(report, "Report generated")))
}

/// 聚合学生报告；无提交时返回全零空壳
pub fn build_student_report(
    student: &User,
    rows: &[(Submission, Test)],
) -> StudentReportResponse {
    let total_tests = rows.len() as i64;

    let average_score = if rows.is_empty() {
        0.0
    } else {
        round2(rows.iter().map(|(s, _)| s.score).sum::<f64>() / rows.len() as f64)
    };

    // 跨测验合并标准统计，并记录每个标准出现在几张测验里
    let mut overall: HashMap<String, StudentStandardPerformance> = HashMap::new();
    for (submission, _) in rows {
        for (standard, stat) in &submission.standards_breakdown {
            let entry = overall
                .entry(standard.clone())
                .or_insert(StudentStandardPerformance {
                    correct: 0,
                    total: 0,
                    percentage: 0.0,
                    tests_count: 0,
                });
            entry.correct += stat.correct;
            entry.total += stat.total;
            entry.tests_count += 1;
        }
    }
    for stat in overall.values_mut() {
        stat.percentage = if stat.total > 0 {
            round2(stat.correct as f64 / stat.total as f64 * 100.0)
        } else {
            0.0
        };
    }

    // 答题历史，最近的在前
    let mut test_history: Vec<TestHistoryEntry> = rows
        .iter()
        .map(|(submission, test)| TestHistoryEntry {
            test_id: test.id,
            test_title: test.title.clone(),
            score: submission.score,
            submitted_at: submission.submitted_at,
            standards_breakdown: submission.standards_breakdown.clone(),
        })
        .collect();
    test_history.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

    StudentReportResponse {
        student_id: student.id,
        student_name: student.name.clone(),
        student_email: student.email.clone(),
        total_tests,
        average_score,
        overall_standards_performance: overall,
        test_history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submissions::entities::StandardStat;
    use crate::models::tests::entities::TestStatus;
    use crate::models::users::entities::UserRole;
    use chrono::{Duration, Utc};

    fn student() -> User {
        User {
            id: 10,
            email: "ada@example.com".into(),
            name: "ada".into(),
            picture: None,
            role: UserRole::Student,
            created_at: Utc::now(),
        }
    }

    fn test_named(id: i64, title: &str) -> Test {
        Test {
            id,
            title: title.into(),
            teacher_id: 1,
            resource_description: "r".into(),
            questions: Vec::new(),
            status: TestStatus::Published,
            created_at: Utc::now(),
        }
    }

    fn submission_at(
        test_id: i64,
        score: f64,
        submitted_at: chrono::DateTime<Utc>,
        breakdown: &[(&str, i64, i64, f64)],
    ) -> Submission {
        Submission {
            id: test_id * 100,
            test_id,
            student_id: 10,
            answers: Vec::new(),
            score,
            standards_breakdown: breakdown
                .iter()
                .map(|(s, correct, total, pct)| {
                    (
                        s.to_string(),
                        StandardStat {
                            correct: *correct,
                            total: *total,
                            percentage: *pct,
                        },
                    )
                })
                .collect(),
            submitted_at,
        }
    }

    #[test]
    fn test_empty_report_shape() {
        let report = build_student_report(&student(), &[]);
        assert_eq!(report.student_id, 10);
        assert_eq!(report.total_tests, 0);
        assert_eq!(report.average_score, 0.0);
        assert!(report.overall_standards_performance.is_empty());
        assert!(report.test_history.is_empty());
    }

    #[test]
    fn test_standards_merged_with_tests_count() {
        let now = Utc::now();
        let rows = vec![
            (
                submission_at(1, 80.0, now, &[("S1", 4, 5, 80.0)]),
                test_named(1, "Quiz 1"),
            ),
            (
                submission_at(2, 60.0, now, &[("S1", 2, 5, 40.0), ("S2", 1, 2, 50.0)]),
                test_named(2, "Quiz 2"),
            ),
        ];

        let report = build_student_report(&student(), &rows);
        assert_eq!(report.total_tests, 2);
        assert_eq!(report.average_score, 70.0);

        let s1 = &report.overall_standards_performance["S1"];
        assert_eq!(s1.correct, 6);
        assert_eq!(s1.total, 10);
        assert_eq!(s1.percentage, 60.0);
        assert_eq!(s1.tests_count, 2);

        let s2 = &report.overall_standards_performance["S2"];
        assert_eq!(s2.tests_count, 1);
    }

    #[test]
    fn test_history_sorted_most_recent_first() {
        let now = Utc::now();
        let rows = vec![
            (
                submission_at(1, 80.0, now - Duration::days(2), &[]),
                test_named(1, "Oldest"),
            ),
            (submission_at(2, 90.0, now, &[]), test_named(2, "Newest")),
            (
                submission_at(3, 70.0, now - Duration::days(1), &[]),
                test_named(3, "Middle"),
            ),
        ];

        let report = build_student_report(&student(), &rows);
        let titles: Vec<&str> = report
            .test_history
            .iter()
            .map(|t| t.test_title.as_str())
            .collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    }
}
