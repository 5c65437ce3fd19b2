use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use tracing::error;

use super::ReportService;
use super::tiers::{ProficiencyTier, tier_for_score};
use crate::middlewares::RequireSession;
use crate::models::reports::responses::{
    ProficiencyGroups, StandardOverview, StandardTierStudent, StudentResult, TestReportResponse,
    TierStudent,
};
use crate::models::submissions::entities::Submission;
use crate::models::tests::entities::Test;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::submissions::scoring::round2;

/// 测验维度报告，仅测验拥有者可用
pub async fn get_test_report(
    service: &ReportService,
    request: &HttpRequest,
    test_id: i64,
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

    let test = match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => test,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestNotFound,
                "Test not found",
            )));
        }
        Err(e) => {
            error!("Failed to load test: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load test: {e}"),
                )),
            );
        }
    };

    if test.teacher_id != teacher_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Not authorized",
        )));
    }

    let submissions = match storage.list_submissions_by_test(test_id).await {
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

    // 拼上学生信息，查不到的用占位，报告不至于整体失败
    let mut rows = Vec::with_capacity(submissions.len());
    for submission in submissions {
        let student = match storage.get_user_by_id(submission.student_id).await {
            Ok(Some(user)) => Some(user),
            _ => None,
        };
        rows.push((submission, student));
    }

    let report = build_test_report(&test, &rows);
    Ok(HttpResponse::Ok()
        .json(ApiResponse::<TestReportResponse>::success(report, "Report generated")))
}

/// 聚合测验报告；无提交时返回全零空壳
pub fn build_test_report(
    test: &Test,
    rows: &[(Submission, Option<User>)],
) -> TestReportResponse {
    let total_submissions = rows.len() as i64;

    let class_average = if rows.is_empty() {
        0.0
    } else {
        round2(rows.iter().map(|(s, _)| s.score).sum::<f64>() / rows.len() as f64)
    };

    // 合并所有学生的标准统计
    let mut overview: HashMap<String, StandardOverview> = HashMap::new();
    for (submission, _) in rows {
        for (standard, stat) in &submission.standards_breakdown {
            let entry = overview
                .entry(standard.clone())
                .or_insert(StandardOverview {
                    correct: 0,
                    total: 0,
                    percentage: 0.0,
                });
            entry.correct += stat.correct;
            entry.total += stat.total;
        }
    }
    for stat in overview.values_mut() {
        stat.percentage = if stat.total > 0 {
            round2(stat.correct as f64 / stat.total as f64 * 100.0)
        } else {
            0.0
        };
    }

    // 按总分分层
    let mut proficiency_groups = ProficiencyGroups::<TierStudent>::default();
    for (submission, student) in rows {
        let entry = TierStudent {
            id: submission.student_id,
            name: student.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            score: submission.score,
        };
        match tier_for_score(submission.score) {
            ProficiencyTier::Advanced => proficiency_groups.advanced.push(entry),
            ProficiencyTier::Proficient => proficiency_groups.proficient.push(entry),
            ProficiencyTier::Basic => proficiency_groups.basic.push(entry),
            ProficiencyTier::BelowBasic => proficiency_groups.below_basic.push(entry),
        }
    }

    // 按标准分层：用每个学生在该标准上的正确率
    let mut standards_proficiency_groups: HashMap<String, ProficiencyGroups<StandardTierStudent>> =
        HashMap::new();
    for (submission, student) in rows {
        for (standard, stat) in &submission.standards_breakdown {
            let groups = standards_proficiency_groups
                .entry(standard.clone())
                .or_default();
            let entry = StandardTierStudent {
                id: submission.student_id,
                name: student.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
                percentage: stat.percentage,
            };
            match tier_for_score(stat.percentage) {
                ProficiencyTier::Advanced => groups.advanced.push(entry),
                ProficiencyTier::Proficient => groups.proficient.push(entry),
                ProficiencyTier::Basic => groups.basic.push(entry),
                ProficiencyTier::BelowBasic => groups.below_basic.push(entry),
            }
        }
    }

    let student_results = rows
        .iter()
        .map(|(submission, student)| StudentResult {
            id: submission.id,
            student_id: submission.student_id,
            student_name: student.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            student_email: student
                .as_ref()
                .map(|u| u.email.clone())
                .unwrap_or_default(),
            score: submission.score,
            submitted_at: submission.submitted_at,
        })
        .collect();

    TestReportResponse {
        test_id: test.id,
        test_title: test.title.clone(),
        total_submissions,
        class_average,
        standards_overview: overview,
        proficiency_groups,
        standards_proficiency_groups,
        student_results,
    }
}
