use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use super::scoring::score_submission;
use crate::middlewares::RequireSession;
use crate::models::submissions::entities::{NewSubmission, Submission};
use crate::models::submissions::requests::SubmitTestRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 提交作答
///
/// 每个学生对每张测验只允许一次提交：先查重返回友好错误，
/// 并发竞态由存储层 (test_id, student_id) 唯一索引兜底，冲突同样
/// 映射为"已提交"。提交一旦写入不可修改。
pub async fn submit_test(
    service: &SubmissionService,
    request: &HttpRequest,
    submit_data: SubmitTestRequest,
) -> ActixResult<HttpResponse> {
    let user = match RequireSession::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Not authenticated",
            )));
        }
    };

    let storage = service.get_storage(request);

    let test = match storage.get_test_by_id(submit_data.test_id).await {
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

    // 不在分配名单中的用户不能提交
    let assigned = match storage.get_assignment_by_test(test.id).await {
        Ok(Some(assignment)) => assignment.contains_email(&user.email),
        Ok(None) => false,
        Err(e) => {
            error!("Failed to load assignment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load assignment: {e}"),
                )),
            );
        }
    };

    if !assigned {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Not authorized",
        )));
    }

    // 查重；并发窗口内的重复由唯一索引兜底
    match storage.get_submission(test.id, user.id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::SubmissionAlreadyExists,
                "Test already submitted",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check existing submission: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check existing submission: {e}"),
                )),
            );
        }
    }

    // 对照原始答案键评分
    let outcome = score_submission(&test.questions, &submit_data.answers);

    let new_submission = NewSubmission {
        test_id: test.id,
        student_id: user.id,
        answers: submit_data.answers,
        score: outcome.score,
        standards_breakdown: outcome.standards_breakdown,
    };

    match storage.create_submission(new_submission).await {
        Ok(submission) => {
            info!(
                "Submission {} recorded for test {} by student {} (score {})",
                submission.id, submission.test_id, submission.student_id, submission.score
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::<Submission>::success(submission, "Test submitted")))
        }
        Err(e) if e.is_unique_violation() => {
            // 两个并发提交挤进了查重窗口，数据库唯一索引拦下第二个
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::SubmissionAlreadyExists,
                "Test already submitted",
            )))
        }
        Err(e) => {
            error!("Failed to record submission: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionFailed,
                    format!("Failed to record submission: {e}"),
                )),
            )
        }
    }
}
