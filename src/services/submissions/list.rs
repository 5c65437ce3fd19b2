use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::middlewares::RequireSession;
use crate::models::submissions::responses::SubmissionWithStudent;
use crate::models::{ApiResponse, ErrorCode};

/// 教师查看测验的全部提交，附带学生姓名与邮箱
pub async fn list_test_submissions(
    service: &SubmissionService,
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

    match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) if test.teacher_id != teacher_id => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                "Not authorized",
            )));
        }
        Ok(Some(_)) => {}
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

    // 附带学生信息
    let mut enriched = Vec::with_capacity(submissions.len());
    for submission in submissions {
        let (student_name, student_email) =
            match storage.get_user_by_id(submission.student_id).await {
                Ok(Some(user)) => (user.name, user.email),
                _ => (String::new(), String::new()),
            };
        enriched.push(SubmissionWithStudent {
            submission,
            student_name,
            student_email,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<Vec<SubmissionWithStudent>>::success(
        enriched,
        "Submissions listed",
    )))
}
