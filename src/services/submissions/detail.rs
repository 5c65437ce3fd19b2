use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::middlewares::RequireSession;
use crate::models::submissions::entities::Submission;
use crate::models::{ApiResponse, ErrorCode};

/// 学生查看自己对某测验的提交
pub async fn get_own_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    test_id: i64,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireSession::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Not authenticated",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.get_submission(test_id, user_id).await {
        Ok(Some(submission)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<Submission>::success(submission, "Submission retrieved"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => {
            error!("Failed to load submission: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load submission: {e}"),
                )),
            )
        }
    }
}
