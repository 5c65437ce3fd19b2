use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::middlewares::RequireSession;
use crate::models::assignments::entities::Assignment;
use crate::models::{ApiResponse, ErrorCode};

/// 获取测验的分配记录，仅测验拥有者可用
pub async fn get_assignment(
    service: &AssignmentService,
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

    // 分配记录归属跟着测验走
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

    match storage.get_assignment_by_test(test_id).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<Assignment>::success(assignment, "Assignment retrieved"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => {
            error!("Failed to load assignment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load assignment: {e}"),
                )),
            )
        }
    }
}
