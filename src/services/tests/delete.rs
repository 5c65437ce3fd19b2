use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TestService;
use crate::middlewares::RequireSession;
use crate::models::{ApiResponse, ErrorCode};

/// 删除测验，连同其分配记录，仅测验拥有者可用
pub async fn delete_test(
    service: &TestService,
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

    match storage.delete_test(test_id).await {
        Ok(_) => {
            info!("Test {} deleted by teacher {}", test_id, teacher_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Test deleted")))
        }
        Err(e) => {
            error!("Failed to delete test: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete test: {e}"),
                )),
            )
        }
    }
}
