use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::middlewares::RequireSession;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::AssignTestRequest;
use crate::models::tests::entities::TestStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_emails;

/// 分配测验：仅拥有者教师，测验必须已发布；upsert 语义，名单整体替换
pub async fn assign_test(
    service: &AssignmentService,
    request: &HttpRequest,
    assign_data: AssignTestRequest,
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

    if let Err(msg) = validate_emails(&assign_data.student_emails) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let storage = service.get_storage(request);

    let test = match storage.get_test_by_id(assign_data.test_id).await {
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

    // 草稿测验不可分配
    if test.status != TestStatus::Published {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TestNotPublished,
            "Only published tests can be assigned",
        )));
    }

    match storage
        .upsert_assignment(assign_data.test_id, assign_data.student_emails)
        .await
    {
        Ok(assignment) => {
            info!(
                "Test {} assigned to {} students",
                assignment.test_id,
                assignment.student_emails.len()
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::<Assignment>::success(assignment, "Test assigned")))
        }
        Err(e) => {
            error!("Failed to assign test: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentFailed,
                    format!("Failed to assign test: {e}"),
                )),
            )
        }
    }
}
