use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TestService;
use crate::middlewares::RequireSession;
use crate::models::tests::entities::Test;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 获取单个测验
///
/// 可见性：拥有者教师；存在分配记录时的其他教师；分配名单中的学生。
pub async fn get_test(
    service: &TestService,
    request: &HttpRequest,
    test_id: i64,
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

    let allowed = match user.role {
        UserRole::Teacher => {
            if test.teacher_id == user.id {
                true
            } else {
                // 非拥有者教师：有分配记录的测验可见
                match storage.get_assignment_by_test(test_id).await {
                    Ok(assignment) => assignment.is_some(),
                    Err(e) => {
                        error!("Failed to load assignment: {}", e);
                        false
                    }
                }
            }
        }
        UserRole::Student => match storage.get_assignment_by_test(test_id).await {
            Ok(Some(assignment)) => assignment.contains_email(&user.email),
            Ok(None) => false,
            Err(e) => {
                error!("Failed to load assignment: {}", e);
                false
            }
        },
    };

    if !allowed {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Not authorized",
        )));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<Test>::success(test, "Test retrieved")))
}
