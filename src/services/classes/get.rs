use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::RequireSession;
use crate::models::classes::responses::{ClassDetailResponse, ClassStudent};
use crate::models::{ApiResponse, ErrorCode};

/// 获取班级详情，仅班级拥有者可用
///
/// 花名册里的邮箱如果对应注册用户，附带其姓名。
pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
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

    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to load class: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load class: {e}"),
                )),
            );
        }
    };

    if class.teacher_id != teacher_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Not authorized",
        )));
    }

    let mut students = Vec::with_capacity(class.student_emails.len());
    for email in &class.student_emails {
        let name = match storage.get_user_by_email(email).await {
            Ok(Some(user)) => Some(user.name),
            Ok(None) => None,
            Err(e) => {
                error!("Failed to look up roster member {}: {}", email, e);
                None
            }
        };
        students.push(ClassStudent {
            email: email.clone(),
            name,
        });
    }

    let detail = ClassDetailResponse {
        id: class.id,
        name: class.name,
        description: class.description,
        class_code: class.class_code,
        students,
        created_at: class.created_at,
        updated_at: class.updated_at,
    };

    Ok(HttpResponse::Ok()
        .json(ApiResponse::<ClassDetailResponse>::success(detail, "Class retrieved")))
}
