use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::middlewares::RequireSession;
use crate::models::classes::entities::Class;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::generate_class_code;
use crate::utils::validate::validate_emails;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
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

    if class_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Class name is required",
        )));
    }

    if let Err(msg) = validate_emails(&class_data.student_emails) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let storage = service.get_storage(request);

    // 班级码创建时生成一次，之后不可变
    let class_code = generate_class_code();

    match storage
        .create_class(teacher_id, class_data, &class_code)
        .await
    {
        Ok(class) => {
            info!("Class {} created by teacher {}", class.id, teacher_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<Class>::success(class, "Class created")))
        }
        Err(e) => Ok(handle_class_create_error(&e.to_string())),
    }
}

/// 错误响应辅助函数
fn handle_class_create_error(e: &str) -> HttpResponse {
    let msg = format!("Class creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        // 班级码撞库，概率极低，让客户端重试
        HttpResponse::Conflict().json(ApiResponse::<()>::error_empty(
            ErrorCode::ClassCreationFailed,
            "Class code collision, please retry",
        ))
    } else {
        HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error_empty(ErrorCode::ClassCreationFailed, msg))
    }
}
