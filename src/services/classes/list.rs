use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::RequireSession;
use crate::models::classes::responses::ClassSummary;
use crate::models::{ApiResponse, ErrorCode};

/// 列出教师自己的班级，附带学生数
pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
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

    match storage.list_classes_by_teacher(teacher_id).await {
        Ok(classes) => {
            let summaries: Vec<ClassSummary> = classes
                .into_iter()
                .map(|class| ClassSummary {
                    id: class.id,
                    name: class.name,
                    description: class.description,
                    class_code: class.class_code,
                    student_count: class.student_emails.len() as i64,
                    created_at: class.created_at,
                })
                .collect();

            Ok(HttpResponse::Ok()
                .json(ApiResponse::<Vec<ClassSummary>>::success(summaries, "Classes listed")))
        }
        Err(e) => {
            error!("Failed to list classes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list classes: {e}"),
                )),
            )
        }
    }
}
