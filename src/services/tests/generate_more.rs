use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TestService;
use super::form::cleanup_temp_file;
use super::generate::{generation_error_response, load_attachment};
use crate::middlewares::RequireSession;
use crate::models::tests::entities::Test;
use crate::models::tests::requests::GenerateMoreForm;
use crate::models::{ApiResponse, ErrorCode};

/// 为已有测验追加题目，仅测验拥有者可用
pub async fn generate_more_questions(
    service: &TestService,
    request: &HttpRequest,
    test_id: i64,
    form: GenerateMoreForm,
) -> ActixResult<HttpResponse> {
    let teacher_id = match RequireSession::extract_user_id(request) {
        Some(id) => id,
        None => {
            cleanup_temp_file(&form.file);
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
            cleanup_temp_file(&form.file);
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestNotFound,
                "Test not found",
            )));
        }
        Err(e) => {
            cleanup_temp_file(&form.file);
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
        cleanup_temp_file(&form.file);
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Not authorized",
        )));
    }

    let attachment = match load_attachment(&form.file) {
        Ok(attachment) => attachment,
        Err(resp) => {
            cleanup_temp_file(&form.file);
            return Ok(resp);
        }
    };

    let generator = service.get_generator(request);
    let generated = generator
        .generate_more(&test, form.num_questions, attachment.as_ref())
        .await;

    cleanup_temp_file(&form.file);

    let new_questions = match generated {
        Ok(questions) => questions,
        Err(e) => return Ok(generation_error_response(&e)),
    };

    // 新题目追加到现有题目之后
    let mut all_questions = test.questions.clone();
    let added = new_questions.len();
    all_questions.extend(new_questions);

    match storage.update_test_questions(test_id, all_questions).await {
        Ok(Some(updated)) => {
            info!("Appended {} questions to test {}", added, test_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<Test>::success(updated, "Questions added")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "Test not found",
        ))),
        Err(e) => {
            error!("Failed to persist new questions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to generate more questions: {e}"),
                )),
            )
        }
    }
}
