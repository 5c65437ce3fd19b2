use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::fs;
use tracing::{error, info};

use super::TestService;
use super::form::cleanup_temp_file;
use crate::errors::QuizGenError;
use crate::generator::Attachment;
use crate::middlewares::RequireSession;
use crate::models::tests::entities::{NewTest, Test};
use crate::models::tests::requests::{GenerateTestForm, UploadedFile};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::mime_type_for_filename;

/// 生成新测验：调用外部生成服务，成功则落库为草稿
pub async fn generate_test(
    service: &TestService,
    request: &HttpRequest,
    form: GenerateTestForm,
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

    let attachment = match load_attachment(&form.file) {
        Ok(attachment) => attachment,
        Err(resp) => {
            cleanup_temp_file(&form.file);
            return Ok(resp);
        }
    };

    let generator = service.get_generator(request);
    let generated = generator
        .generate(
            &form.resource_description,
            form.num_questions,
            form.standards.as_deref(),
            attachment.as_ref(),
        )
        .await;

    // 附件只在本次请求内有效
    cleanup_temp_file(&form.file);

    let questions = match generated {
        Ok(questions) => questions,
        Err(e) => return Ok(generation_error_response(&e)),
    };

    let storage = service.get_storage(request);
    let new_test = NewTest {
        title: form.title,
        teacher_id,
        resource_description: form.resource_description,
        questions,
    };

    match storage.create_test(new_test).await {
        Ok(test) => {
            info!(
                "Test {} generated with {} questions by teacher {}",
                test.id,
                test.questions.len(),
                teacher_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::<Test>::success(test, "Test generated")))
        }
        Err(e) => {
            error!("Failed to persist generated test: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TestCreationFailed,
                    format!("Test generation failed: {e}"),
                )),
            )
        }
    }
}

/// 读入临时附件并推断 MIME 类型
pub(crate) fn load_attachment(
    file: &Option<UploadedFile>,
) -> Result<Option<Attachment>, HttpResponse> {
    let Some(file) = file else {
        return Ok(None);
    };

    match fs::read(&file.path) {
        Ok(data) => Ok(Some(Attachment {
            data,
            mime_type: mime_type_for_filename(&file.file_name).to_string(),
        })),
        Err(e) => {
            error!("Failed to read uploaded file: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to read uploaded file",
                )),
            )
        }
    }
}

/// 生成失败的统一响应：解析失败与服务失败都按 500 返回，错误码区分
pub(crate) fn generation_error_response(e: &QuizGenError) -> HttpResponse {
    error!("{}", e);
    let code = match e {
        QuizGenError::GenerationParse(_) => ErrorCode::GenerationParseFailed,
        _ => ErrorCode::GenerationServiceFailed,
    };
    HttpResponse::InternalServerError()
        .json(ApiResponse::<()>::error_empty(code, e.message().to_string()))
}
