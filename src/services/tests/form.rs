//! 生成端点的 multipart 表单解析
//!
//! 文本字段收集为字符串，上传文件流式写入临时目录并限制大小。
//! 临时文件只在本次请求内有效，生成调用结束后由调用方删除。

use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::QuizGenError;
use crate::models::tests::requests::{GenerateMoreForm, GenerateTestForm, UploadedFile};
use crate::models::{ApiResponse, ErrorCode};

/// 解析出的原始字段，两个生成端点共用
#[derive(Default)]
struct RawForm {
    title: Option<String>,
    resource_description: Option<String>,
    num_questions: Option<usize>,
    standards: Option<String>,
    file: Option<UploadedFile>,
}

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        message,
    ))
}

fn internal_error(message: impl Into<String>) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
        ErrorCode::InternalServerError,
        message,
    ))
}

/// 解析 `POST /tests/generate` 的表单
pub async fn parse_generate_form(payload: Multipart) -> Result<GenerateTestForm, HttpResponse> {
    let config = AppConfig::get();
    let raw = read_fields(payload).await?;

    let title = match raw.title.filter(|t| !t.trim().is_empty()) {
        Some(title) => title,
        None => return Err(bad_request("Field 'title' is required")),
    };
    let resource_description = match raw.resource_description.filter(|d| !d.trim().is_empty()) {
        Some(desc) => desc,
        None => return Err(bad_request("Field 'resource_description' is required")),
    };

    Ok(GenerateTestForm {
        title,
        resource_description,
        num_questions: raw
            .num_questions
            .unwrap_or(config.generator.default_num_questions),
        standards: raw.standards.filter(|s| !s.trim().is_empty()),
        file: raw.file,
    })
}

/// 解析 `POST /tests/{id}/generate-more` 的表单
pub async fn parse_generate_more_form(payload: Multipart) -> Result<GenerateMoreForm, HttpResponse> {
    let config = AppConfig::get();
    let raw = read_fields(payload).await?;

    Ok(GenerateMoreForm {
        num_questions: raw
            .num_questions
            .unwrap_or(config.generator.default_more_questions),
        file: raw.file,
    })
}

async fn read_fields(mut payload: Multipart) -> Result<RawForm, HttpResponse> {
    let config = AppConfig::get();
    let mut raw = RawForm::default();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        match name.as_str() {
            "title" => raw.title = Some(read_text_field(&mut field).await?),
            "resource_description" => {
                raw.resource_description = Some(read_text_field(&mut field).await?)
            }
            "standards" => raw.standards = Some(read_text_field(&mut field).await?),
            "num_questions" => {
                let text = read_text_field(&mut field).await?;
                let parsed = text
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=100).contains(n));
                match parsed {
                    Some(n) => raw.num_questions = Some(n),
                    None => {
                        return Err(bad_request(
                            "Field 'num_questions' must be an integer between 1 and 100",
                        ));
                    }
                }
            }
            "file" => {
                if raw.file.is_some() {
                    return Err(bad_request("Only one file can be uploaded at a time"));
                }

                let file_name = content_disposition
                    .and_then(|cd| cd.get_filename())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "attachment".to_string());

                raw.file = Some(save_temp_file(&mut field, file_name, config).await?);
            }
            _ => {
                // 未知字段直接丢弃
                while field.next().await.is_some() {}
            }
        }
    }

    Ok(raw)
}

async fn read_text_field(field: &mut actix_multipart::Field) -> Result<String, HttpResponse> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let data = chunk.map_err(|e| bad_request(format!("Malformed multipart field: {e}")))?;
        bytes.extend_from_slice(&data);
    }
    String::from_utf8(bytes).map_err(|_| bad_request("Form fields must be valid UTF-8"))
}

async fn save_temp_file(
    field: &mut actix_multipart::Field,
    file_name: String,
    config: &AppConfig,
) -> Result<UploadedFile, HttpResponse> {
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;

    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        tracing::error!("{}", QuizGenError::file_operation(format!("{e}")));
        return Err(internal_error("Failed to create upload directory"));
    }

    let stored_name = format!("{}-{}.bin", chrono::Utc::now().timestamp(), Uuid::new_v4());
    let path = PathBuf::from(upload_dir).join(stored_name);

    let mut f = match fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            tracing::error!("{}", QuizGenError::file_operation(format!("{e}")));
            return Err(internal_error("Failed to create temp file"));
        }
    };

    let mut total_size: usize = 0;
    while let Some(chunk) = field.next().await {
        let data = match chunk {
            Ok(data) => data,
            Err(e) => {
                let _ = fs::remove_file(&path);
                return Err(bad_request(format!("Upload interrupted: {e}")));
            }
        };

        total_size += data.len();
        // 校验大小
        if total_size > max_size {
            let _ = fs::remove_file(&path);
            return Err(bad_request("File size exceeds the limit"));
        }
        if let Err(e) = f.write_all(&data) {
            let _ = fs::remove_file(&path);
            tracing::error!("{}", QuizGenError::file_operation(format!("{e}")));
            return Err(internal_error("Failed to write temp file"));
        }
    }

    Ok(UploadedFile { path, file_name })
}

/// 请求结束后清理临时附件
pub fn cleanup_temp_file(file: &Option<UploadedFile>) {
    if let Some(file) = file
        && let Err(e) = fs::remove_file(&file.path)
    {
        tracing::debug!("Failed to remove temp file {:?}: {}", file.path, e);
    }
}
