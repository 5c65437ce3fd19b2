use actix_web::{
    HttpRequest, HttpResponse, Result as ActixResult,
    cookie::{Cookie, SameSite, time},
};
use std::time::Duration;
use tracing::{error, info};

use super::AuthService;
use crate::config::AppConfig;
use crate::models::auth::entities::ExternalSessionData;
use crate::models::users::entities::{NewUser, User, UserRole};
use crate::models::{ApiResponse, ErrorCode};

pub const SESSION_COOKIE: &str = "session_token";
const SESSION_ID_HEADER: &str = "X-Session-ID";

/// 用外部身份服务的会话 ID 换取内部会话
///
/// 首次出现的邮箱会创建学生角色的新用户；会话令牌由身份服务签发，
/// 内部只保存 token -> 用户 的映射与过期时间。
pub async fn handle_create_session(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let session_id = match request
        .headers()
        .get(SESSION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        Some(id) => id.to_string(),
        None => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidSessionId,
                "Missing session ID",
            )));
        }
    };

    // 调用身份服务换取会话数据
    let data = match fetch_session_data(&config.auth.session_endpoint, &session_id, config).await {
        Ok(data) => data,
        Err(ExchangeError::Rejected) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidSessionId,
                "Invalid session ID",
            )));
        }
        Err(ExchangeError::Transport(e)) => {
            error!("Auth service error: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AuthServiceFailed,
                    format!("Auth service error: {e}"),
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    // 按邮箱查找用户，不存在则以学生角色创建
    let user = match storage.get_user_by_email(&data.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            let new_user = NewUser {
                email: data.email.clone(),
                name: data.name.clone().unwrap_or_else(|| data.email.clone()),
                picture: data.picture.clone(),
                role: UserRole::Student,
            };
            match storage.create_user(new_user).await {
                Ok(user) => {
                    info!("Created new user {} ({})", user.id, user.email);
                    user
                }
                Err(e) => {
                    error!("Failed to create user: {}", e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Failed to create user",
                        ),
                    ));
                }
            }
        }
        Err(e) => {
            error!("Failed to look up user: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to look up user",
                )),
            );
        }
    };

    // 写入会话，7 天过期
    let expires_at = chrono::Utc::now() + chrono::Duration::days(config.auth.session_expiry_days);
    if let Err(e) = storage
        .create_session(user.id, &data.session_token, expires_at)
        .await
    {
        error!("Failed to persist session: {}", e);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to persist session",
            )),
        );
    }

    info!("Session created for user {}", user.id);

    Ok(HttpResponse::Ok()
        .cookie(build_session_cookie(
            &data.session_token,
            config.auth.session_expiry_days,
        ))
        .json(ApiResponse::<User>::success(user, "Session created")))
}

enum ExchangeError {
    /// 身份服务明确拒绝该会话 ID
    Rejected,
    /// 传输层失败（含超时）
    Transport(String),
}

async fn fetch_session_data(
    endpoint: &str,
    session_id: &str,
    config: &AppConfig,
) -> Result<ExternalSessionData, ExchangeError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.auth.request_timeout))
        .build()
        .map_err(|e| ExchangeError::Transport(e.to_string()))?;

    let response = client
        .get(endpoint)
        .header(SESSION_ID_HEADER, session_id)
        .send()
        .await
        .map_err(|e| ExchangeError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ExchangeError::Rejected);
    }

    response
        .json::<ExternalSessionData>()
        .await
        .map_err(|e| ExchangeError::Transport(e.to_string()))
}

fn build_session_cookie(token: &str, expiry_days: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(time::Duration::days(expiry_days))
        .finish()
}
