use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::str::FromStr;
use tracing::{error, info};

use super::AuthService;
use crate::middlewares::RequireSession;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};

/// 切换当前用户角色（teacher / student），角色随时可变
pub async fn handle_set_role(
    service: &AuthService,
    request: &HttpRequest,
    role: String,
) -> ActixResult<HttpResponse> {
    let role = match UserRole::from_str(&role) {
        Ok(role) => role,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidRole,
                "Invalid role",
            )));
        }
    };

    let user_id = match RequireSession::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Not authenticated",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.update_user_role(user_id, role).await {
        Ok(Some(user)) => {
            // 角色变了，当前令牌的缓存条目作废
            if let Some(token) = RequireSession::extract_session_token(request) {
                service
                    .get_cache(request)
                    .remove(&format!("session:{token}"))
                    .await;
            }
            info!("User {} switched role to {}", user.id, user.role);
            Ok(HttpResponse::Ok().json(ApiResponse::<User>::success(user, "Role updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            error!("Failed to update role: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update role: {e}"),
                )),
            )
        }
    }
}
