use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::middlewares::RequireSession;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};

/// 返回当前会话对应的用户
pub async fn handle_get_me(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireSession::extract_user(request) {
        Some(user) => {
            Ok(HttpResponse::Ok().json(ApiResponse::<User>::success(user, "Current user")))
        }
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        ))),
    }
}
