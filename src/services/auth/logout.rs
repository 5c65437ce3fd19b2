use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, cookie::Cookie};
use tracing::{info, warn};

use super::AuthService;
use super::session::SESSION_COOKIE;
use crate::middlewares::RequireSession;
use crate::models::ApiResponse;

/// 登出：删除会话记录、失效缓存并清理 Cookie
pub async fn handle_logout(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    if let Some(token) = RequireSession::extract_session_token(request) {
        if let Err(e) = storage.delete_session_by_token(&token).await {
            // 会话删除失败也要清 Cookie，客户端观感一致
            warn!("Failed to delete session on logout: {}", e);
        }
        cache.remove(&format!("session:{token}")).await;
    }

    if let Some(user_id) = RequireSession::extract_user_id(request) {
        info!("User {} logged out", user_id);
    }

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(removal)
        .json(ApiResponse::success_empty("Logged out")))
}
