/*!
 * 会话认证中间件
 *
 * 此中间件用于验证会话令牌的有效性，确保只有持有有效会话的用户才能访问受保护的路由。
 * 令牌由外部身份服务签发，本服务在 sessions 表中维护映射，并用对象缓存加速解析。
 *
 * ## 使用方法
 *
 * 1. 在路由上应用中间件：
 * ```rust,ignore
 * use actix_web::{web, App, HttpServer};
 * use crate::middlewares::require_session::RequireSession;
 *
 * HttpServer::new(|| {
 *     App::new()
 *         .service(
 *             web::scope("/api")
 *                 .wrap(RequireSession)  // 应用会话验证中间件
 *                 .route("/protected", web::get().to(protected_handler))
 *         )
 * })
 * ```
 *
 * 2. 在处理程序中提取用户信息：
 * ```rust,ignore
 * async fn protected_handler(req: HttpRequest) -> Result<HttpResponse> {
 *     if let Some(user) = RequireSession::extract_user(&req) {
 *         return Ok(HttpResponse::Ok().json(format!("Hello, {}!", user.name)));
 *     }
 *     Ok(HttpResponse::InternalServerError().finish())
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端通过 `session_token` Cookie 或 `Authorization: Bearer <token>` 携带令牌
 * 2. 中间件先查对象缓存，未命中则查 sessions 表并校验过期时间（统一 UTC）
 * 3. 令牌有效时将用户信息与原始令牌存入请求扩展，继续处理请求
 * 4. 令牌缺失、未知或过期一律返回 401，不区分具体原因
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";
const SESSION_COOKIE: &str = "session_token";

/// 请求扩展中保存的原始会话令牌，供登出与角色切换使用
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

#[derive(Clone)]
pub struct RequireSession;

// 辅助函数：创建错误响应
fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                message,
            )),
    }
}

/// 从 Cookie 或 Authorization 头中取出会话令牌
fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.request().cookie(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(|s| s.to_string())
}

// 辅助函数：解析并校验会话令牌
async fn resolve_session(req: &ServiceRequest) -> Result<(User, String), String> {
    let token = extract_token(req).ok_or_else(|| "Missing session token".to_string())?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // 从缓存中获取用户信息
    match cache.get_raw(&format!("session:{token}")).await {
        CacheResult::Found(json) => match serde_json::from_str::<User>(&json) {
            Ok(user) => return Ok((user, token)),
            Err(_) => {
                cache.remove(&format!("session:{token}")).await;
                info!("Failed to deserialize user from cache for session token");
            }
        },
        _ => {
            debug!("Session not found in cache, falling back to storage");
        }
    };

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let session = storage
        .get_session_by_token(&token)
        .await
        .map_err(|_| "Failed to resolve session from storage".to_string())?
        .ok_or_else(|| "Invalid session token".to_string())?;

    // 过期会话视为不存在，对外不区分无效与过期
    if session.is_expired() {
        return Err("Invalid session token".to_string());
    }

    let user = storage
        .get_user_by_id(session.user_id)
        .await
        .map_err(|_| "Failed to retrieve user from storage".to_string())?
        .ok_or_else(|| "User not found".to_string())?;

    // 将用户信息存入缓存
    let app_config = AppConfig::get();
    if let Ok(user_json) = serde_json::to_string(&user) {
        cache
            .insert_raw(
                format!("session:{token}"),
                user_json,
                app_config.cache.default_ttl,
            )
            .await;
    }

    Ok((user, token))
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            // 解析会话令牌
            match resolve_session(&req).await {
                Ok((user, token)) => {
                    debug!("Session authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    req.extensions_mut().insert(SessionToken(token));
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Session authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, "Not authenticated")
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireSession {
    /// 从请求扩展中提取用户信息
    /// 此函数应该在应用了RequireSession中间件的路由处理程序中使用
    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }

    /// 从请求扩展中提取用户ID
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<User>().map(|user| user.id)
    }

    /// 从请求扩展中提取用户角色
    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions()
            .get::<User>()
            .map(|user| user.role.clone())
    }

    /// 从请求扩展中提取原始会话令牌
    pub fn extract_session_token(req: &actix_web::HttpRequest) -> Option<String> {
        req.extensions()
            .get::<SessionToken>()
            .map(|token| token.0.clone())
    }
}
