use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::SetRoleQuery;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn create_session(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.create_session(&req).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

pub async fn get_me(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_me(&req).await
}

pub async fn set_role(
    req: HttpRequest,
    query: web::Query<SetRoleQuery>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.set_role(&req, query.into_inner().role).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(
                web::resource("/session").route(
                    web::post()
                        .to(create_session)
                        // 未认证入口，按 IP 限流防止令牌枚举
                        .wrap(middlewares::RateLimit::session_exchange()),
                ),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireSession)
                    .route("/logout", web::post().to(logout))
                    .route("/me", web::get().to(get_me))
                    .route("/set-role", web::post().to(set_role)),
            ),
    );
}
