use actix_web::web;

use crate::services::system::handle_status;

// 配置路由：无需认证的存活探测
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api").route(web::get().to(handle_status)))
        .service(web::resource("/api/").route(web::get().to(handle_status)));
}
