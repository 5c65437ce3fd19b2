use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::ReportService;
use crate::utils::{SafeTestIdI64, SafeUserIdI64};

// 懒加载的全局 REPORT_SERVICE 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn get_test_report(
    req: HttpRequest,
    test_id: SafeTestIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.get_test_report(&req, test_id.0).await
}

pub async fn get_student_report(
    req: HttpRequest,
    student_id: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.get_student_report(&req, student_id.0).await
}

// 配置路由：报告全部教师专用
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reports")
            .wrap(middlewares::RequireRole::new(&UserRole::Teacher))
            .wrap(middlewares::RequireSession)
            .service(web::resource("/test/{test_id}").route(web::get().to(get_test_report)))
            .service(web::resource("/student/{student_id}").route(web::get().to(get_student_report))),
    );
}
