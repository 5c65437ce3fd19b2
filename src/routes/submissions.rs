use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::submissions::requests::SubmitTestRequest;
use crate::models::users::entities::UserRole;
use crate::services::SubmissionService;
use crate::utils::SafeTestIdI64;

// 懒加载的全局 SUBMISSION_SERVICE 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// HTTP处理程序
pub async fn submit_test(
    req: HttpRequest,
    submit_data: web::Json<SubmitTestRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit_test(&req, submit_data.into_inner())
        .await
}

pub async fn list_test_submissions(
    req: HttpRequest,
    test_id: SafeTestIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_test_submissions(&req, test_id.0)
        .await
}

pub async fn get_own_submission(
    req: HttpRequest,
    test_id: SafeTestIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.get_own_submission(&req, test_id.0).await
}

// 配置路由
pub fn configure_submission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/submissions")
            .wrap(middlewares::RequireSession)
            .service(
                // 任何已认证用户提交；是否在分配名单中由服务层校验
                web::resource("").route(web::post().to(submit_test)),
            )
            .service(
                web::resource("/test/{test_id}").route(
                    web::get()
                        .to(list_test_submissions)
                        // 仅拥有者教师查看全部提交
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                // 学生查看自己的提交
                web::resource("/student/{test_id}").route(web::get().to(get_own_submission)),
            ),
    );
}
