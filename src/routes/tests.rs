use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::TestService;
use crate::utils::{SafeQuestionId, SafeTestIdI64};

// 懒加载的全局 TEST_SERVICE 实例
static TEST_SERVICE: Lazy<TestService> = Lazy::new(TestService::new_lazy);

// HTTP处理程序
pub async fn list_tests(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEST_SERVICE.list_tests(&req).await
}

pub async fn generate_test(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    TEST_SERVICE.generate_test(&req, payload).await
}

pub async fn generate_more_questions(
    req: HttpRequest,
    test_id: SafeTestIdI64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .generate_more_questions(&req, test_id.0, payload)
        .await
}

pub async fn publish_test(req: HttpRequest, test_id: SafeTestIdI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.publish_test(&req, test_id.0).await
}

pub async fn delete_question(
    req: HttpRequest,
    test_id: SafeTestIdI64,
    question_id: SafeQuestionId,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .delete_question(&req, test_id.0, question_id.0)
        .await
}

pub async fn get_test(req: HttpRequest, test_id: SafeTestIdI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.get_test(&req, test_id.0).await
}

pub async fn take_test(req: HttpRequest, test_id: SafeTestIdI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.take_test(&req, test_id.0).await
}

pub async fn delete_test(req: HttpRequest, test_id: SafeTestIdI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.delete_test(&req, test_id.0).await
}

// 配置路由
pub fn configure_test_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/tests")
            .wrap(middlewares::RequireSession)
            .service(
                // 教师看自己的测验，学生看被分配的已发布测验
                web::resource("").route(web::get().to(list_tests)),
            )
            .service(
                web::resource("/generate").route(
                    web::post()
                        .to(generate_test)
                        // 生成调用昂贵，教师专用且限流
                        .wrap(middlewares::RateLimit::generate())
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/{test_id}/generate-more").route(
                    web::post()
                        .to(generate_more_questions)
                        .wrap(middlewares::RateLimit::generate())
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/{test_id}/publish").route(
                    web::put()
                        .to(publish_test)
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                web::resource("/{test_id}/questions/{question_id}").route(
                    web::delete()
                        .to(delete_question)
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            )
            .service(
                // 分配名单中的学生获取打乱后的作答副本
                web::resource("/{test_id}/take").route(web::get().to(take_test)),
            )
            .service(
                web::resource("/{test_id}")
                    .route(web::get().to(get_test))
                    .route(
                        web::delete()
                            .to(delete_test)
                            .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                    ),
            ),
    );
}
