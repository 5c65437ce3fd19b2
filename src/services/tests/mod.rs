pub mod delete;
pub mod delete_question;
pub mod detail;
pub mod form;
pub mod generate;
pub mod generate_more;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::generator::QuestionGenerator;
use crate::storage::Storage;

pub struct TestService {
    storage: Option<Arc<dyn Storage>>,
}

impl TestService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_generator(&self, request: &HttpRequest) -> Arc<QuestionGenerator> {
        request
            .app_data::<actix_web::web::Data<Arc<QuestionGenerator>>>()
            .expect("Question generator not found in app data")
            .get_ref()
            .clone()
    }

    // 生成新测验
    pub async fn generate_test(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        let form = match form::parse_generate_form(payload).await {
            Ok(form) => form,
            Err(response) => return Ok(response),
        };
        generate::generate_test(self, request, form).await
    }

    // 为已有测验追加题目
    pub async fn generate_more_questions(
        &self,
        request: &HttpRequest,
        test_id: i64,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        let form = match form::parse_generate_more_form(payload).await {
            Ok(form) => form,
            Err(response) => return Ok(response),
        };
        generate_more::generate_more_questions(self, request, test_id, form).await
    }

    // 发布测验
    pub async fn publish_test(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        publish::publish_test(self, request, test_id).await
    }

    // 删除单个题目
    pub async fn delete_question(
        &self,
        request: &HttpRequest,
        test_id: i64,
        question_id: String,
    ) -> ActixResult<HttpResponse> {
        delete_question::delete_question(self, request, test_id, question_id).await
    }

    // 列出测验：教师看自己的，学生看被分配的已发布测验
    pub async fn list_tests(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_tests(self, request).await
    }

    // 获取单个测验
    pub async fn get_test(&self, request: &HttpRequest, test_id: i64) -> ActixResult<HttpResponse> {
        detail::get_test(self, request, test_id).await
    }

    // 获取打乱后的作答副本
    pub async fn take_test(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        take::take_test(self, request, test_id).await
    }

    // 删除测验
    pub async fn delete_test(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_test(self, request, test_id).await
    }
}
