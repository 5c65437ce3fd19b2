pub mod detail;
pub mod list;
pub mod scoring;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::SubmitTestRequest;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    // 提交作答并评分，每人每测验一次
    pub async fn submit_test(
        &self,
        request: &HttpRequest,
        submit_data: SubmitTestRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_test(self, request, submit_data).await
    }

    // 教师查看测验的全部提交
    pub async fn list_test_submissions(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_test_submissions(self, request, test_id).await
    }

    // 学生查看自己对某测验的提交
    pub async fn get_own_submission(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_own_submission(self, request, test_id).await
    }
}
