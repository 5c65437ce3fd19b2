pub mod assign;
pub mod get;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::AssignTestRequest;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    // 分配测验给学生，重复分配时整体替换名单
    pub async fn assign_test(
        &self,
        request: &HttpRequest,
        assign_data: AssignTestRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_test(self, request, assign_data).await
    }

    // 获取测验的分配记录
    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_assignment(self, request, test_id).await
    }
}
