pub mod create;
pub mod improvement;
pub mod list;
pub mod marks;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::tests::requests::{CreateTestRequest, ImprovementParams, SaveMarksRequest};
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

    // 创建测验
    pub async fn create_test(
        &self,
        test_data: CreateTestRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_test(self, test_data, request).await
    }

    // 列出当前教师年级的测验
    pub async fn list_for_teacher(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_for_teacher(self, request).await
    }

    // 批量保存成绩（整批校验，任一违规全部拒绝）
    pub async fn save_marks(
        &self,
        marks_data: SaveMarksRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        marks::save_marks(self, marks_data, request).await
    }

    // 需进步名单（任一科目均值低于 40%）
    pub async fn improvement_list(
        &self,
        params: ImprovementParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        improvement::improvement_list(self, params, request).await
    }

    // 进步比例（图表用，固定 30 分口径，低于 50%）
    pub async fn improvement_chart(
        &self,
        params: ImprovementParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        improvement::improvement_chart(self, params, request).await
    }
}
