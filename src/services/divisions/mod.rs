pub mod create;
pub mod list;
pub mod students;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::divisions::requests::CreateDivisionRequest;
use crate::storage::Storage;

pub struct DivisionService {
    storage: Option<Arc<dyn Storage>>,
}

impl DivisionService {
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

    // 创建分组
    pub async fn create_division(
        &self,
        division_data: CreateDivisionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_division(self, division_data, request).await
    }

    // 列出当前教师所在年级的分组
    pub async fn list_for_teacher(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_for_teacher(self, request).await
    }

    // 按年级列出分组
    pub async fn list_by_year(
        &self,
        year: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_by_year(self, year, request).await
    }

    // 列出某分组中当前教师年级的学生
    pub async fn list_students(
        &self,
        division_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::list_students(self, division_id, request).await
    }
}
