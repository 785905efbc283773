pub mod assign;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::AssignTeacherRequest;
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

    // 指派教师到分组
    pub async fn assign_teacher(
        &self,
        assign_data: AssignTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_teacher(self, assign_data, request).await
    }

    // 列出全部指派
    pub async fn list_assignments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_assignments(self, request).await
    }

    // 列出当前教师的指派
    pub async fn list_my_assignments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_my_assignments(self, request).await
    }
}
