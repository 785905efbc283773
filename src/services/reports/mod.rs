pub mod defaulters;
pub mod improvement;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::DefaulterParams;
use crate::models::tests::requests::ImprovementParams;
use crate::storage::Storage;

/// 报表数据服务
///
/// 只负责组装报表载荷，PDF 渲染由外部的报表渲染器完成。
pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    // 缺勤报表载荷
    pub async fn defaulters_report(
        &self,
        params: DefaulterParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        defaulters::defaulters_report(self, params, request).await
    }

    // 进步报表载荷（mean-of-means 低于 50% 的口径）
    pub async fn improvement_report(
        &self,
        params: ImprovementParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        improvement::improvement_report(self, params, request).await
    }
}
