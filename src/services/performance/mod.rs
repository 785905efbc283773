pub mod attendance;
pub mod marks;
pub mod student;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct PerformanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl PerformanceService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 学生查询自己的成绩综合视图
    pub async fn student_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        summary::student_summary(self, request).await
    }

    // 教师查询任意学生的成绩综合视图
    pub async fn student_summary_for_teacher(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student::student_summary_for_teacher(self, student_id, request).await
    }

    // 教师名下各分组的全量考勤汇总
    pub async fn teacher_attendance_summary(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        attendance::teacher_attendance_summary(self, request).await
    }

    // 教师名下各分组按科目的平均原始分
    pub async fn teacher_marks_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        marks::teacher_marks_summary(self, request).await
    }
}
