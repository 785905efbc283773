pub mod defaulters;
pub mod reason;
pub mod save;
pub mod view;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceEntry, DefaulterParams, DivisionAttendanceParams, StudentAttendanceParams,
    UpdateReasonRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 批量保存今天的考勤
    pub async fn save_attendance(
        &self,
        entries: Vec<AttendanceEntry>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_attendance(self, entries, request).await
    }

    // 学生查询自己某天的考勤
    pub async fn view_own(
        &self,
        params: StudentAttendanceParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        view::view_own(self, params, request).await
    }

    // 学生补充请假原因
    pub async fn update_reason(
        &self,
        update: UpdateReasonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reason::update_reason(self, update, request).await
    }

    // 教师查询分组某天的考勤
    pub async fn view_division(
        &self,
        params: DivisionAttendanceParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        view::view_division(self, params, request).await
    }

    // 缺勤者名单（某月出勤率低于 70% 的学生）
    pub async fn list_defaulters(
        &self,
        params: DefaulterParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        defaulters::list_defaulters(self, params, request).await
    }

    // 缺勤比例（图表用，零记录学生计入缺勤者）
    pub async fn defaulter_chart(
        &self,
        params: DefaulterParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        defaulters::defaulter_chart(self, params, request).await
    }
}

/// 解析 "YYYY-MM-DD" 并给出当天的起止时刻（含两端）
pub(crate) fn day_bounds(
    date: &str,
) -> Option<(chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>)> {
    let day = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let start = day.and_hms_opt(0, 0, 0)?.and_utc();
    let end = day.and_hms_opt(23, 59, 59)?.and_utc();
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_day_bounds() {
        let (start, end) = day_bounds("2024-04-15").unwrap();
        assert_eq!(start.day(), 15);
        assert_eq!(start.hour(), 0);
        assert_eq!(end.hour(), 23);
        assert_eq!(end.second(), 59);
        assert!(day_bounds("2024-15-99").is_none());
        assert!(day_bounds("yesterday").is_none());
    }
}
