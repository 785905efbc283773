use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TestService;
use crate::models::tests::{
    requests::{CreateTestRequest, NewTest},
    responses::TestResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_test(
    service: &TestService,
    test_data: CreateTestRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if test_data.name.trim().is_empty() || test_data.year.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "name 和 year 不能为空",
        )));
    }

    // 满分必须为正，后续所有百分比计算都以它为分母
    if test_data.total_marks <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MarksValidationFailed,
            "total_marks 必须大于 0",
        )));
    }

    let Ok(date) = chrono::NaiveDate::parse_from_str(&test_data.date, "%Y-%m-%d") else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DateInvalid,
            "date 格式应为 YYYY-MM-DD",
        )));
    };
    let date = date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc();

    let storage = service.get_storage(request);

    let new_test = NewTest {
        name: test_data.name,
        year: test_data.year,
        date,
        total_marks: test_data.total_marks,
    };

    match storage.create_test(new_test).await {
        Ok(test) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(TestResponse { test }, "测验创建成功"))),
        Err(e) => {
            error!("Failed to create test: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TestCreationFailed,
                    format!("创建测验失败: {e}"),
                )),
            )
        }
    }
}
