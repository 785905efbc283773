use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::middlewares::RequireJWT;
use crate::models::tests::responses::TestListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 列出当前教师年级的测验，按日期倒序
pub async fn list_for_teacher(
    service: &TestService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let Some(year) = teacher.profile.year else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "教师未设置年级",
        )));
    };

    let storage = service.get_storage(request);

    match storage.list_tests_by_year(&year).await {
        Ok(tests) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TestListResponse { tests },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询测验列表失败: {e}"),
            )),
        ),
    }
}
