use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DivisionService;
use crate::middlewares::RequireJWT;
use crate::models::divisions::responses::DivisionListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 列出当前教师所在年级的分组
pub async fn list_for_teacher(
    service: &DivisionService,
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

    list_by_year(service, year, request).await
}

/// 按年级列出分组
pub async fn list_by_year(
    service: &DivisionService,
    year: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if year.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "year 不能为空",
        )));
    }

    let storage = service.get_storage(request);

    match storage.list_divisions_by_year(&year).await {
        Ok(divisions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DivisionListResponse { divisions },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询分组列表失败: {e}"),
            )),
        ),
    }
}
