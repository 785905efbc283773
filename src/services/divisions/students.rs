use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DivisionService;
use crate::middlewares::RequireJWT;
use crate::models::divisions::responses::DivisionStudentsResponse;
use crate::models::users::requests::StudentFilter;
use crate::models::{ApiResponse, ErrorCode};

/// 列出某分组中当前教师年级的学生
pub async fn list_students(
    service: &DivisionService,
    division_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let storage = service.get_storage(request);

    let division = match storage.get_division_by_id(division_id).await {
        Ok(Some(division)) => division,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::DivisionNotFound,
                "分组不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询分组失败: {e}"),
                )),
            );
        }
    };

    // 只返回教师自己年级的学生
    let filter = StudentFilter {
        division_id: Some(division.id),
        year: teacher.profile.year,
        ..Default::default()
    };

    match storage.list_students(filter).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DivisionStudentsResponse { students },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学生列表失败: {e}"),
            )),
        ),
    }
}
