use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AttendanceService, day_bounds};
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::UpdateReasonRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 学生补充某天的请假原因
pub async fn update_reason(
    service: &AttendanceService,
    update: UpdateReasonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(student) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let (Some(date), Some(reason)) = (update.date, update.reason) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "date 和 reason 参数缺失",
        )));
    };

    let Some((start, _)) = day_bounds(&date) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DateInvalid,
            "date 格式应为 YYYY-MM-DD",
        )));
    };

    let storage = service.get_storage(request);

    // 记录的 date 已归一到零点，直接按零点时刻更新
    match storage
        .update_attendance_reason(student.id, start, &reason)
        .await
    {
        Ok(Some(_)) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("原因更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "该日期没有考勤记录",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新原因失败: {e}"),
            )),
        ),
    }
}
