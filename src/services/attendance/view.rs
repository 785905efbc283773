use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::{AttendanceService, day_bounds};
use crate::middlewares::RequireJWT;
use crate::models::attendance::{
    requests::{AttendanceFilter, DivisionAttendanceParams, StudentAttendanceParams},
    responses::{AttendanceStatusResponse, AttendanceViewEntry, AttendanceViewResponse},
};
use crate::models::{ApiResponse, ErrorCode};

/// 学生查询自己某天的考勤
pub async fn view_own(
    service: &AttendanceService,
    params: StudentAttendanceParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(student) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let Some(date) = params.date else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "date 参数缺失",
        )));
    };

    let Some((start, end)) = day_bounds(&date) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DateInvalid,
            "date 格式应为 YYYY-MM-DD",
        )));
    };

    let storage = service.get_storage(request);

    let filter = AttendanceFilter {
        student_id: Some(student.id),
        date_from: Some(start),
        date_to: Some(end),
        ..Default::default()
    };

    let records = match storage.find_attendance(filter).await {
        Ok(records) => records,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考勤失败: {e}"),
                )),
            );
        }
    };

    match records.into_iter().next() {
        Some(record) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceStatusResponse {
                status: record.status,
                reason: record.reason,
            },
            "查询成功",
        ))),
        None => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "该日期没有考勤记录",
        ))),
    }
}

/// 教师查询分组某天的考勤，带学生姓名与 PRN
pub async fn view_division(
    service: &AttendanceService,
    params: DivisionAttendanceParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(division_id), Some(date)) = (params.division_id, params.date) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "division_id 或 date 参数缺失",
        )));
    };

    let Some((start, end)) = day_bounds(&date) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DateInvalid,
            "date 格式应为 YYYY-MM-DD",
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

    // 记录上的 year 是写入时的快照，用分组当前的 year 匹配
    let filter = AttendanceFilter {
        division_id: Some(division.id),
        year: Some(division.year),
        date_from: Some(start),
        date_to: Some(end),
        ..Default::default()
    };

    let records = match storage.find_attendance(filter).await {
        Ok(records) => records,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考勤失败: {e}"),
                )),
            );
        }
    };

    // 批量取学生信息补全姓名与 PRN
    let student_ids: Vec<i64> = records.iter().map(|r| r.student_id).collect();
    let students = match storage.list_users_by_ids(&student_ids).await {
        Ok(students) => students,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    };
    let students_by_id: HashMap<i64, _> = students.into_iter().map(|s| (s.id, s)).collect();

    let entries: Vec<AttendanceViewEntry> = records
        .into_iter()
        .filter_map(|record| {
            let student = students_by_id.get(&record.student_id)?;
            Some(AttendanceViewEntry {
                student_id: record.student_id,
                name: student.profile.name.clone(),
                prn: student.profile.prn.clone().unwrap_or_default(),
                status: record.status,
                reason: record.reason,
                date: record.date,
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AttendanceViewResponse { records: entries },
        "查询成功",
    )))
}
