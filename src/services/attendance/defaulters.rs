use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::AttendanceService;
use crate::aggregation::attendance::{
    defaulter_ratio, is_defaulter, month_bounds, parse_month, per_student_stats,
};
use crate::models::attendance::{
    requests::{AttendanceFilter, DefaulterParams},
    responses::{DefaulterEntry, DefaulterListResponse, DefaulterRatioResponse},
};
use crate::models::{ApiResponse, ErrorCode};

/// 缺勤者名单：某月出勤率低于 70% 的学生
///
/// 名单顺序是考勤记录的首次出现顺序，不按百分比排序；
/// 当月没有任何记录的学生不会出现在名单里（图表口径则会计入）。
pub async fn list_defaulters(
    service: &AttendanceService,
    params: DefaulterParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(division_id), Some(month)) = (params.division_id, params.month) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "division_id 或 month 参数缺失",
        )));
    };

    let Some((start, end)) = parse_month(&month).and_then(|(y, m)| month_bounds(y, m)) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DateInvalid,
            "month 格式应为 YYYY-MM",
        )));
    };

    let storage = service.get_storage(request);

    let filter = AttendanceFilter {
        division_id: Some(division_id),
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

    let stats = per_student_stats(&records);

    let student_ids: Vec<i64> = stats.iter().map(|s| s.student_id).collect();
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

    let defaulters: Vec<DefaulterEntry> = stats
        .iter()
        .filter(|stat| is_defaulter(stat.percentage()))
        .filter_map(|stat| {
            let student = students_by_id.get(&stat.student_id)?;
            Some(DefaulterEntry {
                student_id: stat.student_id,
                name: student.profile.name.clone(),
                prn: student.profile.prn.clone().unwrap_or_default(),
                attendance_percentage: stat.percentage(),
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DefaulterListResponse { defaulters },
        "查询成功",
    )))
}

/// 缺勤比例：在分组全体学生上统计，零记录学生计入缺勤者
pub async fn defaulter_chart(
    service: &AttendanceService,
    params: DefaulterParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(division_id), Some(month)) = (params.division_id, params.month) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "division_id 或 month 参数缺失",
        )));
    };

    let Some((start, end)) = parse_month(&month).and_then(|(y, m)| month_bounds(y, m)) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DateInvalid,
            "month 格式应为 YYYY-MM",
        )));
    };

    let storage = service.get_storage(request);

    let students = match storage
        .list_students(crate::models::users::requests::StudentFilter {
            division_id: Some(division_id),
            ..Default::default()
        })
        .await
    {
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

    let filter = AttendanceFilter {
        division_id: Some(division_id),
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

    let student_ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    let (defaulters, non_defaulters) = defaulter_ratio(&student_ids, &records);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DefaulterRatioResponse {
            defaulters,
            non_defaulters,
        },
        "查询成功",
    )))
}
