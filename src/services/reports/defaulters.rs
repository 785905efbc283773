use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::ReportService;
use crate::aggregation::attendance::{is_defaulter, month_bounds, parse_month, per_student_stats};
use crate::models::attendance::{
    requests::{AttendanceFilter, DefaulterParams},
    responses::DefaulterEntry,
};
use crate::models::performance::responses::DefaulterReportResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 缺勤报表载荷：与缺勤名单同一套口径，外加分组名与月份
pub async fn defaulters_report(
    service: &ReportService,
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

    let records = match storage
        .find_attendance(AttendanceFilter {
            division_id: Some(division_id),
            date_from: Some(start),
            date_to: Some(end),
            ..Default::default()
        })
        .await
    {
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
        DefaulterReportResponse {
            division_name: division.name,
            month,
            defaulters,
        },
        "查询成功",
    )))
}
