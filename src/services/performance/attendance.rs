use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::PerformanceService;
use crate::aggregation::attendance::per_division_stats;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::AttendanceFilter;
use crate::models::performance::responses::DivisionAttendanceSummary;
use crate::models::{ApiResponse, ErrorCode};

/// 教师名下各分组的全量考勤汇总
///
/// 按分组聚合全部历史考勤记录（无时间范围），与缺勤名单的
/// 按月口径刻意不同，两者并存。没有任何记录的分组不产生行。
pub async fn teacher_attendance_summary(
    service: &PerformanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let storage = service.get_storage(request);

    let assignments = match storage.list_assignments_by_teacher(teacher.id).await {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询指派失败: {e}"),
                )),
            );
        }
    };

    let division_ids: Vec<i64> = assignments.iter().map(|a| a.division_id).collect();

    // 一次取所有指派分组的全部记录，再在内存里按分组聚合
    let records = match storage
        .find_attendance(AttendanceFilter {
            division_ids: Some(division_ids.clone()),
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

    let divisions = match storage.list_divisions_by_ids(&division_ids).await {
        Ok(divisions) => divisions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询分组失败: {e}"),
                )),
            );
        }
    };
    let divisions_by_id: HashMap<i64, _> = divisions.into_iter().map(|d| (d.id, d)).collect();

    let summaries: Vec<DivisionAttendanceSummary> = per_division_stats(&records)
        .iter()
        .filter_map(|stat| {
            let division = divisions_by_id.get(&stat.division_id)?;
            Some(DivisionAttendanceSummary {
                division_id: division.id,
                division_name: division.name.clone(),
                year: division.year.clone(),
                branch: division.branch.clone(),
                attendance_percentage: stat.percentage(),
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(summaries, "查询成功")))
}
