use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::AttendanceService;
use crate::aggregation::attendance::normalize_to_midnight;
use crate::middlewares::RequireJWT;
use crate::models::attendance::{
    requests::{AttendanceEntry, UpsertAttendanceRecord},
    responses::SaveAttendanceResponse,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 批量保存今天的考勤
///
/// 每条记录按 (student, date) 自然键 upsert，重复提交后写覆盖先写。
/// year/branch/division 在写入时从学生快照，学生换组不影响历史记录。
pub async fn save_attendance(
    service: &AttendanceService,
    entries: Vec<AttendanceEntry>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    if entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "考勤数据不能为空",
        )));
    }

    let storage = service.get_storage(request);

    // 归一到当天零点，同一天重复提交命中同一条记录
    let today = normalize_to_midnight(chrono::Utc::now());

    let mut saved = 0i64;
    for entry in entries {
        let student = match storage.get_user_by_id(entry.student_id).await {
            Ok(Some(user)) if user.role == UserRole::Student => user,
            Ok(_) => {
                // 不存在或不是学生的条目直接略过，照常处理其余条目
                warn!("Skipping attendance entry for unknown student {}", entry.student_id);
                continue;
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询学生失败: {e}"),
                    )),
                );
            }
        };

        let Some(division_id) = student.profile.division_id else {
            warn!("Skipping attendance entry for student {} without division", student.id);
            continue;
        };

        let record = UpsertAttendanceRecord {
            student_id: student.id,
            year: student.profile.year.unwrap_or_default(),
            branch: student.profile.branch.unwrap_or_default(),
            division_id,
            date: today,
            status: entry.status,
            reason: entry.reason,
            recorded_by: teacher.id,
        };

        if let Err(e) = storage.upsert_attendance(record).await {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceSaveFailed,
                    format!("保存考勤失败: {e}"),
                )),
            );
        }
        saved += 1;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SaveAttendanceResponse { saved },
        "考勤保存成功",
    )))
}
