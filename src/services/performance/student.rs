use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PerformanceService;
use super::summary::build_student_summary;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 教师查询任意学生的成绩综合视图
///
/// 历史行为不校验学生是否属于教师名下的分组，任何教师可查任何学生。
/// 是否收紧由 `app.enforce_division_scope` 配置决定（默认关闭），
/// 开启后只能查询已指派分组内的学生。
pub async fn student_summary_for_teacher(
    service: &PerformanceService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let storage = service.get_storage(request);

    let student = match storage.get_user_by_id(student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => user,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "学生不存在",
            )));
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

    if service.get_config().app.enforce_division_scope {
        let allowed = match student.profile.division_id {
            Some(division_id) => match storage.get_assignment(teacher.id, division_id).await {
                Ok(assignment) => assignment.is_some(),
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询指派失败: {e}"),
                        ),
                    ));
                }
            },
            None => false,
        };

        if !allowed {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "该学生不在您名下的分组中",
            )));
        }
    }

    match build_student_summary(&*storage, &student).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩综合视图失败: {e}"),
            )),
        ),
    }
}
