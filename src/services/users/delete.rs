use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 删除学生，级联删除其考勤与成绩记录
pub async fn delete_student(
    service: &UserService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    delete_with_role(
        service,
        student_id,
        UserRole::Student,
        ErrorCode::StudentNotFound,
        "学生",
        request,
    )
    .await
}

/// 删除教师
pub async fn delete_teacher(
    service: &UserService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    delete_with_role(
        service,
        teacher_id,
        UserRole::Teacher,
        ErrorCode::TeacherNotFound,
        "教师",
        request,
    )
    .await
}

async fn delete_with_role(
    service: &UserService,
    user_id: i64,
    role: UserRole,
    not_found_code: ErrorCode,
    label: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先确认目标存在且角色匹配，避免误删其他角色
    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.role == role => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                not_found_code,
                format!("{label}不存在"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询{label}失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_user(user_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(format!("{label}删除成功"))))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            not_found_code,
            format!("{label}不存在"),
        ))),
        Err(e) => {
            error!("Failed to delete user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserDeleteFailed,
                    format!("删除{label}失败: {e}"),
                )),
            )
        }
    }
}
