use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::assignments::requests::AssignTeacherRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn assign_teacher(
    service: &AssignmentService,
    assign_data: AssignTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 教师必须存在且角色正确
    match storage.get_user_by_id(assign_data.teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "教师不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师失败: {e}"),
                )),
            );
        }
    }

    // 分组必须存在
    match storage.get_division_by_id(assign_data.division_id).await {
        Ok(Some(_)) => {}
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
    }

    // 同一教师对同一分组只允许一条指派
    match storage
        .get_assignment(assign_data.teacher_id, assign_data.division_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AssignmentAlreadyExists,
                "该教师已被指派到此分组",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询指派失败: {e}"),
                )),
            );
        }
    }

    match storage
        .create_assignment(assign_data.teacher_id, assign_data.division_id)
        .await
    {
        Ok(assignment) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "教师指派成功")))
        }
        Err(e) => {
            error!("Failed to create assignment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("指派教师失败: {e}"),
                )),
            )
        }
    }
}
