use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::TeacherAssignment;
use crate::models::assignments::responses::{AssignmentListResponse, AssignmentView};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 列出全部指派，新的在前
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignments = match storage.list_assignments().await {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询指派列表失败: {e}"),
                )),
            );
        }
    };

    build_assignment_views(&*storage, assignments).await
}

/// 列出当前教师的指派，没有任何指派时返回 404（历史行为）
pub async fn list_my_assignments(
    service: &AssignmentService,
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
                    format!("查询指派列表失败: {e}"),
                )),
            );
        }
    };

    if assignments.is_empty() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "该教师暂无分组指派",
        )));
    }

    build_assignment_views(&*storage, assignments).await
}

/// 批量补全教师与分组信息
async fn build_assignment_views(
    storage: &dyn Storage,
    assignments: Vec<TeacherAssignment>,
) -> ActixResult<HttpResponse> {
    let teacher_ids: Vec<i64> = assignments.iter().map(|a| a.teacher_id).collect();
    let division_ids: Vec<i64> = assignments.iter().map(|a| a.division_id).collect();

    let teachers = match storage.list_users_by_ids(&teacher_ids).await {
        Ok(teachers) => teachers,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师失败: {e}"),
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

    let teachers_by_id: HashMap<i64, _> = teachers.into_iter().map(|t| (t.id, t)).collect();
    let divisions_by_id: HashMap<i64, _> = divisions.into_iter().map(|d| (d.id, d)).collect();

    // 教师或分组已被删除的指派直接略过
    let views: Vec<AssignmentView> = assignments
        .into_iter()
        .filter_map(|assignment| {
            let teacher = teachers_by_id.get(&assignment.teacher_id)?.clone();
            let division = divisions_by_id.get(&assignment.division_id)?.clone();
            Some(AssignmentView {
                id: assignment.id,
                teacher,
                division,
                assigned_at: assignment.assigned_at,
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignmentListResponse { assignments: views },
        "查询成功",
    )))
}
