use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{UserListParams, UserListQuery};
use crate::models::{ApiResponse, ErrorCode};

/// 学生列表，role 固定为 student
pub async fn list_students(
    service: &UserService,
    query: UserListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    list_with_role(service, query, UserRole::Student, request).await
}

/// 教师列表，role 固定为 teacher
pub async fn list_teachers(
    service: &UserService,
    query: UserListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    list_with_role(service, query, UserRole::Teacher, request).await
}

async fn list_with_role(
    service: &UserService,
    query: UserListParams,
    role: UserRole,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let storage_query = UserListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        role: Some(role),
        status: query.status,
        search: query.search,
    };

    match storage.list_users_with_pagination(storage_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询用户列表失败: {e}"),
            )),
        ),
    }
}
